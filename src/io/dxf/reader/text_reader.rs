//! DXF ASCII text reader

use super::stream_reader::{DxfCodePair, DxfStreamReader};
use crate::error::{DxfError, Result};
use encoding_rs::Encoding;
use std::io::BufRead;

/// DXF ASCII text reader: one code line followed by one value line
pub struct DxfTextReader<R: BufRead> {
    reader: R,
    line_number: usize,
    peeked_pair: Option<DxfCodePair>,
    /// Non-UTF8 fallback encoding.  `None` means use Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
}

impl<R: BufRead> DxfTextReader<R> {
    /// Create a new DXF text reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            peeked_pair: None,
            encoding: None,
        }
    }

    /// Read a single line, handling non-UTF8 bytes with the configured
    /// encoding or Latin-1.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.line_number == 1 && bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
            bytes.drain(..3);
        }

        let line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(err) => {
                let bytes = err.into_bytes();
                match self.encoding {
                    Some(enc) => {
                        let (decoded, _, had_errors) = enc.decode(&bytes);
                        if had_errors {
                            return Err(DxfError::Encoding(format!(
                                "line {} is not valid {}",
                                self.line_number,
                                enc.name()
                            )));
                        }
                        decoded.into_owned()
                    }
                    None => bytes.iter().map(|&b| b as char).collect(),
                }
            }
        };

        // Trim whitespace and newlines (including \r)
        Ok(Some(line.trim().to_string()))
    }

    fn read_pair_internal(&mut self) -> Result<Option<DxfCodePair>> {
        let code_line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };

        let code = code_line
            .parse::<i32>()
            .map_err(|_| DxfError::MalformedPair {
                line: self.line_number,
                reason: format!("group code '{}' is not an integer", code_line),
            })?;

        let value = match self.read_line()? {
            Some(line) => line,
            None => {
                return Err(DxfError::MalformedPair {
                    line: self.line_number,
                    reason: format!("missing value line after code {}", code),
                })
            }
        };

        DxfCodePair::new(code, value).map(Some)
    }
}

impl<R: BufRead> DxfStreamReader for DxfTextReader<R> {
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>> {
        if let Some(pair) = self.peeked_pair.take() {
            return Ok(Some(pair));
        }
        self.read_pair_internal()
    }

    fn push_back(&mut self, pair: DxfCodePair) {
        self.peeked_pair = Some(pair);
    }

    fn line_number(&self) -> usize {
        self.line_number
    }

    fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }
}
