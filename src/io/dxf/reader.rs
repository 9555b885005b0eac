//! DXF file reader

mod accumulator;
mod section_reader;
mod stream_reader;
mod text_reader;

pub use accumulator::{LwPolylineAccumulator, PointAccumulator, SplineAccumulator};
pub use stream_reader::{DxfCodePair, DxfStreamReader};
pub use text_reader::DxfTextReader;

use section_reader::SectionReader;

use crate::document::Document;
use crate::error::{DxfError, Result};
use crate::io::dxf::codes;
use crate::notification::NotificationType;
use encoding_rs::Encoding;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Sections that are recognized by name but not read
const UNSUPPORTED_SECTIONS: [&str; 5] = ["BLOCKS", "CLASSES", "OBJECTS", "TABLES", "THUMBNAILIMAGE"];

/// Configuration for the DXF reader.
#[derive(Debug, Clone)]
pub struct DxfReaderConfiguration {
    /// When `true`, BLOCKS, CLASSES, OBJECTS, TABLES and THUMBNAILIMAGE
    /// sections are skipped with a notification. When `false` they are
    /// rejected like any other unrecognized section.
    ///
    /// Default: `true`.
    pub skip_unsupported_sections: bool,

    /// Decoder for lines that are not valid UTF-8. `None` maps bytes to
    /// Latin-1 characters.
    pub encoding: Option<&'static Encoding>,
}

impl Default for DxfReaderConfiguration {
    fn default() -> Self {
        Self {
            skip_unsupported_sections: true,
            encoding: None,
        }
    }
}

/// DXF file reader
pub struct DxfReader {
    reader: Box<dyn DxfStreamReader>,
    config: DxfReaderConfiguration,
}

impl DxfReader {
    /// Create a new DXF reader from any reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Self {
            reader: Box::new(DxfTextReader::new(BufReader::new(reader))),
            config: DxfReaderConfiguration::default(),
        }
    }

    /// Create a new DXF reader from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(file))
    }

    /// Set the reader configuration.
    pub fn with_configuration(mut self, config: DxfReaderConfiguration) -> Self {
        if let Some(encoding) = config.encoding {
            self.reader.set_encoding(encoding);
        }
        self.config = config;
        self
    }

    /// Read the stream and return the document.
    ///
    /// Any error discards the partially read document.
    pub fn read(mut self) -> Result<Document> {
        let mut document = Document::new();

        loop {
            let Some(pair) = self.reader.read_pair()? else {
                document
                    .notifications
                    .notify(NotificationType::Warning, "stream ended without EOF marker");
                break;
            };

            if pair.code == codes::COMMENT {
                continue;
            }
            if pair.is_marker("EOF") {
                break;
            }
            if !pair.is_marker("SECTION") {
                return Err(DxfError::parse(format!(
                    "expected SECTION at line {}, found code {} '{}'",
                    self.reader.line_number(),
                    pair.code,
                    pair.value_string
                )));
            }

            self.read_section(&mut document)?;
        }

        tracing::debug!(
            entities = document.entities.len(),
            header_variables = document.header.len(),
            "dxf read complete"
        );
        Ok(document)
    }

    fn read_section(&mut self, document: &mut Document) -> Result<()> {
        let name_pair = loop {
            match self.reader.read_pair()? {
                Some(pair) if pair.code == codes::COMMENT => continue,
                Some(pair) => break pair,
                None => return Err(DxfError::parse("unexpected end of stream after SECTION")),
            }
        };
        if name_pair.code != codes::NAME {
            return Err(DxfError::parse(format!(
                "expected section name (group code 2), found code {}",
                name_pair.code
            )));
        }

        let name = name_pair.value_string;
        tracing::trace!(section = %name, "reading section");

        let mut section_reader = SectionReader::new(&mut self.reader);
        match name.as_str() {
            "HEADER" => section_reader.read_header(document),
            "ENTITIES" => section_reader.read_entities(document),
            other
                if self.config.skip_unsupported_sections
                    && UNSUPPORTED_SECTIONS.contains(&other) =>
            {
                document
                    .notifications
                    .notify(NotificationType::NotImplemented, format!("{} section skipped", other));
                section_reader.skip_section(other)
            }
            other => Err(DxfError::parse(format!("unrecognized section {}", other))),
        }
    }
}
