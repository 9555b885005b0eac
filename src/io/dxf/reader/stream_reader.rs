//! DXF stream reader trait and the code/value pair type

use crate::error::{DxfError, Result};
use crate::io::dxf::GroupCodeValueType;
use encoding_rs::Encoding;

/// A DXF code/value pair
#[derive(Debug, Clone, PartialEq)]
pub struct DxfCodePair {
    /// The DXF group code
    pub code: i32,

    /// Value type implied by the code range
    pub value_type: GroupCodeValueType,

    /// Value line as read (trimmed)
    pub value_string: String,

    /// Integer value (integer codes only)
    pub value_int: Option<i64>,

    /// Floating-point value (float codes only)
    pub value_double: Option<f64>,
}

impl DxfCodePair {
    /// Create a pair, converting the value according to the code range.
    ///
    /// A float or integer code whose value does not parse is an error.
    pub fn new(code: i32, value_string: impl Into<String>) -> Result<Self> {
        let value_string = value_string.into();
        let value_type = GroupCodeValueType::from_code(code);

        let mut value_int = None;
        let mut value_double = None;
        match value_type {
            GroupCodeValueType::Integer => {
                value_int = Some(parse_int(code, &value_string)?);
            }
            GroupCodeValueType::Double => {
                value_double = Some(parse_double(code, &value_string)?);
            }
            GroupCodeValueType::Text => {}
        }

        Ok(Self {
            code,
            value_type,
            value_string,
            value_int,
            value_double,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value_string
    }

    /// Get value as integer.
    ///
    /// Text codes used for integers (62 color, header codes outside the
    /// integer ranges) are parsed on demand.
    pub fn as_i64(&self) -> Result<i64> {
        match self.value_int {
            Some(v) => Ok(v),
            None => parse_int(self.code, &self.value_string),
        }
    }

    /// Get value as double
    pub fn as_f64(&self) -> Result<f64> {
        match (self.value_double, self.value_int) {
            (Some(v), _) => Ok(v),
            (None, Some(v)) => Ok(v as f64),
            (None, None) => parse_double(self.code, &self.value_string),
        }
    }

    /// True for the `0` pair that carries `keyword`
    pub fn is_marker(&self, keyword: &str) -> bool {
        self.code == 0 && self.value_string == keyword
    }
}

fn parse_int(code: i32, value: &str) -> Result<i64> {
    value.trim().parse::<i64>().map_err(|_| {
        DxfError::parse(format!(
            "invalid value '{}' for integer group code {}",
            value, code
        ))
    })
}

fn parse_double(code: i32, value: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| {
        DxfError::parse(format!(
            "invalid value '{}' for float group code {}",
            value, code
        ))
    })
}

/// Trait for reading DXF code/value pairs from a stream
pub trait DxfStreamReader {
    /// Read the next code/value pair, `None` at a clean end of stream
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>>;

    /// Push a pair back to be read again on next read_pair call
    fn push_back(&mut self, pair: DxfCodePair);

    /// Number of lines consumed so far
    fn line_number(&self) -> usize;

    /// Decoder for lines that are not valid UTF-8
    fn set_encoding(&mut self, encoding: &'static Encoding);
}
