//! DXF (Drawing Exchange Format) reading and writing

mod dxf_code;
pub mod reader;
pub mod writer;

pub use dxf_code::{axis_code, codes, coordinate_axis, GroupCodeValueType};
pub use reader::{DxfReader, DxfReaderConfiguration};
pub use writer::{Drawing, DxfWriter, DxfWriterConfiguration};
