//! I/O module for reading and writing DXF text files

pub mod dxf;

pub use dxf::{DxfReader, DxfReaderConfiguration, DxfWriter, DxfWriterConfiguration};
