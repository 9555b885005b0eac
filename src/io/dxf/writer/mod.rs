//! DXF writer module

mod format;
mod section_writer;
mod stream_writer;
mod text_writer;

pub use format::{format_general, format_value, DEFAULT_PRECISION};
pub use section_writer::SectionWriter;
pub use stream_writer::{DxfStreamWriter, DxfStreamWriterExt};
pub use text_writer::DxfTextWriter;

use crate::document::{Document, HeaderValue};
use crate::entities::EntityType;
use crate::error::Result;
use crate::sketch::{Geometry, Sketch};
use crate::types::UnitSystem;
use indexmap::IndexMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Anything that can be written as a DXF file
pub trait Drawing {
    /// Header variables to write; none by default
    fn header_variables(&self) -> Option<&IndexMap<String, HeaderValue>> {
        None
    }

    /// Write the contents of the ENTITIES section
    fn write_entities<W: DxfStreamWriter>(&self, writer: &mut SectionWriter<'_, W>) -> Result<()>;
}

impl Drawing for Document {
    fn header_variables(&self) -> Option<&IndexMap<String, HeaderValue>> {
        Some(&self.header)
    }

    fn write_entities<W: DxfStreamWriter>(&self, writer: &mut SectionWriter<'_, W>) -> Result<()> {
        for entity in self.entities() {
            writer.write_entity(entity, None, None)?;
        }
        Ok(())
    }
}

impl Drawing for Sketch {
    fn write_entities<W: DxfStreamWriter>(&self, writer: &mut SectionWriter<'_, W>) -> Result<()> {
        writer.write_sketch(self, None)
    }
}

impl Drawing for EntityType {
    fn write_entities<W: DxfStreamWriter>(&self, writer: &mut SectionWriter<'_, W>) -> Result<()> {
        writer.write_entity(self, None, None)
    }
}

impl Drawing for Geometry {
    fn write_entities<W: DxfStreamWriter>(&self, writer: &mut SectionWriter<'_, W>) -> Result<()> {
        writer.write_geometry(self, None, None)
    }
}

/// Configuration for the DXF writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DxfWriterConfiguration {
    /// Unit system tagged lengths are converted into.
    ///
    /// Default: millimeters.
    pub units: UnitSystem,

    /// Significant digits for floats; `None` writes the shortest text that
    /// reads back to the same value.
    ///
    /// Default: `Some(6)`.
    pub precision: Option<usize>,
}

impl Default for DxfWriterConfiguration {
    fn default() -> Self {
        Self {
            units: UnitSystem::default(),
            precision: Some(DEFAULT_PRECISION),
        }
    }
}

/// DXF file writer
pub struct DxfWriter<'a, D: Drawing> {
    drawing: &'a D,
    config: DxfWriterConfiguration,
}

impl<'a, D: Drawing> DxfWriter<'a, D> {
    /// Create a new DXF writer for a drawing
    pub fn new(drawing: &'a D) -> Self {
        Self {
            drawing,
            config: DxfWriterConfiguration::default(),
        }
    }

    /// Set the writer configuration.
    pub fn with_configuration(mut self, config: DxfWriterConfiguration) -> Self {
        self.config = config;
        self
    }

    /// Set the target unit system
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.config.units = units;
        self
    }

    /// Write to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to_writer(BufWriter::new(file))
    }

    /// Write to any writer
    pub fn write_to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut stream_writer = DxfTextWriter::new(writer)
            .with_units(self.config.units)
            .with_precision(self.config.precision);
        self.write_dxf(&mut stream_writer)?;
        stream_writer.flush()
    }

    /// Write to a string (useful for testing)
    pub fn write_to_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to_writer(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Write DXF content to a stream writer
    fn write_dxf<W: DxfStreamWriter>(&self, writer: &mut W) -> Result<()> {
        let mut section_writer = SectionWriter::new(writer);
        section_writer.write_header(self.drawing.header_variables())?;

        section_writer.writer().write_section_start("ENTITIES")?;
        self.drawing.write_entities(&mut section_writer)?;
        section_writer.writer().write_section_end()?;

        section_writer.writer().write_eof()?;
        tracing::debug!(units = ?self.config.units, "dxf write complete");
        Ok(())
    }
}
