//! # dxf-sketch
//!
//! Reading and writing of the AutoCAD DXF text format for 2D sketches.
//!
//! The reader turns a stream of group code/value pairs into a [`Document`]
//! holding the HEADER variables and the entities of the ENTITIES section:
//! circles, arcs, lines, lightweight polylines and splines. Splines whose
//! knot vector has no interior knots are recognized as [`Bezier`] curves.
//!
//! The writer flattens a [`Document`], a single entity or a [`Sketch`] tree
//! back into the pair stream. Sketches may nest, each level with its own
//! transform, and shapes may be tagged with a length unit that is converted
//! into the output unit system.
//!
//! ## Quick Start
//!
//! ```rust
//! use dxf_sketch::{Geometry, Sketch, UnitSystem};
//!
//! let text = "0\nSECTION\n2\nENTITIES\n0\nCIRCLE\n10\n0\n20\n0\n40\n1\n0\nENDSEC\n0\nEOF";
//! let doc = dxf_sketch::read(std::io::Cursor::new(text.as_bytes().to_vec()))?;
//! assert_eq!(doc.entities.len(), 1);
//!
//! let mut sketch = Sketch::new();
//! sketch.push(Geometry::line([0.0, 0.0], [1.0, 1.0]));
//! let mut out = Vec::new();
//! dxf_sketch::write(&mut out, &sketch, UnitSystem::Millimeters)?;
//! # Ok::<(), dxf_sketch::DxfError>(())
//! ```

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod io;
pub mod notification;
pub mod sketch;
pub mod types;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{Axis, Length, PartialPoint, Point, Transform, Unit, UnitSystem};

// Re-export entity types
pub use entities::{
    Arc, Bezier, Circle, Entity, EntityCommon, EntityType, Line, LwPolyline, Spline, SplineFlags,
};

// Re-export document and sketch
pub use document::{Document, HeaderValue};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use sketch::{Element, Geometry, Sketch};

// Re-export I/O types
pub use io::dxf::{
    Drawing, DxfReader, DxfReaderConfiguration, DxfWriter, DxfWriterConfiguration,
};

use std::io::{Read, Write};
use std::path::Path;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read a DXF document from a stream
pub fn read<R: Read + 'static>(source: R) -> Result<Document> {
    DxfReader::from_reader(source).read()
}

/// Read a DXF document from a file
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    DxfReader::from_file(path)?.read()
}

/// Write a drawing to a stream, converting tagged lengths into `units`
pub fn write<W: Write, D: Drawing>(destination: W, drawing: &D, units: UnitSystem) -> Result<()> {
    DxfWriter::new(drawing)
        .with_units(units)
        .write_to_writer(destination)
}

/// Write a drawing to a file, converting tagged lengths into `units`
pub fn write_file<P: AsRef<Path>, D: Drawing>(path: P, drawing: &D, units: UnitSystem) -> Result<()> {
    DxfWriter::new(drawing).with_units(units).write_to_file(path)
}
