//! Shared test utilities for dxf-sketch integration tests.
//!
//! Fixture path resolution, document builders and read/write helpers used
//! by all test crates via `mod common;`.

#![allow(dead_code)]

use dxf_sketch::{Drawing, Document, DxfReader, DxfWriter, EntityType, Result, UnitSystem};
use std::io::Cursor;
use std::path::PathBuf;

/// Resolve path to a file in `tests/fixtures/`.
pub fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(filename)
}

/// Read a fixture file as text with line endings normalized to `\n`.
pub fn fixture_text(filename: &str) -> String {
    let text = std::fs::read_to_string(fixture_path(filename))
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {}", filename, e));
    text.replace("\r\n", "\n").trim_end().to_string()
}

/// Join lines the way the writer does: `\n` separated, no trailing newline.
pub fn lines(lines: &[&str]) -> String {
    lines.join("\n")
}

/// A complete document with an empty HEADER and the given ENTITIES body.
pub fn document_with_entities(body: &[&str]) -> String {
    let mut all = vec![
        "0", "SECTION", "2", "HEADER", "0", "ENDSEC", "0", "SECTION", "2", "ENTITIES",
    ];
    all.extend_from_slice(body);
    all.extend_from_slice(&["0", "ENDSEC", "0", "EOF"]);
    lines(&all)
}

/// Parse DXF text.
pub fn read_str(text: &str) -> Result<Document> {
    DxfReader::from_reader(Cursor::new(text.as_bytes().to_vec())).read()
}

/// Parse DXF text that is expected to be valid.
pub fn read_ok(text: &str) -> Document {
    read_str(text).unwrap_or_else(|e| panic!("read failed: {}", e))
}

/// Write a drawing to a string in the given unit system.
pub fn write_str<D: Drawing>(drawing: &D, units: UnitSystem) -> String {
    DxfWriter::new(drawing)
        .with_units(units)
        .write_to_string()
        .unwrap_or_else(|e| panic!("write failed: {}", e))
}

/// Entity keywords of a document, in order.
pub fn entity_types(document: &Document) -> Vec<&'static str> {
    document.entities().map(EntityType::entity_type).collect()
}

/// Assert two floats agree to within `1e-9`.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
