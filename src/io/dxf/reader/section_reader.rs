//! DXF section readers

use super::accumulator::{LwPolylineAccumulator, SplineAccumulator};
use super::stream_reader::{DxfCodePair, DxfStreamReader};
use crate::document::{Document, HeaderValue};
use crate::entities::*;
use crate::error::{DxfError, Result};
use crate::io::dxf::{codes, coordinate_axis};
use crate::notification::{NotificationCollection, NotificationType};
use crate::types::{Axis, PartialPoint, Point};

/// Section reader for parsing DXF sections
pub struct SectionReader<'a> {
    reader: &'a mut Box<dyn DxfStreamReader>,
}

impl<'a> SectionReader<'a> {
    /// Create a new section reader
    pub fn new(reader: &'a mut Box<dyn DxfStreamReader>) -> Self {
        Self { reader }
    }

    /// Next pair inside a section; comments are skipped and the end of the
    /// stream is an error
    fn next_pair(&mut self, section: &str) -> Result<DxfCodePair> {
        loop {
            match self.reader.read_pair()? {
                Some(pair) if pair.code == codes::COMMENT => continue,
                Some(pair) => return Ok(pair),
                None => {
                    return Err(DxfError::parse(format!(
                        "unexpected end of stream inside {} section (line {})",
                        section,
                        self.reader.line_number()
                    )))
                }
            }
        }
    }

    /// Next pair of the current entity; `None` once the next `0` pair is
    /// reached, which is pushed back for the caller
    fn next_entity_pair(&mut self) -> Result<Option<DxfCodePair>> {
        let pair = self.next_pair("ENTITIES")?;
        if pair.code == codes::ENTITY_TYPE {
            self.reader.push_back(pair);
            return Ok(None);
        }
        Ok(Some(pair))
    }

    /// Skip the rest of a section
    pub fn skip_section(&mut self, section: &str) -> Result<()> {
        loop {
            if self.next_pair(section)?.is_marker("ENDSEC") {
                return Ok(());
            }
        }
    }

    /// Read the HEADER section
    pub fn read_header(&mut self, document: &mut Document) -> Result<()> {
        let mut variable: Option<String> = None;

        loop {
            let pair = self.next_pair("HEADER")?;
            if pair.code == codes::ENTITY_TYPE {
                if pair.value_string == "ENDSEC" {
                    return Ok(());
                }
                return Err(DxfError::parse(format!(
                    "expected ENDSEC in HEADER section, found {}",
                    pair.value_string
                )));
            }

            if pair.code == codes::VARIABLE_NAME {
                variable = Some(pair.value_string);
                continue;
            }

            let Some(name) = variable.as_deref() else {
                return Err(DxfError::parse(format!(
                    "header value with group code {} before any variable name",
                    pair.code
                )));
            };

            let value = match pair.code {
                1..=8 | 390 => HeaderValue::Text {
                    code: pair.code,
                    value: pair.value_string.clone(),
                },
                10..=18 | 20..=28 | 30..=37 => {
                    let axis = match pair.code / 10 {
                        1 => Axis::X,
                        2 => Axis::Y,
                        _ => Axis::Z,
                    };
                    let base_code = pair.code - 10 * axis.index() as i32;
                    let mut point = match document.header.get(name) {
                        Some(HeaderValue::Point { base_code: b, point }) if *b == base_code => {
                            PartialPoint::from(*point)
                        }
                        _ => PartialPoint::new(),
                    };
                    point.set(axis, pair.as_f64()?);
                    HeaderValue::Point {
                        base_code,
                        point: point.to_point().unwrap_or(Point::ORIGIN),
                    }
                }
                40..=58 => HeaderValue::Float {
                    code: pair.code,
                    value: pair.as_f64()?,
                },
                62 | 70..=78 | 90..=99 | 270..=299 | 370..=389 => HeaderValue::Integer {
                    code: pair.code,
                    value: pair.as_i64()?,
                },
                code => {
                    return Err(DxfError::parse(format!(
                        "unsupported header group code {} for {}",
                        code, name
                    )))
                }
            };
            document.header.insert(name.to_string(), value);
        }
    }

    /// Read the ENTITIES section
    pub fn read_entities(&mut self, document: &mut Document) -> Result<()> {
        loop {
            let pair = self.next_pair("ENTITIES")?;
            if pair.code != codes::ENTITY_TYPE {
                document.notifications.notify(
                    NotificationType::NotSupported,
                    format!("group code {} outside of an entity ignored", pair.code),
                );
                continue;
            }

            let notifications = &mut document.notifications;
            let entity = match pair.value_string.as_str() {
                "ENDSEC" => return Ok(()),
                "CIRCLE" => EntityType::Circle(self.read_circle(notifications)?),
                "ARC" => EntityType::Arc(self.read_arc(notifications)?),
                "LINE" => EntityType::Line(self.read_line(notifications)?),
                "LWPOLYLINE" => EntityType::LwPolyline(self.read_lwpolyline(notifications)?),
                "SPLINE" => self.read_spline(notifications)?,
                other => return Err(DxfError::UnknownEntityType(other.to_string())),
            };
            document.add_entity(entity);
        }
    }

    /// Read an entity field common to all entities; returns `false` if the
    /// code is not one of them
    fn read_common_entity_data(common: &mut EntityCommon, pair: &DxfCodePair) -> Result<bool> {
        match pair.code {
            codes::HANDLE => common.handle = Some(pair.value_string.clone()),
            codes::LAYER => common.layer = Some(pair.value_string.clone()),
            codes::COLOR => common.color_number = Some(pair.as_i64()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn not_supported(notifications: &mut NotificationCollection, entity: &str, pair: &DxfCodePair) {
        notifications.notify(
            NotificationType::NotSupported,
            format!("group code {} in {} ignored", pair.code, entity),
        );
    }

    /// Read a CIRCLE entity
    fn read_circle(&mut self, notifications: &mut NotificationCollection) -> Result<Circle> {
        let mut circle = Circle::default();
        let mut center = PartialPoint::new();

        while let Some(pair) = self.next_entity_pair()? {
            if Self::read_common_entity_data(&mut circle.common, &pair)? {
                continue;
            }
            match pair.code {
                10 | 20 | 30 => {
                    if let Some(axis) = coordinate_axis(pair.code) {
                        center.set(axis, pair.as_f64()?);
                    }
                }
                40 => circle.radius = pair.as_f64()?,
                _ => Self::not_supported(notifications, "CIRCLE", &pair),
            }
        }

        if let Some(pt) = center.to_point() {
            circle.center = pt;
        }
        Ok(circle)
    }

    /// Read an ARC entity
    fn read_arc(&mut self, notifications: &mut NotificationCollection) -> Result<Arc> {
        let mut arc = Arc::default();
        let mut center = PartialPoint::new();

        while let Some(pair) = self.next_entity_pair()? {
            if Self::read_common_entity_data(&mut arc.common, &pair)? {
                continue;
            }
            match pair.code {
                10 | 20 | 30 => {
                    if let Some(axis) = coordinate_axis(pair.code) {
                        center.set(axis, pair.as_f64()?);
                    }
                }
                40 => arc.radius = pair.as_f64()?,
                50 => arc.start_angle = pair.as_f64()?,
                51 => arc.end_angle = pair.as_f64()?,
                _ => Self::not_supported(notifications, "ARC", &pair),
            }
        }

        if let Some(pt) = center.to_point() {
            arc.center = pt;
        }
        Ok(arc)
    }

    /// Read a LINE entity
    fn read_line(&mut self, notifications: &mut NotificationCollection) -> Result<Line> {
        let mut line = Line::empty();

        while let Some(pair) = self.next_entity_pair()? {
            if Self::read_common_entity_data(&mut line.common, &pair)? {
                continue;
            }
            match (pair.code, coordinate_axis(pair.code)) {
                (10 | 20 | 30, Some(axis)) => line.set_first_axis(axis, pair.as_f64()?),
                (11 | 21 | 31, Some(axis)) => line.set_last_axis(axis, pair.as_f64()?),
                _ => Self::not_supported(notifications, "LINE", &pair),
            }
        }

        Ok(line)
    }

    /// Read an LWPOLYLINE entity
    fn read_lwpolyline(&mut self, notifications: &mut NotificationCollection) -> Result<LwPolyline> {
        let mut accumulator = LwPolylineAccumulator::new();

        while let Some(pair) = self.next_entity_pair()? {
            if Self::read_common_entity_data(&mut accumulator.common, &pair)? {
                continue;
            }
            if !accumulator.parse_pair(&pair)? {
                Self::not_supported(notifications, "LWPOLYLINE", &pair);
            }
        }

        Ok(accumulator.to_entity(notifications))
    }

    /// Read a SPLINE entity, which may come out as a Bézier curve
    fn read_spline(&mut self, notifications: &mut NotificationCollection) -> Result<EntityType> {
        let mut accumulator = SplineAccumulator::new();

        while let Some(pair) = self.next_entity_pair()? {
            if Self::read_common_entity_data(&mut accumulator.common, &pair)? {
                continue;
            }
            if !accumulator.parse_pair(&pair)? {
                Self::not_supported(notifications, "SPLINE", &pair);
            }
        }

        accumulator.to_entity(notifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::reader::DxfTextReader;
    use std::io::Cursor;

    fn stream(lines: &[&str]) -> Box<dyn DxfStreamReader> {
        let text = lines.join("\n");
        Box::new(DxfTextReader::new(Cursor::new(text.into_bytes())))
    }

    #[test]
    fn test_header_values() {
        let mut reader = stream(&[
            "9", "$ACADVER", "1", "AC1009", "9", "$INSUNITS", "70", "4", "9", "$EXTMIN", "10",
            "1.5", "20", "2.5", "9", "$LTSCALE", "40", "2", "0", "ENDSEC",
        ]);
        let mut document = Document::new();
        SectionReader::new(&mut reader).read_header(&mut document).unwrap();

        assert_eq!(document.header_value("$ACADVER").and_then(HeaderValue::as_str), Some("AC1009"));
        assert_eq!(document.header_value("$INSUNITS").and_then(HeaderValue::as_i64), Some(4));
        assert_eq!(
            document.header_value("$EXTMIN").and_then(HeaderValue::as_point),
            Some(Point::new(1.5, 2.5))
        );
        assert_eq!(document.header_value("$LTSCALE").and_then(HeaderValue::as_f64), Some(2.0));
    }

    #[test]
    fn test_header_unsupported_code() {
        let mut reader = stream(&["9", "$X", "1000", "data", "0", "ENDSEC"]);
        let err = SectionReader::new(&mut reader)
            .read_header(&mut Document::new())
            .unwrap_err();
        assert!(err.to_string().contains("unsupported header group code"));
    }

    #[test]
    fn test_entity_stops_at_next_entity() {
        let mut reader = stream(&[
            "0", "LINE", "8", "walls", "10", "0", "20", "0", "11", "1", "21", "1", "0", "CIRCLE",
            "10", "0", "20", "0", "40", "2", "0", "ENDSEC",
        ]);
        let mut document = Document::new();
        SectionReader::new(&mut reader).read_entities(&mut document).unwrap();

        assert_eq!(document.entities.len(), 2);
        match &document.entities[0] {
            EntityType::Line(line) => {
                assert_eq!(line.common.layer.as_deref(), Some("walls"));
                assert_eq!(line.last(), Point::new(1.0, 1.0));
            }
            other => panic!("expected Line, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_codes_are_notified() {
        let mut reader = stream(&[
            "0", "CIRCLE", "100", "AcDbCircle", "10", "0", "20", "0", "40", "1", "0", "ENDSEC",
        ]);
        let mut document = Document::new();
        SectionReader::new(&mut reader).read_entities(&mut document).unwrap();
        assert_eq!(document.entities.len(), 1);
        assert_eq!(document.notifications.of_type(NotificationType::NotSupported).len(), 1);
    }

    #[test]
    fn test_unknown_entity_type() {
        let mut reader = stream(&["0", "HATCH", "0", "ENDSEC"]);
        let err = SectionReader::new(&mut reader)
            .read_entities(&mut Document::new())
            .unwrap_err();
        assert!(matches!(err, DxfError::UnknownEntityType(name) if name == "HATCH"));
    }

    #[test]
    fn test_stream_ends_inside_section() {
        let mut reader = stream(&["0", "CIRCLE", "40", "1"]);
        let err = SectionReader::new(&mut reader)
            .read_entities(&mut Document::new())
            .unwrap_err();
        assert!(matches!(err, DxfError::Parse(_)));
    }
}
