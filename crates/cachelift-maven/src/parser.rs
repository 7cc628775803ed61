//! POM coordinate parser.
//!
//! Uses quick-xml SAX reader and only looks at two places: direct children of
//! the root element and direct children of `<parent>`. Coordinates nested in
//! `<dependencies>`, `<plugins>` and friends never leak into the result.
//!
//! Only coordinate text is decoded, so a POM declared as ISO-8859-1 with
//! accented names in `<description>` or `<developers>` still parses as long
//! as its coordinates are plain ASCII.

use crate::error::{MavenError, Result};
use crate::types::{CoordinateFields, PomCoordinates};
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, Event};
use std::path::Path;

/// Parses the project and parent coordinates out of POM content.
///
/// # Errors
///
/// Returns `MavenError::ParseError` for malformed XML, a document without a
/// root element, or a document that ends with unclosed elements.
///
/// # Examples
///
/// ```
/// use cachelift_maven::parse_pom_coordinates;
///
/// let pom = r#"<project xmlns="http://maven.apache.org/POM/4.0.0">
///   <groupId>org.apache.commons</groupId>
///   <artifactId>commons-lang3</artifactId>
///   <version>3.14.0</version>
/// </project>"#;
///
/// let coords = parse_pom_coordinates(pom).unwrap();
/// assert_eq!(coords.project.artifact_id.as_deref(), Some("commons-lang3"));
/// assert!(coords.parent.group_id.is_none());
/// ```
pub fn parse_pom_coordinates(content: &str) -> Result<PomCoordinates> {
    parse_pom_bytes(content.as_bytes())
}

/// Same as [`parse_pom_coordinates`], for raw file content.
pub fn parse_pom_bytes(content: &[u8]) -> Result<PomCoordinates> {
    let mut reader = Reader::from_reader(content);

    let mut coords = PomCoordinates::default();
    // Local names of the currently open elements, root first
    let mut open: Vec<String> = Vec::new();
    let mut saw_root = false;

    loop {
        let event = reader.read_event().map_err(parse_error)?;

        match event {
            Event::Start(ref e) => {
                saw_root = true;
                open.push(String::from_utf8_lossy(e.local_name().as_ref()).to_string());
                if let Some(slot) = coordinate_slot(&mut coords, &open) {
                    *slot = Some(String::new());
                }
            }
            Event::Empty(_) => {
                saw_root = true;
            }
            Event::End(_) => {
                if let Some(Some(value)) = coordinate_slot(&mut coords, &open) {
                    *value = value.trim().to_string();
                }
                open.pop();
            }
            // Entity references split an element's text into several events
            Event::Text(ref e) => {
                if let Some(Some(value)) = coordinate_slot(&mut coords, &open) {
                    value.push_str(&e.decode().map_err(parse_error)?);
                }
            }
            Event::CData(ref e) => {
                if let Some(Some(value)) = coordinate_slot(&mut coords, &open) {
                    value.push_str(&e.decode().map_err(parse_error)?);
                }
            }
            Event::GeneralRef(ref e) => {
                if let Some(Some(value)) = coordinate_slot(&mut coords, &open) {
                    push_reference(value, e)?;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(MavenError::ParseError {
            message: "document has no root element".into(),
        });
    }
    if let Some(tag) = open.last() {
        return Err(MavenError::ParseError {
            message: format!("unexpected end of document inside <{tag}>"),
        });
    }

    Ok(coords)
}

/// Reads a POM from disk and parses its coordinates.
pub fn read_pom_coordinates(path: &Path) -> Result<PomCoordinates> {
    let content = std::fs::read(path)?;
    tracing::trace!("Parsing POM {} ({} bytes)", path.display(), content.len());
    parse_pom_bytes(&content)
}

fn coordinate_slot<'a>(
    coords: &'a mut PomCoordinates,
    open: &[String],
) -> Option<&'a mut Option<String>> {
    match open {
        [_root, field] => field_slot(&mut coords.project, field),
        [_root, parent, field] if parent == "parent" => field_slot(&mut coords.parent, field),
        _ => None,
    }
}

fn field_slot<'a>(fields: &'a mut CoordinateFields, tag: &str) -> Option<&'a mut Option<String>> {
    match tag {
        "groupId" => Some(&mut fields.group_id),
        "artifactId" => Some(&mut fields.artifact_id),
        "version" => Some(&mut fields.version),
        _ => None,
    }
}

/// Appends a character reference or one of the five predefined entities.
fn push_reference(value: &mut String, reference: &BytesRef<'_>) -> Result<()> {
    if let Some(ch) = reference.resolve_char_ref().map_err(parse_error)? {
        value.push(ch);
        return Ok(());
    }

    let name = reference.decode().map_err(parse_error)?;
    match resolve_predefined_entity(&name) {
        Some(text) => {
            value.push_str(text);
            Ok(())
        }
        None => Err(MavenError::ParseError {
            message: format!("unknown entity &{name};"),
        }),
    }
}

fn parse_error(err: impl std::fmt::Display) -> MavenError {
    MavenError::ParseError {
        message: err.to_string(),
    }
}
