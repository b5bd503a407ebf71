//! # schedule_ron
//!
//! Reads a weekly class schedule written in a small RON-like notation and
//! converts it to TOML, XML, JSON, or back to the notation itself.
//!
//! ## The notation
//!
//! ```text
//! // A schedule is a list of days, each a list of lessons.
//! Schedule(
//!     days: [
//!         Day(
//!             name: "Monday",
//!             lessons: [
//!                 Lesson(time: "9:00", subject: "Math", teacher: "X",
//!                        room: "101", building: "A", type: "lecture"),
//!             ],
//!         ),
//!     ],
//! )
//! ```
//!
//! Values are double-quoted strings, `[...]` arrays and named records
//! `Type(field: value, ...)`. Whitespace, `// line` and `/* block */`
//! comments may appear between any two tokens; trailing commas are allowed.
//! The three record types are `Schedule`, `Day` and `Lesson`; missing fields
//! default to empty.
//!
//! ## Quick Start
//!
//! ```rust
//! use schedule_ron::{parse, to_toml_string};
//!
//! let schedule = parse(r#"
//!     Schedule(days: [
//!         Day(name: "Mon", lessons: [
//!             Lesson(time: "9:00", subject: "Math", type: "lecture"),
//!         ]),
//!     ])
//! "#)?;
//!
//! assert_eq!(schedule.days.len(), 1);
//! assert_eq!(schedule.days[0].lessons[0].subject, "Math");
//!
//! let toml = to_toml_string(&schedule);
//! assert!(toml.starts_with("[[days]]\nname = \"Mon\"\n"));
//! # Ok::<(), schedule_ron::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! [`parse`] runs the [`lexer`], then the recursive-descent [`parser`], which
//! calls the [`materialize`] step for every record as soon as it closes. The
//! first error from any stage is returned; nothing partial is produced.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`debug` per parse, `trace` per record)
//! and leaves subscriber setup to the application.

pub mod error;
pub mod format;
pub mod lexer;
pub mod map;
pub mod materialize;
pub mod options;
pub mod parser;
pub mod schedule;
pub mod ser;
pub mod value;

pub use error::{Error, ErrorKind, LexError, Result, SemanticError, SyntaxError};
pub use format::{InputFormat, OutputFormat};
pub use map::FieldMap;
pub use materialize::RecordKind;
pub use options::ParseOptions;
pub use parser::Parser;
pub use schedule::{Day, Lesson, Schedule};
pub use ser::{RonWriter, TomlWriter, XmlWriter};
pub use value::{Record, Value, ValueKind};

use std::io;

/// Parses a schedule from the RON-like notation with default options.
///
/// # Examples
///
/// ```rust
/// use schedule_ron::parse;
///
/// let schedule = parse("Schedule(days: [])").unwrap();
/// assert!(schedule.days.is_empty());
/// ```
///
/// # Errors
///
/// Returns a [`LexError`], [`SyntaxError`] or [`SemanticError`] wrapped in
/// [`Error`], carrying the byte offset of the problem.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<Schedule> {
    parse_with_options(text, ParseOptions::default())
}

/// Parses a schedule with custom [`ParseOptions`].
///
/// # Errors
///
/// See [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(text: &str, options: ParseOptions) -> Result<Schedule> {
    Parser::from_str(text, options)?.parse_document()
}

/// Parses a schedule from bytes of RON-like text.
///
/// # Errors
///
/// Returns an encoding error if the bytes are not valid UTF-8, otherwise see [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Schedule> {
    let s = std::str::from_utf8(v).map_err(|e| Error::encoding(&e.to_string()))?;
    parse(s)
}

/// Parses a schedule from an I/O stream of RON-like text.
///
/// # Examples
///
/// ```rust
/// use schedule_ron::from_reader;
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"Schedule(days: [Day(name: \"Sun\")])");
/// let schedule = from_reader(cursor).unwrap();
/// assert_eq!(schedule.days[0].name, "Sun");
/// ```
///
/// # Errors
///
/// Returns an I/O error if reading fails, otherwise see [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Schedule>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(&string)
}

/// Decodes a schedule from JSON with `serde_json`.
///
/// # Examples
///
/// ```rust
/// use schedule_ron::from_json_str;
///
/// let schedule = from_json_str(r#"{"days":[{"name":"Mon","lessons":[]}]}"#).unwrap();
/// assert_eq!(schedule.days[0].name, "Mon");
/// ```
///
/// # Errors
///
/// Returns [`Error::Json`] for malformed JSON or mistyped fields.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_json_str(text: &str) -> Result<Schedule> {
    serde_json::from_str(text).map_err(|e| Error::json(&e.to_string()))
}

/// Decodes a schedule from JSON bytes with `serde_json`.
///
/// # Errors
///
/// Returns [`Error::Json`] for malformed JSON or mistyped fields.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_json_slice(v: &[u8]) -> Result<Schedule> {
    serde_json::from_slice(v).map_err(|e| Error::json(&e.to_string()))
}

/// Renders a schedule as TOML with the hand-written [`TomlWriter`].
#[must_use]
pub fn to_toml_string(schedule: &Schedule) -> String {
    let mut writer = TomlWriter::new();
    writer.write_schedule(schedule);
    writer.into_inner()
}

/// Renders a schedule as TOML with the `toml` crate.
///
/// # Errors
///
/// Returns [`Error::TomlEncode`] if the encoder rejects the document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_toml_string_with_lib(schedule: &Schedule) -> Result<String> {
    toml::to_string(schedule).map_err(|e| Error::toml_encode(&e.to_string()))
}

/// Renders a schedule as XML with the hand-written [`XmlWriter`].
#[must_use]
pub fn to_xml_string(schedule: &Schedule) -> String {
    let mut writer = XmlWriter::new();
    writer.write_schedule(schedule);
    writer.into_inner()
}

/// Renders a schedule in the RON-like notation.
///
/// The output parses back to an equal schedule.
#[must_use]
pub fn to_ron_string(schedule: &Schedule) -> String {
    let mut writer = RonWriter::new();
    writer.write_schedule(schedule);
    writer.into_inner()
}

/// Renders a schedule as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`Error::Json`] if serialization fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_json_string(schedule: &Schedule) -> Result<String> {
    serde_json::to_string_pretty(schedule).map_err(|e| Error::json(&e.to_string()))
}

/// Writes a schedule in `format` to a writer.
///
/// # Examples
///
/// ```rust
/// use schedule_ron::{to_writer, OutputFormat, Schedule};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Schedule::default(), OutputFormat::Xml).unwrap();
/// assert!(String::from_utf8(buffer).unwrap().contains("<schedule>"));
/// ```
///
/// # Errors
///
/// Returns an error if rendering fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, schedule: &Schedule, format: OutputFormat) -> Result<()>
where
    W: io::Write,
{
    let text = format.render(schedule)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONDAY: &str = r#"Schedule(days:[Day(name:"Mon",lessons:[Lesson(time:"9:00",subject:"Math",teacher:"X",room:"101",building:"A",type:"lecture")])])"#;

    #[test]
    fn test_parse_full_document() {
        let schedule = parse(MONDAY).unwrap();
        assert_eq!(
            schedule,
            Schedule {
                days: vec![Day {
                    name: "Mon".to_string(),
                    lessons: vec![Lesson {
                        time: "9:00".to_string(),
                        subject: "Math".to_string(),
                        teacher: "X".to_string(),
                        room: "101".to_string(),
                        building: "A".to_string(),
                        kind: "lecture".to_string(),
                    }],
                }],
            }
        );
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        let err = from_slice(&[0xff, 0xfe]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);
        assert!(from_slice(MONDAY.as_bytes()).is_ok());
    }

    #[test]
    fn test_hand_toml_matches_library_decoding() {
        let schedule = parse(MONDAY).unwrap();
        let decoded: Schedule = toml::from_str(&to_toml_string(&schedule)).unwrap();
        assert_eq!(decoded, schedule);
    }

    #[test]
    fn test_library_toml() {
        let schedule = parse(MONDAY).unwrap();
        let toml = to_toml_string_with_lib(&schedule).unwrap();
        assert!(toml.contains("[[days]]"));
        assert!(toml.contains("[[days.lessons]]"));
        let decoded: Schedule = toml::from_str(&toml).unwrap();
        assert_eq!(decoded, schedule);
    }

    #[test]
    fn test_json_errors() {
        let err = from_json_str(r#"{"days": "Mon"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Json);
        assert!(err.to_string().starts_with("JSON unmarshal error:"));
    }

    #[test]
    fn test_json_round_trip() {
        let schedule = parse(MONDAY).unwrap();
        let json = to_json_string(&schedule).unwrap();
        assert!(json.contains("\"type\": \"lecture\""));
        assert_eq!(from_json_slice(json.as_bytes()).unwrap(), schedule);
    }

    #[test]
    fn test_to_writer() {
        let schedule = parse(MONDAY).unwrap();
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &schedule, OutputFormat::Toml).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), to_toml_string(&schedule));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_send_and_sync() {
        assert_send_sync::<Schedule>();
        assert_send_sync::<Day>();
        assert_send_sync::<Lesson>();
        assert_send_sync::<Error>();
        assert_send_sync::<ParseOptions>();
        assert_send_sync::<Value>();
        assert_send_sync::<Record>();
        assert_send_sync::<FieldMap>();
        assert_send_sync::<Parser<'static>>();
        assert_send_sync::<TomlWriter>();
        assert_send_sync::<XmlWriter>();
        assert_send_sync::<RonWriter>();
    }

    #[test]
    fn test_parse_on_many_threads() {
        let input = include_str!("../tests/data/schedule.ron");
        let expected = parse(input).unwrap();

        let results: Vec<Schedule> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| parse(input).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results.len(), 8);
        for schedule in results {
            assert_eq!(schedule, expected);
        }
    }
}
