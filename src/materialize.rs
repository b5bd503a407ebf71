//! Turning closed records into typed document entities.
//!
//! The parser calls [`materialize`] once per record, right after its closing
//! `)`, with every field value already parsed (and nested records already
//! materialized). Dispatch is over the closed [`RecordKind`] enum.
//!
//! Two leniency rules apply:
//!
//! - `days` and `lessons` that are missing (or, outside strict mode, not an
//!   array) yield an empty list; but every element of an array that *is*
//!   present must be a record of the right kind.
//! - Scalar fields that are missing (or, outside strict mode, not a string)
//!   yield an empty string.
//!
//! Fields the record kind does not know are ignored.

use crate::error::SemanticError;
use crate::value::{Record, Value, ValueKind};
use crate::{Day, FieldMap, Lesson, ParseOptions, Schedule};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// The three record kinds of a schedule document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Schedule,
    Day,
    Lesson,
}

impl RecordKind {
    /// The type name as written in the notation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RecordKind::Schedule => "Schedule",
            RecordKind::Day => "Day",
            RecordKind::Lesson => "Lesson",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordKind {
    type Err = SemanticError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "Schedule" => Ok(RecordKind::Schedule),
            "Day" => Ok(RecordKind::Day),
            "Lesson" => Ok(RecordKind::Lesson),
            other => Err(SemanticError::UnknownType(other.to_string())),
        }
    }
}

/// Builds the typed record named `type_name` from its parsed fields.
///
/// # Errors
///
/// - [`SemanticError::UnknownType`] for a type name outside the three kinds
/// - [`SemanticError::ElementMismatch`] for a wrongly typed `days`/`lessons` element
/// - [`SemanticError::FieldMismatch`] for a wrongly typed field, in strict mode
///
/// # Examples
///
/// ```rust
/// use schedule_ron::materialize::materialize;
/// use schedule_ron::{FieldMap, ParseOptions, Record, Value};
///
/// let mut fields = FieldMap::new();
/// fields.insert("name".to_string(), Value::from("Mon"));
///
/// let record = materialize("Day", fields, &ParseOptions::new()).unwrap();
/// match record {
///     Record::Day(day) => {
///         assert_eq!(day.name, "Mon");
///         assert!(day.lessons.is_empty());
///     }
///     other => panic!("expected Day, got {:?}", other),
/// }
/// ```
pub fn materialize(
    type_name: &str,
    fields: FieldMap,
    options: &ParseOptions,
) -> Result<Record, SemanticError> {
    let kind: RecordKind = type_name.parse()?;
    let mut reader = FieldReader {
        fields,
        record: kind,
        strict: options.strict_fields,
    };

    let record = match kind {
        RecordKind::Schedule => Record::Schedule(Schedule {
            days: reader.records("days", RecordKind::Day)?,
        }),
        RecordKind::Day => Record::Day(Day {
            name: reader.string("name")?,
            lessons: reader.records("lessons", RecordKind::Lesson)?,
        }),
        RecordKind::Lesson => Record::Lesson(Lesson {
            time: reader.string("time")?,
            subject: reader.string("subject")?,
            teacher: reader.string("teacher")?,
            room: reader.string("room")?,
            building: reader.string("building")?,
            kind: reader.string("type")?,
        }),
    };

    trace!(kind = %kind, "materialized record");
    Ok(record)
}

/// Moves field values out of a record's map.
struct FieldReader {
    fields: FieldMap,
    record: RecordKind,
    strict: bool,
}

impl FieldReader {
    fn mismatch(&self, field: &'static str, expected: ValueKind, found: &Value) -> SemanticError {
        SemanticError::FieldMismatch {
            record: self.record,
            field,
            expected,
            found: found.kind(),
        }
    }

    fn string(&mut self, field: &'static str) -> Result<String, SemanticError> {
        match self.fields.remove(field) {
            Some(Value::String(s)) => Ok(s),
            Some(other) if self.strict => Err(self.mismatch(field, ValueKind::String, &other)),
            _ => Ok(String::new()),
        }
    }

    fn records<T>(&mut self, field: &'static str, expected: RecordKind) -> Result<Vec<T>, SemanticError>
    where
        T: TryFrom<Value, Error = ValueKind>,
    {
        match self.fields.remove(field) {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| {
                    T::try_from(item).map_err(|found| SemanticError::ElementMismatch {
                        container: field,
                        expected,
                        found,
                    })
                })
                .collect(),
            Some(other) if self.strict => Err(self.mismatch(field, ValueKind::Array, &other)),
            _ => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: Vec<(&str, Value)>) -> FieldMap {
        pairs
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    fn lenient(type_name: &str, pairs: Vec<(&str, Value)>) -> Result<Record, SemanticError> {
        materialize(type_name, fields(pairs), &ParseOptions::new())
    }

    fn strict(type_name: &str, pairs: Vec<(&str, Value)>) -> Result<Record, SemanticError> {
        materialize(type_name, fields(pairs), &ParseOptions::strict())
    }

    #[test]
    fn test_record_kind_from_str() {
        assert_eq!("Lesson".parse::<RecordKind>(), Ok(RecordKind::Lesson));
        assert_eq!(
            "lesson".parse::<RecordKind>(),
            Err(SemanticError::UnknownType("lesson".to_string()))
        );
    }

    #[test]
    fn test_unknown_type() {
        let err = lenient("Week", vec![]).unwrap_err();
        assert_eq!(err.to_string(), "unknown type: Week");
    }

    #[test]
    fn test_lesson_fields() {
        let record = lenient(
            "Lesson",
            vec![
                ("time", Value::from("9:00")),
                ("subject", Value::from("Math")),
                ("type", Value::from("lecture")),
                ("extra", Value::from("ignored")),
            ],
        )
        .unwrap();

        let expected = Lesson {
            time: "9:00".to_string(),
            subject: "Math".to_string(),
            kind: "lecture".to_string(),
            ..Lesson::default()
        };
        assert_eq!(record, Record::Lesson(expected));
    }

    #[test]
    fn test_lenient_scalar_mismatch_is_empty() {
        let record = lenient(
            "Lesson",
            vec![("room", Value::from(vec![Value::from("101")]))],
        )
        .unwrap();
        assert_eq!(record, Record::Lesson(Lesson::default()));
    }

    #[test]
    fn test_strict_scalar_mismatch() {
        let err = strict("Day", vec![("name", Value::from(Day::default()))]).unwrap_err();
        assert_eq!(
            err,
            SemanticError::FieldMismatch {
                record: RecordKind::Day,
                field: "name",
                expected: ValueKind::String,
                found: ValueKind::Record(RecordKind::Day),
            }
        );
    }

    #[test]
    fn test_missing_containers_default_empty() {
        assert_eq!(
            lenient("Schedule", vec![]).unwrap(),
            Record::Schedule(Schedule::default())
        );
        assert_eq!(
            strict("Day", vec![("name", Value::from("Mon"))]).unwrap(),
            Record::Day(Day {
                name: "Mon".to_string(),
                lessons: vec![],
            })
        );
    }

    #[test]
    fn test_mistyped_container() {
        assert_eq!(
            lenient("Schedule", vec![("days", Value::from("none"))]).unwrap(),
            Record::Schedule(Schedule::default())
        );
        assert!(matches!(
            strict("Schedule", vec![("days", Value::from("none"))]),
            Err(SemanticError::FieldMismatch {
                field: "days",
                expected: ValueKind::Array,
                ..
            })
        ));
    }

    #[test]
    fn test_element_mismatch_in_both_modes() {
        let days = Value::from(vec![Value::from(Day::default()), Value::from("Tue")]);
        let expected = SemanticError::ElementMismatch {
            container: "days",
            expected: RecordKind::Day,
            found: ValueKind::String,
        };
        assert_eq!(
            lenient("Schedule", vec![("days", days.clone())]),
            Err(expected.clone())
        );
        assert_eq!(strict("Schedule", vec![("days", days)]), Err(expected));
    }

    #[test]
    fn test_lessons_keep_order() {
        let lesson = |time: &str| {
            Value::from(Lesson {
                time: time.to_string(),
                ..Lesson::default()
            })
        };
        let record = lenient(
            "Day",
            vec![("lessons", Value::from(vec![lesson("9:00"), lesson("10:40")]))],
        )
        .unwrap();

        match record {
            Record::Day(day) => {
                let times: Vec<_> = day.lessons.iter().map(|l| l.time.as_str()).collect();
                assert_eq!(times, vec!["9:00", "10:40"]);
            }
            other => panic!("expected Day, got {:?}", other),
        }
    }
}
