//! Transient value tree built while parsing.
//!
//! The parser produces [`Value`]s bottom-up. Strings and arrays stay generic;
//! a record is materialized into a typed [`Record`] the moment its closing
//! parenthesis is consumed, so the generic `(type_name, fields)` form never
//! outlives a single parser step.
//!
//! ```rust
//! use schedule_ron::{Day, Value, ValueKind};
//!
//! let value = Value::from(Day::default());
//! assert_eq!(value.kind().to_string(), "Day");
//! assert!(!value.is_string());
//! assert_eq!(Value::from("Mon").as_str(), Some("Mon"));
//! ```

use crate::materialize::RecordKind;
use crate::{Day, Lesson, Schedule};
use std::fmt;

/// A parsed value: string, array, or an already materialized record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    String(String),
    Array(Vec<Value>),
    Record(Record),
}

/// The closed set of record kinds a document may contain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Schedule(Schedule),
    Day(Day),
    Lesson(Lesson),
}

impl Record {
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Record::Schedule(_) => RecordKind::Schedule,
            Record::Day(_) => RecordKind::Day,
            Record::Lesson(_) => RecordKind::Lesson,
        }
    }
}

/// The shape of a [`Value`], used in error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Array,
    Record(RecordKind),
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::String => f.write_str("string"),
            ValueKind::Array => f.write_str("array"),
            ValueKind::Record(kind) => fmt::Display::fmt(kind, f),
        }
    }
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Record(record) => ValueKind::Record(record.kind()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }
}

// Extraction by move. The error is the kind that was actually found.
impl TryFrom<Value> for Schedule {
    type Error = ValueKind;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Record(Record::Schedule(schedule)) => Ok(schedule),
            other => Err(other.kind()),
        }
    }
}

impl TryFrom<Value> for Day {
    type Error = ValueKind;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Record(Record::Day(day)) => Ok(day),
            other => Err(other.kind()),
        }
    }
}

impl TryFrom<Value> for Lesson {
    type Error = ValueKind;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Record(Record::Lesson(lesson)) => Ok(lesson),
            other => Err(other.kind()),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl From<Schedule> for Value {
    fn from(schedule: Schedule) -> Self {
        Value::Record(Record::Schedule(schedule))
    }
}

impl From<Day> for Value {
    fn from(day: Day) -> Self {
        Value::Record(Record::Day(day))
    }
}

impl From<Lesson> for Value {
    fn from(lesson: Lesson) -> Self {
        Value::Record(Record::Lesson(lesson))
    }
}
