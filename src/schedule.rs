//! The typed schedule document.
//!
//! A [`Schedule`] is an ordered list of [`Day`]s, each holding an ordered list
//! of [`Lesson`]s. All three types derive serde traits with the field names
//! used by every supported format (`days`, `name`, `lessons`, `time`,
//! `subject`, `teacher`, `room`, `building`, `type`); missing fields decode as
//! empty values.
//!
//! The [`Display`](std::fmt::Display) impl renders a numbered listing:
//!
//! ```rust
//! use schedule_ron::{Day, Lesson, Schedule};
//!
//! let schedule = Schedule {
//!     days: vec![Day {
//!         name: "Monday".to_string(),
//!         lessons: vec![Lesson {
//!             time: "9:00".to_string(),
//!             subject: "Math".to_string(),
//!             ..Lesson::default()
//!         }],
//!     }],
//! };
//!
//! let listing = schedule.to_string();
//! assert!(listing.contains("1. Monday (1 lessons):"));
//! assert!(listing.contains("   1)9:00"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root of the document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    pub days: Vec<Day>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Day {
    pub name: String,
    pub lessons: Vec<Lesson>,
}

/// A single class slot. Every field is free text and may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lesson {
    pub time: String,
    pub subject: String,
    pub teacher: String,
    pub room: String,
    pub building: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Lesson {
    /// Field names paired with values, in output order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("time", self.time.as_str()),
            ("subject", self.subject.as_str()),
            ("teacher", self.teacher.as_str()),
            ("room", self.room.as_str()),
            ("building", self.building.as_str()),
            ("type", self.kind.as_str()),
        ]
    }
}

impl Schedule {
    /// Total number of lessons across all days.
    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.days.iter().map(|day| day.lessons.len()).sum()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, day) in self.days.iter().enumerate() {
            writeln!(
                f,
                "\n{}. {} ({} lessons):",
                i + 1,
                day.name,
                day.lessons.len()
            )?;
            for (j, lesson) in day.lessons.iter().enumerate() {
                writeln!(f, "   {}){}", j + 1, lesson.time)?;
                writeln!(f, "       {}", lesson.subject)?;
                writeln!(f, "       {}", lesson.teacher)?;
                if !lesson.room.is_empty() {
                    writeln!(f, "      {}, {}", lesson.room, lesson.building)?;
                }
                writeln!(f, "      {}", lesson.kind)?;
            }
        }
        Ok(())
    }
}
