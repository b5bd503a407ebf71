//! Text writers for a materialized [`Schedule`].
//!
//! Three hand-written writers render the document deterministically, days
//! and lessons in order:
//!
//! - [`TomlWriter`]: `[[days]]` / `[[days.lessons]]` arrays of tables
//! - [`XmlWriter`]: a `<schedule>` element tree
//! - [`RonWriter`]: the notation accepted by [`parse`](crate::parse)
//!
//! Library-backed encoders live in the crate root
//! ([`to_toml_string_with_lib`](crate::to_toml_string_with_lib),
//! [`to_json_string`](crate::to_json_string)).
//!
//! ## Usage
//!
//! ```rust
//! use schedule_ron::{Day, Schedule, TomlWriter};
//!
//! let schedule = Schedule {
//!     days: vec![Day { name: "Mon".to_string(), lessons: vec![] }],
//! };
//!
//! let mut writer = TomlWriter::new();
//! writer.write_schedule(&schedule);
//! assert_eq!(writer.into_inner(), "[[days]]\nname = \"Mon\"\n\n");
//! ```

use crate::{Day, Lesson, Schedule};

/// Renders a schedule as TOML arrays of tables.
pub struct TomlWriter {
    output: String,
}

impl Default for TomlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TomlWriter {
    #[must_use]
    pub fn new() -> Self {
        TomlWriter {
            output: String::with_capacity(256),
        }
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                c if c.is_control() => {
                    self.output.push_str(&format!("\\u{:04X}", u32::from(c)));
                }
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }

    fn write_pair(&mut self, key: &str, value: &str) {
        self.output.push_str(key);
        self.output.push_str(" = ");
        self.write_string(value);
        self.output.push('\n');
    }

    pub fn write_schedule(&mut self, schedule: &Schedule) {
        for day in &schedule.days {
            self.output.push_str("[[days]]\n");
            self.write_pair("name", &day.name);
            for lesson in &day.lessons {
                self.output.push_str("\n[[days.lessons]]\n");
                for (key, value) in lesson.fields() {
                    self.write_pair(key, value);
                }
            }
            self.output.push('\n');
        }
    }
}

/// Renders a schedule as an indented XML document.
pub struct XmlWriter {
    output: String,
    indent: usize,
    depth: usize,
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlWriter {
    /// Creates a writer with 2-space indentation.
    #[must_use]
    pub fn new() -> Self {
        Self::with_indent(2)
    }

    #[must_use]
    pub fn with_indent(indent: usize) -> Self {
        XmlWriter {
            output: String::with_capacity(256),
            indent,
            depth: 0,
        }
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth * self.indent {
            self.output.push(' ');
        }
    }

    fn open(&mut self, tag: &str) {
        self.write_indent();
        self.output.push('<');
        self.output.push_str(tag);
        self.output.push_str(">\n");
        self.depth += 1;
    }

    fn close(&mut self, tag: &str) {
        self.depth -= 1;
        self.write_indent();
        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push_str(">\n");
    }

    fn write_text(&mut self, s: &str) {
        for ch in s.chars() {
            match ch {
                '&' => self.output.push_str("&amp;"),
                '<' => self.output.push_str("&lt;"),
                '>' => self.output.push_str("&gt;"),
                '"' => self.output.push_str("&quot;"),
                '\'' => self.output.push_str("&apos;"),
                c => self.output.push(c),
            }
        }
    }

    fn element(&mut self, tag: &str, text: &str) {
        self.write_indent();
        self.output.push('<');
        self.output.push_str(tag);
        self.output.push('>');
        self.write_text(text);
        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push_str(">\n");
    }

    fn write_lesson(&mut self, lesson: &Lesson) {
        self.open("lesson");
        for (tag, value) in lesson.fields() {
            self.element(tag, value);
        }
        self.close("lesson");
    }

    fn write_day(&mut self, day: &Day) {
        self.open("day");
        self.element("name", &day.name);
        self.open("lessons");
        for lesson in &day.lessons {
            self.write_lesson(lesson);
        }
        self.close("lessons");
        self.close("day");
    }

    pub fn write_schedule(&mut self, schedule: &Schedule) {
        self.output
            .push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.open("schedule");
        for day in &schedule.days {
            self.write_day(day);
        }
        self.close("schedule");
    }
}

/// Renders a schedule in the notation read by [`parse`](crate::parse).
pub struct RonWriter {
    output: String,
    depth: usize,
}

impl Default for RonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl RonWriter {
    const INDENT: &'static str = "    ";

    #[must_use]
    pub fn new() -> Self {
        RonWriter {
            output: String::with_capacity(256),
            depth: 0,
        }
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    fn newline(&mut self) {
        self.output.push('\n');
        for _ in 0..self.depth {
            self.output.push_str(Self::INDENT);
        }
    }

    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }

    fn open_record(&mut self, name: &str) {
        self.output.push_str(name);
        self.output.push('(');
        self.depth += 1;
    }

    fn close_record(&mut self) {
        self.depth -= 1;
        self.newline();
        self.output.push(')');
    }

    fn field_name(&mut self, name: &str) {
        self.newline();
        self.output.push_str(name);
        self.output.push_str(": ");
    }

    fn write_list<T>(&mut self, items: &[T], mut write_item: impl FnMut(&mut Self, &T)) {
        if items.is_empty() {
            self.output.push_str("[]");
            return;
        }
        self.output.push('[');
        self.depth += 1;
        for item in items {
            self.newline();
            write_item(self, item);
            self.output.push(',');
        }
        self.depth -= 1;
        self.newline();
        self.output.push(']');
    }

    fn write_lesson(&mut self, lesson: &Lesson) {
        self.open_record("Lesson");
        for (key, value) in lesson.fields() {
            self.field_name(key);
            self.write_string(value);
            self.output.push(',');
        }
        self.close_record();
    }

    fn write_day(&mut self, day: &Day) {
        self.open_record("Day");
        self.field_name("name");
        self.write_string(&day.name);
        self.output.push(',');
        self.field_name("lessons");
        self.write_list(&day.lessons, Self::write_lesson);
        self.output.push(',');
        self.close_record();
    }

    pub fn write_schedule(&mut self, schedule: &Schedule) {
        self.open_record("Schedule");
        self.field_name("days");
        self.write_list(&schedule.days, Self::write_day);
        self.output.push(',');
        self.close_record();
        self.output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schedule {
        Schedule {
            days: vec![Day {
                name: "Mon".to_string(),
                lessons: vec![Lesson {
                    time: "9:00".to_string(),
                    subject: "Math & \"Logic\"".to_string(),
                    teacher: "O'Neil".to_string(),
                    room: "1\t01".to_string(),
                    building: "A\nB".to_string(),
                    kind: "<lecture>".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn test_toml_layout_and_escapes() {
        let mut writer = TomlWriter::new();
        writer.write_schedule(&sample());
        let expected = "[[days]]\n\
                        name = \"Mon\"\n\
                        \n\
                        [[days.lessons]]\n\
                        time = \"9:00\"\n\
                        subject = \"Math & \\\"Logic\\\"\"\n\
                        teacher = \"O'Neil\"\n\
                        room = \"1\\t01\"\n\
                        building = \"A\\nB\"\n\
                        type = \"<lecture>\"\n\
                        \n";
        assert_eq!(writer.into_inner(), expected);
    }

    #[test]
    fn test_toml_control_characters() {
        let mut writer = TomlWriter::new();
        writer.write_string("a\u{1}b");
        assert_eq!(writer.into_inner(), "\"a\\u0001b\"");
    }

    #[test]
    fn test_toml_empty_schedule() {
        let mut writer = TomlWriter::new();
        writer.write_schedule(&Schedule::default());
        assert_eq!(writer.into_inner(), "");
    }

    #[test]
    fn test_xml_layout_and_escapes() {
        let mut writer = XmlWriter::new();
        writer.write_schedule(&sample());
        let xml = writer.into_inner();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<schedule>\n  <day>\n"));
        assert!(xml.contains("    <name>Mon</name>\n    <lessons>\n      <lesson>\n"));
        assert!(xml.contains("        <subject>Math &amp; &quot;Logic&quot;</subject>\n"));
        assert!(xml.contains("        <teacher>O&apos;Neil</teacher>\n"));
        assert!(xml.contains("        <type>&lt;lecture&gt;</type>\n"));
        assert!(xml.ends_with("      </lesson>\n    </lessons>\n  </day>\n</schedule>\n"));
    }

    #[test]
    fn test_xml_custom_indent() {
        let mut writer = XmlWriter::with_indent(4);
        writer.write_schedule(&Schedule {
            days: vec![Day::default()],
        });
        assert_eq!(
            writer.into_inner(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <schedule>\n    <day>\n        <name></name>\n        <lessons>\n        </lessons>\n    </day>\n</schedule>\n"
        );
    }

    #[test]
    fn test_ron_layout() {
        let mut writer = RonWriter::new();
        writer.write_schedule(&Schedule {
            days: vec![Day {
                name: "Sat".to_string(),
                lessons: vec![],
            }],
        });
        assert_eq!(
            writer.into_inner(),
            "Schedule(\n    days: [\n        Day(\n            name: \"Sat\",\n            lessons: [],\n        ),\n    ],\n)\n"
        );
    }

    #[test]
    fn test_ron_output_parses_back() {
        let schedule = sample();
        let mut writer = RonWriter::new();
        writer.write_schedule(&schedule);
        assert_eq!(crate::parse(&writer.into_inner()).unwrap(), schedule);
    }
}
