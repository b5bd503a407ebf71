//! Input and output format selection.
//!
//! [`InputFormat`] and [`OutputFormat`] name the conversions the crate
//! supports and dispatch to the matching reader or writer. Both can be
//! guessed from a file extension.
//!
//! ```rust
//! use schedule_ron::{InputFormat, OutputFormat, ParseOptions};
//! use std::path::Path;
//!
//! let input = InputFormat::from_path(Path::new("week.ron"));
//! let output = OutputFormat::from_path(Path::new("week.xml"));
//!
//! let schedule = input.parse(r#"Schedule(days: [])"#, &ParseOptions::new())?;
//! let xml = output.render(&schedule)?;
//! assert!(xml.contains("<schedule>"));
//! # Ok::<(), schedule_ron::Error>(())
//! ```

use crate::{ParseOptions, Result, Schedule};
use clap::ValueEnum;
use std::fmt;
use std::path::Path;

/// Formats a schedule can be read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// The RON-like notation, read by the hand-written parser
    Ron,
    /// JSON, read with serde_json
    Json,
}

/// Formats a schedule can be written to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// TOML from the hand-written writer
    Toml,
    /// TOML from the `toml` crate
    TomlLib,
    /// XML from the hand-written writer
    Xml,
    /// The RON-like notation
    Ron,
    /// Pretty-printed JSON
    Json,
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

impl InputFormat {
    /// `.json` files are JSON; everything else is read as RON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match extension(path).as_deref() {
            Some("json") => InputFormat::Json,
            _ => InputFormat::Ron,
        }
    }

    /// Reads a schedule from `text`.
    ///
    /// `options` only affects the RON parser.
    ///
    /// # Errors
    ///
    /// Returns the reader's error unchanged.
    pub fn parse(self, text: &str, options: &ParseOptions) -> Result<Schedule> {
        match self {
            InputFormat::Ron => crate::parse_with_options(text, options.clone()),
            InputFormat::Json => crate::from_json_str(text),
        }
    }
}

impl OutputFormat {
    /// `.xml`, `.ron` and `.json` map to their formats; everything else is TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match extension(path).as_deref() {
            Some("xml") => OutputFormat::Xml,
            Some("ron") => OutputFormat::Ron,
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Toml,
        }
    }

    /// Renders `schedule` in this format.
    ///
    /// # Errors
    ///
    /// Only the library-backed encoders can fail.
    pub fn render(self, schedule: &Schedule) -> Result<String> {
        match self {
            OutputFormat::Toml => Ok(crate::to_toml_string(schedule)),
            OutputFormat::TomlLib => crate::to_toml_string_with_lib(schedule),
            OutputFormat::Xml => Ok(crate::to_xml_string(schedule)),
            OutputFormat::Ron => Ok(crate::to_ron_string(schedule)),
            OutputFormat::Json => crate::to_json_string(schedule),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputFormat::Ron => "ron",
            InputFormat::Json => "json",
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Toml => "toml",
            OutputFormat::TomlLib => "toml-lib",
            OutputFormat::Xml => "xml",
            OutputFormat::Ron => "ron",
            OutputFormat::Json => "json",
        })
    }
}
