//! Configuration options for parsing.
//!
//! [`ParseOptions`] controls the two policies the grammar leaves open:
//!
//! - **Field strictness**: by default a field holding the wrong kind of value
//!   (say `time: ["9:00"]` in a `Lesson`) is treated as absent. Strict mode
//!   reports it as an error instead. Absent fields default in both modes.
//! - **Trailing tokens**: by default anything after the root `Schedule(...)`
//!   is an error. It can be allowed, in which case it is ignored unparsed.
//!
//! ## Examples
//!
//! ```rust
//! use schedule_ron::{parse_with_options, ErrorKind, ParseOptions};
//!
//! let input = r#"Schedule(days: "none")"#;
//!
//! // Lenient default: the mistyped field is dropped
//! let schedule = parse_with_options(input, ParseOptions::new()).unwrap();
//! assert!(schedule.days.is_empty());
//!
//! // Strict: the same input is rejected
//! let err = parse_with_options(input, ParseOptions::strict()).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Semantic);
//! ```

/// Default limit on nested arrays and records.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for [`parse_with_options`](crate::parse_with_options).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub strict_fields: bool,
    pub allow_trailing: bool,
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            strict_fields: false,
            allow_trailing: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Creates default options (lenient fields, trailing tokens rejected).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use schedule_ron::ParseOptions;
    ///
    /// let options = ParseOptions::new();
    /// assert!(!options.strict_fields);
    /// assert!(!options.allow_trailing);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options under which mistyped fields are reported as errors.
    #[must_use]
    pub fn strict() -> Self {
        ParseOptions {
            strict_fields: true,
            ..Default::default()
        }
    }

    /// Options that accept everything the most permissive reading of the
    /// grammar accepts: mistyped fields dropped, trailing tokens ignored.
    #[must_use]
    pub fn lenient() -> Self {
        ParseOptions {
            allow_trailing: true,
            ..Default::default()
        }
    }

    /// Sets whether a field holding the wrong kind of value is an error.
    #[must_use]
    pub fn with_strict_fields(mut self, strict: bool) -> Self {
        self.strict_fields = strict;
        self
    }

    /// Sets whether tokens after the root value are ignored instead of rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use schedule_ron::{parse_with_options, ParseOptions};
    ///
    /// let input = "Schedule(days: []) leftover";
    /// assert!(parse_with_options(input, ParseOptions::new()).is_err());
    ///
    /// let options = ParseOptions::new().with_trailing_tokens(true);
    /// assert!(parse_with_options(input, options).is_ok());
    /// ```
    #[must_use]
    pub fn with_trailing_tokens(mut self, allow: bool) -> Self {
        self.allow_trailing = allow;
        self
    }

    /// Sets the maximum nesting depth of arrays and records.
    ///
    /// Default is [`DEFAULT_MAX_DEPTH`].
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
