//! Error types for schedule parsing and conversion.
//!
//! Parsing fails fast: the first problem found is returned and nothing else
//! is produced. Errors are split by the stage that raised them.
//!
//! ## Error Categories
//!
//! - **Lexical errors** ([`LexError`]): unterminated strings, unrecognized characters
//! - **Syntax errors** ([`SyntaxError`]): a token of the wrong kind where another was expected
//! - **Semantic errors** ([`SemanticError`]): unknown record types, wrongly typed array
//!   elements, a root value that is not a `Schedule`
//! - **I/O and collaborator errors**: reading input, JSON decoding, TOML encoding
//!
//! Every parse error carries a byte offset into the original text.
//!
//! ## Examples
//!
//! ```rust
//! use schedule_ron::{parse, ErrorKind};
//!
//! let err = parse("Foo()").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Semantic);
//! assert_eq!(err.offset(), Some(0));
//! assert!(err.to_string().contains("Foo"));
//! ```

use crate::lexer::TokenKind;
use crate::materialize::RecordKind;
use crate::value::ValueKind;
use thiserror::Error;

/// A failure while splitting the input into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A string literal was still open at end of input.
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// A character that cannot start any token.
    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },
}

impl LexError {
    /// Byte offset of the offending input.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            LexError::UnterminatedString { offset } | LexError::UnexpectedChar { offset, .. } => {
                *offset
            }
        }
    }
}

/// A token sequence that does not follow the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The next token was not the one the grammar requires here.
    #[error("expected {expected}, got {found} at offset {offset}")]
    Expected {
        expected: &'static str,
        found: TokenKind,
        offset: usize,
    },

    /// A value was required but the token cannot start one.
    #[error("unexpected token {found} at offset {offset}")]
    UnexpectedToken { found: TokenKind, offset: usize },

    /// Arrays and records are nested deeper than the configured limit.
    #[error("nesting deeper than {limit} levels at offset {offset}")]
    RecursionLimit { limit: usize, offset: usize },
}

impl SyntaxError {
    /// Creates an [`SyntaxError::Expected`] for a specific token kind.
    pub(crate) fn expected_token(expected: TokenKind, found: TokenKind, offset: usize) -> Self {
        SyntaxError::Expected {
            expected: expected.as_str(),
            found,
            offset,
        }
    }

    /// Byte offset of the offending token.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            SyntaxError::Expected { offset, .. }
            | SyntaxError::UnexpectedToken { offset, .. }
            | SyntaxError::RecursionLimit { offset, .. } => *offset,
        }
    }
}

/// A well-formed record that cannot become part of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// The record type name is not `Schedule`, `Day` or `Lesson`.
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// An element of `days` or `lessons` has the wrong kind.
    #[error("expected {expected} in {container} array, got {found}")]
    ElementMismatch {
        container: &'static str,
        expected: RecordKind,
        found: ValueKind,
    },

    /// A field holds a value of the wrong kind (strict mode only).
    #[error("expected {expected} for field `{field}` of {record}, got {found}")]
    FieldMismatch {
        record: RecordKind,
        field: &'static str,
        expected: ValueKind,
        found: ValueKind,
    },

    /// The top-level value is something other than a `Schedule`.
    #[error("expected Schedule at root, got {0}")]
    RootNotSchedule(ValueKind),
}

/// Coarse classification of an [`Error`], useful for matching in callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Lex,
    Syntax,
    Semantic,
    Io,
    Encoding,
    Json,
    TomlEncode,
}

/// Represents all errors surfaced by this crate.
///
/// Parse errors are labelled with the stage that produced them, so the
/// display form reads `tokenization error: ...` or `parsing error: ...`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Lexer failure
    #[error("tokenization error: {0}")]
    Lex(LexError),

    /// Grammar failure
    #[error("parsing error: {0}")]
    Syntax(SyntaxError),

    /// Materialization failure, located at the record's type name
    #[error("parsing error: {error} at offset {offset}")]
    Semantic { error: SemanticError, offset: usize },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Input bytes are not valid UTF-8
    #[error("encoding error: {0}")]
    Encoding(String),

    /// JSON decoding failure
    #[error("JSON unmarshal error: {0}")]
    Json(String),

    /// TOML encoding failure
    #[error("TOML encode error: {0}")]
    TomlEncode(String),
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<SyntaxError> for Error {
    fn from(err: SyntaxError) -> Self {
        Error::Syntax(err)
    }
}

impl Error {
    /// Creates a semantic error located at `offset`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use schedule_ron::{Error, ErrorKind, SemanticError};
    ///
    /// let err = Error::semantic(SemanticError::UnknownType("Week".into()), 12);
    /// assert_eq!(err.kind(), ErrorKind::Semantic);
    /// assert_eq!(err.to_string(), "parsing error: unknown type: Week at offset 12");
    /// ```
    pub fn semantic(error: SemanticError, offset: usize) -> Self {
        Error::Semantic { error, offset }
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an error for input that is not UTF-8.
    pub fn encoding(msg: &str) -> Self {
        Error::Encoding(msg.to_string())
    }

    /// Creates a JSON decoding error.
    pub fn json(msg: &str) -> Self {
        Error::Json(msg.to_string())
    }

    /// Creates a TOML encoding error.
    pub fn toml_encode(msg: &str) -> Self {
        Error::TomlEncode(msg.to_string())
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Error::Lex(_) => ErrorKind::Lex,
            Error::Syntax(_) => ErrorKind::Syntax,
            Error::Semantic { .. } => ErrorKind::Semantic,
            Error::Io(_) => ErrorKind::Io,
            Error::Encoding(_) => ErrorKind::Encoding,
            Error::Json(_) => ErrorKind::Json,
            Error::TomlEncode(_) => ErrorKind::TomlEncode,
        }
    }

    /// Returns the byte offset into the parsed text, for parse errors.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Error::Lex(err) => Some(err.offset()),
            Error::Syntax(err) => Some(err.offset()),
            Error::Semantic { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
