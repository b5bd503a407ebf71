//! Tokenizer for the schedule notation.
//!
//! The [`Lexer`] walks the input once, skipping whitespace and comments, and
//! produces [`Token`]s tagged with their byte offset. Identifier tokens and
//! string literals without escapes borrow from the input; only strings that
//! contain escape sequences allocate.
//!
//! ```rust
//! use schedule_ron::lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize(r#"Day(name: "Mon") // comment"#).unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Ident,
//!         TokenKind::LParen,
//!         TokenKind::Ident,
//!         TokenKind::Colon,
//!         TokenKind::String,
//!         TokenKind::RParen,
//!     ]
//! );
//! ```

use crate::error::LexError;
use std::borrow::Cow;
use std::fmt;

/// The classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Ident,
    String,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Colon,
    Comma,
}

impl TokenKind {
    /// Human-readable name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of input",
            TokenKind::Ident => "identifier",
            TokenKind::String => "string",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexical unit.
///
/// For string literals `text` holds the unescaped contents without quotes;
/// for every other kind it is the source slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: Cow<'a, str>,
    pub offset: usize,
}

impl<'a> Token<'a> {
    fn new(kind: TokenKind, text: Cow<'a, str>, offset: usize) -> Self {
        Token { kind, text, offset }
    }

    /// The end-of-input sentinel located at `offset`.
    #[must_use]
    pub fn eof(offset: usize) -> Self {
        Token::new(TokenKind::Eof, Cow::Borrowed(""), offset)
    }
}

/// Splits the whole input into tokens.
///
/// The end-of-input token is not part of the returned sequence.
///
/// # Errors
///
/// Returns the first [`LexError`]; no partial sequence is produced.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(input).tokenize()
}

/// A single-use cursor over the input text.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Lexer { input, position: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek_char() {
            self.position += 1;
        }
    }

    /// Skips whitespace and comments until a real token (or the end) is next.
    fn skip_trivia(&mut self) {
        loop {
            self.skip_whitespace();
            let rest = self.rest();

            if rest.starts_with("//") {
                // The newline itself is left for skip_whitespace.
                self.position += rest.find('\n').unwrap_or(rest.len());
                continue;
            }

            if let Some(body) = rest.strip_prefix("/*") {
                // An unterminated block comment swallows the rest of the input.
                self.position += match body.find("*/") {
                    Some(end) => 2 + end + 2,
                    None => rest.len(),
                };
                continue;
            }

            break;
        }
    }

    fn read_string(&mut self) -> Result<Token<'a>, LexError> {
        let input = self.input;
        let start = self.position;
        self.next_char(); // consume opening quote
        let content_start = self.position;

        // Stays `None` until the first escape; plain literals borrow the input.
        let mut unescaped: Option<String> = None;

        loop {
            let at = self.position;
            match self.next_char() {
                None => return Err(LexError::UnterminatedString { offset: start }),
                Some('"') => {
                    let text = match unescaped {
                        Some(buf) => Cow::Owned(buf),
                        None => Cow::Borrowed(&input[content_start..at]),
                    };
                    return Ok(Token::new(TokenKind::String, text, start));
                }
                Some('\\') => {
                    let buf = unescaped.get_or_insert_with(|| input[content_start..at].to_string());
                    match self.next_char() {
                        None => return Err(LexError::UnterminatedString { offset: start }),
                        Some('n') => buf.push('\n'),
                        Some('t') => buf.push('\t'),
                        Some('r') => buf.push('\r'),
                        Some(other) => buf.push(other),
                    }
                }
                Some(ch) => {
                    if let Some(buf) = unescaped.as_mut() {
                        buf.push(ch);
                    }
                }
            }
        }
    }

    fn read_ident(&mut self) -> Token<'a> {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.position += 1;
            } else {
                break;
            }
        }
        Token::new(
            TokenKind::Ident,
            Cow::Borrowed(&self.input[start..self.position]),
            start,
        )
    }

    /// Returns the next token, or an [`TokenKind::Eof`] token once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Fails on an unterminated string literal or a character that cannot start a token.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        self.skip_trivia();

        let start = self.position;
        let ch = match self.peek_char() {
            Some(ch) => ch,
            None => return Ok(Token::eof(start)),
        };

        if ch == '"' {
            return self.read_string();
        }

        if ch.is_ascii_alphabetic() || ch == '_' {
            return Ok(self.read_ident());
        }

        let kind = match ch {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            _ => return Err(LexError::UnexpectedChar { ch, offset: start }),
        };
        self.position += 1;
        Ok(Token::new(
            kind,
            Cow::Borrowed(&self.input[start..self.position]),
            start,
        ))
    }

    /// Consumes the lexer, collecting every token up to end of input.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`] encountered.
    pub fn tokenize(mut self) -> Result<Vec<Token<'a>>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.kind == TokenKind::Eof {
                return Ok(tokens);
            }
            tokens.push(token);
        }
    }
}
