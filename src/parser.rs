//! Recursive-descent parser for the schedule notation.
//!
//! The grammar:
//!
//! ```text
//! Value   := String | Ident '(' Fields? ')' | Array
//! Array   := '[' ( Value (',' Value)* ','? )? ']'
//! Fields  := Field (',' Field)* ','?
//! Field   := Ident ':' Value
//! ```
//!
//! Records are handed to [`materialize`] as soon as their closing `)` is
//! consumed, so the value tree only ever contains typed records.
//!
//! ## Usage
//!
//! Most users should call [`parse`](crate::parse) in the crate root. The
//! [`Parser`] can also be driven directly:
//!
//! ```rust
//! use schedule_ron::{ParseOptions, Parser};
//!
//! let parser = Parser::from_str(r#"Schedule(days: [Day(name: "Mon")])"#, ParseOptions::new())?;
//! let schedule = parser.parse_document()?;
//! assert_eq!(schedule.days[0].name, "Mon");
//! # Ok::<(), schedule_ron::Error>(())
//! ```

use crate::error::{SemanticError, SyntaxError};
use crate::lexer::{tokenize, Token, TokenKind};
use crate::materialize::materialize;
use crate::value::{Record, Value};
use crate::{Error, FieldMap, ParseOptions, Result, Schedule};
use tracing::debug;

/// A cursor over one token sequence.
///
/// Reading past the last token yields an end-of-input token located at the
/// end of the text.
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    position: usize,
    eof: Token<'a>,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens`; `end` is the byte length of the source text.
    #[must_use]
    pub fn new(tokens: Vec<Token<'a>>, end: usize, options: ParseOptions) -> Self {
        Parser {
            tokens,
            position: 0,
            eof: Token::eof(end),
            options,
        }
    }

    /// Tokenizes `input` and returns a parser positioned at its first token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lex`] when the input cannot be tokenized.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str, options: ParseOptions) -> Result<Self> {
        let tokens = tokenize(input)?;
        debug!(tokens = tokens.len(), bytes = input.len(), "tokenized input");
        Ok(Parser::new(tokens, input.len(), options))
    }

    fn peek(&self) -> &Token<'a> {
        self.tokens.get(self.position).unwrap_or(&self.eof)
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn advance(&mut self) -> &Token<'a> {
        match self.tokens.get(self.position) {
            Some(token) => {
                self.position += 1;
                token
            }
            None => &self.eof,
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&Token<'a>> {
        let token = self.advance();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(SyntaxError::expected_token(kind, token.kind, token.offset).into())
        }
    }

    fn expected(&self, expected: &'static str) -> Error {
        let token = self.peek();
        SyntaxError::Expected {
            expected,
            found: token.kind,
            offset: token.offset,
        }
        .into()
    }

    fn enter(&self, depth: usize) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(SyntaxError::RecursionLimit {
                limit: self.options.max_depth,
                offset: self.peek().offset,
            }
            .into());
        }
        Ok(())
    }

    /// Parses a single value starting at the current token.
    ///
    /// # Errors
    ///
    /// Returns the first syntax or semantic error found inside the value.
    pub fn parse_value(&mut self) -> Result<Value> {
        self.value(1)
    }

    fn value(&mut self, depth: usize) -> Result<Value> {
        let (kind, offset) = {
            let token = self.peek();
            (token.kind, token.offset)
        };

        match kind {
            TokenKind::String => {
                let text = self.advance().text.clone().into_owned();
                Ok(Value::String(text))
            }
            TokenKind::Ident => self.record(depth),
            TokenKind::LBracket => self.array(depth),
            found => Err(SyntaxError::UnexpectedToken { found, offset }.into()),
        }
    }

    fn record(&mut self, depth: usize) -> Result<Value> {
        self.enter(depth)?;
        let (type_name, offset) = {
            let token = self.advance();
            (token.text.clone(), token.offset)
        };

        self.expect(TokenKind::LParen)?;
        let fields = self.fields(depth)?;
        self.expect(TokenKind::RParen)?;

        let record = materialize(&type_name, fields, &self.options)
            .map_err(|err| Error::semantic(err, offset))?;
        Ok(Value::Record(record))
    }

    fn fields(&mut self, depth: usize) -> Result<FieldMap> {
        let mut fields = FieldMap::new();

        if self.peek_kind() == TokenKind::RParen {
            return Ok(fields);
        }

        loop {
            if self.peek_kind() != TokenKind::Ident {
                return Err(self.expected("field name"));
            }
            let name = self.advance().text.clone().into_owned();
            self.expect(TokenKind::Colon)?;

            let value = self.value(depth + 1)?;
            fields.insert(name, value);

            match self.peek_kind() {
                TokenKind::Comma => {
                    self.advance();
                    if self.peek_kind() == TokenKind::RParen {
                        break;
                    }
                }
                TokenKind::RParen => break,
                _ => return Err(self.expected("',' or ')'")),
            }
        }

        Ok(fields)
    }

    fn array(&mut self, depth: usize) -> Result<Value> {
        self.enter(depth)?;
        self.expect(TokenKind::LBracket)?;
        let mut items = Vec::new();

        if self.peek_kind() != TokenKind::RBracket {
            loop {
                items.push(self.value(depth + 1)?);

                match self.peek_kind() {
                    TokenKind::Comma => {
                        self.advance();
                        if self.peek_kind() == TokenKind::RBracket {
                            break;
                        }
                    }
                    TokenKind::RBracket => break,
                    _ => return Err(self.expected("',' or ']'")),
                }
            }
        }

        self.expect(TokenKind::RBracket)?;
        Ok(Value::Array(items))
    }

    /// Parses the root value and checks that it is a `Schedule`.
    ///
    /// # Errors
    ///
    /// - any syntax or semantic error inside the root value
    /// - a semantic error when the root is not a `Schedule`
    /// - a syntax error for leftover tokens, unless trailing tokens are allowed
    pub fn parse_document(mut self) -> Result<Schedule> {
        let offset = self.peek().offset;
        let schedule = match self.value(1)? {
            Value::Record(Record::Schedule(schedule)) => schedule,
            other => {
                return Err(Error::semantic(
                    SemanticError::RootNotSchedule(other.kind()),
                    offset,
                ))
            }
        };

        if !self.options.allow_trailing && self.peek_kind() != TokenKind::Eof {
            return Err(self.expected(TokenKind::Eof.as_str()));
        }

        debug!(
            days = schedule.days.len(),
            lessons = schedule.lesson_count(),
            "parsed schedule"
        );
        Ok(schedule)
    }
}
