//! Contains the recursive-descent `Parser`.
//!
//! The parser walks the token sequence produced by the `Scanner` under
//! the grammar
//!
//! ```text
//! json   := ε | object
//! object := '{' '}' | '{' pair (',' pair)* '}'
//! pair   := STRING ':' value
//! value  := STRING | NUMBER
//! ```
//!
//! and materializes the result mapping. There is no recursion deeper than
//! one object, so no nesting bookkeeping is needed.

use crate::error::ParseError;
use crate::token::{Token, TokenKind};
use crate::value::{Object, Value};

/// Parser over one token sequence.
///
/// Like the `Scanner`, a `Parser` is built for exactly one call to
/// [`Parser::parse`]. The cursor only ever moves forward; the sequence's
/// trailing `EndOfInput` sentinel means no access needs a bounds check.
pub struct Parser {
    /// The token sequence. Invariant: ends with `EndOfInput`.
    tokens: Vec<Token>,
    /// The current position (index) in `tokens`.
    cursor: usize,
    /// The mapping under construction.
    object: Object,
}

impl Parser {
    /// Creates a new `Parser` over a token sequence produced by
    /// [`Scanner::scan`](crate::Scanner::scan).
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            cursor: 0,
            object: Object::new(),
        }
    }

    /// The token under the cursor. The `EndOfInput` sentinel guarantees
    /// there always is one, and `advance` never moves past it.
    fn peek(&self) -> &Token {
        &self.tokens[self.cursor]
    }

    /// Consumes and returns the token under the cursor. The cursor never
    /// advances past the sentinel.
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::EndOfInput {
            self.cursor += 1;
        }
        token
    }

    /// A `ParseError` located at the given token.
    fn error(message: String, token: &Token) -> ParseError {
        ParseError {
            message,
            column: token.column,
        }
    }

    /// Parses the `json` rule and returns the result mapping.
    ///
    /// Empty input (a sequence that is immediately `EndOfInput`) is
    /// accepted as an empty mapping, distinct from `{}` only in spelling.
    pub fn parse(mut self) -> Result<Object, ParseError> {
        if self.peek().kind == TokenKind::EndOfInput {
            return Ok(self.object);
        }

        let open = self.advance();
        if open.kind != TokenKind::LeftBrace {
            return Err(Self::error(
                format!("expected '{{' at start of object, found '{}'", open.lexeme),
                &open,
            ));
        }

        // Empty object: '}' directly after '{'.
        if self.peek().kind == TokenKind::RightBrace {
            self.advance();
            self.expect_end()?;
            return Ok(self.object);
        }

        loop {
            self.parse_pair()?;

            let next = self.advance();
            match next.kind {
                TokenKind::RightBrace => break,
                TokenKind::Comma => continue, // another pair is now mandatory
                TokenKind::EndOfInput => {
                    return Err(Self::error("unterminated object".to_string(), &next));
                }
                _ => {
                    return Err(Self::error(
                        format!("expected ',' or '}}', found '{}'", next.lexeme),
                        &next,
                    ));
                }
            }
        }

        self.expect_end()?;
        Ok(self.object)
    }

    /// Parses the `pair` rule and inserts the key/value into the mapping.
    /// A later duplicate key overwrites the earlier value in place.
    fn parse_pair(&mut self) -> Result<(), ParseError> {
        let key_token = self.advance();
        if key_token.kind != TokenKind::String {
            return Err(Self::error(
                format!("expected string key, found '{}'", key_token.lexeme),
                &key_token,
            ));
        }
        let key = dequote(&key_token.lexeme).to_string();

        let colon = self.advance();
        if colon.kind != TokenKind::Colon {
            return Err(Self::error(
                format!("expected ':' after key \"{}\"", key),
                &colon,
            ));
        }

        let value = self.parse_value()?;
        self.object.insert(key, value);
        Ok(())
    }

    /// Parses the `value` rule.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let token = self.advance();
        match token.kind {
            TokenKind::String => Ok(Value::String(dequote(&token.lexeme).to_string())),
            TokenKind::Number => match token.lexeme.parse::<f64>() {
                Ok(n) => Ok(Value::Number(n)),
                Err(_) => Err(Self::error(
                    format!("invalid number '{}'", token.lexeme),
                    &token,
                )),
            },
            _ => Err(Self::error(
                format!("expected string or number value, found '{}'", token.lexeme),
                &token,
            )),
        }
    }

    /// Requires the sentinel after the closing '}': the grammar accepts
    /// exactly one object per line.
    fn expect_end(&self) -> Result<(), ParseError> {
        let token = self.peek();
        if token.kind == TokenKind::EndOfInput {
            Ok(())
        } else {
            Err(Self::error(
                format!("unexpected trailing token '{}'", token.lexeme),
                token,
            ))
        }
    }
}

/// Strips the surrounding quotes from a `String` token's lexeme.
fn dequote(lexeme: &str) -> &str {
    &lexeme[1..lexeme.len() - 1]
}
