//! Contains the error types for the two front-end stages.
//!
//! `LexError` and `ParseError` are disjoint: a failed scan never reaches
//! the parser, and a parse failure always refers to a well-formed token.
//! Both fail fast on the first violation with no partial result.

use std::error;
use std::fmt;

/// An error raised by the `Scanner`.
///
/// Covers unterminated strings and characters that are not whitespace,
/// a structural symbol, a quote, or a digit.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LexError {
    /// A description of what went wrong.
    pub message: String,
    /// The 1-indexed column where the error was detected.
    pub column: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lex error: {} at column {}", self.message, self.column)
    }
}

impl error::Error for LexError {}

/// An error raised by the `Parser` for a grammar violation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ParseError {
    /// A description of what went wrong, including the offending lexeme
    /// where one exists.
    pub message: String,
    /// The 1-indexed column of the offending token.
    pub column: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error: {} at column {}", self.message, self.column)
    }
}

impl error::Error for ParseError {}

/// Either stage's failure, for callers that chain scan and parse
/// through [`parse_str`](crate::parse_str).
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// The scanner rejected the input.
    Lex(LexError),
    /// The parser rejected the token sequence.
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(e) => e.fmt(f),
            Error::Parse(e) => e.fmt(f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Lex(e) => Some(e),
            Error::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Error::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = LexError {
            message: "unterminated string".to_string(),
            column: 5,
        };
        assert_eq!(error.to_string(), "lex error: unterminated string at column 5");

        let error = ParseError {
            message: "expected ':' after key".to_string(),
            column: 7,
        };
        assert_eq!(
            error.to_string(),
            "parse error: expected ':' after key at column 7"
        );
    }

    #[test]
    fn test_error_enum_wraps_both_kinds() {
        let lex: Error = LexError {
            message: "unexpected character: '?'".to_string(),
            column: 1,
        }
        .into();
        assert!(matches!(lex, Error::Lex(_)));
        assert_eq!(lex.to_string(), "lex error: unexpected character: '?' at column 1");

        let parse: Error = ParseError {
            message: "unterminated object".to_string(),
            column: 9,
        }
        .into();
        assert!(matches!(parse, Error::Parse(_)));
    }
}
