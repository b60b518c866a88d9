//! Defines the `Token` and `TokenKind` types.
//!
//! These are the intermediate representation between the `Scanner` (lexer)
//! and the `Parser`. One scan produces a `Vec<Token>` that is consumed
//! read-only by one parse and then discarded.

use std::fmt;

/// The syntactic category of a token.
///
/// This is the complete token vocabulary of the flat-object dialect.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// A string literal. The lexeme keeps its surrounding quotes;
    /// the parser strips them.
    String,
    /// A run of ASCII digits. No sign, fraction, or exponent.
    Number,
    /// Sentinel appended exactly once at the end of every successful scan.
    /// Its lexeme is empty. It lets the parser test "no more input"
    /// without bounds-checking the token sequence.
    EndOfInput,
}

/// A single token produced by the `Scanner`.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    /// The kind of the token.
    pub kind: TokenKind,
    /// The literal substring of the source captured by this token.
    pub lexeme: String,
    /// The 1-indexed column where the token starts. Input is a single
    /// line, so no line number is tracked.
    pub column: usize,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, lexeme: impl Into<String>, column: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            column,
        }
    }

    /// The `EndOfInput` sentinel, placed one past the last source column.
    pub(crate) fn end_of_input(column: usize) -> Self {
        Token::new(TokenKind::EndOfInput, "", column)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.kind, self.lexeme)
    }
}
