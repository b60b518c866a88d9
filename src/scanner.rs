//! The byte-based scanner (lexer).
//!
//! This module consumes the raw input `&str` (as `&[u8]`) and produces the
//! full token sequence in one pass. A `Scanner` is built for exactly one
//! call to [`Scanner::scan`] and discarded afterwards.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use memchr::memchr;

// --- The Lookup Table (LUT) ---
// A 256-entry array so any byte can be classified with a single lookup.
// Only the plain space is skippable whitespace in this dialect; tab and
// newline classify as 0 and fall through to the unexpected-character error.
const W: u8 = 1; // Whitespace (space only)
const S: u8 = 2; // Structural
const D: u8 = 3; // Digit
const Q: u8 = 4; // Quote

static BYTE_PROPERTIES: [u8; 256] = {
    let mut table = [0; 256];
    // 1: Whitespace
    table[b' ' as usize] = W;

    // 2: Structural
    table[b'{' as usize] = S;
    table[b'}' as usize] = S;
    table[b':' as usize] = S;
    table[b',' as usize] = S;

    // 4: Quote
    table[b'"' as usize] = Q;

    // 3: Digit
    table[b'0' as usize] = D;
    table[b'1' as usize] = D;
    table[b'2' as usize] = D;
    table[b'3' as usize] = D;
    table[b'4' as usize] = D;
    table[b'5' as usize] = D;
    table[b'6' as usize] = D;
    table[b'7' as usize] = D;
    table[b'8' as usize] = D;
    table[b'9' as usize] = D;

    // 0: everything else is invalid outside a string
    table
};

/// Single-pass scanner over one line of source text.
///
/// Classifies bytes with a lookup table and uses `memchr` to find the
/// closing quote of string literals (the dialect has no escape sequences,
/// so the first `"` after the opening quote always closes it).
pub struct Scanner<'a> {
    /// The input line.
    source: &'a str,
    /// The raw byte view of `source`.
    bytes: &'a [u8],
    /// The current position (index) in the `bytes` slice.
    cursor: usize,
    /// The tokens produced so far.
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// Creates a new `Scanner` over an input string.
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source,
            bytes: source.as_bytes(),
            cursor: 0,
            tokens: Vec::new(),
        }
    }

    /// Creates a `LexError` at the current cursor position.
    fn error(&self, message: String) -> LexError {
        LexError {
            message,
            column: self.cursor + 1,
        }
    }

    /// Scans the entire input and returns the token sequence, terminated
    /// by exactly one `EndOfInput` sentinel.
    pub fn scan(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(&byte) = self.bytes.get(self.cursor) {
            match BYTE_PROPERTIES[byte as usize] {
                W => {
                    self.cursor += 1;
                }
                S => {
                    let kind = match byte {
                        b'{' => TokenKind::LeftBrace,
                        b'}' => TokenKind::RightBrace,
                        b':' => TokenKind::Colon,
                        b',' => TokenKind::Comma,
                        _ => unreachable!(), // LUT guarantees this
                    };
                    self.tokens
                        .push(Token::new(kind, (byte as char).to_string(), self.cursor + 1));
                    self.cursor += 1;
                }
                Q => self.lex_string()?,
                D => self.lex_number(),
                // Non-ASCII input reports its leading byte, which is
                // enough for a one-line diagnostic.
                _ => {
                    return Err(
                        self.error(format!("unexpected character: '{}'", byte as char))
                    );
                }
            }
        }

        self.tokens.push(Token::end_of_input(self.cursor + 1));
        Ok(self.tokens)
    }

    /// Scans a string literal. The emitted lexeme keeps its surrounding
    /// quotes; stripping is the parser's job.
    fn lex_string(&mut self) -> Result<(), LexError> {
        let start = self.cursor;
        self.cursor += 1; // consume the opening '"'

        match memchr(b'"', &self.bytes[self.cursor..]) {
            Some(i) => {
                self.cursor += i + 1; // past the closing '"'
                // Both ends of the slice sit on a '"', so this is always
                // a valid char boundary.
                let lexeme = &self.source[start..self.cursor];
                self.tokens
                    .push(Token::new(TokenKind::String, lexeme, start + 1));
                Ok(())
            }
            None => {
                self.cursor = self.bytes.len();
                Err(self.error("unterminated string".to_string()))
            }
        }
    }

    /// Scans a maximal run of ASCII digits. Only called when the current
    /// byte is a digit, so the run is always non-empty.
    fn lex_number(&mut self) {
        let start = self.cursor;
        while let Some(&byte) = self.bytes.get(self.cursor) {
            if BYTE_PROPERTIES[byte as usize] != D {
                break;
            }
            self.cursor += 1;
        }

        let lexeme = &self.source[start..self.cursor];
        self.tokens
            .push(Token::new(TokenKind::Number, lexeme, start + 1));
    }
}
