//! # shallow-json
//!
//! `shallow-json` parses a single line of text holding a flat JSON
//! object — one level deep, string and number values only — into an
//! in-memory key/value mapping.
//!
//! The front end runs in two strict stages:
//!
//! * **[`Scanner`]**: a single-pass, byte-based lexer that turns the
//!   source line into a token sequence terminated by an `EndOfInput`
//!   sentinel, using a byte-classification lookup table and `memchr`
//!   for string scanning.
//! * **[`Parser`]**: a recursive-descent parser that consumes the token
//!   sequence under the grammar `{ pair (, pair)* }` (or an empty object,
//!   or empty input) and builds an insertion-order-preserving [`Object`].
//!
//! The dialect is deliberately restricted: no nesting, no arrays, no
//! booleans or null, no string escapes, and numbers are plain unsigned
//! digit runs. Anything outside that fails fast with a [`LexError`] or
//! [`ParseError`].
//!
//! ## Quick start
//!
//! ```
//! use shallow_json::{parse_str, Value};
//!
//! let object = parse_str(r#"{"name": "ada", "id": 1815}"#).unwrap();
//! assert_eq!(object["name"], Value::String("ada".to_string()));
//! assert_eq!(object["id"], Value::Number(1815.0));
//! ```
//!
//! The two stages can also be run separately:
//!
//! ```
//! use shallow_json::{Parser, Scanner};
//!
//! let tokens = Scanner::new(r#"{"a": 1}"#).scan().unwrap();
//! let object = Parser::new(tokens).parse().unwrap();
//! assert_eq!(object.len(), 1);
//! ```

/// Contains the `LexError`, `ParseError`, and combined `Error` types.
pub mod error;
/// Contains the recursive-descent `Parser`.
pub mod parser;
/// Contains the byte-based `Scanner` (lexer).
pub mod scanner;
/// Contains the `Token` and `TokenKind` types shared by both stages.
pub mod token;
/// Contains the `Value` type, the `Object` mapping, and `stringify`.
pub mod value;

pub use error::{Error, LexError, ParseError};
pub use parser::Parser;
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
pub use value::{stringify, Object, Value};

/// Scans and parses one line of source text in a single call.
///
/// Equivalent to `Parser::new(Scanner::new(source).scan()?).parse()`,
/// with both failure kinds folded into [`Error`].
///
/// # Examples
/// ```
/// use shallow_json::{parse_str, Error};
///
/// assert!(parse_str("{}").unwrap().is_empty());
/// assert!(matches!(parse_str(r#"{"a"#), Err(Error::Lex(_))));
/// assert!(matches!(parse_str(r#"{"a":}"#), Err(Error::Parse(_))));
/// ```
pub fn parse_str(source: &str) -> Result<Object, Error> {
    let tokens = Scanner::new(source).scan()?;
    let object = Parser::new(tokens).parse()?;
    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::{parse_str, stringify, Error, Object, Value};
    use serde_json::Value as SerdeValue;

    #[test]
    fn test_valid_object_matches_literal_content() {
        let object = parse_str(r#"{"name": "ada", "id": 1815, "note": "x y"}"#).unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["name"], Value::String("ada".to_string()));
        assert_eq!(object["id"], Value::Number(1815.0));
        assert_eq!(object["note"], Value::String("x y".to_string()));
    }

    #[test]
    fn test_empty_input_and_empty_object() {
        assert_eq!(parse_str("").unwrap(), Object::new());
        assert_eq!(parse_str("{}").unwrap(), Object::new());
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let object = parse_str(r#"{"a":"1","a":"2"}"#).unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["a"], Value::String("2".to_string()));
    }

    #[test]
    fn test_trailing_comma_is_a_parse_error() {
        assert!(matches!(
            parse_str(r#"{"a":"1",}"#),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_unterminated_string_is_a_lex_error() {
        match parse_str(r#"{"a"#) {
            Err(Error::Lex(e)) => assert_eq!(e.message, "unterminated string"),
            other => panic!("expected a lex error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_colon_is_a_parse_error() {
        match parse_str(r#"{"a" "1"}"#) {
            Err(Error::Parse(e)) => {
                assert!(e.message.starts_with("expected ':' after key"))
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_closing_brace_is_a_parse_error() {
        match parse_str(r#"{"a":"1""#) {
            Err(Error::Parse(e)) => assert_eq!(e.message, "unterminated object"),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_number_fails_lexing_at_the_sign() {
        match parse_str(r#"{"n":-1}"#) {
            Err(Error::Lex(e)) => {
                assert_eq!(e.message, "unexpected character: '-'");
                assert_eq!(e.column, 6);
            }
            other => panic!("expected a lex error, got {:?}", other),
        }
    }

    #[test]
    fn test_fraction_and_exponent_forms_rejected() {
        // '.' and 'e' are not part of a digit run and are invalid bytes
        // outside strings, so 1.5 and 1e3 fail lexing.
        assert!(matches!(parse_str(r#"{"n":1.5}"#), Err(Error::Lex(_))));
        assert!(matches!(parse_str(r#"{"n":1e3}"#), Err(Error::Lex(_))));
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        let first = parse_str(r#"{"b":"2","a":"1","a":"3","n":42}"#).unwrap();
        let second = parse_str(&stringify(&first)).unwrap();
        assert_eq!(first, second);
        assert_eq!(stringify(&first), stringify(&second));
    }

    #[test]
    fn test_agreement_with_serde_json_on_accepted_inputs() {
        let inputs = [
            "{}",
            r#"{"a":"1"}"#,
            r#"{"name": "ada", "id": 1815}"#,
            r#"{"x": 0, "y": 10, "label": "origin shifted"}"#,
        ];
        for input in inputs {
            let ours = parse_str(input).unwrap();
            let theirs: SerdeValue = serde_json::from_str(input).unwrap();
            let theirs = theirs.as_object().unwrap();

            assert_eq!(ours.len(), theirs.len(), "input {:?}", input);
            for (key, value) in &ours {
                match value {
                    Value::String(s) => {
                        assert_eq!(theirs[key].as_str().unwrap(), s, "input {:?}", input)
                    }
                    Value::Number(n) => {
                        assert_eq!(theirs[key].as_f64().unwrap(), *n, "input {:?}", input)
                    }
                }
            }
        }
    }

    #[test]
    fn test_spaces_are_the_only_skippable_whitespace() {
        assert!(parse_str(r#"  { "a" : 1 , "b" : "2" }  "#).is_ok());
        assert!(matches!(parse_str("{\t}"), Err(Error::Lex(_))));
        assert!(matches!(parse_str("{\n}"), Err(Error::Lex(_))));
    }

    #[test]
    fn test_insertion_order_is_first_appearance_order() {
        let object = parse_str(r#"{"z":1,"a":2,"z":3,"m":4}"#).unwrap();
        let keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        // "z" keeps its first slot even though its value was overwritten.
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(object["z"], Value::Number(3.0));
    }

    #[test]
    fn test_trailing_tokens_after_object_rejected() {
        assert!(matches!(parse_str("{} {}"), Err(Error::Parse(_))));
    }
}
