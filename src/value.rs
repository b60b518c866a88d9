//! Contains the `Value` type and the result mapping, plus the
//! serialization (stringify) logic for turning a parsed object back into
//! its compact one-line JSON form.

use indexmap::IndexMap;
use std::fmt;

/// A parsed value: the dialect admits only strings and numbers.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    /// A string value, stored without its quotes.
    String(String),
    /// A number value. Digit runs are converted to `f64`.
    Number(f64),
}

/// The result mapping produced by one parse.
///
/// `IndexMap` preserves first-insertion order while `insert` overwrites
/// the value in place, which is exactly the last-write-wins duplicate-key
/// behavior the grammar calls for.
pub type Object = IndexMap<String, Value>;

impl fmt::Display for Value {
    /// Writes the value in its JSON source form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Serializes an object back into compact one-line JSON.
///
/// The output re-parses to an equal object; since duplicate keys have
/// already collapsed during parsing, the round trip is idempotent.
pub fn stringify(object: &Object) -> String {
    let mut out = String::from("{");
    for (i, (key, value)) in object.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('"');
        out.push_str(key);
        out.push_str("\":");
        out.push_str(&value.to_string());
    }
    out.push('}');
    out
}
