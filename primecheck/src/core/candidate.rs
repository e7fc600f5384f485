//! Dynamically-typed candidate values handed to the checker.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

/// A value supplied by the caller for a single primality query.
///
/// Only [`Candidate::Number`], [`Candidate::Int`] and [`Candidate::UInt`]
/// are numeric. The remaining variants exist so callers holding loosely-typed
/// data (command-line tokens, JSON documents) get a classified type error
/// rather than a parse failure of their own.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    Number(f64),
    Int(i64),
    UInt(u64),
    Text(String),
    Bool(bool),
    Null,
    Undefined,
    List(Vec<Candidate>),
    Map(BTreeMap<String, Candidate>),
}

impl Candidate {
    /// Parse a command-line token.
    ///
    /// `NaN`, `Infinity`, `-Infinity` and `undefined` are recognised as
    /// literals. Anything else is read as JSON. Numeric literals outside the
    /// `f64` range (`1e400`) saturate to an infinity. Remaining tokens that
    /// are not valid JSON become [`Candidate::Text`].
    pub fn parse(token: &str) -> Self {
        match token.trim() {
            "NaN" => Candidate::Number(f64::NAN),
            "Infinity" | "+Infinity" => Candidate::Number(f64::INFINITY),
            "-Infinity" => Candidate::Number(f64::NEG_INFINITY),
            "undefined" => Candidate::Undefined,
            trimmed => match serde_json::from_str::<Value>(trimmed) {
                Ok(value) => Candidate::from(value),
                Err(_) if is_numeric_literal(trimmed) => trimmed
                    .parse::<f64>()
                    .map_or_else(|_| Candidate::Text(token.to_string()), Candidate::Number),
                Err(_) => Candidate::Text(token.to_string()),
            },
        }
    }

    /// Name of the value's type as reported in validation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Candidate::Number(_) | Candidate::Int(_) | Candidate::UInt(_) => "number",
            Candidate::Text(_) => "string",
            Candidate::Bool(_) => "boolean",
            Candidate::Null => "null",
            Candidate::Undefined => "undefined",
            Candidate::List(_) => "array",
            Candidate::Map(_) => "object",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Candidate::Number(_) | Candidate::Int(_) | Candidate::UInt(_)
        )
    }

    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Text(text) => write!(f, "{:?}", text),
            other => write!(f, "{}", other),
        }
    }
}

/// True for tokens shaped like a JSON number (sign, digits, fraction, exponent).
///
/// Keeps `inf` and `nan`, which `f64::from_str` would accept, out of the
/// numeric fallback.
fn is_numeric_literal(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_digit())
        && token
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}

/// Render a float the way it appears in validation messages.
///
/// Negative zero renders as `0`; non-finite values use their literal names.
pub fn render_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Number(value) => f.write_str(&render_number(*value)),
            Candidate::Int(value) => write!(f, "{}", value),
            Candidate::UInt(value) => write!(f, "{}", value),
            Candidate::Text(text) => f.write_str(text),
            Candidate::Bool(flag) => write!(f, "{}", flag),
            Candidate::Null => f.write_str("null"),
            Candidate::Undefined => f.write_str("undefined"),
            Candidate::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                f.write_str("]")
            }
            Candidate::Map(entries) => {
                f.write_str("{")?;
                for (index, (key, item)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: ", key)?;
                    item.fmt_nested(f)?;
                }
                f.write_str("}")
            }
        }
    }
}

macro_rules! from_lossless {
    ($variant:ident, $wide:ty, $($ty:ty),*) => {
        $(impl From<$ty> for Candidate {
            fn from(value: $ty) -> Self {
                Candidate::$variant(<$wide>::from(value))
            }
        })*
    };
}

from_lossless!(Int, i64, i8, i16, i32);
from_lossless!(UInt, u64, u8, u16, u32);

impl From<i64> for Candidate {
    fn from(value: i64) -> Self {
        Candidate::Int(value)
    }
}

impl From<u64> for Candidate {
    fn from(value: u64) -> Self {
        Candidate::UInt(value)
    }
}

impl From<isize> for Candidate {
    fn from(value: isize) -> Self {
        Candidate::Int(value as i64)
    }
}

impl From<usize> for Candidate {
    fn from(value: usize) -> Self {
        Candidate::UInt(value as u64)
    }
}

impl From<f64> for Candidate {
    fn from(value: f64) -> Self {
        Candidate::Number(value)
    }
}

impl From<f32> for Candidate {
    fn from(value: f32) -> Self {
        Candidate::Number(f64::from(value))
    }
}

impl From<bool> for Candidate {
    fn from(value: bool) -> Self {
        Candidate::Bool(value)
    }
}

impl From<&str> for Candidate {
    fn from(value: &str) -> Self {
        Candidate::Text(value.to_string())
    }
}

impl From<String> for Candidate {
    fn from(value: String) -> Self {
        Candidate::Text(value)
    }
}

impl From<()> for Candidate {
    fn from(_: ()) -> Self {
        Candidate::Undefined
    }
}

impl<T: Into<Candidate>> From<Option<T>> for Candidate {
    fn from(value: Option<T>) -> Self {
        value.map_or(Candidate::Null, Into::into)
    }
}

impl<T: Into<Candidate>> From<Vec<T>> for Candidate {
    fn from(items: Vec<T>) -> Self {
        Candidate::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Candidate>> for Candidate {
    fn from(entries: BTreeMap<String, Candidate>) -> Self {
        Candidate::Map(entries)
    }
}

impl From<Value> for Candidate {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Candidate::Null,
            Value::Bool(flag) => Candidate::Bool(flag),
            Value::Number(number) => match (number.as_u64(), number.as_i64(), number.as_f64()) {
                (Some(unsigned), _, _) => Candidate::UInt(unsigned),
                (None, Some(signed), _) => Candidate::Int(signed),
                (None, None, Some(float)) => Candidate::Number(float),
                (None, None, None) => Candidate::Text(number.to_string()),
            },
            Value::String(text) => Candidate::Text(text),
            Value::Array(items) => Candidate::List(items.into_iter().map(Candidate::from).collect()),
            Value::Object(entries) => Candidate::Map(
                entries
                    .into_iter()
                    .map(|(key, item)| (key, Candidate::from(item)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognises_non_json_literals() {
        assert!(matches!(Candidate::parse("NaN"), Candidate::Number(v) if v.is_nan()));
        assert_eq!(
            Candidate::parse("Infinity"),
            Candidate::Number(f64::INFINITY)
        );
        assert_eq!(
            Candidate::parse("-Infinity"),
            Candidate::Number(f64::NEG_INFINITY)
        );
        assert_eq!(Candidate::parse("undefined"), Candidate::Undefined);
    }

    #[test]
    fn parse_reads_json_literals() {
        assert_eq!(Candidate::parse("17"), Candidate::UInt(17));
        assert_eq!(Candidate::parse("-5"), Candidate::Int(-5));
        assert_eq!(Candidate::parse("4.75"), Candidate::Number(4.75));
        assert_eq!(Candidate::parse("\"5\""), Candidate::Text("5".to_string()));
        assert_eq!(Candidate::parse("null"), Candidate::Null);
        assert_eq!(Candidate::parse("true"), Candidate::Bool(true));
        assert_eq!(Candidate::parse("[]"), Candidate::List(Vec::new()));
        assert_eq!(Candidate::parse("{}"), Candidate::Map(BTreeMap::new()));
    }

    #[test]
    fn parse_saturates_out_of_range_numbers() {
        assert_eq!(Candidate::parse("1e400"), Candidate::Number(f64::INFINITY));
        assert_eq!(
            Candidate::parse("-1e400"),
            Candidate::Number(f64::NEG_INFINITY)
        );
    }

    #[test]
    fn parse_keeps_float_words_as_text() {
        assert_eq!(Candidate::parse("inf"), Candidate::Text("inf".to_string()));
        assert_eq!(Candidate::parse("nan"), Candidate::Text("nan".to_string()));
        assert_eq!(Candidate::parse("1-2"), Candidate::Text("1-2".to_string()));
    }

    #[test]
    fn parse_falls_back_to_text() {
        assert_eq!(Candidate::parse("seven"), Candidate::Text("seven".to_string()));
    }

    #[test]
    fn type_names_cover_every_variant() {
        assert_eq!(Candidate::from(2.5).type_name(), "number");
        assert_eq!(Candidate::from(-2).type_name(), "number");
        assert_eq!(Candidate::from(2u64).type_name(), "number");
        assert_eq!(Candidate::from("5").type_name(), "string");
        assert_eq!(Candidate::from(true).type_name(), "boolean");
        assert_eq!(Candidate::Null.type_name(), "null");
        assert_eq!(Candidate::from(()).type_name(), "undefined");
        assert_eq!(Candidate::from(vec![1, 2]).type_name(), "array");
        assert_eq!(Candidate::Map(BTreeMap::new()).type_name(), "object");
    }

    #[test]
    fn display_renders_nested_values() {
        let list = Candidate::List(vec![Candidate::UInt(1), Candidate::from("a")]);
        assert_eq!(list.to_string(), "[1, \"a\"]");
        let mut entries = BTreeMap::new();
        entries.insert("n".to_string(), Candidate::Null);
        assert_eq!(Candidate::Map(entries).to_string(), "{\"n\": null}");
    }

    #[test]
    fn render_number_normalises_special_values() {
        assert_eq!(render_number(-0.0), "0");
        assert_eq!(render_number(4.75), "4.75");
        assert_eq!(render_number(-1.0), "-1");
        assert_eq!(render_number(f64::NEG_INFINITY), "-Infinity");
    }
}
