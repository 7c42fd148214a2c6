use std::fmt;

use serde::{Deserialize, Serialize};

/// A concrete parameter value. Numeric where the source parsed as a number,
/// string otherwise. Template domains deserialize into this directly; any
/// other shape (bool, nested array, table) is rejected by serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl ParamValue {
    /// Interprets a command-line literal: integer first, then float, and the
    /// literal survives as a string when neither parse succeeds.
    pub fn parse(literal: &str) -> Self {
        if let Ok(i) = literal.parse::<i64>() {
            return ParamValue::Int(i);
        }
        if let Ok(f) = literal.parse::<f64>() {
            return ParamValue::Float(f);
        }
        ParamValue::Str(literal.to_string())
    }

    /// Numeric view of the value; `None` for strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Int(i) => Some(*i as f64),
            ParamValue::Float(f) => Some(*f),
            ParamValue::Str(_) => None,
        }
    }
}

/// Equality is type-aware: the two numeric cases compare as numbers
/// (`1 == 1.0`), strings compare as strings, and a number never equals a
/// string.
impl PartialEq for ParamValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ParamValue::Int(a), ParamValue::Int(b)) => a == b,
            (ParamValue::Str(a), ParamValue::Str(b)) => a == b,
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(x) => write!(f, "{x}"),
            ParamValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl From<f64> for ParamValue {
    fn from(f: f64) -> Self {
        ParamValue::Float(f)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}
