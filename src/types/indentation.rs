use super::IndentWidth;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// How source code is expected to be indented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndentationStyle {
    Tabs,
    Spaces(IndentWidth),
}

impl Default for IndentationStyle {
    fn default() -> Self {
        IndentationStyle::Spaces(IndentWidth::default())
    }
}

/// A raw value that could not be turned into an IndentationStyle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected \"tabs\" or a number of spaces between 1 and 8, got {0}")]
pub struct IndentationStyleError(String);

impl TryFrom<&Value> for IndentationStyle {
    type Error = IndentationStyleError;

    /// Accepts `"tabs"`/`"tab"`, an integer width, or a string holding an integer width.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let invalid = || IndentationStyleError(value.to_string());
        let width = match value {
            Value::String(s) if s.eq_ignore_ascii_case("tabs") || s.eq_ignore_ascii_case("tab") => {
                return Ok(IndentationStyle::Tabs);
            }
            Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid())?,
            Value::Number(n) => n.as_i64().ok_or_else(invalid)?,
            _ => return Err(invalid()),
        };
        IndentWidth::new(width)
            .map(IndentationStyle::Spaces)
            .map_err(|_| invalid())
    }
}

impl fmt::Display for IndentationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentationStyle::Tabs => write!(f, "tabs"),
            IndentationStyle::Spaces(width) if width.get() == 1 => write!(f, "1 space"),
            IndentationStyle::Spaces(width) => write!(f, "{width} spaces"),
        }
    }
}

/// Serialized in the same shape the configuration file accepts: `"tabs"` or a width.
impl Serialize for IndentationStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            IndentationStyle::Tabs => serializer.serialize_str("tabs"),
            IndentationStyle::Spaces(width) => width.serialize(serializer),
        }
    }
}
