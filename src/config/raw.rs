use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::ConfigError;

/// The untyped top-level mapping of a configuration file.
///
/// Keys keep their file order so diagnostics list them the way the user wrote them.
/// Typed accessors never fail: a missing or malformed entry reads as empty or absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawConfig(IndexMap<String, Value>);

impl RawConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// A list of strings; a lone string reads as a one-element list.
    ///
    /// Absent keys, other types, and lists holding anything but strings all read as empty.
    pub fn string_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::String(s)) => vec![s.clone()],
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    pub fn optional_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(Value::as_str).map(str::to_string)
    }

    pub fn optional_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        super::parsers::parse_raw_config(content, super::ConfigFormat::Yaml, "<string>")
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        super::parsers::parse_raw_config(content, super::ConfigFormat::Json, "<string>")
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        super::parsers::parse_raw_config(content, super::ConfigFormat::Toml, "<string>")
    }
}

impl From<IndexMap<String, Value>> for RawConfig {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self(map)
    }
}

impl From<serde_json::Map<String, Value>> for RawConfig {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl FromIterator<(String, Value)> for RawConfig {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Only JSON objects convert; any other value is rejected as not being a mapping.
impl TryFrom<Value> for RawConfig {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(map.into()),
            Value::Null => Ok(RawConfig::default()),
            other => Err(ConfigError::ParseError(format!(
                "top level of a configuration must be a mapping, found {}",
                value_kind(&other)
            ))),
        }
    }
}

pub(super) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
