//! Configuration helpers shared by rule implementations
//!
//! Rules receive their settings as an untyped JSON value taken straight from the
//! configuration file. These helpers turn that value into typed settings and define
//! the two shapes most rules accept: a bare severity and warning/error thresholds.

use crate::rule::ViolationSeverity;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleConfigError {
    #[error("invalid configuration for '{identifier}': {message}")]
    Invalid { identifier: String, message: String },
}

/// Deserialize a rule's raw settings into its typed configuration.
pub fn parse_rule_config<T: DeserializeOwned>(identifier: &str, value: &Value) -> Result<T, RuleConfigError> {
    T::deserialize(value).map_err(|e| RuleConfigError::Invalid {
        identifier: identifier.to_string(),
        message: e.to_string(),
    })
}

/// Severity-only settings: either `error` or `{ severity: error }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityConfig {
    pub severity: ViolationSeverity,
}

impl<'de> Deserialize<'de> for SeverityConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Input {
            Bare(ViolationSeverity),
            Table { severity: ViolationSeverity },
        }

        match Input::deserialize(deserializer)? {
            Input::Bare(severity) | Input::Table { severity } => Ok(SeverityConfig { severity }),
        }
    }
}

/// Warning and optional error thresholds
///
/// Accepted shapes: `120`, `[120, 200]`, `{ warning: 120, error: 200 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityLevels {
    pub warning: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<u64>,
}

impl SeverityLevels {
    pub const fn new(warning: u64, error: Option<u64>) -> Self {
        Self { warning, error }
    }
}

impl<'de> Deserialize<'de> for SeverityLevels {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Input {
            Single(u64),
            List(Vec<u64>),
            Table {
                warning: u64,
                #[serde(default)]
                error: Option<u64>,
            },
        }

        match Input::deserialize(deserializer)? {
            Input::Single(warning) => Ok(SeverityLevels::new(warning, None)),
            Input::List(levels) => match levels.as_slice() {
                [warning] => Ok(SeverityLevels::new(*warning, None)),
                [warning, error] => Ok(SeverityLevels::new(*warning, Some(*error))),
                _ => Err(serde::de::Error::custom(format!(
                    "expected one or two severity levels, got {}",
                    levels.len()
                ))),
            },
            Input::Table { warning, error } => Ok(SeverityLevels::new(warning, error)),
        }
    }
}
