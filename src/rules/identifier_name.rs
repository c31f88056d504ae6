use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rule::{ConfiguredRule, RuleDescription, RuleKind};
use crate::rule_config::{RuleConfigError, SeverityLevels, parse_rule_config};

pub static DESCRIPTION: RuleDescription = RuleDescription {
    identifier: "identifier_name",
    name: "Identifier Name",
    summary: "Identifier names should only contain alphanumeric characters and have a reasonable length.",
    kind: RuleKind::Default,
    deprecated_aliases: &["variable_name"],
};

/// Configuration for the identifier name rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentifierNameConfig {
    /// Names shorter than these are reported (warning, then error)
    #[serde(default = "default_min_length")]
    pub min_length: SeverityLevels,

    /// Names longer than these are reported
    #[serde(default = "default_max_length")]
    pub max_length: SeverityLevels,

    /// Names that are never reported
    #[serde(default = "default_excluded")]
    pub excluded: Vec<String>,
}

fn default_min_length() -> SeverityLevels {
    SeverityLevels::new(3, Some(2))
}

fn default_max_length() -> SeverityLevels {
    SeverityLevels::new(40, Some(60))
}

fn default_excluded() -> Vec<String> {
    vec!["id".to_string()]
}

impl Default for IdentifierNameConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
            excluded: default_excluded(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentifierName {
    config: IdentifierNameConfig,
}

impl IdentifierName {
    pub fn new(config: IdentifierNameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IdentifierNameConfig {
        &self.config
    }
}

impl ConfiguredRule for IdentifierName {
    fn description(&self) -> &'static RuleDescription {
        &DESCRIPTION
    }

    fn configuration(&self) -> Value {
        super::settings_value(&self.config)
    }
}

pub fn build(value: Option<&Value>) -> Result<Box<dyn ConfiguredRule>, RuleConfigError> {
    let config = match value {
        Some(value) => parse_rule_config(DESCRIPTION.identifier, value)?,
        None => IdentifierNameConfig::default(),
    };
    Ok(Box::new(IdentifierName::new(config)))
}
