use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rule::{ConfiguredRule, RuleDescription, RuleKind, ViolationSeverity};
use crate::rule_config::{RuleConfigError, parse_rule_config};

pub static DESCRIPTION: RuleDescription = RuleDescription {
    identifier: "trailing_whitespace",
    name: "Trailing Whitespace",
    summary: "Lines should not have trailing whitespace.",
    kind: RuleKind::Default,
    deprecated_aliases: &[],
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrailingWhitespaceConfig {
    pub severity: ViolationSeverity,
    /// Lines holding nothing but whitespace are not reported
    pub ignores_empty_lines: bool,
    pub ignores_comments: bool,
}

impl Default for TrailingWhitespaceConfig {
    fn default() -> Self {
        Self {
            severity: ViolationSeverity::Warning,
            ignores_empty_lines: false,
            ignores_comments: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrailingWhitespace {
    config: TrailingWhitespaceConfig,
}

impl TrailingWhitespace {
    pub fn config(&self) -> &TrailingWhitespaceConfig {
        &self.config
    }
}

impl ConfiguredRule for TrailingWhitespace {
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
        None => TrailingWhitespaceConfig::default(),
    };
    Ok(Box::new(TrailingWhitespace { config }))
}
