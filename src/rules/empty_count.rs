use serde_json::Value;

use crate::rule::{ConfiguredRule, RuleDescription, RuleKind, ViolationSeverity};
use crate::rule_config::{RuleConfigError, SeverityConfig, parse_rule_config};

pub static DESCRIPTION: RuleDescription = RuleDescription {
    identifier: "empty_count",
    name: "Empty Count",
    summary: "Prefer checking `isEmpty` over comparing `count` to zero.",
    kind: RuleKind::OptIn,
    deprecated_aliases: &[],
};

#[derive(Debug, Clone)]
pub struct EmptyCount {
    config: SeverityConfig,
}

impl Default for EmptyCount {
    fn default() -> Self {
        Self {
            config: SeverityConfig {
                severity: ViolationSeverity::Error,
            },
        }
    }
}

impl EmptyCount {
    pub fn severity(&self) -> ViolationSeverity {
        self.config.severity
    }
}

impl ConfiguredRule for EmptyCount {
    fn description(&self) -> &'static RuleDescription {
        &DESCRIPTION
    }

    fn configuration(&self) -> Value {
        super::settings_value(&self.config)
    }
}

pub fn build(value: Option<&Value>) -> Result<Box<dyn ConfiguredRule>, RuleConfigError> {
    let rule = match value {
        Some(value) => EmptyCount {
            config: parse_rule_config(DESCRIPTION.identifier, value)?,
        },
        None => EmptyCount::default(),
    };
    Ok(Box::new(rule))
}
