use serde_json::Value;

use crate::rule::{ConfiguredRule, RuleDescription, RuleKind, ViolationSeverity};
use crate::rule_config::{RuleConfigError, SeverityConfig, parse_rule_config};

pub static DESCRIPTION: RuleDescription = RuleDescription {
    identifier: "force_cast",
    name: "Force Cast",
    summary: "Force casts should be avoided.",
    kind: RuleKind::Default,
    deprecated_aliases: &[],
};

#[derive(Debug, Clone)]
pub struct ForceCast {
    config: SeverityConfig,
}

impl Default for ForceCast {
    fn default() -> Self {
        Self {
            config: SeverityConfig {
                severity: ViolationSeverity::Error,
            },
        }
    }
}

impl ForceCast {
    pub fn severity(&self) -> ViolationSeverity {
        self.config.severity
    }
}

impl ConfiguredRule for ForceCast {
    fn description(&self) -> &'static RuleDescription {
        &DESCRIPTION
    }

    fn configuration(&self) -> Value {
        super::settings_value(&self.config)
    }
}

pub fn build(value: Option<&Value>) -> Result<Box<dyn ConfiguredRule>, RuleConfigError> {
    let rule = match value {
        Some(value) => ForceCast {
            config: parse_rule_config(DESCRIPTION.identifier, value)?,
        },
        None => ForceCast::default(),
    };
    Ok(Box::new(rule))
}
