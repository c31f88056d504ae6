use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rule::{ConfiguredRule, RuleDescription, RuleKind};
use crate::rule_config::{RuleConfigError, SeverityLevels, parse_rule_config};

pub static DESCRIPTION: RuleDescription = RuleDescription {
    identifier: "line_length",
    name: "Line Length",
    summary: "Lines should not span too many characters.",
    kind: RuleKind::Default,
    deprecated_aliases: &[],
};

const DEFAULT_LEVELS: SeverityLevels = SeverityLevels::new(120, Some(200));

/// Configuration for the line length rule
///
/// Written either as bare thresholds (`120`, `[120, 200]`) or as a mapping that may also
/// carry the `ignores_*` switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineLengthConfig {
    #[serde(default = "default_warning")]
    pub warning: u64,

    #[serde(default = "default_error")]
    pub error: Option<u64>,

    /// Skip lines whose only overflow is a URL
    #[serde(default)]
    pub ignores_urls: bool,

    /// Skip lines that are entirely comments
    #[serde(default)]
    pub ignores_comments: bool,
}

fn default_warning() -> u64 {
    DEFAULT_LEVELS.warning
}

fn default_error() -> Option<u64> {
    DEFAULT_LEVELS.error
}

impl Default for LineLengthConfig {
    fn default() -> Self {
        Self {
            warning: default_warning(),
            error: default_error(),
            ignores_urls: false,
            ignores_comments: false,
        }
    }
}

impl LineLengthConfig {
    pub fn levels(&self) -> SeverityLevels {
        SeverityLevels::new(self.warning, self.error)
    }

    fn from_value(value: &Value) -> Result<Self, RuleConfigError> {
        if value.is_object() {
            return parse_rule_config(DESCRIPTION.identifier, value);
        }
        let levels: SeverityLevels = parse_rule_config(DESCRIPTION.identifier, value)?;
        Ok(Self {
            warning: levels.warning,
            error: levels.error,
            ..Self::default()
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct LineLength {
    config: LineLengthConfig,
}

impl LineLength {
    pub fn new(config: LineLengthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LineLengthConfig {
        &self.config
    }
}

impl ConfiguredRule for LineLength {
    fn description(&self) -> &'static RuleDescription {
        &DESCRIPTION
    }

    fn configuration(&self) -> Value {
        super::settings_value(&self.config)
    }
}

pub fn build(value: Option<&Value>) -> Result<Box<dyn ConfiguredRule>, RuleConfigError> {
    let config = match value {
        Some(value) => LineLengthConfig::from_value(value)?,
        None => LineLengthConfig::default(),
    };
    Ok(Box::new(LineLength::new(config)))
}
