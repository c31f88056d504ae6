use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rule::{ConfiguredRule, RuleDescription, RuleKind, ViolationSeverity};
use crate::rule_config::{RuleConfigError, parse_rule_config};

pub static DESCRIPTION: RuleDescription = RuleDescription {
    identifier: "unused_import",
    name: "Unused Import",
    summary: "All imported modules should be required to make the file compile.",
    kind: RuleKind::Analyzer,
    deprecated_aliases: &[],
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnusedImportConfig {
    pub severity: ViolationSeverity,
    /// Also report modules that are used but only imported transitively
    pub require_explicit_imports: bool,
    /// Modules that never need an explicit import
    pub allowed_transitive_imports: Vec<String>,
}

/// Needs compiler information, so it only runs when listed in `analyzer_rules`
#[derive(Debug, Clone, Default)]
pub struct UnusedImport {
    config: UnusedImportConfig,
}

impl UnusedImport {
    pub fn config(&self) -> &UnusedImportConfig {
        &self.config
    }
}

impl ConfiguredRule for UnusedImport {
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
        None => UnusedImportConfig::default(),
    };
    Ok(Box::new(UnusedImport { config }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings() {
        let config: UnusedImportConfig = parse_rule_config(
            "unused_import",
            &json!({ "require_explicit_imports": true, "allowed_transitive_imports": ["Foundation"] }),
        )
        .unwrap();
        assert!(config.require_explicit_imports);
        assert_eq!(config.allowed_transitive_imports, vec!["Foundation"]);
        assert_eq!(config.severity, ViolationSeverity::Warning);
    }

    #[test]
    fn test_is_analyzer_rule() {
        let rule = build(None).unwrap();
        assert_eq!(rule.description().kind, RuleKind::Analyzer);
        assert_eq!(rule.configuration()["require_explicit_imports"], false);
    }
}
