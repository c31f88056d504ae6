use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use super::keys;
use super::types::ConfigError;
use crate::diagnostics::{ConfigDiagnostic, DiagnosticKind, DiagnosticSink};
use crate::rule::{RuleDescription, RuleKind};

/// Which rules a configuration selects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RulesMode {
    /// Every known rule
    AllEnabled,
    /// Only these rules (`whitelist_rules` plus `analyzer_rules`)
    Whitelisted { identifiers: BTreeSet<String> },
    /// Default rules minus `disabled`, plus `opt_in` (`opt_in_rules` plus `analyzer_rules`)
    Default {
        disabled: BTreeSet<String>,
        opt_in: BTreeSet<String>,
    },
}

impl RulesMode {
    /// Combine the rule lists of a configuration into a single mode.
    ///
    /// `enable_all_rules` wins over everything. A non-empty whitelist excludes disabled and
    /// opt-in lists; combining them is an error. Analyzer rules are always added to whichever
    /// of the whitelist or the opt-in set is in effect.
    pub fn resolve(
        disabled: &[String],
        opt_in: &[String],
        whitelist: &[String],
        analyzer: &[String],
        enable_all_rules: bool,
        sink: &dyn DiagnosticSink,
    ) -> Result<Self, ConfigError> {
        if enable_all_rules {
            return Ok(RulesMode::AllEnabled);
        }

        if !whitelist.is_empty() {
            if !disabled.is_empty() || !opt_in.is_empty() {
                sink.emit(
                    ConfigDiagnostic::error(
                        DiagnosticKind::RulesModeConflict,
                        format!(
                            "'{}' or '{}' cannot be used in combination with '{}'",
                            keys::DISABLED_RULES,
                            keys::OPT_IN_RULES,
                            keys::WHITELIST_RULES
                        ),
                    )
                    .with_key(keys::WHITELIST_RULES),
                );
                return Err(ConfigError::RulesModeConflict);
            }
            let identifiers = whitelist.iter().chain(analyzer).cloned().collect();
            return Ok(RulesMode::Whitelisted { identifiers });
        }

        Ok(RulesMode::Default {
            disabled: disabled.iter().cloned().collect(),
            opt_in: opt_in.iter().chain(analyzer).cloned().collect(),
        })
    }

    /// Whether a rule with this description is active under this mode.
    ///
    /// A rule counts as listed when any of its identifiers, current or deprecated, is listed.
    pub fn selects(&self, description: &RuleDescription) -> bool {
        let listed_in = |set: &BTreeSet<String>| description.all_identifiers().any(|id| set.contains(id));
        match self {
            RulesMode::AllEnabled => true,
            RulesMode::Whitelisted { identifiers } => listed_in(identifiers),
            RulesMode::Default { disabled, opt_in } => {
                if listed_in(disabled) {
                    return false;
                }
                description.kind == RuleKind::Default || listed_in(opt_in)
            }
        }
    }
}

impl fmt::Display for RulesMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |set: &BTreeSet<String>| set.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
        match self {
            RulesMode::AllEnabled => write!(f, "all rules enabled"),
            RulesMode::Whitelisted { identifiers } => write!(f, "only [{}]", join(identifiers)),
            RulesMode::Default { disabled, opt_in } => {
                write!(f, "default (disabled: [{}], opt-in: [{}])", join(disabled), join(opt_in))
            }
        }
    }
}
