use serde::Serialize;
use std::io;

use super::registry::CatalogError;
use super::remote::RemoteRule;
use super::rules_mode::RulesMode;
use crate::rule::ConfiguredRule;
use crate::types::IndentationStyle;

/// Errors that can occur when loading or resolving configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `whitelist_rules` combined with `disabled_rules` or `opt_in_rules`
    #[error("'disabled_rules' or 'opt_in_rules' cannot be used in combination with 'whitelist_rules'")]
    RulesModeConflict,

    /// The same rule was configured under more than one of its identifiers
    #[error("rule '{identifier}' is configured more than once")]
    DuplicateRuleConfiguration { identifier: String },

    /// The rule catalog failed for a reason other than duplicate configuration
    #[error("failed to instantiate configured rules: {0}")]
    RuleInstantiation(#[source] CatalogError),

    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content (YAML, JSON or TOML)
    #[error("Failed to parse config: {0}")]
    ParseError(String),
}

/// Caller-supplied inputs that are not part of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Select every known rule regardless of the rule lists in the file
    pub enable_all_rules: bool,
    /// Takes precedence over the `cache_path` key
    pub cache_path: Option<String>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable_all_rules(mut self, enable: bool) -> Self {
        self.enable_all_rules = enable;
        self
    }

    pub fn cache_path(mut self, path: impl Into<String>) -> Self {
        self.cache_path = Some(path.into());
        self
    }
}

/// A fully resolved configuration.
///
/// Built once by [`Configuration::from_raw`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    pub(super) rules_mode: RulesMode,
    pub(super) included: Vec<String>,
    pub(super) excluded: Vec<String>,
    pub(super) warning_threshold: Option<i64>,
    pub(super) reporter: String,
    pub(super) configured_rules: Vec<Box<dyn ConfiguredRule>>,
    pub(super) version: Option<String>,
    pub(super) cache_path: Option<String>,
    pub(super) indentation: IndentationStyle,
    pub(super) plugins: Vec<String>,
    pub(super) remote_rules: Vec<RemoteRule>,
}

impl Configuration {
    pub fn rules_mode(&self) -> &RulesMode {
        &self.rules_mode
    }

    pub fn included(&self) -> &[String] {
        &self.included
    }

    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    pub fn warning_threshold(&self) -> Option<i64> {
        self.warning_threshold
    }

    pub fn reporter(&self) -> &str {
        &self.reporter
    }

    /// Every rule the catalog instantiated, whether or not the mode selects it
    pub fn configured_rules(&self) -> &[Box<dyn ConfiguredRule>] {
        &self.configured_rules
    }

    /// Value of the `swiftlint_version` key
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn cache_path(&self) -> Option<&str> {
        self.cache_path.as_deref()
    }

    pub fn indentation(&self) -> IndentationStyle {
        self.indentation
    }

    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    pub fn remote_rules(&self) -> &[RemoteRule] {
        &self.remote_rules
    }

    /// The configured rules the rules mode selects, in catalog order
    pub fn active_rules(&self) -> Vec<&dyn ConfiguredRule> {
        self.configured_rules
            .iter()
            .map(|rule| rule.as_ref())
            .filter(|rule| self.rules_mode.selects(rule.description()))
            .collect()
    }
}
