//!
//! This module defines the ConfiguredRule trait and the static metadata every rule carries.
//! Configuration resolution only ever looks at a rule's description; the settings themselves
//! are opaque and only surfaced as JSON for display and comparison.

use dyn_clone::DynClone;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationSeverity {
    #[default]
    #[serde(alias = "warn")]
    Warning,
    Error,
}

impl fmt::Display for ViolationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationSeverity::Warning => write!(f, "warning"),
            ViolationSeverity::Error => write!(f, "error"),
        }
    }
}

/// How a rule participates in the default selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// Active unless disabled
    Default,
    /// Inactive unless listed in `opt_in_rules`
    OptIn,
    /// Needs compiler information; inactive unless listed in `analyzer_rules`
    Analyzer,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Default => write!(f, "default"),
            RuleKind::OptIn => write!(f, "opt-in"),
            RuleKind::Analyzer => write!(f, "analyzer"),
        }
    }
}

/// Static metadata describing a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDescription {
    pub identifier: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub kind: RuleKind,
    /// Identifiers this rule was previously known by
    pub deprecated_aliases: &'static [&'static str],
}

impl RuleDescription {
    /// The current identifier followed by every deprecated alias
    pub fn all_identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.identifier).chain(self.deprecated_aliases.iter().copied())
    }

    pub fn answers_to(&self, identifier: &str) -> bool {
        self.all_identifiers().any(|id| id == identifier)
    }
}

/// A rule instance whose settings have already been applied.
pub trait ConfiguredRule: DynClone + fmt::Debug + Send + Sync {
    fn description(&self) -> &'static RuleDescription;

    /// Effective settings of this instance
    fn configuration(&self) -> serde_json::Value;

    fn identifier(&self) -> &'static str {
        self.description().identifier
    }
}

dyn_clone::clone_trait_object!(ConfiguredRule);

impl PartialEq for dyn ConfiguredRule {
    fn eq(&self, other: &Self) -> bool {
        self.identifier() == other.identifier() && self.configuration() == other.configuration()
    }
}

impl Serialize for dyn ConfiguredRule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("identifier", self.identifier())?;
        map.serialize_entry("kind", &self.description().kind)?;
        map.serialize_entry("configuration", &self.configuration())?;
        map.end()
    }
}
