use serde_json::Value;
use std::collections::BTreeSet;

use super::raw::RawConfig;
use super::types::ConfigError;
use crate::diagnostics::{ConfigDiagnostic, DiagnosticKind, DiagnosticSink};
use crate::rule::{ConfiguredRule, RuleDescription};
use crate::rule_config::RuleConfigError;

/// Builds a rule from its raw settings, or its default instance when given `None`
pub type RuleBuilder = fn(Option<&Value>) -> Result<Box<dyn ConfiguredRule>, RuleConfigError>;

/// Errors a rule catalog reports while instantiating rules
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The rule is configured under more than one of its identifiers
    #[error("rule '{identifier}' is configured more than once")]
    DuplicateConfiguration { identifier: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors raised while registering rules
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("identifier '{identifier}' is already registered")]
    IdentifierClash { identifier: String },
}

/// Everything the resolver needs to know about the available rules.
pub trait RuleCatalog: Send + Sync {
    /// Descriptions of every known rule, in catalog order
    fn descriptions(&self) -> Vec<&'static RuleDescription>;

    /// Instantiate every known rule with the settings found in `raw`.
    fn configured_rules(
        &self,
        raw: &RawConfig,
        sink: &dyn DiagnosticSink,
    ) -> Result<Vec<Box<dyn ConfiguredRule>>, CatalogError>;

    /// Look a rule up by its identifier or one of its deprecated aliases
    fn description_for(&self, identifier: &str) -> Option<&'static RuleDescription> {
        self.descriptions().into_iter().find(|d| d.answers_to(identifier))
    }

    /// Every identifier and alias the catalog answers to
    fn all_identifiers(&self) -> BTreeSet<String> {
        self.descriptions()
            .into_iter()
            .flat_map(|d| d.all_identifiers())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Clone)]
struct RuleEntry {
    description: &'static RuleDescription,
    build: RuleBuilder,
}

/// A rule catalog backed by a list of registered rule builders
#[derive(Clone, Default)]
pub struct RuleRegistry {
    entries: Vec<RuleEntry>,
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| e.description.identifier))
            .finish()
    }
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. Fails when any of its identifiers is already taken by another rule.
    pub fn register(&mut self, description: &'static RuleDescription, build: RuleBuilder) -> Result<(), RegistryError> {
        for identifier in description.all_identifiers() {
            if self.entries.iter().any(|e| e.description.answers_to(identifier)) {
                return Err(RegistryError::IdentifierClash {
                    identifier: identifier.to_string(),
                });
            }
        }
        self.entries.push(RuleEntry { description, build });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn instantiate(
        entry: &RuleEntry,
        raw: &RawConfig,
        sink: &dyn DiagnosticSink,
    ) -> Result<Box<dyn ConfiguredRule>, CatalogError> {
        let description = entry.description;
        let configured: Vec<(&str, &Value)> = description
            .all_identifiers()
            .filter_map(|id| raw.get(id).map(|value| (id, value)))
            .collect();

        let default_instance = || {
            (entry.build)(None).map_err(|e| {
                CatalogError::Other(anyhow::anyhow!(e).context(format!(
                    "default configuration of '{}' is invalid",
                    description.identifier
                )))
            })
        };

        match configured.as_slice() {
            [] => default_instance(),
            [(key, value)] => match (entry.build)(Some(*value)) {
                Ok(rule) => Ok(rule),
                Err(e) => {
                    log::debug!("Rule '{}' rejected its configuration: {e}", description.identifier);
                    sink.emit(
                        ConfigDiagnostic::warning(
                            DiagnosticKind::InvalidRuleConfiguration,
                            format!(
                                "Invalid configuration for '{}'. Falling back to default. ({e})",
                                description.identifier
                            ),
                        )
                        .with_key(*key)
                        .with_rule(description.identifier),
                    );
                    default_instance()
                }
            },
            _ => Err(CatalogError::DuplicateConfiguration {
                identifier: description.identifier.to_string(),
            }),
        }
    }
}

impl RuleCatalog for RuleRegistry {
    fn descriptions(&self) -> Vec<&'static RuleDescription> {
        self.entries.iter().map(|e| e.description).collect()
    }

    fn configured_rules(
        &self,
        raw: &RawConfig,
        sink: &dyn DiagnosticSink,
    ) -> Result<Vec<Box<dyn ConfiguredRule>>, CatalogError> {
        self.entries
            .iter()
            .map(|entry| Self::instantiate(entry, raw, sink))
            .collect()
    }
}

/// Ask the catalog for configured rule instances, turning its failures into configuration errors.
///
/// Duplicate configuration is reported through the sink before failing; any other catalog
/// failure is passed on as [`ConfigError::RuleInstantiation`].
pub fn build_rules(
    raw: &RawConfig,
    catalog: &dyn RuleCatalog,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<Box<dyn ConfiguredRule>>, ConfigError> {
    match catalog.configured_rules(raw, sink) {
        Ok(rules) => Ok(rules),
        Err(CatalogError::DuplicateConfiguration { identifier }) => {
            let message = match catalog.description_for(&identifier) {
                Some(description) => {
                    let identifiers: Vec<_> = description.all_identifiers().map(|id| format!("'{id}'")).collect();
                    format!(
                        "Multiple configurations found for '{}'. Check for any aliases: {}.",
                        description.name,
                        identifiers.join(", ")
                    )
                }
                None => format!("Multiple configurations found for '{identifier}'."),
            };
            sink.emit(
                ConfigDiagnostic::error(DiagnosticKind::DuplicateRuleConfiguration, message).with_rule(identifier.clone()),
            );
            Err(ConfigError::DuplicateRuleConfiguration { identifier })
        }
        Err(other) => Err(ConfigError::RuleInstantiation(other)),
    }
}
