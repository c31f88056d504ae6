//! Resolution of free-form lint configuration files into a validated [`Configuration`].
//!
//! The entry point is [`Configuration::from_raw`], which takes an untyped key/value mapping,
//! a [`RuleCatalog`], a [`RemoteRuleResolver`] and a [`DiagnosticSink`], and either returns a
//! fully resolved configuration or fails on an irreconcilable conflict.

pub mod config;
pub mod diagnostics;
pub mod exit_codes;
pub mod rule;
pub mod rule_config;
pub mod rules;
pub mod types;

pub use config::{
    CatalogError, ConfigError, Configuration, ParseOptions, RawConfig, RemoteRule, RemoteRuleResolver, RuleCatalog,
    RuleRegistry, RulesMode, load_raw_config,
};
pub use diagnostics::{CollectingSink, ConfigDiagnostic, DiagnosticKind, DiagnosticLevel, DiagnosticSink, LogSink};
pub use rule::{ConfiguredRule, RuleDescription, RuleKind, ViolationSeverity};
pub use rules::builtin_registry;
pub use types::{IndentWidth, IndentationStyle};
