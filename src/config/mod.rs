//!
//! This module turns an untyped configuration mapping into a resolved [`Configuration`].
//! Supports YAML, JSON and TOML documents, tolerates legacy keys and rule aliases, and
//! reports everything it tolerates through a [`DiagnosticSink`](crate::diagnostics::DiagnosticSink).

pub mod keys;

mod raw;
pub use raw::RawConfig;

mod parsers;
pub use parsers::ConfigFormat;

mod loading;
pub use loading::load_raw_config;

pub mod registry;
pub use registry::{CatalogError, RegistryError, RuleBuilder, RuleCatalog, RuleRegistry, build_rules};

pub mod remote;
pub use remote::{NoRemoteRules, RemoteRule, RemoteRuleResolver, resolve_remote_rules};

mod deprecation;
pub use deprecation::warn_deprecations;

mod indentation;
pub use indentation::resolve_indentation;

mod rules_mode;
pub use rules_mode::RulesMode;

pub mod validation;
pub use validation::{valid_keys, validate_keys};

mod types;
pub use types::{ConfigError, Configuration, ParseOptions};

mod resolve;
