use std::path::Path;

use super::deprecation::warn_deprecations;
use super::indentation::resolve_indentation;
use super::keys;
use super::loading::load_raw_config;
use super::raw::RawConfig;
use super::registry::{RuleCatalog, build_rules};
use super::remote::{RemoteRuleResolver, resolve_remote_rules};
use super::rules_mode::RulesMode;
use super::types::{ConfigError, Configuration, ParseOptions};
use super::validation::{valid_keys, validate_keys, warn_list_issues};
use crate::diagnostics::DiagnosticSink;

impl Configuration {
    /// Resolve a raw configuration mapping.
    ///
    /// Anything that can be tolerated is reported through `sink` and resolution carries on.
    /// Fails only when a rule is configured more than once, when the catalog cannot
    /// instantiate its rules, or when `whitelist_rules` is combined with
    /// `disabled_rules`/`opt_in_rules`.
    pub fn from_raw(
        raw: &RawConfig,
        options: &ParseOptions,
        catalog: &dyn RuleCatalog,
        resolver: &dyn RemoteRuleResolver,
        sink: &dyn DiagnosticSink,
    ) -> Result<Self, ConfigError> {
        let disabled = raw.string_list(keys::DISABLED_RULES);
        let opt_in_key = if raw.contains_key(keys::OPT_IN_RULES) {
            keys::OPT_IN_RULES
        } else {
            keys::ENABLED_RULES
        };
        let opt_in = raw.string_list(opt_in_key);
        let whitelist = raw.string_list(keys::WHITELIST_RULES);
        let analyzer = raw.string_list(keys::ANALYZER_RULES);
        let plugins = raw.string_list(keys::PLUGINS);

        let remote_rules = resolve_remote_rules(&plugins, raw, resolver);
        log::debug!(
            "Resolved {} of {} plugin(s) into remote rules",
            remote_rules.len(),
            plugins.len()
        );

        let valid = valid_keys(catalog, &remote_rules);
        validate_keys(raw, &valid, sink);

        warn_deprecations(raw, &disabled, &opt_in, &whitelist, catalog, sink);

        let mut known = catalog.all_identifiers();
        known.extend(remote_rules.iter().map(|r| r.identifier.clone()));
        warn_list_issues(
            &[
                (keys::DISABLED_RULES, disabled.as_slice()),
                (opt_in_key, opt_in.as_slice()),
                (keys::WHITELIST_RULES, whitelist.as_slice()),
                (keys::ANALYZER_RULES, analyzer.as_slice()),
            ],
            &known,
            sink,
        );

        let configured_rules = build_rules(raw, catalog, sink)?;

        let rules_mode = RulesMode::resolve(&disabled, &opt_in, &whitelist, &analyzer, options.enable_all_rules, sink)?;
        log::debug!("Rules mode: {rules_mode}");

        let indentation = resolve_indentation(raw, sink);

        Ok(Configuration {
            rules_mode,
            included: raw.string_list(keys::INCLUDED),
            excluded: raw.string_list(keys::EXCLUDED),
            warning_threshold: raw.optional_int(keys::WARNING_THRESHOLD),
            reporter: raw
                .optional_string(keys::REPORTER)
                .unwrap_or_else(|| keys::DEFAULT_REPORTER.to_string()),
            configured_rules,
            version: raw.optional_string(keys::SWIFTLINT_VERSION),
            cache_path: options
                .cache_path
                .clone()
                .or_else(|| raw.optional_string(keys::CACHE_PATH)),
            indentation,
            plugins,
            remote_rules,
        })
    }

    /// Load `path` and resolve it with [`Configuration::from_raw`].
    pub fn from_file(
        path: &Path,
        options: &ParseOptions,
        catalog: &dyn RuleCatalog,
        resolver: &dyn RemoteRuleResolver,
        sink: &dyn DiagnosticSink,
    ) -> Result<Self, ConfigError> {
        let raw = load_raw_config(path)?;
        Self::from_raw(&raw, options, catalog, resolver, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NoRemoteRules, RemoteRule};
    use crate::diagnostics::{CollectingSink, DiagnosticKind};
    use crate::rules::builtin_registry;
    use crate::types::IndentationStyle;
    use serde_json::json;

    fn resolve(value: serde_json::Value) -> (Result<Configuration, ConfigError>, CollectingSink) {
        let raw = RawConfig::try_from(value).unwrap();
        let sink = CollectingSink::new();
        let result = Configuration::from_raw(&raw, &ParseOptions::new(), &builtin_registry(), &NoRemoteRules, &sink);
        (result, sink)
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let (config, sink) = resolve(json!({}));
        let config = config.unwrap();
        assert!(sink.is_empty());
        assert_eq!(config.reporter(), "xcode");
        assert_eq!(config.indentation(), IndentationStyle::default());
        assert!(config.included().is_empty());
        assert!(config.cache_path().is_none());
        assert_eq!(config.configured_rules().len(), builtin_registry().len());
        assert!(matches!(config.rules_mode(), RulesMode::Default { .. }));
    }

    #[test]
    fn test_scalar_fields() {
        let (config, _) = resolve(json!({
            "included": "Sources",
            "excluded": ["Pods", "Carthage"],
            "warning_threshold": 5,
            "reporter": "json",
            "swiftlint_version": "0.50.0",
            "cache_path": "/tmp/cache",
        }));
        let config = config.unwrap();
        assert_eq!(config.included(), ["Sources"]);
        assert_eq!(config.excluded(), ["Pods", "Carthage"]);
        assert_eq!(config.warning_threshold(), Some(5));
        assert_eq!(config.reporter(), "json");
        assert_eq!(config.version(), Some("0.50.0"));
        assert_eq!(config.cache_path(), Some("/tmp/cache"));
    }

    #[test]
    fn test_non_string_reporter_falls_back() {
        let (config, _) = resolve(json!({ "reporter": 3 }));
        assert_eq!(config.unwrap().reporter(), "xcode");
    }

    #[test]
    fn test_cache_path_override_wins() {
        let raw = RawConfig::try_from(json!({ "cache_path": "from_file" })).unwrap();
        let sink = CollectingSink::new();
        let options = ParseOptions::new().cache_path("from_caller");
        let config = Configuration::from_raw(&raw, &options, &builtin_registry(), &NoRemoteRules, &sink).unwrap();
        assert_eq!(config.cache_path(), Some("from_caller"));
    }

    #[test]
    fn test_opt_in_rules_shadows_enabled_rules() {
        let (config, sink) = resolve(json!({
            "opt_in_rules": ["empty_count"],
            "enabled_rules": ["force_cast"],
        }));
        match config.unwrap().rules_mode() {
            RulesMode::Default { opt_in, .. } => {
                assert!(opt_in.contains("empty_count"));
                assert!(!opt_in.contains("force_cast"));
            }
            other => panic!("unexpected mode {other:?}"),
        }
        assert_eq!(sink.count_of(DiagnosticKind::DeprecatedKey), 1);
    }

    #[test]
    fn test_legacy_opt_in_list_issues_name_legacy_key() {
        let (config, sink) = resolve(json!({ "enabled_rules": ["empty_count", "nope"] }));
        match config.unwrap().rules_mode() {
            RulesMode::Default { opt_in, .. } => assert!(opt_in.contains("empty_count")),
            other => panic!("unexpected mode {other:?}"),
        }
        let unknown: Vec<_> = sink
            .diagnostics()
            .into_iter()
            .filter(|d| d.kind == DiagnosticKind::UnknownRuleIdentifier)
            .collect();
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0].key.as_deref(), Some("enabled_rules"));
        assert_eq!(unknown[0].rule.as_deref(), Some("nope"));
    }

    #[test]
    fn test_remote_rule_identifiers_are_valid_keys() {
        let raw = RawConfig::try_from(json!({
            "plugins": ["custom"],
            "custom": { "regex": "x" },
            "opt_in_rules": ["custom"],
        }))
        .unwrap();
        let sink = CollectingSink::new();
        let resolver = |plugin: &str, _: &RawConfig| -> anyhow::Result<RemoteRule> { Ok(RemoteRule::new(plugin)) };
        let config =
            Configuration::from_raw(&raw, &ParseOptions::new(), &builtin_registry(), &resolver, &sink).unwrap();
        assert!(sink.is_empty(), "{:?}", sink.diagnostics());
        assert_eq!(config.remote_rules(), [RemoteRule::new("custom")]);
        assert_eq!(config.plugins(), ["custom"]);
    }

    #[test]
    fn test_conflict_aborts_after_instantiation() {
        let (config, sink) = resolve(json!({
            "whitelist_rules": ["force_cast"],
            "disabled_rules": ["line_length"],
        }));
        assert!(matches!(config, Err(ConfigError::RulesModeConflict)));
        assert_eq!(sink.count_of(DiagnosticKind::RulesModeConflict), 1);
    }

    #[test]
    fn test_duplicate_configuration_aborts_before_mode() {
        let (config, sink) = resolve(json!({
            "identifier_name": { "min_length": 2 },
            "variable_name": { "min_length": 3 },
            "whitelist_rules": ["force_cast"],
            "disabled_rules": ["line_length"],
        }));
        assert!(matches!(config, Err(ConfigError::DuplicateRuleConfiguration { .. })));
        assert_eq!(sink.count_of(DiagnosticKind::RulesModeConflict), 0);
        assert_eq!(sink.count_of(DiagnosticKind::DuplicateRuleConfiguration), 1);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lint.yml");
        std::fs::write(&path, "reporter: checkstyle\nindentation: tabs\n").unwrap();

        let sink = CollectingSink::new();
        let config =
            Configuration::from_file(&path, &ParseOptions::new(), &builtin_registry(), &NoRemoteRules, &sink).unwrap();
        assert_eq!(config.reporter(), "checkstyle");
        assert_eq!(config.indentation(), IndentationStyle::Tabs);
    }
}
