use lintconf_lib::config::{NoRemoteRules, RemoteRule, RuleCatalog};
use lintconf_lib::{
    CollectingSink, ConfigError, Configuration, DiagnosticKind, DiagnosticLevel, IndentationStyle, ParseOptions,
    RawConfig, RulesMode, builtin_registry,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::collections::BTreeSet;

fn raw(value: Value) -> RawConfig {
    RawConfig::try_from(value).expect("test configs are mappings")
}

fn parse_with(value: Value, options: &ParseOptions) -> (Result<Configuration, ConfigError>, CollectingSink) {
    let sink = CollectingSink::new();
    let result = Configuration::from_raw(&raw(value), options, &builtin_registry(), &NoRemoteRules, &sink);
    (result, sink)
}

fn parse(value: Value) -> (Result<Configuration, ConfigError>, CollectingSink) {
    parse_with(value, &ParseOptions::new())
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn active_identifiers(config: &Configuration) -> Vec<&'static str> {
    config.active_rules().iter().map(|rule| rule.identifier()).collect()
}

#[test]
fn test_whitelist_with_disabled_rules_fails() {
    let (result, sink) = parse(json!({
        "whitelist_rules": ["force_cast"],
        "disabled_rules": ["line_length"],
    }));
    assert!(matches!(result, Err(ConfigError::RulesModeConflict)));
    assert_eq!(sink.count_of(DiagnosticKind::RulesModeConflict), 1);
    assert!(sink.has_errors());
}

#[test]
fn test_whitelist_with_opt_in_rules_fails() {
    let (result, _) = parse(json!({
        "whitelist_rules": ["force_cast"],
        "opt_in_rules": ["empty_count"],
    }));
    assert!(matches!(result, Err(ConfigError::RulesModeConflict)));
}

#[test]
fn test_whitelist_with_legacy_enabled_rules_fails() {
    let (result, _) = parse(json!({
        "whitelist_rules": ["force_cast"],
        "enabled_rules": ["empty_count"],
    }));
    assert!(matches!(result, Err(ConfigError::RulesModeConflict)));
}

#[test]
fn test_enable_all_rules_overrides_lists() {
    let options = ParseOptions::new().enable_all_rules(true);
    let (result, sink) = parse_with(
        json!({
            "whitelist_rules": ["force_cast"],
            "disabled_rules": ["line_length"],
        }),
        &options,
    );
    let config = result.expect("enable_all_rules ignores the conflict");
    assert_eq!(config.rules_mode(), &RulesMode::AllEnabled);
    assert_eq!(sink.count_of(DiagnosticKind::RulesModeConflict), 0);
    assert_eq!(config.active_rules().len(), builtin_registry().len());
}

#[test]
fn test_default_mode_merges_analyzer_rules() {
    let (result, sink) = parse(json!({
        "disabled_rules": ["trailing_whitespace"],
        "opt_in_rules": ["empty_count"],
        "analyzer_rules": ["unused_import"],
    }));
    let config = result.unwrap();
    assert!(sink.is_empty(), "{:?}", sink.diagnostics());
    assert_eq!(
        config.rules_mode(),
        &RulesMode::Default {
            disabled: set(&["trailing_whitespace"]),
            opt_in: set(&["empty_count", "unused_import"]),
        }
    );
    assert_eq!(
        active_identifiers(&config),
        vec!["line_length", "identifier_name", "force_cast", "empty_count", "unused_import"]
    );
}

#[test]
fn test_whitelist_mode_selects_only_listed_rules() {
    let (result, _) = parse(json!({
        "whitelist_rules": ["force_cast", "variable_name"],
        "analyzer_rules": ["unused_import"],
    }));
    let config = result.unwrap();
    assert_eq!(
        config.rules_mode(),
        &RulesMode::Whitelisted {
            identifiers: set(&["force_cast", "variable_name", "unused_import"]),
        }
    );
    assert_eq!(
        active_identifiers(&config),
        vec!["identifier_name", "force_cast", "unused_import"]
    );
}

#[test]
fn test_default_selection_excludes_opt_in_and_analyzer_rules() {
    let (result, _) = parse(json!({}));
    assert_eq!(
        active_identifiers(&result.unwrap()),
        vec!["line_length", "identifier_name", "trailing_whitespace", "force_cast"]
    );
}

#[test]
fn test_parsing_twice_yields_equal_configurations() {
    let value = json!({
        "opt_in_rules": ["empty_count"],
        "line_length": [100, 150],
        "identifier_name": { "min_length": 2 },
        "indentation": 2,
        "included": ["Sources"],
        "reporter": "json",
    });
    let (first, _) = parse(value.clone());
    let (second, _) = parse(value);
    assert_eq!(first.unwrap(), second.unwrap());
}

#[test]
fn test_bogus_indentation_falls_back_with_one_diagnostic() {
    let (result, sink) = parse(json!({ "indentation": "bogus" }));
    let config = result.unwrap();
    assert_eq!(config.indentation(), IndentationStyle::default());

    let diagnostics = sink.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::InvalidIndentation);
    assert_eq!(diagnostics[0].level, DiagnosticLevel::Warning);
}

#[test]
fn test_identifier_and_alias_configured_together_fails() {
    let (result, sink) = parse(json!({
        "identifier_name": { "min_length": 2 },
        "variable_name": { "min_length": 2 },
    }));
    match result {
        Err(ConfigError::DuplicateRuleConfiguration { identifier }) => assert_eq!(identifier, "identifier_name"),
        other => panic!("expected duplicate configuration, got {other:?}"),
    }

    let duplicate: Vec<_> = sink
        .diagnostics()
        .into_iter()
        .filter(|d| d.kind == DiagnosticKind::DuplicateRuleConfiguration)
        .collect();
    assert_eq!(duplicate.len(), 1);
    assert!(duplicate[0].message.contains("Identifier Name"));
    assert!(duplicate[0].message.contains("'variable_name'"));
}

#[test]
fn test_enabled_rules_is_renamed_opt_in_rules() {
    let (result, sink) = parse(json!({ "enabled_rules": ["foo"] }));
    let config = result.unwrap();
    match config.rules_mode() {
        RulesMode::Default { disabled, opt_in } => {
            assert!(disabled.is_empty());
            assert_eq!(opt_in, &set(&["foo"]));
        }
        other => panic!("unexpected mode {other:?}"),
    }

    let renamed: Vec<_> = sink
        .diagnostics()
        .into_iter()
        .filter(|d| d.kind == DiagnosticKind::DeprecatedKey)
        .collect();
    assert_eq!(renamed.len(), 1);
    assert!(renamed[0].message.contains("opt_in_rules"));
    // "foo" is not a known rule either
    assert_eq!(sink.count_of(DiagnosticKind::UnknownRuleIdentifier), 1);
}

#[test]
fn test_unknown_key_is_reported_once() {
    let (result, sink) = parse(json!({ "totally_bogus_key": true }));
    assert!(result.is_ok());

    let diagnostics = sink.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::UnknownKeys);
    assert!(diagnostics[0].message.contains("totally_bogus_key"));
}

#[test]
fn test_deprecated_alias_is_reported() {
    let (result, sink) = parse(json!({
        "variable_name": { "min_length": 2 },
        "disabled_rules": ["variable_name"],
    }));
    let config = result.unwrap();
    assert_eq!(sink.count_of(DiagnosticKind::DeprecatedRuleAlias), 1);
    assert!(!active_identifiers(&config).contains(&"identifier_name"));

    let identifier_name = config
        .configured_rules()
        .iter()
        .find(|rule| rule.identifier() == "identifier_name")
        .unwrap();
    assert_eq!(identifier_name.configuration()["min_length"]["warning"], 2);
}

#[test]
fn test_use_nested_configs_is_ignored_with_warning() {
    let (result, sink) = parse(json!({ "use_nested_configs": true }));
    assert!(result.is_ok());
    assert_eq!(sink.count_of(DiagnosticKind::DeprecatedKey), 1);
    assert_eq!(sink.count_of(DiagnosticKind::UnknownKeys), 0);
}

#[test]
fn test_invalid_rule_settings_fall_back_to_defaults() {
    let (result, sink) = parse(json!({ "line_length": "very long" }));
    let config = result.unwrap();
    assert_eq!(sink.count_of(DiagnosticKind::InvalidRuleConfiguration), 1);

    let line_length = config
        .configured_rules()
        .iter()
        .find(|rule| rule.identifier() == "line_length")
        .unwrap();
    assert_eq!(line_length.configuration()["warning"], 120);
}

#[test]
fn test_duplicate_list_entries_are_kept() {
    let (result, sink) = parse(json!({ "disabled_rules": ["force_cast", "force_cast"] }));
    let config = result.unwrap();
    assert_eq!(sink.count_of(DiagnosticKind::DuplicateListEntry), 1);
    assert!(!active_identifiers(&config).contains(&"force_cast"));
}

#[test]
fn test_remote_rules_keep_successes_in_order() {
    let value = json!({
        "plugins": ["alpha", "broken", "beta"],
        "alpha": { "message": "a" },
        "beta": {},
    });
    let resolver = |plugin: &str, raw: &RawConfig| -> anyhow::Result<RemoteRule> {
        match raw.get(plugin) {
            Some(settings) => Ok(RemoteRule::new(plugin).with_metadata("settings", settings.clone())),
            None => anyhow::bail!("no settings for {plugin}"),
        }
    };
    let sink = CollectingSink::new();
    let config = Configuration::from_raw(&raw(value), &ParseOptions::new(), &builtin_registry(), &resolver, &sink)
        .unwrap();

    let identifiers: Vec<_> = config.remote_rules().iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(identifiers, vec!["alpha", "beta"]);
    assert_eq!(config.plugins(), ["alpha", "broken", "beta"]);
    // failed plugins are dropped without a diagnostic, resolved ones are valid keys
    assert!(sink.is_empty(), "{:?}", sink.diagnostics());
}

#[test]
fn test_cache_path_and_reporter_defaults() {
    let (result, _) = parse(json!({ "cache_path": "from_file" }));
    let config = result.unwrap();
    assert_eq!(config.cache_path(), Some("from_file"));
    assert_eq!(config.reporter(), "xcode");

    let options = ParseOptions::new().cache_path("override");
    let (result, _) = parse_with(json!({ "cache_path": "from_file" }), &options);
    assert_eq!(result.unwrap().cache_path(), Some("override"));
}

#[test]
fn test_yaml_end_to_end() {
    let content = r#"
disabled_rules:
  - trailing_whitespace
opt_in_rules:
  - empty_count
line_length:
  warning: 100
  error: 140
  ignores_urls: true
indentation: tabs
excluded:
  - Pods
"#;
    let raw = RawConfig::from_yaml_str(content).unwrap();
    let sink = CollectingSink::new();
    let config =
        Configuration::from_raw(&raw, &ParseOptions::new(), &builtin_registry(), &NoRemoteRules, &sink).unwrap();

    assert!(sink.is_empty(), "{:?}", sink.diagnostics());
    assert_eq!(config.indentation(), IndentationStyle::Tabs);
    assert_eq!(config.excluded(), ["Pods"]);
    let line_length = config.active_rules()[0].configuration();
    assert_eq!(line_length["warning"], 100);
    assert_eq!(line_length["ignores_urls"], true);
}

#[test]
fn test_catalog_knows_every_builtin_alias() {
    let identifiers = builtin_registry().all_identifiers();
    assert!(identifiers.contains("variable_name"));
    assert!(identifiers.contains("identifier_name"));
}

#[test]
fn test_configuration_serializes() {
    let (result, _) = parse(json!({ "opt_in_rules": ["empty_count"], "indentation": 2 }));
    let value = serde_json::to_value(result.unwrap()).unwrap();
    assert_eq!(value["rules_mode"]["mode"], "default");
    assert_eq!(value["indentation"], 2);
    assert_eq!(value["reporter"], "xcode");
    assert_eq!(value["configured_rules"].as_array().map(Vec::len), Some(6));
}
