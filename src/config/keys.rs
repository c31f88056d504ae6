//! Top-level configuration keys.
//!
//! These names are part of the file format and must not change.

pub const CACHE_PATH: &str = "cache_path";
pub const DISABLED_RULES: &str = "disabled_rules";
/// Legacy spelling of [`OPT_IN_RULES`]
pub const ENABLED_RULES: &str = "enabled_rules";
pub const EXCLUDED: &str = "excluded";
pub const INCLUDED: &str = "included";
pub const OPT_IN_RULES: &str = "opt_in_rules";
pub const REPORTER: &str = "reporter";
pub const SWIFTLINT_VERSION: &str = "swiftlint_version";
/// No longer supported; accepted and ignored
pub const USE_NESTED_CONFIGS: &str = "use_nested_configs";
pub const WARNING_THRESHOLD: &str = "warning_threshold";
pub const WHITELIST_RULES: &str = "whitelist_rules";
pub const INDENTATION: &str = "indentation";
pub const ANALYZER_RULES: &str = "analyzer_rules";
pub const PLUGINS: &str = "plugins";

/// Every fixed top-level key, in documentation order
pub const FIXED_KEYS: &[&str] = &[
    CACHE_PATH,
    DISABLED_RULES,
    ENABLED_RULES,
    EXCLUDED,
    INCLUDED,
    OPT_IN_RULES,
    REPORTER,
    SWIFTLINT_VERSION,
    USE_NESTED_CONFIGS,
    WARNING_THRESHOLD,
    WHITELIST_RULES,
    INDENTATION,
    ANALYZER_RULES,
    PLUGINS,
];

/// Reporter used when the `reporter` key is absent or not a string
pub const DEFAULT_REPORTER: &str = "xcode";
