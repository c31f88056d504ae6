use std::collections::BTreeSet;

use super::keys;
use super::raw::RawConfig;
use super::registry::RuleCatalog;
use crate::diagnostics::{ConfigDiagnostic, DiagnosticKind, DiagnosticSink};

/// Warn about legacy keys and rule aliases that are still accepted.
///
/// An alias is reported once even when it shows up both as a key and inside a rule list.
pub fn warn_deprecations(
    raw: &RawConfig,
    disabled: &[String],
    opt_in: &[String],
    whitelist: &[String],
    catalog: &dyn RuleCatalog,
    sink: &dyn DiagnosticSink,
) {
    if raw.contains_key(keys::ENABLED_RULES) {
        sink.emit(
            ConfigDiagnostic::warning(
                DiagnosticKind::DeprecatedKey,
                format!(
                    "'{}' has been renamed to '{}' and will be completely removed in a future release.",
                    keys::ENABLED_RULES,
                    keys::OPT_IN_RULES
                ),
            )
            .with_key(keys::ENABLED_RULES),
        );
    }

    if raw.contains_key(keys::USE_NESTED_CONFIGS) {
        sink.emit(
            ConfigDiagnostic::warning(
                DiagnosticKind::DeprecatedKey,
                format!(
                    "Support for '{}' has been deprecated and its value is now ignored.",
                    keys::USE_NESTED_CONFIGS
                ),
            )
            .with_key(keys::USE_NESTED_CONFIGS),
        );
    }

    let listed: BTreeSet<&str> = disabled
        .iter()
        .chain(opt_in)
        .chain(whitelist)
        .map(String::as_str)
        .collect();

    for description in catalog.descriptions() {
        for alias in description.deprecated_aliases {
            if !raw.contains_key(alias) && !listed.contains(alias) {
                continue;
            }
            sink.emit(
                ConfigDiagnostic::warning(
                    DiagnosticKind::DeprecatedRuleAlias,
                    format!(
                        "'{alias}' rule has been renamed to '{}' and will be completely removed in a future release.",
                        description.identifier
                    ),
                )
                .with_key(*alias)
                .with_rule(description.identifier),
            );
        }
    }
}
