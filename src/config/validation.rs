use std::collections::{BTreeSet, HashSet};

use super::keys;
use super::raw::RawConfig;
use super::registry::RuleCatalog;
use super::remote::RemoteRule;
use crate::diagnostics::{ConfigDiagnostic, DiagnosticKind, DiagnosticSink};

/// Every top-level key a configuration may contain
///
/// The fixed keys, every identifier and alias the catalog knows, and every resolved remote rule.
pub fn valid_keys(catalog: &dyn RuleCatalog, remote_rules: &[RemoteRule]) -> BTreeSet<String> {
    let mut valid: BTreeSet<String> = keys::FIXED_KEYS.iter().map(|k| k.to_string()).collect();
    valid.extend(catalog.all_identifiers());
    valid.extend(remote_rules.iter().map(|r| r.identifier.clone()));
    valid
}

/// Warn once about every key of `raw` that is not in `valid`, in file order.
pub fn validate_keys(raw: &RawConfig, valid: &BTreeSet<String>, sink: &dyn DiagnosticSink) {
    let unknown: Vec<&str> = raw.keys().filter(|key| !valid.contains(*key)).collect();
    if unknown.is_empty() {
        return;
    }

    let listed = unknown.iter().map(|k| format!("'{k}'")).collect::<Vec<_>>().join(", ");
    sink.emit(ConfigDiagnostic::warning(
        DiagnosticKind::UnknownKeys,
        format!("Configuration contains invalid keys: {listed}"),
    ));
}

/// Warn about rule lists that name the same rule twice or name rules nobody knows.
///
/// `lists` pairs each list with the key it was read from. The lists are left untouched.
pub(super) fn warn_list_issues(lists: &[(&str, &[String])], known: &BTreeSet<String>, sink: &dyn DiagnosticSink) {
    for (key, identifiers) in lists {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for identifier in identifiers.iter() {
            if !seen.insert(identifier.as_str()) && reported.insert(identifier.as_str()) {
                sink.emit(
                    ConfigDiagnostic::warning(
                        DiagnosticKind::DuplicateListEntry,
                        format!("'{identifier}' is listed more than once in '{key}'"),
                    )
                    .with_key(*key)
                    .with_rule(identifier.clone()),
                );
            }
        }

        let mut unknown: Vec<&str> = seen.iter().copied().filter(|id| !known.contains(*id)).collect();
        unknown.sort_unstable();
        for identifier in unknown {
            sink.emit(
                ConfigDiagnostic::warning(
                    DiagnosticKind::UnknownRuleIdentifier,
                    format!("'{identifier}' in '{key}' is not a valid rule identifier"),
                )
                .with_key(*key)
                .with_rule(identifier),
            );
        }
    }
}
