//! Built-in rules.
//!
//! Rules here only carry their settings; executing them against source files happens
//! elsewhere. Each module exposes a static `DESCRIPTION` and a `build` function that
//! [`builtin_registry`] registers.

mod empty_count;
mod force_cast;
mod identifier_name;
mod line_length;
mod trailing_whitespace;
mod unused_import;

pub use empty_count::EmptyCount;
pub use force_cast::ForceCast;
pub use identifier_name::{IdentifierName, IdentifierNameConfig};
pub use line_length::{LineLength, LineLengthConfig};
pub use trailing_whitespace::{TrailingWhitespace, TrailingWhitespaceConfig};
pub use unused_import::{UnusedImport, UnusedImportConfig};

use crate::config::{RuleBuilder, RuleRegistry};
use crate::rule::RuleDescription;
use serde::Serialize;
use serde_json::Value;

/// Every built-in rule with its builder, in registration order
static BUILTIN_RULES: &[(&RuleDescription, RuleBuilder)] = &[
    (&line_length::DESCRIPTION, line_length::build),
    (&identifier_name::DESCRIPTION, identifier_name::build),
    (&trailing_whitespace::DESCRIPTION, trailing_whitespace::build),
    (&force_cast::DESCRIPTION, force_cast::build),
    (&empty_count::DESCRIPTION, empty_count::build),
    (&unused_import::DESCRIPTION, unused_import::build),
];

/// A registry holding every built-in rule
pub fn builtin_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    for (description, build) in BUILTIN_RULES {
        if let Err(e) = registry.register(*description, *build) {
            log::error!("Skipping built-in rule '{}': {e}", description.identifier);
        }
    }
    registry
}

/// Effective settings of a rule as JSON
pub(crate) fn settings_value<T: Serialize>(settings: &T) -> Value {
    serde_json::to_value(settings).unwrap_or(Value::Null)
}
