use super::keys;
use super::raw::RawConfig;
use crate::diagnostics::{ConfigDiagnostic, DiagnosticKind, DiagnosticSink};
use crate::types::IndentationStyle;

/// Read the `indentation` key, falling back to the default style when it is absent or invalid.
pub fn resolve_indentation(raw: &RawConfig, sink: &dyn DiagnosticSink) -> IndentationStyle {
    let Some(value) = raw.get(keys::INDENTATION) else {
        return IndentationStyle::default();
    };

    match IndentationStyle::try_from(value) {
        Ok(style) => style,
        Err(e) => {
            let fallback = IndentationStyle::default();
            sink.emit(
                ConfigDiagnostic::warning(
                    DiagnosticKind::InvalidIndentation,
                    format!(
                        "Invalid configuration for '{}': {e}. Using default of {fallback}.",
                        keys::INDENTATION
                    ),
                )
                .with_key(keys::INDENTATION),
            );
            fallback
        }
    }
}
