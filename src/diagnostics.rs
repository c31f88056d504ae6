//! Advisory configuration messages and the sinks that receive them.
//!
//! Resolution never prints anything itself: every warning or error is handed to a
//! [`DiagnosticSink`], so callers decide whether messages go to the log, the terminal,
//! or a test buffer.

use serde::Serialize;
use std::fmt;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// What a diagnostic is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    UnknownKeys,
    InvalidIndentation,
    DeprecatedKey,
    DeprecatedRuleAlias,
    DuplicateListEntry,
    UnknownRuleIdentifier,
    InvalidRuleConfiguration,
    RulesModeConflict,
    DuplicateRuleConfiguration,
}

/// A single configuration warning or error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigDiagnostic {
    pub level: DiagnosticLevel,
    pub kind: DiagnosticKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

impl ConfigDiagnostic {
    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            kind,
            message: message.into(),
            key: None,
            rule: None,
        }
    }

    pub fn error(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Error,
            ..Self::warning(kind, message)
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Receives diagnostics produced while resolving a configuration.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: ConfigDiagnostic);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl LogSink {
    /// Log level and line a diagnostic is forwarded as
    fn record(diagnostic: &ConfigDiagnostic) -> (log::Level, String) {
        match diagnostic.level {
            DiagnosticLevel::Warning => (log::Level::Warn, format!("[config warning] {diagnostic}")),
            DiagnosticLevel::Error => (log::Level::Error, format!("[config error] {diagnostic}")),
        }
    }
}

impl DiagnosticSink for LogSink {
    fn emit(&self, diagnostic: ConfigDiagnostic) {
        let (level, line) = Self::record(&diagnostic);
        log::log!(level, "{line}");
    }
}

/// Keeps every diagnostic in memory, in emission order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<ConfigDiagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far
    pub fn diagnostics(&self) -> Vec<ConfigDiagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn into_diagnostics(self) -> Vec<ConfigDiagnostic> {
        self.diagnostics.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|d| d.kind == kind)
            .count()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|d| d.level == DiagnosticLevel::Error)
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: ConfigDiagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}
