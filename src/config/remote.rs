use serde::Serialize;
use serde_json::{Map, Value};

use super::raw::RawConfig;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A rule supplied by a plugin rather than by the rule catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteRule {
    pub identifier: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl RemoteRule {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            metadata: Map::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Turns a declared plugin into a remote rule.
pub trait RemoteRuleResolver: Send + Sync {
    fn resolve(&self, plugin: &str, raw: &RawConfig) -> anyhow::Result<RemoteRule>;
}

impl<F> RemoteRuleResolver for F
where
    F: Fn(&str, &RawConfig) -> anyhow::Result<RemoteRule> + Send + Sync,
{
    fn resolve(&self, plugin: &str, raw: &RawConfig) -> anyhow::Result<RemoteRule> {
        self(plugin, raw)
    }
}

/// Resolver for hosts without plugin support: every plugin fails to resolve
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRemoteRules;

impl RemoteRuleResolver for NoRemoteRules {
    fn resolve(&self, plugin: &str, _raw: &RawConfig) -> anyhow::Result<RemoteRule> {
        anyhow::bail!("plugin '{plugin}' cannot be loaded: remote rules are not supported")
    }
}

/// Resolve every plugin, keeping the ones that succeed in declaration order.
///
/// A plugin that fails to resolve is dropped; the failure is only traced at debug level.
pub fn resolve_remote_rules(plugins: &[String], raw: &RawConfig, resolver: &dyn RemoteRuleResolver) -> Vec<RemoteRule> {
    let attempt = |plugin: &String| match resolver.resolve(plugin, raw) {
        Ok(rule) => Some(rule),
        Err(e) => {
            log::debug!("Dropping plugin '{plugin}': {e:#}");
            None
        }
    };

    #[cfg(feature = "parallel")]
    let rules = plugins.par_iter().filter_map(attempt).collect();

    #[cfg(not(feature = "parallel"))]
    let rules = plugins.iter().filter_map(attempt).collect();

    rules
}
