//! Handler for the `rules` command.

use colored::*;

use lintconf_lib::config::RuleCatalog;
use lintconf_lib::exit_codes::exit;
use lintconf_lib::rule::{RuleDescription, RuleKind};
use lintconf_lib::rules::builtin_registry;

use super::OutputFormat;

/// Rule metadata for JSON export
#[derive(serde::Serialize)]
struct RuleInfo {
    identifier: &'static str,
    name: &'static str,
    kind: RuleKind,
    summary: &'static str,
    deprecated_aliases: &'static [&'static str],
}

impl From<&'static RuleDescription> for RuleInfo {
    fn from(description: &'static RuleDescription) -> Self {
        Self {
            identifier: description.identifier,
            name: description.name,
            kind: description.kind,
            summary: description.summary,
            deprecated_aliases: description.deprecated_aliases,
        }
    }
}

/// List every built-in rule.
pub fn handle_rules(format: OutputFormat) {
    let rule_infos: Vec<RuleInfo> = builtin_registry().descriptions().into_iter().map(RuleInfo::from).collect();

    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&rule_infos) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("Error serializing to JSON: {e}");
                exit::tool_error();
            }
        },
        OutputFormat::Text => {
            println!("Available rules:");
            for info in &rule_infos {
                let mut line = format!("  {} [{}] {}", info.identifier.cyan(), info.kind, info.summary);
                if !info.deprecated_aliases.is_empty() {
                    line.push_str(&format!(" (aliases: {})", info.deprecated_aliases.join(", ")));
                }
                println!("{line}");
            }
            println!("\nTotal: {} rules", rule_infos.len());
        }
    }
}
