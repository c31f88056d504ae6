//! Handler for the `check` command.

use colored::*;
use std::path::PathBuf;

use lintconf_lib::config::{Configuration, NoRemoteRules, ParseOptions};
use lintconf_lib::diagnostics::{CollectingSink, ConfigDiagnostic, DiagnosticLevel};
use lintconf_lib::exit_codes::{self, exit};
use lintconf_lib::rules::builtin_registry;

use super::OutputFormat;

pub struct CheckArgs {
    pub file: PathBuf,
    pub enable_all_rules: bool,
    pub cache_path: Option<String>,
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Resolve the configuration file, print its diagnostics to stderr and the result to stdout.
pub fn handle_check(args: CheckArgs) {
    let mut options = ParseOptions::new().enable_all_rules(args.enable_all_rules);
    if let Some(cache_path) = args.cache_path {
        options = options.cache_path(cache_path);
    }

    let registry = builtin_registry();
    let sink = CollectingSink::new();
    let result = Configuration::from_file(&args.file, &options, &registry, &NoRemoteRules, &sink);

    for diagnostic in sink.diagnostics() {
        print_diagnostic(&diagnostic);
    }

    let config = match result {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(exit_codes::for_error(&e));
        }
    };

    if args.quiet {
        return;
    }

    match args.format {
        OutputFormat::Json => match serde_json::to_string_pretty(&config) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("Error serializing to JSON: {e}");
                exit::tool_error();
            }
        },
        OutputFormat::Text => print_text(&args.file, &config),
    }
}

fn print_diagnostic(diagnostic: &ConfigDiagnostic) {
    let label = match diagnostic.level {
        DiagnosticLevel::Warning => "warning".yellow().bold(),
        DiagnosticLevel::Error => "error".red().bold(),
    };
    eprintln!("{label}: {diagnostic}");
}

fn print_text(file: &std::path::Path, config: &Configuration) {
    let active = config.active_rules();

    println!("{} {}", "Configuration:".bold(), file.display());
    println!("Rules mode: {}", config.rules_mode());
    println!(
        "Active rules ({} of {}):",
        active.len(),
        config.configured_rules().len()
    );
    for rule in &active {
        println!("  {} {}", rule.identifier().cyan(), rule.configuration());
    }
    if !config.remote_rules().is_empty() {
        println!("Remote rules:");
        for rule in config.remote_rules() {
            println!("  {}", rule.identifier.cyan());
        }
    }

    println!("Included: {}", list_or_none(config.included()));
    println!("Excluded: {}", list_or_none(config.excluded()));
    println!("Reporter: {}", config.reporter());
    println!("Indentation: {}", config.indentation());
    if let Some(threshold) = config.warning_threshold() {
        println!("Warning threshold: {threshold}");
    }
    if let Some(cache_path) = config.cache_path() {
        println!("Cache path: {cache_path}");
    }
    if let Some(version) = config.version() {
        println!("Required version: {version}");
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
