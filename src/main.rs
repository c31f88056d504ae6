use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::OutputFormat;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a configuration file and print the result
    Check {
        /// Configuration file (YAML, JSON or TOML)
        file: PathBuf,

        /// Select every known rule regardless of the rule lists in the file
        #[arg(long)]
        enable_all_rules: bool,

        /// Cache directory, overriding the file's `cache_path`
        #[arg(long)]
        cache_path: Option<String>,

        /// Output format for the resolved configuration
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Only report diagnostics and the exit code
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the built-in rules
    Rules {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            file,
            enable_all_rules,
            cache_path,
            format,
            quiet,
        } => commands::check::handle_check(commands::check::CheckArgs {
            file,
            enable_all_rules,
            cache_path,
            format,
            quiet,
        }),
        Commands::Rules { format } => commands::rules::handle_rules(format),
    }
}
