//! Exit codes for the lintconf binary
//!
//! Scripts and CI jobs can tell a configuration that does not resolve apart from a
//! file that could not be read or parsed at all.

/// Success - the configuration resolved (possibly with warnings)
pub const SUCCESS: i32 = 0;

/// Invalid configuration - resolution aborted on a conflict or duplicate rule configuration
pub const INVALID_CONFIGURATION: i32 = 1;

/// Tool error - file access error, syntax error, or internal error
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{INVALID_CONFIGURATION, SUCCESS, TOOL_ERROR};

    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    pub fn invalid_configuration() -> ! {
        std::process::exit(INVALID_CONFIGURATION);
    }

    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}

/// Exit code a failed resolution maps to
pub fn for_error(error: &crate::config::ConfigError) -> i32 {
    use crate::config::ConfigError;
    match error {
        ConfigError::RulesModeConflict
        | ConfigError::DuplicateRuleConfiguration { .. }
        | ConfigError::RuleInstantiation(_) => INVALID_CONFIGURATION,
        ConfigError::IoError { .. } | ConfigError::ParseError(_) => TOOL_ERROR,
    }
}
