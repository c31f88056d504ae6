//! Type-safe configuration types for lintconf.
//!
//! This module contains newtype wrappers and validation types that enforce
//! constraints on configuration values at both compile time and runtime.

mod indent_width;
mod indentation;

pub use indent_width::{IndentWidth, IndentWidthError};
pub use indentation::{IndentationStyle, IndentationStyleError};
