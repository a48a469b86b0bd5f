//! tuglint - static checks over resolved Java models.
//!
//! This crate provides the CLI binary and the command implementations it
//! calls.
//!
//! ## Modules
//!
//! - `cli` - CLI command implementations

pub mod cli;

// Re-export core types for convenience
pub use tuglint_core::error::{LintError, OutputErrorCode};
pub use tuglint_core::output::{CheckResponse, ErrorResponse, RulesResponse, SCHEMA_VERSION};
