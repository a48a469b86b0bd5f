//! Error types and error code constants for tuglint.
//!
//! Two error families live here:
//! - [`LintError`]: the unified error for the CLI front door (bad arguments,
//!   missing files, malformed snapshots). Rendered as JSON and mapped to exit codes.
//! - [`CheckError`]: a fault inside a single rule check pass. It never aborts
//!   a scan; the engine records it as a check failure and moves on to the
//!   next declaration.
//!
//! ## Error Code Mapping
//!
//! - `2`: Invalid arguments (bad input from caller, unknown rule key)
//! - `3`: Resolution errors (file not found)
//! - `4`: Malformed input (invalid JSON, unsupported schema version)
//! - `10`: Internal errors (bugs, unexpected state)

use std::fmt;

use thiserror::Error;

use crate::facts::SymbolId;

// ============================================================================
// Output Error Codes
// ============================================================================

/// Error codes for JSON output.
///
/// These codes map to CLI exit codes and appear in JSON error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputErrorCode {
    /// Invalid arguments from caller (bad input, unknown rule).
    InvalidArguments = 2,
    /// Resolution errors (file not found).
    ResolutionError = 3,
    /// Malformed input (invalid snapshot JSON, unsupported schema).
    MalformedInput = 4,
    /// Internal errors (bugs, unexpected state).
    InternalError = 10,
}

impl OutputErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for OutputErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for CLI output.
#[derive(Debug, Error)]
pub enum LintError {
    /// Invalid arguments from caller.
    #[error("invalid arguments: {message}")]
    InvalidArguments {
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Rule key not present in the registry.
    #[error("unknown rule '{key}'")]
    UnknownRule { key: String },

    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// Input could not be decoded into a snapshot.
    #[error("malformed input {path}: {message}")]
    MalformedInput { path: String, message: String },

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    InternalError { message: String },
}

impl From<&LintError> for OutputErrorCode {
    fn from(err: &LintError) -> Self {
        match err {
            LintError::InvalidArguments { .. } => OutputErrorCode::InvalidArguments,
            LintError::UnknownRule { .. } => OutputErrorCode::InvalidArguments,
            LintError::FileNotFound { .. } => OutputErrorCode::ResolutionError,
            LintError::MalformedInput { .. } => OutputErrorCode::MalformedInput,
            LintError::InternalError { .. } => OutputErrorCode::InternalError,
        }
    }
}

impl From<LintError> for OutputErrorCode {
    fn from(err: LintError) -> Self {
        OutputErrorCode::from(&err)
    }
}

impl LintError {
    /// Create an invalid arguments error.
    pub fn invalid_args(message: impl Into<String>) -> Self {
        LintError::InvalidArguments {
            message: message.into(),
            details: None,
        }
    }

    /// Create an invalid arguments error with JSON details.
    pub fn invalid_args_with_details(
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        LintError::InvalidArguments {
            message: message.into(),
            details: Some(details),
        }
    }

    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<String>) -> Self {
        LintError::FileNotFound { path: path.into() }
    }

    /// Create a malformed input error.
    pub fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        LintError::MalformedInput {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        LintError::InternalError {
            message: message.into(),
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> OutputErrorCode {
        OutputErrorCode::from(self)
    }
}

// ============================================================================
// Check-Level Faults
// ============================================================================

/// A structural fault in the model discovered while checking one declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// A tree node refers to a symbol the model does not contain.
    #[error("declaration '{declaration}' refers to unknown symbol {symbol}")]
    UnknownSymbol {
        declaration: String,
        symbol: SymbolId,
    },

    /// A declaration claims a container that the model does not contain.
    #[error("declaration '{declaration}' is nested in unresolved container {container}")]
    UnresolvedContainer {
        declaration: String,
        container: SymbolId,
    },

    /// A class declaration is bound to a symbol that is not a type.
    #[error("declaration '{declaration}' is bound to non-type symbol {symbol}")]
    NotAType {
        declaration: String,
        symbol: SymbolId,
    },
}

// ============================================================================
// Tests
// ============================================================================
