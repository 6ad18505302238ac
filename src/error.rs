//! Error types for the `argmark` CLI
//!
//! Aggregates the core configuration errors and the splice errors of the
//! docs crate into one top-level error with an exit code mapping.

use thiserror::Error;

pub use argmark_core::error::{ConfigError, Severity, ValidationIssue};
pub use argmark_docs::error::SpliceError;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `argmark` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error, including a document that failed verification
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid guide file, marker mismatch)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `argmark` operations.
#[derive(Debug, Error)]
pub enum ArgmarkError {
    /// Guide or settings file loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Marker lines in the target document are inconsistent
    #[error("{path}: {source}")]
    Splice {
        /// Document being spliced
        path: String,
        /// Underlying marker error
        #[source]
        source: SpliceError,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or missing command-line arguments
    #[error("usage error: {0}")]
    Usage(String),

    /// The document differs from what would be generated
    #[error("{message}")]
    VerifyFailed {
        /// Formatted verification message
        message: String,
    },
}

impl ArgmarkError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Splice { .. } | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
            Self::VerifyFailed { .. } => ExitCode::ERROR,
        }
    }
}
