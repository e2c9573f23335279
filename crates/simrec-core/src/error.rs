//! Error types and exit codes for simrec
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, bad configuration values)
//! - 3: Data/model error (unknown title, empty model, invalid item, corrupt snapshot)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the simrec CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/model error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during engine operations
#[derive(Error, Debug)]
pub enum SimrecError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/model errors (exit code 3)
    #[error("item not found: {title}")]
    NotFound { title: String },

    #[error("no model available: {reason}")]
    EmptyModel { reason: String },

    #[error("invalid item at position {index}: {reason}")]
    InvalidItem { index: usize, reason: String },

    #[error("malformed records at line {line}: {reason}")]
    MalformedRecords { line: usize, reason: String },

    #[error("corrupt snapshot at {path:?}: {reason}")]
    CorruptSnapshot { path: PathBuf, reason: String },

    #[error("rebuild already in progress (lock held at {lock_path:?})")]
    RebuildInProgress { lock_path: PathBuf },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl SimrecError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        SimrecError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed ingestion record
    pub fn invalid_item(index: usize, reason: impl Into<String>) -> Self {
        SimrecError::InvalidItem {
            index,
            reason: reason.into(),
        }
    }

    /// Create an error for an import file that does not parse
    pub fn malformed_records(line: usize, reason: impl std::fmt::Display) -> Self {
        SimrecError::MalformedRecords {
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for a snapshot whose artifacts disagree or fail to parse
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        SimrecError::CorruptSnapshot {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an error for an unknown title
    pub fn not_found(title: impl Into<String>) -> Self {
        SimrecError::NotFound {
            title: title.into(),
        }
    }

    /// Create an error for a missing or empty model
    pub fn empty_model(reason: impl Into<String>) -> Self {
        SimrecError::EmptyModel {
            reason: reason.into(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        SimrecError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SimrecError::UnknownFormat(_)
            | SimrecError::UsageError(_)
            | SimrecError::InvalidValue { .. } => ExitCode::Usage,

            SimrecError::NotFound { .. }
            | SimrecError::EmptyModel { .. }
            | SimrecError::InvalidItem { .. }
            | SimrecError::MalformedRecords { .. }
            | SimrecError::CorruptSnapshot { .. } => ExitCode::Data,

            SimrecError::RebuildInProgress { .. }
            | SimrecError::Io(_)
            | SimrecError::Json(_)
            | SimrecError::Toml(_)
            | SimrecError::FailedOperationWithTarget { .. }
            | SimrecError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            SimrecError::UnknownFormat(_) => "unknown_format",
            SimrecError::UsageError(_) => "usage_error",
            SimrecError::InvalidValue { .. } => "invalid_value",
            SimrecError::NotFound { .. } => "not_found",
            SimrecError::EmptyModel { .. } => "empty_model",
            SimrecError::InvalidItem { .. } => "invalid_item",
            SimrecError::MalformedRecords { .. } => "malformed_records",
            SimrecError::CorruptSnapshot { .. } => "corrupt_snapshot",
            SimrecError::RebuildInProgress { .. } => "rebuild_in_progress",
            SimrecError::Io(_) => "io_error",
            SimrecError::Json(_) => "json_error",
            SimrecError::Toml(_) => "toml_error",
            SimrecError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            SimrecError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for simrec operations
pub type Result<T> = std::result::Result<T, SimrecError>;
