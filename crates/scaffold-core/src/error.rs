//! Unified error handling for scaffold-core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for scaffold-core operations.
///
/// Every variant is fatal for a run. Registration failures are not errors
/// at this level; they are reported on the outcome instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScaffoldError {
    /// Invalid user input.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Orchestration failures (workspace, conflicts, I/O).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ScaffoldError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file and SCAFFOLD__* environment variables".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in scaffold".into(),
                "Please report this issue at: https://github.com/scaffold-rs/scaffold/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Input => ErrorCategory::Input,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Shorthand for an I/O failure at `path`.
    pub fn io(path: impl Into<std::path::PathBuf>, err: impl std::fmt::Display) -> Self {
        ApplicationError::FilesystemError {
            path: path.into(),
            reason: err.to_string(),
        }
        .into()
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Workspace,
    Conflict,
    NotFound,
    Io,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
