//! Application layer errors.
//!
//! These errors represent failures in orchestration, not input validation.
//! Input validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// No ancestor of the start directory contains the marker file.
    #[error("{marker} not found in {start} or any parent; run from inside the workspace")]
    WorkspaceNotFound { start: PathBuf, marker: String },

    /// Module base neither supplied nor inferable.
    #[error("module base not found; pass --module-base")]
    ModuleBaseNotFound { tried: Vec<PathBuf> },

    /// Target directory exists and overwrite was not requested.
    #[error("target already exists: {path} (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },

    /// Target would overlap the template project it is cloned from.
    #[error("target {path} overlaps the template app at {template}; choose a different --name")]
    TargetIsTemplate { path: PathBuf, template: PathBuf },

    /// Template project missing from the workspace.
    #[error("template app not found: {path}")]
    TemplateMissing { path: PathBuf },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Structured document could not be parsed or serialized.
    #[error("cannot patch {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    /// Filesystem adapter state is unusable (lock poisoned, etc.).
    #[error("filesystem adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::WorkspaceNotFound { marker, .. } => vec![
                format!("Run from the workspace root (the directory holding {marker})"),
                "Or cd into any directory below it".into(),
            ],
            Self::ModuleBaseNotFound { tried } => {
                let mut out = vec!["No module declaration yielded a module base. Tried:".into()];
                out.extend(tried.iter().map(|p| format!("  • {}", p.display())));
                out.push("Pass it explicitly: --module-base github.com/your-org/my-app".into());
                out
            }
            Self::AlreadyExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive for desktop apps)".into(),
                "Choose a different --name".into(),
            ],
            Self::TargetIsTemplate { template, .. } => vec![
                format!("{} is the template project and is never overwritten", template.display()),
                "Choose a different --name".into(),
            ],
            Self::TemplateMissing { path } => vec![
                format!("Expected the template project at {}", path.display()),
                "Restore the template app or point template_dir at it in the config".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure are left in place".into(),
            ],
            Self::ParseError { path, .. } => vec![
                format!("{} must contain a JSON object", path.display()),
                "Fix the file in the template and re-run with --force".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::WorkspaceNotFound { .. } | Self::ModuleBaseNotFound { .. } => {
                ErrorCategory::Workspace
            }
            Self::AlreadyExists { .. } | Self::TargetIsTemplate { .. } => ErrorCategory::Conflict,
            Self::TemplateMissing { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::ParseError { .. } => ErrorCategory::Io,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}

/// Failure of the external workspace-registration tool.
///
/// The only recoverable error class: the scaffold still succeeds and the
/// user is told how to register the app by hand.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("'{program}' not found on PATH")]
    ToolNotFound { program: String },

    #[error("failed to run '{program}': {reason}")]
    Spawn { program: String, reason: String },

    #[error("'{command}' exited with {status}")]
    Failed { command: String, status: String },
}
