// ============================================================================
// domain/error.rs - INPUT ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside `ScaffoldError`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Input Errors
    // ========================================================================
    #[error("--name is required")]
    MissingName,

    #[error("invalid app name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid --type: {value} (use service|wails)")]
    InvalidKind { value: String },

    #[error("invalid module base '{value}': {reason}")]
    InvalidModuleBase { value: String, reason: String },

    // ========================================================================
    // Rewrite Constraints
    // ========================================================================
    #[error("replacement token must not be empty")]
    EmptyToken,

    #[error("replacement tokens overlap: '{first}' and '{second}'")]
    OverlappingTokens { first: String, second: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingName => vec![
                "Pass the app name with --name".into(),
                "Example: scaffold --name billing --type service".into(),
            ],
            Self::InvalidName { .. } => vec![
                "Use a kebab-case name such as 'billing' or 'link-server'".into(),
                "The name becomes a single directory under apps/".into(),
            ],
            Self::InvalidKind { .. } => vec![
                "Supported types:".into(),
                "  • service (alias: headless) - minimal service skeleton".into(),
                "  • wails   (alias: app)      - desktop app copied from the template".into(),
            ],
            Self::InvalidModuleBase { .. } => vec![
                "Pass an organization-level module path".into(),
                "Example: --module-base github.com/your-org/my-app".into(),
            ],
            Self::EmptyToken | Self::OverlappingTokens { .. } => {
                vec!["Check the template token settings in your configuration".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyToken | Self::OverlappingTokens { .. } => ErrorCategory::Configuration,
            _ => ErrorCategory::Input,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
}
