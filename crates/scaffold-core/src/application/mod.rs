//! Application layer for scaffold.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService and its helpers)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ConfigPatchService, IdentifierRewriter, PathResolver, Registration, ScaffoldOutcome,
    ScaffoldPlan, ScaffoldService, ScaffoldStage,
};

// Re-export port traits (for adapter implementation)
pub use ports::{DocumentPatcher, Filesystem, PatchError, WorkspaceRegistrar};

pub use error::{ApplicationError, RegistrationError};
