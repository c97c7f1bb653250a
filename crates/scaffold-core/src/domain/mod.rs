// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for scaffold.
//!
//! This module contains pure logic with ZERO I/O. Reading and writing files,
//! walking trees and spawning the workspace tool are handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: Requests and contexts are validated on construction
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod module_path;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    config_patch::{JsonMutation, KeyPath},
    copy_spec::{CopyReport, CopySpec, ExclusionSet},
    request::{DEFAULT_COMPANY, ScaffoldRequest, ScaffoldRequestBuilder},
    rewrite_set::RewriteSet,
    workspace::{APPS_DIR, WorkspaceContext, WorkspaceLayout},
};

pub use error::{DomainError, ErrorCategory};

pub use module_path::{ModuleDeclaration, derive_base, is_placeholder, rewrite_declaration};

pub use value_objects::{AppKind, AppName, ModuleBase};
