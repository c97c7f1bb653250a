//! Scaffold Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `scaffold`
//! workspace tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          scaffold-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, PathResolver, ...)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, DocumentPatcher, Registrar)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     scaffold-adapters (Infrastructure)  │
//! │ (LocalFilesystem, JsonDocumentPatcher)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ScaffoldRequest, RewriteSet, CopySpec) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::path::Path;
//! use scaffold_core::{application::ScaffoldService, domain::ScaffoldRequest};
//!
//! // 1. Describe the app
//! let request = ScaffoldRequest::builder()
//!     .name("billing")
//!     .kind("service")
//!     .build()
//!     .unwrap();
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, patcher, registrar);
//! let outcome = service.scaffold(request, Path::new(".")).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Registration, ScaffoldOutcome, ScaffoldPlan, ScaffoldService,
        ports::{DocumentPatcher, Filesystem, PatchError, WorkspaceRegistrar},
    };
    pub use crate::domain::{
        AppKind, AppName, CopyReport, CopySpec, ExclusionSet, JsonMutation, KeyPath, ModuleBase,
        ScaffoldRequest, WorkspaceContext, WorkspaceLayout,
    };
    pub use crate::error::{ErrorCategory, ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
