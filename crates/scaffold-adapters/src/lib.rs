//! Infrastructure adapters for scaffold.
//!
//! This crate implements the ports defined in `scaffold-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod patcher;
pub mod registrar;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use patcher::JsonDocumentPatcher;
pub use registrar::CommandRegistrar;
