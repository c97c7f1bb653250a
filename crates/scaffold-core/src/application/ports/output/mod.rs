//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `scaffold-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::application::RegistrationError;
use crate::domain::{CopyReport, CopySpec, ExclusionSet, JsonMutation};
use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `scaffold_adapters::filesystem::LocalFilesystem` (production)
/// - `scaffold_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths passed in are absolute (or relative to the process cwd)
/// - Paths returned by tree operations are relative to the tree root
/// - Every failure maps to `ApplicationError::FilesystemError`
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String>;

    /// Create or truncate a file with `content`.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Mirror `spec.source_root` into `spec.dest_root`, skipping excluded
    /// subtrees and preserving permission bits. Parents are always created
    /// before their children. Stops at the first failure.
    fn copy_tree(&self, spec: &CopySpec) -> ScaffoldResult<CopyReport>;

    /// Every regular file under `root` not inside an excluded subtree,
    /// relative to `root`, in a stable order.
    fn list_files(&self, root: &Path, exclusions: &ExclusionSet) -> ScaffoldResult<Vec<PathBuf>>;
}

/// Why a structured document could not be patched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    #[error("invalid JSON: {0}")]
    Syntax(String),

    #[error("top-level value is not an object")]
    NotAnObject,

    #[error("serialization failed: {0}")]
    Serialize(String),
}

/// Port for structured-document patching.
///
/// Implemented by:
/// - `scaffold_adapters::patcher::JsonDocumentPatcher` (`serde_json`)
///
/// Pure text-to-text: the caller owns reading and writing the file.
pub trait DocumentPatcher: Send + Sync {
    /// Apply `mutations` in order and re-serialize deterministically, with a
    /// single trailing newline.
    fn patch(&self, document: &str, mutations: &[JsonMutation]) -> Result<String, PatchError>;
}

/// Port for registering a new module with the workspace tool.
///
/// Implemented by:
/// - `scaffold_adapters::registrar::CommandRegistrar` (`go work use`)
#[cfg_attr(test, mockall::automock)]
pub trait WorkspaceRegistrar: Send + Sync {
    /// Register `member` (relative to `workspace_root`).
    fn register(&self, workspace_root: &Path, member: &Path) -> Result<(), RegistrationError>;

    /// The command a user can run by hand when registration fails.
    fn manual_command(&self, member: &Path) -> String;
}
