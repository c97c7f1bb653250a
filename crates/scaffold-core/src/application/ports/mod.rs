//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `scaffold-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File and tree operations
//!   - `DocumentPatcher`: JSON document mutation
//!   - `WorkspaceRegistrar`: External workspace tool
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{DocumentPatcher, Filesystem, PatchError, WorkspaceRegistrar};

#[cfg(test)]
pub use output::{MockFilesystem, MockWorkspaceRegistrar};
