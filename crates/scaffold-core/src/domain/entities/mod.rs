pub mod config_patch;
pub mod copy_spec;
pub mod request;
pub mod rewrite_set;
pub mod workspace;

pub use crate::domain::DomainError;
pub use config_patch::{JsonMutation, KeyPath};
pub use copy_spec::{CopyReport, CopySpec, ExclusionSet};
pub use request::{ScaffoldRequest, ScaffoldRequestBuilder};
pub use rewrite_set::RewriteSet;
pub use workspace::{WorkspaceContext, WorkspaceLayout};
