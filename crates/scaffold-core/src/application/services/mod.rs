//! Application services - orchestrate use cases.
//!
//! `ScaffoldService` drives a run; the smaller services each own one kind of
//! on-disk work and are borrowed by it for the duration of a stage.

pub mod config_patch_service;
pub mod identifier_rewriter;
pub mod path_resolver;
pub mod scaffold_service;

pub use config_patch_service::ConfigPatchService;
pub use identifier_rewriter::IdentifierRewriter;
pub use path_resolver::PathResolver;
pub use scaffold_service::{
    Registration, ScaffoldOutcome, ScaffoldPlan, ScaffoldService, ScaffoldStage,
};
