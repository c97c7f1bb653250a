//! Workspace registrars.

mod command;

pub use command::{CommandRegistrar, DEFAULT_ARGS, DEFAULT_PROGRAM};
