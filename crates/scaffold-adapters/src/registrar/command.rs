//! Registrar that shells out to the workspace tool (`go work use` by default).

use std::io;
use std::path::{Component, Path};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use scaffold_core::application::{RegistrationError, ports::WorkspaceRegistrar};

pub const DEFAULT_PROGRAM: &str = "go";
pub const DEFAULT_ARGS: [&str; 2] = ["work", "use"];

/// Runs `<program> <args...> ./<member>` from the workspace root.
///
/// The child inherits stdout and stderr so the tool's own diagnostics reach
/// the user unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRegistrar {
    program: String,
    args: Vec<String>,
}

impl CommandRegistrar {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandRegistrar {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_ARGS)
    }
}

impl WorkspaceRegistrar for CommandRegistrar {
    fn register(&self, workspace_root: &Path, member: &Path) -> Result<(), RegistrationError> {
        let member_arg = member_argument(member);
        debug!(
            program = %self.program,
            member = %member_arg,
            root = %workspace_root.display(),
            "Registering workspace member"
        );

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(&member_arg)
            .current_dir(workspace_root)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => RegistrationError::ToolNotFound {
                    program: self.program.clone(),
                },
                _ => RegistrationError::Spawn {
                    program: self.program.clone(),
                    reason: e.to_string(),
                },
            })?;

        if !status.success() {
            return Err(RegistrationError::Failed {
                command: self.manual_command(member),
                status: status.to_string(),
            });
        }

        info!(member = %member_arg, "Workspace member registered");
        Ok(())
    }

    fn manual_command(&self, member: &Path) -> String {
        let member_arg = member_argument(member);
        let mut parts = Vec::with_capacity(self.args.len() + 2);
        parts.push(self.program.as_str());
        parts.extend(self.args.iter().map(String::as_str));
        parts.push(member_arg.as_str());
        parts.join(" ")
    }
}

/// `./apps/notes`, with forward slashes on every platform.
fn member_argument(member: &Path) -> String {
    let segments: Vec<String> = member
        .components()
        .filter_map(|c| match c {
            Component::Normal(seg) => Some(seg.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    format!("./{}", segments.join("/"))
}
