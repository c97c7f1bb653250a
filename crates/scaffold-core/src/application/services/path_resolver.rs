//! Path Resolver - finds the workspace root and its module base.
//!
//! The start directory is always passed in; nothing here reads the process
//! working directory.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ModuleBase, ModuleDeclaration, ScaffoldRequest, WorkspaceContext, WorkspaceLayout, is_placeholder},
    error::ScaffoldResult,
};

/// Resolves workspace-level facts through the `Filesystem` port.
pub struct PathResolver<'a> {
    fs: &'a dyn Filesystem,
    layout: &'a WorkspaceLayout,
}

impl<'a> PathResolver<'a> {
    pub fn new(fs: &'a dyn Filesystem, layout: &'a WorkspaceLayout) -> Self {
        Self { fs, layout }
    }

    /// Walk from `start` up to the filesystem root, returning the first
    /// directory that contains the workspace marker file.
    #[instrument(skip(self), fields(start = %start.display()))]
    pub fn find_workspace_root(&self, start: &Path) -> ScaffoldResult<PathBuf> {
        start
            .ancestors()
            .find(|dir| self.fs.exists(&dir.join(&self.layout.marker_file)))
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                ApplicationError::WorkspaceNotFound {
                    start: start.to_path_buf(),
                    marker: self.layout.marker_file.clone(),
                }
                .into()
            })
    }

    /// Read the module declaration at `path`, if the file declares one.
    pub fn read_declaration(&self, path: &Path) -> ScaffoldResult<Option<ModuleDeclaration>> {
        let contents = self.fs.read_to_string(path)?;
        Ok(ModuleDeclaration::parse(&contents))
    }

    /// Infer the module base from the first candidate declaration file that
    /// yields one. Unreadable or unrecognized candidates are skipped.
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn infer_module_base(&self, root: &Path) -> ScaffoldResult<ModuleBase> {
        let mut tried = Vec::with_capacity(self.layout.module_candidates.len());

        for candidate in &self.layout.module_candidates {
            let path = root.join(candidate);
            tried.push(path.clone());

            if !self.fs.exists(&path) {
                continue;
            }
            let declaration = match self.read_declaration(&path) {
                Ok(Some(declaration)) => declaration,
                Ok(None) => continue,
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "Skipping unreadable module file");
                    continue;
                }
            };
            let Some(base) = declaration.base().and_then(|b| ModuleBase::parse(b).ok()) else {
                continue;
            };

            if is_placeholder(base.as_str(), &self.layout.placeholder_bases) {
                warn!(
                    module_base = %base,
                    "module base looks like a placeholder; pass --module-base to override"
                );
            }
            debug!(module_base = %base, from = %path.display(), "Module base inferred");
            return Ok(base);
        }

        Err(ApplicationError::ModuleBaseNotFound { tried }.into())
    }

    /// Resolve the workspace context for a request. An explicit module base
    /// always wins; inference only runs without one.
    pub fn resolve(&self, request: &ScaffoldRequest, start: &Path) -> ScaffoldResult<WorkspaceContext> {
        let root = self.find_workspace_root(start)?;

        match request.module_base() {
            Some(base) => Ok(WorkspaceContext::new(root, base.clone(), false)),
            None => {
                let base = self.infer_module_base(&root)?;
                Ok(WorkspaceContext::new(root, base, true))
            }
        }
    }
}
