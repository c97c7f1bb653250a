//! Workspace conventions and the per-run workspace context.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::copy_spec::ExclusionSet,
    value_objects::{AppName, ModuleBase},
};

/// Directory (relative to the workspace root) that holds every app.
pub const APPS_DIR: &str = "apps";

/// Filesystem and naming conventions of a multi-module workspace.
///
/// Defaults describe a Go workspace (`go.work`) with a Wails desktop
/// template at `apps/desktop`. Every field can be overridden from the
/// configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceLayout {
    /// Sentinel file marking the workspace root.
    pub marker_file: String,
    /// Module-declaration file name inside each module.
    pub module_file: String,
    /// Declaration files tried, in order, when inferring the module base.
    pub module_candidates: Vec<String>,
    /// Bases that signal an unrenamed template rather than a real org.
    pub placeholder_bases: Vec<String>,
    /// Toolchain version written into new module declarations.
    pub toolchain_version: String,
    /// Entry-point file name of a generated service.
    pub entry_file: String,

    /// Template project, relative to the workspace root.
    pub template_dir: String,
    /// Subtrees of the template never copied.
    pub copy_exclusions: Vec<String>,
    /// Subtrees skipped when propagating a module-base rename.
    pub rewrite_exclusions: Vec<String>,
    /// File extensions (without dot) that receive the module-base rename.
    pub rewrite_extensions: Vec<String>,
    /// Display name used throughout the template.
    pub template_display_name: String,
    /// Kebab-case name used throughout the template.
    pub template_slug: String,
    /// Files (relative to the new app) that receive the token replacement.
    pub template_entry_files: Vec<String>,
    /// Application descriptor JSON, relative to the new app.
    pub app_descriptor: String,
    /// Frontend package descriptor JSON, relative to the new app.
    pub frontend_descriptor: String,
    /// Appended to the app name for the frontend package name.
    pub frontend_name_suffix: String,
}

impl Default for WorkspaceLayout {
    fn default() -> Self {
        Self {
            marker_file: "go.work".into(),
            module_file: "go.mod".into(),
            module_candidates: vec![
                "apps/desktop/go.mod".into(),
                "libs/shared/go.mod".into(),
                "tools/go.mod".into(),
            ],
            placeholder_bases: vec!["example.com/project-go".into()],
            toolchain_version: "1.25".into(),
            entry_file: "main.go".into(),
            template_dir: "apps/desktop".into(),
            copy_exclusions: vec![
                "frontend/node_modules".into(),
                "frontend/dist".into(),
                "frontend/wailsjs".into(),
                "wailsjs".into(),
                "build".into(),
            ],
            rewrite_exclusions: vec![
                "frontend".into(),
                "node_modules".into(),
                "dist".into(),
                "wailsjs".into(),
                "build".into(),
            ],
            rewrite_extensions: vec!["go".into()],
            template_display_name: "Project Go".into(),
            template_slug: "project-go".into(),
            template_entry_files: vec![
                "main.go".into(),
                "frontend/index.html".into(),
                "frontend/src/main.js".into(),
            ],
            app_descriptor: "wails.json".into(),
            frontend_descriptor: "frontend/package.json".into(),
            frontend_name_suffix: "-frontend".into(),
        }
    }
}

impl WorkspaceLayout {
    pub fn copy_exclusion_set(&self) -> ExclusionSet {
        ExclusionSet::new(&self.copy_exclusions)
    }

    pub fn rewrite_exclusion_set(&self) -> ExclusionSet {
        ExclusionSet::new(&self.rewrite_exclusions)
    }

    /// `apps/<name>`, relative to the workspace root.
    pub fn app_relative_path(&self, name: &AppName) -> PathBuf {
        Path::new(APPS_DIR).join(name.as_str())
    }

    pub fn frontend_package_name(&self, name: &AppName) -> String {
        format!("{name}{}", self.frontend_name_suffix)
    }
}

/// Workspace facts derived once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceContext {
    pub root: PathBuf,
    pub module_base: ModuleBase,
    /// Whether `module_base` was inferred rather than passed explicitly.
    pub inferred: bool,
}

impl WorkspaceContext {
    pub fn new(root: impl Into<PathBuf>, module_base: ModuleBase, inferred: bool) -> Self {
        Self {
            root: root.into(),
            module_base,
            inferred,
        }
    }

    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}
