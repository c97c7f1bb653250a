//! Scaffold Service - main application orchestrator.
//!
//! This service drives one run through its stages:
//! 1. `ResolveInputs`: workspace root, module base, product name
//! 2. `ValidateTarget`: destination conflicts, template presence
//! 3. `EmitService` or `InstantiateTemplate`
//! 4. `RegisterInWorkspace` (optional, never fatal)
//!
//! Stages 1–2 are [`ScaffoldService::plan`] and touch nothing on disk; the
//! rest is [`ScaffoldService::execute`]. There is no rollback: a failure in
//! stage 3 leaves whatever was already written.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{DocumentPatcher, Filesystem, WorkspaceRegistrar},
        services::{ConfigPatchService, IdentifierRewriter, PathResolver},
    },
    domain::{
        AppKind, CopySpec, JsonMutation, ModuleDeclaration, RewriteSet, ScaffoldRequest,
        WorkspaceContext, WorkspaceLayout, rewrite_declaration,
    },
    error::ScaffoldResult,
};

/// Stages of a scaffold run, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldStage {
    ResolveInputs,
    ValidateTarget,
    EmitService,
    InstantiateTemplate,
    RegisterInWorkspace,
    Done,
}

impl fmt::Display for ScaffoldStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ResolveInputs => "resolve-inputs",
            Self::ValidateTarget => "validate-target",
            Self::EmitService => "emit-service",
            Self::InstantiateTemplate => "instantiate-template",
            Self::RegisterInWorkspace => "register-in-workspace",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Everything decided before the first write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub request: ScaffoldRequest,
    pub workspace: WorkspaceContext,
    /// `<module base>/apps/<name>`.
    pub module_path: String,
    /// `apps/<name>`, relative to the workspace root.
    pub relative_path: PathBuf,
    /// Absolute destination directory.
    pub destination: PathBuf,
    /// Present for desktop apps only.
    pub product_name: Option<String>,
    /// Present for desktop apps only.
    pub template_root: Option<PathBuf>,
    /// The destination exists and `overwrite` was requested.
    pub replaces_existing: bool,
}

impl ScaffoldPlan {
    pub fn kind(&self) -> AppKind {
        self.request.kind()
    }
}

/// Result of the optional registration stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Registered,
    Skipped,
    Failed {
        reason: String,
        manual_command: String,
    },
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub kind: AppKind,
    pub relative_path: PathBuf,
    pub destination: PathBuf,
    pub module_path: String,
    pub files_written: usize,
    pub registration: Registration,
}

/// Main scaffolding service.
///
/// Orchestrates workspace resolution, generation and registration.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    patcher: Box<dyn DocumentPatcher>,
    registrar: Box<dyn WorkspaceRegistrar>,
    layout: WorkspaceLayout,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters and the default
    /// workspace layout.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use scaffold_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    ///     patcher,    // impl DocumentPatcher
    ///     registrar,  // impl WorkspaceRegistrar
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        patcher: Box<dyn DocumentPatcher>,
        registrar: Box<dyn WorkspaceRegistrar>,
    ) -> Self {
        Self {
            filesystem,
            patcher,
            registrar,
            layout: WorkspaceLayout::default(),
        }
    }

    /// Replace the workspace layout.
    pub fn with_layout(mut self, layout: WorkspaceLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> &WorkspaceLayout {
        &self.layout
    }

    /// Plan and execute in one call.
    pub fn scaffold(&self, request: ScaffoldRequest, start_dir: &Path) -> ScaffoldResult<ScaffoldOutcome> {
        let plan = self.plan(request, start_dir)?;
        self.execute(&plan)
    }

    /// Resolve inputs and validate the target without writing anything.
    #[instrument(
        skip_all,
        fields(
            name = %request.name(),
            kind = %request.kind(),
            start = %start_dir.display()
        )
    )]
    pub fn plan(&self, request: ScaffoldRequest, start_dir: &Path) -> ScaffoldResult<ScaffoldPlan> {
        debug!(stage = %ScaffoldStage::ResolveInputs);
        let workspace = PathResolver::new(self.filesystem.as_ref(), &self.layout)
            .resolve(&request, start_dir)?;
        let module_path = workspace.module_base.app_module(request.name());
        let product_name = request.product_name();
        info!(
            root = %workspace.root.display(),
            module_base = %workspace.module_base,
            inferred = workspace.inferred,
            "Workspace resolved"
        );

        debug!(stage = %ScaffoldStage::ValidateTarget);
        let relative_path = self.layout.app_relative_path(request.name());
        let destination = workspace.join(&relative_path);
        let template_dir = workspace.join(&self.layout.template_dir);
        if destination.starts_with(&template_dir) || template_dir.starts_with(&destination) {
            return Err(ApplicationError::TargetIsTemplate {
                path: relative_path,
                template: PathBuf::from(&self.layout.template_dir),
            }
            .into());
        }
        let exists = self.filesystem.exists(&destination);
        if exists && !request.overwrite() {
            return Err(ApplicationError::AlreadyExists { path: relative_path }.into());
        }

        let template_root = if request.kind().uses_template() {
            if !self.filesystem.exists(&template_dir) {
                return Err(ApplicationError::TemplateMissing {
                    path: PathBuf::from(&self.layout.template_dir),
                }
                .into());
            }
            Some(template_dir)
        } else {
            None
        };

        Ok(ScaffoldPlan {
            request,
            workspace,
            module_path,
            relative_path,
            destination,
            product_name,
            template_root,
            replaces_existing: exists,
        })
    }

    /// Generate the app described by `plan`, then register it.
    #[instrument(skip_all, fields(destination = %plan.destination.display()))]
    pub fn execute(&self, plan: &ScaffoldPlan) -> ScaffoldResult<ScaffoldOutcome> {
        let files_written = match plan.kind() {
            AppKind::Service => {
                debug!(stage = %ScaffoldStage::EmitService);
                self.emit_service(plan)?
            }
            AppKind::DesktopApp => {
                debug!(stage = %ScaffoldStage::InstantiateTemplate);
                self.instantiate_template(plan)?
            }
        };

        debug!(stage = %ScaffoldStage::RegisterInWorkspace);
        let registration = self.register(plan);

        debug!(stage = %ScaffoldStage::Done);
        info!(files = files_written, "Scaffold completed successfully");

        Ok(ScaffoldOutcome {
            kind: plan.kind(),
            relative_path: plan.relative_path.clone(),
            destination: plan.destination.clone(),
            module_path: plan.module_path.clone(),
            files_written,
            registration,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write the module declaration and entry point. An existing destination
    /// is reused as-is; only these two files are (re)written.
    fn emit_service(&self, plan: &ScaffoldPlan) -> ScaffoldResult<usize> {
        let name = plan.request.name().as_str();
        let cmd_dir = plan.destination.join("cmd").join(name);
        self.filesystem.create_dir_all(&cmd_dir)?;

        self.filesystem.write_file(
            &plan.destination.join(&self.layout.module_file),
            &service_module_file(&plan.module_path, &self.layout.toolchain_version),
        )?;
        self.filesystem
            .write_file(&cmd_dir.join(&self.layout.entry_file), &service_entry_point(name))?;

        Ok(2)
    }

    /// Copy the template and re-identify it as the new app.
    fn instantiate_template(&self, plan: &ScaffoldPlan) -> ScaffoldResult<usize> {
        let fs = self.filesystem.as_ref();
        let layout = &self.layout;
        let dest = &plan.destination;
        let name = plan.request.name().as_str();
        let new_base = plan.workspace.module_base.as_str();
        let product = plan.product_name.clone().unwrap_or_else(|| plan.request.name().title());

        let Some(template_root) = &plan.template_root else {
            return Err(ApplicationError::TemplateMissing {
                path: PathBuf::from(&layout.template_dir),
            }
            .into());
        };

        if plan.replaces_existing {
            info!("Removing existing destination");
            fs.remove_dir_all(dest)?;
        }

        let report = fs.copy_tree(&CopySpec::new(
            template_root,
            dest,
            layout.copy_exclusion_set(),
        ))?;
        info!(
            files = report.file_count(),
            skipped = report.skipped.len(),
            "Template copied"
        );

        let old_base = self.rewrite_module_file(&dest.join(&layout.module_file), plan)?;

        let patches = ConfigPatchService::new(fs, self.patcher.as_ref());
        patches.patch_json(
            &dest.join(&layout.app_descriptor),
            &[
                JsonMutation::set("name", name),
                JsonMutation::set("outputfilename", name),
                JsonMutation::set("info.productName", product.as_str()),
                JsonMutation::set("info.companyName", plan.request.company_name()),
            ],
        )?;
        patches.patch_json(
            &dest.join(&layout.frontend_descriptor),
            &[JsonMutation::set("name", layout.frontend_package_name(plan.request.name()))],
        )?;

        // The base goes first: the template slug may occur inside it.
        let rewriter = IdentifierRewriter::new(fs);
        if let Some(old_base) = old_base.filter(|old| old != new_base) {
            let changed = rewriter.replace_in_tree(
                dest,
                &old_base,
                new_base,
                &layout.rewrite_exclusion_set(),
                &layout.rewrite_extensions,
            )?;
            info!(%old_base, %new_base, files = changed, "Module base rewritten");
        }

        let tokens = RewriteSet::new()
            .with(layout.template_display_name.as_str(), product.as_str())?
            .with(layout.template_slug.as_str(), name)?;
        for relative in &layout.template_entry_files {
            rewriter.replace_in_file(&dest.join(relative), &tokens)?;
        }

        Ok(report.file_count())
    }

    /// Point the copied module declaration at the new module path and move
    /// every reference to the template's base over to the new base.
    ///
    /// Returns the template's base, if its declaration had a derivable one.
    fn rewrite_module_file(&self, path: &Path, plan: &ScaffoldPlan) -> ScaffoldResult<Option<String>> {
        let original = self.filesystem.read_to_string(path)?;
        let new_base = plan.workspace.module_base.as_str();

        let old_base = ModuleDeclaration::parse(&original)
            .and_then(|decl| decl.base().map(str::to_string));

        // Base first, then the module line, so a new base that extends the
        // old one is never substituted twice.
        let rebased = match old_base.as_deref() {
            Some(old) if old != new_base => RewriteSet::new()
                .with(old, new_base)?
                .apply(&original)
                .into_owned(),
            _ => original.clone(),
        };
        let (updated, previous) = rewrite_declaration(&rebased, &plan.module_path);
        if previous.is_none() {
            warn!(path = %path.display(), "Template module file declares no module");
        }

        if updated != original {
            self.filesystem.write_file(path, &updated)?;
        }
        Ok(old_base)
    }

    /// Register the new app; failures downgrade to a warning.
    fn register(&self, plan: &ScaffoldPlan) -> Registration {
        if plan.request.skip_registration() {
            debug!("Workspace registration skipped");
            return Registration::Skipped;
        }

        match self
            .registrar
            .register(&plan.workspace.root, &plan.relative_path)
        {
            Ok(()) => Registration::Registered,
            Err(e) => {
                let manual_command = self.registrar.manual_command(&plan.relative_path);
                warn!(error = %e, %manual_command, "Workspace registration failed");
                Registration::Failed {
                    reason: e.to_string(),
                    manual_command,
                }
            }
        }
    }
}

/// Module declaration of a generated service.
pub fn service_module_file(module_path: &str, toolchain_version: &str) -> String {
    format!("module {module_path}\n\ngo {toolchain_version}\n")
}

/// Entry point of a generated service: logs a startup line and exits.
pub fn service_entry_point(name: &str) -> String {
    format!(
        "package main\n\nimport \"log\"\n\nfunc main() {{\n\tlog.Println(\"{name} starting...\")\n}}\n"
    )
}
