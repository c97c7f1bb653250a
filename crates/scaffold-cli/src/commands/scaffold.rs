//! The scaffold command.
//!
//! Responsibility: translate CLI arguments into a `ScaffoldRequest`, wire the
//! adapters, call the core scaffold service, and display results. No business
//! logic lives here.

use tracing::{debug, info, instrument};

use scaffold_adapters::{CommandRegistrar, JsonDocumentPatcher, LocalFilesystem};
use scaffold_core::{application::ScaffoldService, domain::ScaffoldRequest};

use crate::{
    cli::ScaffoldArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute a scaffold run.
///
/// Dispatch sequence:
/// 1. Validate flags into a `ScaffoldRequest`
/// 2. Plan against the current directory (nothing written yet)
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Execute and report, including a failed registration
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("")))]
pub fn execute(args: ScaffoldArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Request (name, kind and module base are validated here)
    let request = build_request(&args)?;

    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read the current directory")?;
    let service = build_service(config);

    // 2. Plan
    let plan = service.plan(request, &cwd)?;
    debug!(
        kind = %plan.kind(),
        destination = %plan.destination.display(),
        replaces_existing = plan.replaces_existing,
        format = ?output.format(),
        "Plan ready"
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        output.plan(&plan)?;
        return Ok(());
    }

    // 4. Execute
    let outcome = service.execute(&plan)?;
    info!(path = %plan.relative_path.display(), "Scaffold finished");
    output.outcome(&outcome)?;

    Ok(())
}

/// Map flags onto the core request builder.
pub fn build_request(args: &ScaffoldArgs) -> CliResult<ScaffoldRequest> {
    let request = ScaffoldRequest::builder()
        .name(args.name.clone().unwrap_or_default())
        .kind(args.kind.as_str())
        .module_base(args.module_base.as_deref())
        .product_name(args.product.as_deref())
        .company_name(args.company.as_str())
        .skip_registration(args.skip_work)
        .overwrite(args.force)
        .build()?;
    Ok(request)
}

/// Production adapters, configured from `config`.
fn build_service(config: AppConfig) -> ScaffoldService {
    let registrar = CommandRegistrar::new(config.registrar.program, config.registrar.args);
    ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(JsonDocumentPatcher::new()),
        Box::new(registrar),
    )
    .with_layout(config.layout)
}
