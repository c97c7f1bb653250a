//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here; values are
//! validated by `scaffold_core` so that error messages match across callers.

use clap::{Args, Parser};

use scaffold_core::domain::DEFAULT_COMPANY;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "scaffold",
    bin_name = "scaffold",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a new app under apps/ in a Go workspace",
    long_about = "scaffold adds a new application to the enclosing Go workspace: \
                  either a minimal service (module file plus entry point) or a \
                  desktop app cloned from the apps/desktop template, then \
                  registers it with `go work use`.",
    after_help = "EXAMPLES:\n\
        \x20 scaffold --name billing\n\
        \x20 scaffold --name notes --type wails --product \"Notes\" --company \"Acme\"\n\
        \x20 scaffold --name notes --type wails --module-base github.com/acme/platform --force\n\
        \x20 scaffold --name billing --dry-run --output-format json",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub scaffold: ScaffoldArgs,
}

/// What to generate and where it is registered.
#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    /// App name; becomes `apps/<name>` and the last module path segment.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "App name (required)")]
    pub name: Option<String>,

    /// App kind.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        default_value = "service",
        help = "App type: service|headless|wails|app"
    )]
    pub kind: String,

    /// Organization-level module prefix; inferred from the workspace if omitted.
    #[arg(
        long = "module-base",
        value_name = "PATH",
        help = "Module base, e.g. github.com/acme/platform"
    )]
    pub module_base: Option<String>,

    /// Product name shown by desktop apps; defaults to the title-cased name.
    #[arg(long = "product", value_name = "NAME", help = "Desktop app product name")]
    pub product: Option<String>,

    #[arg(
        long = "company",
        value_name = "NAME",
        default_value = DEFAULT_COMPANY,
        help = "Desktop app company name"
    )]
    pub company: String,

    /// Leave the workspace file alone.
    #[arg(long = "skip-work", help = "Skip `go work use`")]
    pub skip_work: bool,

    /// Replace an existing `apps/<name>`.
    #[arg(
        short = 'f',
        long = "force",
        help = "Overwrite an existing target (desktop apps are removed first)"
    )]
    pub force: bool,

    /// Resolve and validate, then print the plan without writing.
    #[arg(long = "dry-run", help = "Show what would be created")]
    pub dry_run: bool,
}
