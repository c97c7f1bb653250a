//! Output management and formatting.
//!
//! Results go to stdout; warnings go to stderr so that piping the plain or
//! JSON result stays clean.

use std::io::{self, IsTerminal};
use std::path::{Component, Path};

use console::Term;
use owo_colors::OwoColorize;
use serde_json::{Value, json};

use scaffold_core::application::{Registration, ScaffoldOutcome, ScaffoldPlan};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    out: Term,
    err: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }

    // ── Results ───────────────────────────────────────────────────────────

    /// Report a finished scaffold, including a failed registration.
    pub fn outcome(&self, outcome: &ScaffoldOutcome) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.json(&outcome_json(outcome));
        }

        if let Registration::Failed {
            reason,
            manual_command,
        } = &outcome.registration
        {
            self.warning(&format!("workspace registration failed: {reason}"))?;
            self.warning_detail(&format!("run manually: {manual_command}"))?;
        }

        self.success(&created_line(outcome))
    }

    /// Describe a plan without executing it (`--dry-run`).
    pub fn plan(&self, plan: &ScaffoldPlan) -> io::Result<()> {
        if self.resolved_format == OutputFormat::Json {
            return self.json(&plan_json(plan));
        }

        self.header(&format!(
            "Would create {}: {}",
            plan.kind(),
            slash_path(&plan.relative_path)
        ))?;
        for (label, value) in plan_details(plan) {
            self.print(&format!("  {label:<13} {value}"))?;
        }
        Ok(())
    }

    // ── Line writers ──────────────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.out.write_line(msg)
    }

    /// Success line. Plain output is the bare message.
    fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = match (self.resolved_format, self.no_color) {
            (OutputFormat::Human, false) => {
                format!("{} {}", "\u{2713}".green().bold(), msg.green())
            }
            (OutputFormat::Human, true) => format!("\u{2713} {msg}"), // ✓
            _ => msg.to_owned(),
        };
        self.out.write_line(&line)
    }

    /// Warning on stderr: `warning: <msg>`.
    fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.colored() {
            format!("{} {}", "warning:".yellow().bold(), msg.yellow())
        } else {
            format!("warning: {msg}")
        };
        self.err.write_line(&line)
    }

    /// Follow-up line to a warning, unprefixed.
    fn warning_detail(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.err.write_line(msg)
    }

    /// Bold cyan header line.
    fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.colored() {
            text.cyan().bold().to_string()
        } else {
            text.to_owned()
        };
        self.out.write_line(&line)
    }

    /// JSON is never suppressed: a script asked for it.
    fn json(&self, value: &Value) -> io::Result<()> {
        let rendered = serde_json::to_string_pretty(value)?;
        self.out.write_line(&rendered)
    }

    fn colored(&self) -> bool {
        self.resolved_format == OutputFormat::Human && !self.no_color
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

/// `apps/notes` on every platform.
fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(seg) => Some(seg.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn created_line(outcome: &ScaffoldOutcome) -> String {
    format!(
        "Created {}: {}",
        outcome.kind,
        slash_path(&outcome.relative_path)
    )
}

fn plan_details(plan: &ScaffoldPlan) -> Vec<(&'static str, String)> {
    let base = &plan.workspace.module_base;
    let mut details = vec![
        ("module:", plan.module_path.clone()),
        (
            "module base:",
            if plan.workspace.inferred {
                format!("{base} (inferred)")
            } else {
                base.to_string()
            },
        ),
        ("workspace:", plan.workspace.root.display().to_string()),
    ];
    if let Some(product) = &plan.product_name {
        details.push(("product:", product.clone()));
        details.push(("company:", plan.request.company_name().to_string()));
    }
    if let Some(template) = &plan.template_root {
        details.push(("template:", template.display().to_string()));
    }
    if plan.replaces_existing {
        details.push(("replaces:", "existing directory".into()));
    }
    let registration = if plan.request.skip_registration() {
        "skipped"
    } else {
        "pending"
    };
    details.push(("registration:", registration.into()));
    details
}

fn registration_json(registration: &Registration) -> Value {
    match registration {
        Registration::Registered => json!({ "status": "registered" }),
        Registration::Skipped => json!({ "status": "skipped" }),
        Registration::Failed {
            reason,
            manual_command,
        } => json!({
            "status": "failed",
            "reason": reason,
            "manual_command": manual_command,
        }),
    }
}

fn outcome_json(outcome: &ScaffoldOutcome) -> Value {
    json!({
        "kind": outcome.kind,
        "path": slash_path(&outcome.relative_path),
        "destination": outcome.destination.display().to_string(),
        "module": outcome.module_path,
        "files_written": outcome.files_written,
        "registration": registration_json(&outcome.registration),
    })
}

fn plan_json(plan: &ScaffoldPlan) -> Value {
    json!({
        "dry_run": true,
        "kind": plan.kind(),
        "path": slash_path(&plan.relative_path),
        "destination": plan.destination.display().to_string(),
        "module": plan.module_path,
        "module_base": plan.workspace.module_base.as_str(),
        "module_base_inferred": plan.workspace.inferred,
        "workspace": plan.workspace.root.display().to_string(),
        "product": plan.product_name,
        "company": plan.product_name.as_ref().map(|_| plan.request.company_name()),
        "replaces_existing": plan.replaces_existing,
        "register": !plan.request.skip_registration(),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
