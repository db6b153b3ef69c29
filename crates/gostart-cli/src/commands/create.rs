//! Implementation of the default action: create a Go application.
//!
//! Responsibility: collect and validate the name and prefix, load the
//! manifest, call the core scaffold service and display results. No
//! substitution logic lives here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use gostart_adapters::{LocalFilesystem, OsTokenGenerator, load_manifest};
use gostart_core::{
    application::{PlannedEntry, ScaffoldService},
    domain::{EntryError, MaterializeReport, TemplateManifest},
};

use crate::{
    cli::{CreateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt::Prompter,
    validation::{split_project_arg, validate_name, validate_prefix},
};

/// Fully resolved inputs of one run.
#[derive(Debug)]
struct Request {
    name: String,
    prefix: String,
    base_dir: PathBuf,
    template_dir: Option<PathBuf>,
}

/// Execute project creation.
///
/// Sequence:
/// 1. Resolve name (argument or prompt) and split off any parent path
/// 2. Resolve prefix (argument, config default, or prompt)
/// 3. Load the manifest (local template directory or embedded stub)
/// 4. `--dry-run`: print the output plan and stop
/// 5. Scaffold via `ScaffoldService`, report per-file failures (even with `--quiet`)
/// 6. Print next-steps guidance
#[instrument(skip_all)]
pub fn execute(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let prompter = Prompter::new(!args.yes, output.supports_color());
    let request = resolve_request(&args, &config, &prompter)?;

    debug!(
        name = %request.name,
        prefix = %request.prefix,
        base_dir = %request.base_dir.display(),
        "Request resolved"
    );

    let manifest = load_manifest(request.template_dir.as_deref())?;

    if args.dry_run {
        return show_plan(&manifest, &request, &output);
    }

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(OsTokenGenerator::new()),
    )
    .with_database_defaults(config.database);

    info!(project = %request.name, "Scaffold started");
    let report = service.scaffold(&manifest, &request.name, &request.prefix, &request.base_dir)?;

    if output.format() == OutputFormat::Json {
        output
            .json(&report)
            .with_cli_context(|| "writing JSON report")?;
    }

    for (entry, error) in report.failed() {
        output.failure(&format!("{entry}: {error}"))?;
    }

    if args.strict && !report.is_complete() {
        return Err(CliError::IncompleteScaffold {
            failed: report.failure_count(),
            total: report.outcomes().len(),
        });
    }

    show_next_steps(&request.name, &report, &output)
}

fn resolve_request(
    args: &CreateArgs,
    config: &AppConfig,
    prompter: &Prompter,
) -> CliResult<Request> {
    let raw_name = match args.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => prompter.project_name()?,
    };
    let target = split_project_arg(&raw_name)?;
    validate_name(target.name)?;

    let configured = args.prefix.as_ref().or(config.defaults.prefix.as_ref());
    let prefix = match configured.map(|p| p.trim()) {
        Some(prefix) if !prefix.is_empty() => prefix.to_owned(),
        _ => prompter.prefix()?,
    };
    validate_prefix(&prefix)?;

    let base_dir = match &args.output_dir {
        Some(dir) => dir.join(target.parent),
        None => target.parent.to_path_buf(),
    };

    Ok(Request {
        name: target.name.to_owned(),
        prefix,
        base_dir,
        template_dir: args
            .template_dir
            .clone()
            .or_else(|| config.templates.local_path.clone()),
    })
}

// ── Dry run ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct PlanLine<'a> {
    entry: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a EntryError>,
}

impl<'a> From<&'a PlannedEntry> for PlanLine<'a> {
    fn from(planned: &'a PlannedEntry) -> Self {
        match &planned.target {
            Ok(path) => Self {
                entry: &planned.entry,
                path: Some(path),
                error: None,
            },
            Err(error) => Self {
                entry: &planned.entry,
                path: None,
                error: Some(error),
            },
        }
    }
}

fn show_plan(manifest: &TemplateManifest, request: &Request, out: &OutputManager) -> CliResult<()> {
    let plan = ScaffoldService::plan(manifest, &request.name, &request.base_dir);

    if out.format() == OutputFormat::Json {
        let lines: Vec<PlanLine<'_>> = plan.iter().map(PlanLine::from).collect();
        out.json(&lines).with_cli_context(|| "writing JSON plan")?;
        return Ok(());
    }

    out.header(&format!(
        "Dry run: would create '{}' with module {}/{}",
        request.name,
        request.prefix.trim_end_matches('/'),
        request.name
    ))?;
    for planned in &plan {
        match &planned.target {
            Ok(path) => out.print(&format!("  {}", path.display()))?,
            Err(error) => out.warning(&format!("{}: {error}", planned.entry))?,
        }
    }
    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_next_steps(name: &str, report: &MaterializeReport, out: &OutputManager) -> CliResult<()> {
    out.print("")?;
    out.success(&format!("create {name} success."))?;
    out.print("")?;
    out.command(&format!("cd {}", report.root().display()))?;
    out.command(&format!(
        "go build -ldflags \"-s -w\" -buildmode=exe -tags release -o bin/{name}"
    ))?;
    out.print("")?;
    out.print("Getting Started please read README.md")?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
