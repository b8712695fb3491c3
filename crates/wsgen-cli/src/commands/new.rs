//! Implementation of the `wsgen new` command.
//!
//! Responsibility: translate CLI arguments into a `WorkspaceRequest`, run the
//! core builder against the chosen filesystem, and display results. No
//! business logic lives here.

use std::path::Path;

use tracing::{debug, instrument, warn};

use wsgen_adapters::{LocalFilesystem, MemoryFilesystem, NullReporter, TracingReporter};
use wsgen_core::{
    application::{
        WorkspaceBuilder,
        ports::{BuildEvent, BuildReporter, Filesystem},
    },
    domain::{TemplateVariant, WorkspaceReport, WorkspaceRequest},
    error::WsgenError,
};

use crate::{
    cli::{GlobalArgs, NewArgs, OutputFormat, Variant},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `wsgen new` command.
///
/// 1. Resolve root and variant against the configuration
/// 2. Freeze and validate the request (nothing touched on failure)
/// 3. Run the builder on disk, or in memory for `--dry-run`
/// 4. Print a summary or the JSON report
#[instrument(skip_all, fields(workspace = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = build_request(&args, &global, &config)?;

    debug!(
        root = %request.root_dir().display(),
        cores = ?request.core_names(),
        purge = request.purge_existing(),
        variant = %request.variant(),
        "Request resolved"
    );

    if args.dry_run {
        return dry_run(request, &output);
    }

    let workspace = request.workspace_path();
    if output.format() != OutputFormat::Json {
        output.header(&format!(
            "Creating workspace '{}' at {}",
            request.workspace_name(),
            workspace.display()
        ))?;
    }

    let reporter = reporter(&output, request.verbose());
    let builder = WorkspaceBuilder::new(Box::new(LocalFilesystem::new()), reporter);
    let report = builder.execute(request)?;

    if output.format() == OutputFormat::Json {
        output.json(&report)?;
        return Ok(());
    }

    output.success(&format!(
        "Workspace created at {} ({} directories, {} files)",
        workspace.display(),
        report.directory_count(),
        report.file_count(),
    ))?;

    Ok(())
}

/// Merge CLI flags with configured defaults and freeze the request.
pub fn build_request(
    args: &NewArgs,
    global: &GlobalArgs,
    config: &AppConfig,
) -> CliResult<WorkspaceRequest> {
    let variant = args
        .variant
        .map(TemplateVariant::from)
        .unwrap_or(config.defaults.variant);

    let mut builder = WorkspaceRequest::builder()
        .workspace_name(args.name.as_str())
        .cores(args.cores.iter().map(String::as_str))
        .purge_existing(args.purge)
        .verbose(global.verbose > 0)
        .variant(variant);

    if let Some(root) = args.root.as_ref().or(config.defaults.root.as_ref()) {
        builder = builder.root_dir(root);
    }

    Ok(builder.build().map_err(WsgenError::from)?)
}

/// Run the builder against an in-memory filesystem and print the plan.
fn dry_run(request: WorkspaceRequest, output: &OutputManager) -> CliResult<()> {
    let workspace = request.workspace_path();
    let on_disk = LocalFilesystem::new().exists(&workspace);

    if on_disk && output.format() != OutputFormat::Json {
        if request.purge_existing() {
            output.warning(&format!("Would remove {}", workspace.display()))?;
        } else {
            output.warning(&format!(
                "{} already exists; a real run fails without --purge",
                workspace.display()
            ))?;
        }
    }

    let reporter = reporter(output, request.verbose());
    let builder = WorkspaceBuilder::new(Box::new(MemoryFilesystem::new()), reporter);
    let report = builder.execute(request)?;

    if output.format() == OutputFormat::Json {
        output.json(&report)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create {} directories and {} files under {}",
        report.directory_count(),
        report.file_count(),
        workspace.display(),
    ))?;
    for line in planned_tree(&report) {
        output.print(&line)?;
    }

    Ok(())
}

/// Directories (with a trailing `/`) and files relative to the workspace
/// root, in creation order.
fn planned_tree(report: &WorkspaceReport) -> Vec<String> {
    let relative = |path: &Path| {
        path.strip_prefix(&report.root)
            .unwrap_or(path)
            .display()
            .to_string()
    };

    let mut lines: Vec<String> = report
        .directories
        .iter()
        .map(|dir| format!("  {}/", relative(dir)))
        .collect();
    lines.extend(report.files.iter().map(|file| format!("  {}", relative(file))));
    lines
}

/// JSON output keeps stdout clean, so progress goes to the log instead.
/// Otherwise actions are printed only for a verbose request.
fn reporter(output: &OutputManager, verbose: bool) -> Box<dyn BuildReporter> {
    match output.format() {
        OutputFormat::Json => Box::new(TracingReporter),
        _ if verbose => Box::new(ConsoleReporter {
            output: output.clone(),
        }),
        _ => Box::new(NullReporter),
    }
}

/// Prints each build action through the output manager.
struct ConsoleReporter {
    output: OutputManager,
}

impl BuildReporter for ConsoleReporter {
    fn report(&self, event: &BuildEvent) {
        if let Err(e) = self.output.step(&event.to_string()) {
            warn!(error = %e, "Failed to print build event");
        }
    }
}

impl From<Variant> for TemplateVariant {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Basic => TemplateVariant::Basic,
            Variant::Framework => TemplateVariant::Framework,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
