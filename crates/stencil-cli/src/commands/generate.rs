//! The default action: write the project.
//!
//! Every catalog entry is reported as it completes. Failed entries do not
//! stop the run and, unless `--strict` is given, do not change the exit
//! status: the closing "created successfully" line is always printed.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument, warn};

use stencil_adapters::{EmbeddedStore, LocalFilesystem, SimpleRenderer, builtin_catalog};
use stencil_core::{
    application::{GenerateService, PlannedFile},
    domain::{EntryFailure, EntryOutcome, GenerationReport, RunParameters},
};

use crate::{
    cli::{ModeArgs, ProjectArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(dry_run = mode.dry_run, strict = mode.strict))]
pub fn execute(
    project: &ProjectArgs,
    mode: &ModeArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let params = config.run_parameters(project);
    let root = config.output_dir(project);
    debug!(?params, root = %root.display(), "resolved run parameters");

    let service = GenerateService::new(
        builtin_catalog()?,
        Box::new(EmbeddedStore::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    if mode.dry_run {
        let dirs = service.catalog().directories(&root, &params.repo_name);
        return print_plan(&service.plan(&params, &root), dirs.len(), &params, output);
    }

    let report = if output.is_json() {
        service.generate(&params, &root)
    } else {
        // Progress lines are best-effort: an unwritable stdout never fails the run.
        let mut console = Console::default();
        let report = service.generate_with(&params, &root, |outcome| {
            console.check(print_outcome(outcome, output));
        });
        console.check(output.success(&format!(
            "Project {} created successfully!",
            report.project_name()
        )));
        report
    };

    if output.is_json() {
        output.json(&ReportView::from(&report))?;
    }

    if mode.strict && !report.is_clean() {
        return Err(CliError::GenerationIncomplete {
            failed: report.failure_count(),
            total: report.outcomes().len(),
        });
    }

    Ok(())
}

/// Tracks whether stdout still accepts writes, warning once when it stops.
#[derive(Default)]
struct Console {
    failed: bool,
}

impl Console {
    fn check(&mut self, result: std::io::Result<()>) {
        if let Err(e) = result {
            if !self.failed {
                warn!(error = %e, "Console output failed; generation continues");
            }
            self.failed = true;
        }
    }
}

fn print_outcome(outcome: &EntryOutcome, output: &OutputManager) -> std::io::Result<()> {
    match &outcome.result {
        Ok(path) => output.print(&format!(
            "Created file {} with content from {}.",
            path.display(),
            outcome.entry.template_id().source_path()
        )),
        Err(failure) => output.error(&failure.to_string()),
    }
}

fn print_plan(
    plan: &[PlannedFile],
    directories: usize,
    params: &RunParameters,
    output: &OutputManager,
) -> CliResult<()> {
    if output.is_json() {
        let view: Vec<_> = plan.iter().map(PlanView::from).collect();
        return output.json(&view);
    }

    output.header(&format!(
        "Dry run: {} files in {} directories for {}",
        plan.len(),
        directories,
        params.repo_name
    ))?;
    for file in plan {
        let line = format!(
            "  {} {}",
            file.path.display(),
            output.dim(&format!("<- {}", file.template_id.source_path()))
        );
        if file.exists {
            output.warning(&format!("{line} (exists, would be overwritten)"))?;
        } else {
            output.print(&line)?;
        }
    }
    output.print("No files were written.")?;
    Ok(())
}

// ── JSON views ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ReportView<'a> {
    project: &'a str,
    root: &'a Path,
    created: usize,
    failed: usize,
    entries: Vec<EntryView<'a>>,
}

#[derive(Serialize)]
struct EntryView<'a> {
    pattern: &'a str,
    template: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a EntryFailure>,
}

impl<'a> From<&'a GenerationReport> for ReportView<'a> {
    fn from(report: &'a GenerationReport) -> Self {
        Self {
            project: report.project_name(),
            root: report.root(),
            created: report.success_count(),
            failed: report.failure_count(),
            entries: report
                .outcomes()
                .iter()
                .map(|o| EntryView {
                    pattern: o.entry.pattern().as_str(),
                    template: o.entry.template_id().as_str(),
                    path: o.path(),
                    error: o.failure(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct PlanView<'a> {
    path: &'a Path,
    template: &'a str,
    exists: bool,
}

impl<'a> From<&'a PlannedFile> for PlanView<'a> {
    fn from(file: &'a PlannedFile) -> Self {
        Self {
            path: &file.path,
            template: file.template_id.as_str(),
            exists: file.exists,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_core::domain::{TemplateEntry, TemplateId};

    #[test]
    fn report_view_lists_paths_and_failures() {
        let mut report = GenerationReport::new("Widget", ".");
        report.push(EntryOutcome {
            entry: TemplateEntry::parse("/Makefile", "makefile.txt").unwrap(),
            result: Ok("./Makefile".into()),
        });
        report.push(EntryOutcome {
            entry: TemplateEntry::parse("/server/start.go", "start.txt").unwrap(),
            result: Err(EntryFailure::DirectoryCreation {
                path: "./server".into(),
                reason: "File exists".into(),
            }),
        });

        let json = serde_json::to_value(ReportView::from(&report)).unwrap();
        assert_eq!(json["project"], "Widget");
        assert_eq!(json["created"], 1);
        assert_eq!(json["failed"], 1);
        assert_eq!(json["entries"][0]["path"], "./Makefile");
        assert!(json["entries"][0].get("error").is_none());
        assert_eq!(json["entries"][1]["error"]["kind"], "directory-creation");
        assert_eq!(json["entries"][1]["error"]["reason"], "File exists");
    }

    #[test]
    fn console_warns_once_and_keeps_going() {
        let mut console = Console::default();
        console.check(Ok(()));
        assert!(!console.failed);

        console.check(Err(std::io::Error::other("disk full")));
        console.check(Err(std::io::Error::other("disk full")));
        console.check(Ok(()));
        assert!(console.failed);
    }

    #[test]
    fn plan_view_carries_template() {
        let file = PlannedFile {
            path: "./cmd/Widget/main.go".into(),
            template_id: TemplateId::new("main.txt"),
            exists: false,
        };
        let json = serde_json::to_value(PlanView::from(&file)).unwrap();
        assert_eq!(json["template"], "main.txt");
        assert_eq!(json["exists"], false);
    }
}
