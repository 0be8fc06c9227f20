//! Generate Service - main application orchestrator.
//!
//! For every catalog entry this service:
//! 1. Resolves the output path against the project root
//! 2. Creates the containing directory
//! 3. Looks up the template text
//! 4. Renders placeholders
//! 5. Writes the file
//!
//! A failing step abandons only its own entry. The run itself never fails:
//! the caller receives a [`GenerationReport`] listing every outcome.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateRenderer, TemplateStore},
    domain::{
        Catalog, EntryFailure, EntryOutcome, GenerationReport, RenderContext, RunParameters,
        TemplateEntry, TemplateId, stays_within,
    },
};

/// A file the generator would write, for dry runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub template_id: TemplateId,
    /// Whether a file is already there and would be overwritten.
    pub exists: bool,
}

/// Main generation service.
///
/// Owns the catalog and the adapters it drives.
pub struct GenerateService {
    catalog: Catalog,
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given catalog and adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use stencil_core::application::GenerateService;
    ///
    /// let service = GenerateService::new(
    ///     catalog,    // Catalog
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        catalog: Catalog,
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            catalog,
            store,
            renderer,
            filesystem,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Generate the project under `root`.
    pub fn generate(&self, params: &RunParameters, root: impl AsRef<Path>) -> GenerationReport {
        self.generate_with(params, root, |_| {})
    }

    /// Generate the project under `root`, calling `on_entry` after each entry.
    #[instrument(
        skip_all,
        fields(
            project = %params.repo_name,
            root = %root.as_ref().display(),
            entries = self.catalog.len()
        )
    )]
    pub fn generate_with<F>(
        &self,
        params: &RunParameters,
        root: impl AsRef<Path>,
        mut on_entry: F,
    ) -> GenerationReport
    where
        F: FnMut(&EntryOutcome),
    {
        let root = root.as_ref();
        let context = RenderContext::new(params.clone());
        let mut report = GenerationReport::new(&params.repo_name, root);

        for entry in &self.catalog {
            let result = self.process_entry(entry, &context, root);

            match &result {
                Ok(path) => info!(
                    path = %path.display(),
                    template = %entry.template_id(),
                    "Created file"
                ),
                Err(failure) => info!(
                    pattern = %entry.pattern(),
                    template = %entry.template_id(),
                    error = %failure,
                    "Entry skipped"
                ),
            }

            let outcome = EntryOutcome {
                entry: entry.clone(),
                result,
            };
            on_entry(&outcome);
            report.push(outcome);
        }

        info!(
            project = %report.project_name(),
            created = report.success_count(),
            failed = report.failure_count(),
            "Project created"
        );

        report
    }

    /// Resolve every entry without touching the filesystem beyond `exists` checks.
    pub fn plan(&self, params: &RunParameters, root: impl AsRef<Path>) -> Vec<PlannedFile> {
        let root = root.as_ref();
        self.catalog
            .iter()
            .map(|entry| {
                let path = entry.pattern().resolve(root, &params.repo_name);
                PlannedFile {
                    exists: self.filesystem.exists(&path),
                    template_id: entry.template_id().clone(),
                    path,
                }
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn process_entry(
        &self,
        entry: &TemplateEntry,
        context: &RenderContext,
        root: &Path,
    ) -> Result<PathBuf, EntryFailure> {
        let path = entry.pattern().resolve(root, &context.params().repo_name);
        if !stays_within(root, &path) {
            warn!(path = %path.display(), "Resolved path leaves the project root");
        }

        // 1. Containing directory
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            self.filesystem
                .create_dir_all(dir)
                .map_err(|e| EntryFailure::DirectoryCreation {
                    path: dir.to_path_buf(),
                    reason: e.cause(),
                })?;
        }

        // 2. Template text
        let source =
            self.store
                .get(entry.template_id())
                .map_err(|e| EntryFailure::TemplateLookup {
                    template_id: entry.template_id().clone(),
                    reason: e.cause(),
                })?;

        // 3. Placeholders
        let content = self.renderer.render(&source, context);

        // 4. Write (replaces existing content)
        self.filesystem
            .write_file(&path, &content)
            .map_err(|e| EntryFailure::FileWrite {
                path: path.clone(),
                reason: e.cause(),
            })?;

        debug!(path = %path.display(), bytes = content.len(), "File written");
        Ok(path)
    }
}
