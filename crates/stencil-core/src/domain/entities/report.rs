use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::domain::{entities::catalog::TemplateEntry, value_objects::TemplateId};

/// Why a single catalog entry was not written.
///
/// Every variant is local to its entry: the run moves on to the next one.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EntryFailure {
    #[error("Failed to create directory {}: {reason}", path.display())]
    DirectoryCreation { path: PathBuf, reason: String },

    #[error("Failed to read template file {}: {reason}", template_id.source_path())]
    TemplateLookup {
        template_id: TemplateId,
        reason: String,
    },

    #[error("Failed to create file {}: {reason}", path.display())]
    FileWrite { path: PathBuf, reason: String },
}

/// Result of processing one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    pub entry: TemplateEntry,
    pub result: Result<PathBuf, EntryFailure>,
}

impl EntryOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// The written path, if the entry succeeded.
    pub fn path(&self) -> Option<&Path> {
        self.result.as_deref().ok()
    }

    pub fn failure(&self) -> Option<&EntryFailure> {
        self.result.as_ref().err()
    }
}

/// Everything one generation run did, in processing order.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    project_name: String,
    root: PathBuf,
    outcomes: Vec<EntryOutcome>,
}

impl GenerationReport {
    pub fn new(project_name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            project_name: project_name.into(),
            root: root.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: EntryOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn outcomes(&self) -> &[EntryOutcome] {
        &self.outcomes
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &EntryOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn success_count(&self) -> usize {
        self.succeeded().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    /// `true` when every entry was written.
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(EntryOutcome::is_success)
    }

    pub fn created_paths(&self) -> Vec<&Path> {
        self.outcomes.iter().filter_map(EntryOutcome::path).collect()
    }
}
