//! Domain value objects: TemplateId and Placeholder.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! `Placeholder` is the closed set of tokens a template may contain; adding a
//! token means adding a variant, its `token` arm, and a field on
//! `RunParameters`.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The path segment replaced by the repository name in output patterns.
pub const PROJECT_NAME_SEGMENT: &str = "{projectName}";

/// Directory the template resources are shipped from.
pub const TEMPLATE_DIR: &str = "templates";

// ── TemplateId ───────────────────────────────────────────────────────────────

/// Identifier of an embedded template resource, e.g. `main.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id as shown to users, e.g. `templates/main.txt`.
    pub fn source_path(&self) -> String {
        format!("{TEMPLATE_DIR}/{}", self.0)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TemplateId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidTemplateId("id cannot be empty".into()));
        }
        if trimmed.contains(['/', '\\']) {
            return Err(DomainError::InvalidTemplateId(format!(
                "'{trimmed}' must be a bare resource name"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for TemplateId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ── Placeholder ──────────────────────────────────────────────────────────────

/// A token recognised inside template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placeholder {
    RepoName,
    Description,
    RepoPath,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] = [Self::RepoName, Self::Description, Self::RepoPath];

    /// The literal text replaced in templates.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::RepoName => "{{RepoName}}",
            Self::Description => "{{Description}}",
            Self::RepoPath => "{{RepoPath}}",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RepoName => "repo-name",
            Self::Description => "description",
            Self::RepoPath => "repo-path",
        }
    }

    /// Placeholders occurring at least once in `text`, in declaration order.
    pub fn scan(text: &str) -> Vec<Placeholder> {
        Self::ALL
            .into_iter()
            .filter(|p| text.contains(p.token()))
            .collect()
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
