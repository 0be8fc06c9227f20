//! The template catalog: which template lands at which path.
//!
//! A [`Catalog`] is an immutable list of [`TemplateEntry`] values, validated
//! once at construction and then only read. It holds no template text; the
//! text lives behind the `TemplateStore` port and is looked up by
//! [`TemplateId`].

use std::collections::HashSet;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::{
    error::DomainError,
    value_objects::{PROJECT_NAME_SEGMENT, TemplateId},
};

// ── PathPattern ──────────────────────────────────────────────────────────────

/// An output path relative to the project root, e.g. `/cmd/{projectName}/main.go`.
///
/// Invariants (enforced by [`PathPattern::parse`]):
/// - starts with `/` (the root marker) and names a file after it
/// - contains no `.` or `..` components
/// - contains [`PROJECT_NAME_SEGMENT`] at most once, and only as a whole segment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathPattern(String);

impl PathPattern {
    pub fn parse(pattern: impl Into<String>) -> Result<Self, DomainError> {
        let pattern = pattern.into();
        let invalid = |reason: &str| DomainError::InvalidPattern {
            pattern: pattern.clone(),
            reason: reason.into(),
        };

        let Some(relative) = pattern.strip_prefix('/') else {
            return Err(invalid("must start with '/'"));
        };
        if relative.is_empty() || relative.ends_with('/') {
            return Err(invalid("must name a file"));
        }

        let segments: Vec<&str> = relative.split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(invalid("contains an empty segment"));
        }
        if segments.iter().any(|s| *s == "." || *s == "..") {
            return Err(invalid("must stay inside the project root"));
        }

        match pattern.matches(PROJECT_NAME_SEGMENT).count() {
            0 => {}
            1 if segments.contains(&PROJECT_NAME_SEGMENT) => {}
            1 => return Err(invalid("{projectName} must be a whole path segment")),
            _ => return Err(invalid("{projectName} may appear only once")),
        }

        Ok(Self(pattern))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the pattern contains the project-name segment.
    pub fn has_project_segment(&self) -> bool {
        self.0.contains(PROJECT_NAME_SEGMENT)
    }

    /// Resolve the pattern against `root`, substituting the project name.
    ///
    /// The name is inserted verbatim; `/cmd/{projectName}/main.go` with root
    /// `.` and name `Foo` becomes `./cmd/Foo/main.go`.
    pub fn resolve(&self, root: &Path, project_name: &str) -> PathBuf {
        let relative = self.0.trim_start_matches('/');
        root.join(relative.replace(PROJECT_NAME_SEGMENT, project_name))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── TemplateEntry ────────────────────────────────────────────────────────────

/// One catalog entry: an output path pattern and the template written there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pattern: PathPattern,
    template_id: TemplateId,
}

impl TemplateEntry {
    pub fn new(pattern: PathPattern, template_id: TemplateId) -> Self {
        Self {
            pattern,
            template_id,
        }
    }

    /// Parse both halves of an entry from strings.
    pub fn parse(pattern: &str, template_id: &str) -> Result<Self, DomainError> {
        Ok(Self::new(PathPattern::parse(pattern)?, template_id.parse()?))
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn template_id(&self) -> &TemplateId {
        &self.template_id
    }
}

// ── Catalog ──────────────────────────────────────────────────────────────────

/// The fixed set of entries generated on every run.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<TemplateEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting an empty set or duplicate output patterns.
    pub fn new(entries: Vec<TemplateEntry>) -> Result<Self, DomainError> {
        let catalog = Self { entries };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Build a catalog from `(pattern, template id)` string pairs.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, DomainError> {
        let entries = pairs
            .into_iter()
            .map(|(pattern, id)| TemplateEntry::parse(pattern, id))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            entry.template_id.as_str().parse::<TemplateId>()?;
            if !seen.insert(entry.pattern.as_str()) {
                return Err(DomainError::DuplicatePath {
                    path: entry.pattern.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct template ids referenced by the catalog, sorted.
    pub fn template_ids(&self) -> Vec<&TemplateId> {
        let mut ids: Vec<_> = self.entries.iter().map(|e| &e.template_id).collect();
        ids.sort();
        ids.dedup();
        ids
    }

    /// Every directory the catalog writes into, resolved against `root`.
    pub fn directories(&self, root: &Path, project_name: &str) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = self
            .entries
            .iter()
            .filter_map(|e| {
                e.pattern
                    .resolve(root, project_name)
                    .parent()
                    .map(Path::to_path_buf)
            })
            .collect();
        dirs.sort();
        dirs.dedup();
        dirs
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TemplateEntry;
    type IntoIter = std::slice::Iter<'a, TemplateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Whether `path` stays under `root` lexically (no `..` escapes).
pub(crate) fn stays_within(root: &Path, path: &Path) -> bool {
    let Ok(rest) = path.strip_prefix(root) else {
        return false;
    };
    let mut depth = 0usize;
    for component in rest.components() {
        match component {
            Component::ParentDir => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            Component::Normal(_) => depth += 1,
            _ => {}
        }
    }
    true
}
