use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Placeholder;

pub const DEFAULT_REPO_NAME: &str = "MyProject";
pub const DEFAULT_DESCRIPTION: &str = "A sample project structure created by Go CLI";
pub const DEFAULT_REPO_PATH: &str = "github.com/yourusername/yourrepo";

/// Values applied uniformly to every template in one run.
///
/// No validation happens here: empty or unusual strings are used verbatim,
/// both in template text and in the `{projectName}` path segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunParameters {
    pub repo_name: String,
    pub description: String,
    pub repo_path: String,
}

impl RunParameters {
    pub fn new(
        repo_name: impl Into<String>,
        description: impl Into<String>,
        repo_path: impl Into<String>,
    ) -> Self {
        Self {
            repo_name: repo_name.into(),
            description: description.into(),
            repo_path: repo_path.into(),
        }
    }

    /// The value substituted for `placeholder`.
    pub fn value(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::RepoName => &self.repo_name,
            Placeholder::Description => &self.description,
            Placeholder::RepoPath => &self.repo_path,
        }
    }
}

impl Default for RunParameters {
    fn default() -> Self {
        Self::new(DEFAULT_REPO_NAME, DEFAULT_DESCRIPTION, DEFAULT_REPO_PATH)
    }
}
