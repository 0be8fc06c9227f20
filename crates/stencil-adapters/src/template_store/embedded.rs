//! Templates compiled into the binary.
//!
//! Every file under `templates/` is pulled in with [`include_str!`], so the
//! binary has no runtime dependency on a template directory and a missing
//! file is a build error.
//!
//! **Warning**: when adding a template, add its `include_str!` line here and
//! its entry in [`crate::builtin`]. The `builtin` tests check the two agree.

use stencil_core::{
    application::ports::TemplateStore,
    domain::{DomainError, TemplateId},
    error::StencilResult,
};

macro_rules! embed {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("../../templates/", $name)))),*]
    };
}

/// `(template id, text)` for every embedded template, sorted by id.
pub(crate) static TEMPLATES: &[(&str, &str)] = embed![
    "api.txt",
    "api_helpers.txt",
    "api_server.txt",
    "assert.txt",
    "config.txt",
    "context.txt",
    "env.txt",
    "errors.txt",
    "helpers.txt",
    "main.txt",
    "makefile.txt",
    "middleware.txt",
    "routes.txt",
    "server.txt",
    "start.txt",
    "testdata.txt",
    "testutils.txt",
    "user_model.txt",
    "user_service.txt",
    "user_store.txt",
    "validator.txt",
];

/// Read-only store over the embedded templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedStore;

impl EmbeddedStore {
    pub fn new() -> Self {
        Self
    }

    /// Borrow a template's text without allocating.
    pub fn lookup(&self, id: &str) -> Option<&'static str> {
        TEMPLATES
            .binary_search_by(|(name, _)| (*name).cmp(id))
            .ok()
            .map(|i| TEMPLATES[i].1)
    }

    pub fn len(&self) -> usize {
        TEMPLATES.len()
    }

    pub fn is_empty(&self) -> bool {
        TEMPLATES.is_empty()
    }
}

impl TemplateStore for EmbeddedStore {
    fn get(&self, id: &TemplateId) -> StencilResult<String> {
        self.lookup(id.as_str())
            .map(str::to_owned)
            .ok_or_else(|| {
                DomainError::TemplateMissing {
                    template_id: id.to_string(),
                }
                .into()
            })
    }

    fn ids(&self) -> StencilResult<Vec<TemplateId>> {
        Ok(TEMPLATES.iter().map(|(name, _)| TemplateId::new(*name)).collect())
    }

    fn contains(&self, id: &TemplateId) -> bool {
        self.lookup(id.as_str()).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_for_binary_search() {
        assert!(TEMPLATES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn no_template_is_empty() {
        for (name, text) in TEMPLATES {
            assert!(!text.trim().is_empty(), "{name} is empty");
        }
    }

    #[test]
    fn unknown_id_is_template_missing() {
        let err = EmbeddedStore::new()
            .get(&TemplateId::new("nope.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("Template missing: nope.txt"));
    }

    #[test]
    fn main_template_uses_repo_tokens() {
        let main = EmbeddedStore::new().lookup("main.txt").unwrap();
        assert!(main.contains("{{RepoName}}"));
        assert!(main.contains("{{RepoPath}}"));
    }
}
