//! Placeholder substitution.

use crate::domain::{entities::parameters::RunParameters, value_objects::Placeholder};

/// Context for template rendering.
///
/// A **Value Object** wrapping the run parameters. Immutable after creation.
#[derive(Debug, Clone)]
pub struct RenderContext {
    params: RunParameters,
}

impl RenderContext {
    pub fn new(params: RunParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &RunParameters {
        &self.params
    }

    /// Get the value for a placeholder.
    pub fn get(&self, placeholder: Placeholder) -> &str {
        self.params.value(placeholder)
    }

    /// Replace every placeholder token in `template`.
    ///
    /// # Algorithm
    ///
    /// One left-to-right scan. At each `{` the three tokens are tried; a match
    /// emits the parameter value and resumes after the token, otherwise the
    /// brace is copied and the scan moves on by one byte.
    ///
    /// # Edge Cases
    ///
    /// - `{{Unknown}}` → left as-is (no error)
    /// - `{{RepoName}}{{RepoName}}` → both replaced
    /// - `{{{RepoName}}}` → outer braces preserved, inner replaced
    /// - a value containing `{{Description}}` is emitted verbatim, never
    ///   substituted a second time
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let candidate = &rest[start..];

            match Placeholder::ALL
                .into_iter()
                .find(|p| candidate.starts_with(p.token()))
            {
                Some(placeholder) => {
                    out.push_str(self.get(placeholder));
                    rest = &candidate[placeholder.token().len()..];
                }
                None => {
                    out.push('{');
                    rest = &candidate[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }
}

impl From<RunParameters> for RenderContext {
    fn from(params: RunParameters) -> Self {
        Self::new(params)
    }
}
