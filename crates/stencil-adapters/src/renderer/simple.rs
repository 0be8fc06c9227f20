//! Simple placeholder substitution renderer.

use stencil_core::{application::ports::TemplateRenderer, domain::RenderContext};
use tracing::trace;

/// Simple renderer using the three built-in placeholders.
#[derive(Debug, Clone, Copy)]
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    fn render(&self, source: &str, context: &RenderContext) -> String {
        trace!(bytes = source.len(), "rendering template");
        context.render(source)
    }
}
