//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stencil-adapters` crate provides implementations.

use crate::domain::{RenderContext, TemplateId};
use crate::error::StencilResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stencil_adapters::filesystem::LocalFilesystem` (production)
/// - `stencil_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Paths arrive already resolved against the project root
/// - `write_file` replaces existing content, never appends
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing ancestors. Existing directories are not an error.
    fn create_dir_all(&self, path: &Path) -> StencilResult<()>;

    /// Write content to a file, truncating what was there.
    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template text lookup.
///
/// Implemented by:
/// - `stencil_adapters::template_store::EmbeddedStore` (templates compiled into the binary)
/// - `stencil_adapters::template_store::InMemoryStore` (testing, overrides)
pub trait TemplateStore: Send + Sync {
    /// Raw text of a template. Unknown ids fail with `DomainError::TemplateMissing`.
    fn get(&self, id: &TemplateId) -> StencilResult<String>;

    /// Every id the store can serve.
    fn ids(&self) -> StencilResult<Vec<TemplateId>>;

    /// Whether `id` is available.
    fn contains(&self, id: &TemplateId) -> bool {
        self.ids().map(|ids| ids.contains(id)).unwrap_or(false)
    }
}

/// Port for template rendering.
///
/// Implemented by:
/// - `stencil_adapters::renderer::SimpleRenderer` (placeholder substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Render raw template text with the run's context. Substitution cannot fail.
    fn render(&self, source: &str, context: &RenderContext) -> String;
}
