pub mod catalog;
pub mod parameters;
pub mod render_context;
pub mod report;

pub use crate::domain::DomainError;
pub use catalog::{Catalog, PathPattern, TemplateEntry};
pub use parameters::RunParameters;
pub use render_context::RenderContext;
pub use report::{EntryFailure, EntryOutcome, GenerationReport};
