// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stencil.
//!
//! This module contains pure logic with no I/O. Reading templates and writing
//! files are handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No heavy crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: `Catalog` is validated once and only read
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    catalog::{Catalog, PathPattern, TemplateEntry},
    parameters::{DEFAULT_DESCRIPTION, DEFAULT_REPO_NAME, DEFAULT_REPO_PATH, RunParameters},
    render_context::RenderContext,
    report::{EntryFailure, EntryOutcome, GenerationReport},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{PROJECT_NAME_SEGMENT, Placeholder, TemplateId};

pub use validation::DomainValidator;

pub(crate) use entities::catalog::stays_within;
