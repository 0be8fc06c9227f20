//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate the project" or "list the catalog".

pub mod catalog_service;
pub mod generate_service;

pub use catalog_service::{CatalogService, EntryInfo};
pub use generate_service::{GenerateService, PlannedFile};
