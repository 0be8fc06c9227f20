//! Catalog Service - catalog queries.
//!
//! Lists entries, looks up template text and checks that every entry's
//! template is available. Separated from GenerateService for single
//! responsibility.

use crate::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{Catalog, DomainValidator as validator, Placeholder, TemplateId},
    error::StencilResult,
};

/// Information about a catalog entry for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub pattern: String,
    pub template_id: String,
    /// Placeholders the template text uses; empty when the template is missing.
    pub placeholders: Vec<Placeholder>,
    pub available: bool,
}

/// Service for catalog operations.
pub struct CatalogService {
    catalog: Catalog,
    store: Box<dyn TemplateStore>,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(catalog: Catalog, store: Box<dyn TemplateStore>) -> Self {
        Self { catalog, store }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Raw text of a template.
    pub fn lookup(&self, id: &TemplateId) -> StencilResult<String> {
        self.store.get(id)
    }

    /// Describe every entry, in catalog order.
    pub fn entries(&self) -> Vec<EntryInfo> {
        self.catalog
            .iter()
            .map(|entry| {
                let source = self.store.get(entry.template_id()).ok();
                EntryInfo {
                    pattern: entry.pattern().to_string(),
                    template_id: entry.template_id().to_string(),
                    placeholders: source.as_deref().map(Placeholder::scan).unwrap_or_default(),
                    available: source.is_some(),
                }
            })
            .collect()
    }

    /// Check that the store can serve every template the catalog names.
    pub fn verify(&self) -> StencilResult<()> {
        validator::validate_catalog(&self.catalog)?;

        let available = self.store.ids()?;
        let missing = validator::missing_templates(&self.catalog, &available);

        if missing.is_empty() {
            return Ok(());
        }

        Err(ApplicationError::CatalogInconsistent {
            missing: missing.into_iter().map(ToString::to_string).collect(),
        }
        .into())
    }
}
