use crate::domain::{entities::Catalog, error::DomainError, value_objects::TemplateId};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_catalog(catalog: &Catalog) -> Result<(), DomainError> {
        catalog.validate()
    }

    /// Ids referenced by `catalog` that `available` does not contain.
    pub fn missing_templates<'a>(
        catalog: &'a Catalog,
        available: &[TemplateId],
    ) -> Vec<&'a TemplateId> {
        catalog
            .template_ids()
            .into_iter()
            .filter(|id| !available.contains(id))
            .collect()
    }
}
