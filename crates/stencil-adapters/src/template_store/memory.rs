//! In-memory template store.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use stencil_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::{DomainError, TemplateId},
    error::StencilResult,
};

use super::embedded::TEMPLATES;

/// Thread-safe in-memory template store.
///
/// Starts empty or seeded from the embedded set; tests use it to override or
/// drop individual templates.
#[derive(Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<HashMap<TemplateId, String>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store holding a copy of every embedded template.
    pub fn with_builtin() -> StencilResult<Self> {
        let store = Self::new();
        for (name, text) in TEMPLATES {
            store.insert(TemplateId::new(*name), *text)?;
        }
        Ok(store)
    }

    /// Insert or replace a template.
    pub fn insert(&self, id: TemplateId, text: impl Into<String>) -> StencilResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(id, text.into());
        Ok(())
    }

    /// Remove a template.
    pub fn remove(&self, id: &TemplateId) -> StencilResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.remove(id).map(|_| ()).ok_or_else(|| {
            DomainError::TemplateMissing {
                template_id: id.to_string(),
            }
            .into()
        })
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, id: &TemplateId) -> StencilResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(id).cloned().ok_or_else(|| {
            DomainError::TemplateMissing {
                template_id: id.to_string(),
            }
            .into()
        })
    }

    fn ids(&self) -> StencilResult<Vec<TemplateId>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut ids: Vec<_> = inner.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
