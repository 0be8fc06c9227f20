//! `--list-templates`: print the built-in catalog.

use serde::Serialize;

use stencil_adapters::{EmbeddedStore, builtin_catalog};
use stencil_core::application::{CatalogService, EntryInfo};

use crate::{error::CliResult, output::OutputManager};

pub fn execute(output: &OutputManager) -> CliResult<()> {
    let service = CatalogService::new(builtin_catalog()?, Box::new(EmbeddedStore::new()));
    service.verify()?;

    let entries = service.entries();

    if output.is_json() {
        let view: Vec<_> = entries.iter().map(EntryView::from).collect();
        return output.json(&view);
    }

    output.header(&format!("Built-in catalog ({} files):", entries.len()))?;

    let width = entries.iter().map(|e| e.pattern.len()).max().unwrap_or(0);
    for entry in &entries {
        let tokens = if entry.placeholders.is_empty() {
            String::new()
        } else {
            let names: Vec<_> = entry.placeholders.iter().map(ToString::to_string).collect();
            output.dim(&format!("  {}", names.join(" ")))
        };
        output.print(&format!(
            "  {:width$}  {}{}",
            entry.pattern, entry.template_id, tokens
        ))?;
    }

    Ok(())
}

#[derive(Serialize)]
struct EntryView<'a> {
    pattern: &'a str,
    template: &'a str,
    placeholders: Vec<&'static str>,
}

impl<'a> From<&'a EntryInfo> for EntryView<'a> {
    fn from(info: &'a EntryInfo) -> Self {
        Self {
            pattern: &info.pattern,
            template: &info.template_id,
            placeholders: info.placeholders.iter().map(|p| p.as_str()).collect(),
        }
    }
}
