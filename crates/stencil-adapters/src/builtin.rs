//! The built-in catalog.
//!
//! Every generated Go project gets the same 21 files. Each row pairs an
//! output path pattern with the embedded template that fills it; the
//! `{projectName}` segment is replaced by the repository name.
//!
//! Rows are processed in the order listed here.

use stencil_core::{domain::Catalog, error::StencilResult};
use tracing::debug;

// ── Table ─────────────────────────────────────────────────────────────────────

/// `(output path pattern, template id)` for the built-in project layout.
pub const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    ("/server/start.go", "start.txt"),
    ("/server/server.go", "server.txt"),
    ("/server/routes.go", "routes.txt"),
    ("/server/helpers.go", "helpers.txt"),
    ("/api/api.go", "api.txt"),
    ("/api/config.go", "config.txt"),
    ("/api/context.go", "context.txt"),
    ("/api/errors.go", "errors.txt"),
    ("/api/helpers.go", "api_helpers.txt"),
    ("/api/middleware.go", "middleware.txt"),
    ("/api/server.go", "api_server.txt"),
    ("/internal/tests/assert/assert.go", "assert.txt"),
    ("/internal/tests/testdata.go", "testdata.txt"),
    ("/internal/tests/testutils.go", "testutils.txt"),
    ("/validator/validator.go", "validator.txt"),
    ("/users/user_model.go", "user_model.txt"),
    ("/users/user_service.go", "user_service.txt"),
    ("/users/user_store.go", "user_store.txt"),
    ("/cmd/{projectName}/main.go", "main.txt"),
    ("/Makefile", "makefile.txt"),
    ("/.envrc", "env.txt"),
];

// ── Public API ────────────────────────────────────────────────────────────────

/// Build the validated built-in catalog.
///
/// # Errors
///
/// Returns a domain error if the table above breaks a catalog invariant.
pub fn builtin_catalog() -> StencilResult<Catalog> {
    let catalog = Catalog::from_pairs(BUILTIN_ENTRIES.iter().copied())?;
    debug!(entries = catalog.len(), "loaded built-in catalog");
    Ok(catalog)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
