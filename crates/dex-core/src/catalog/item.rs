//! Catalog items and identifier derivation.

use serde::{Deserialize, Serialize};

/// One `{name, url}` entry from the list endpoint. `name` is the dedup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub url: String,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Identifier used for navigation and sprite lookup; `None` means "cannot navigate".
    pub fn id(&self) -> Option<&str> {
        derive_id(&self.url)
    }
}

/// Returns the `/`-delimited segment immediately before the last one.
///
/// Catalog URLs end in a slash, so the last segment is empty and the one before
/// it is the identifier: `.../pokemon/25/` → `25`. Returns `None` when there
/// are fewer than two segments or that segment is empty.
pub fn derive_id(url: &str) -> Option<&str> {
    let mut segments = url.rsplit('/');
    segments.next()?;
    let id = segments.next()?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Substitutes `id` into an asset-host template containing `{id}`.
pub fn sprite_url(template: &str, id: &str) -> String {
    template.replace("{id}", id)
}
