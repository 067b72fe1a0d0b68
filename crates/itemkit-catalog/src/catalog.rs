//! JSON field catalog.
//!
//! ```json
//! {
//!   "com_content.article": {
//!     "default": [ { "name": "subtitle", "raw_value": "", "type": "text" } ],
//!     "items":   { "42": [ { "name": "subtitle", "raw_value": "Hello", "type": "text" } ] }
//!   }
//! }
//! ```
//!
//! Lookup order for an item: its own list under `items`, then the type's
//! `default` list, then nothing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use itemkit_core::{Field, FieldLoader, Item};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while opening a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read field catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse field catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Field definitions for one content type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct TypeEntry {
    #[serde(default)]
    default: Vec<Field>,
    /// Keyed by item id as a string, the way JSON object keys come in.
    #[serde(default)]
    items: HashMap<String, Vec<Field>>,
}

/// Field definitions keyed by content type alias.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldCatalog {
    types: HashMap<String, TypeEntry>,
}

impl FieldCatalog {
    /// Read and parse a catalog file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), types = catalog.types.len(), "loaded field catalog");
        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Set the fields served for every item of `type_alias` without a list
    /// of its own.
    pub fn set_default(&mut self, type_alias: impl Into<String>, fields: Vec<Field>) {
        self.types.entry(type_alias.into()).or_default().default = fields;
    }

    /// Set the fields served for item `id` of `type_alias`.
    pub fn set_for_item(&mut self, type_alias: impl Into<String>, id: u64, fields: Vec<Field>) {
        self.types
            .entry(type_alias.into())
            .or_default()
            .items
            .insert(id.to_string(), fields);
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FieldLoader for FieldCatalog {
    /// Catalog values are stored ready for display, so `prepare_value` has
    /// nothing to do.
    fn fields(&self, type_alias: &str, item: &Item, _prepare_value: bool) -> Vec<Field> {
        let Some(entry) = self.types.get(type_alias) else {
            debug!(type_alias, "no catalog entry for type");
            return Vec::new();
        };

        item.id
            .and_then(|id| entry.items.get(&id.to_string()))
            .unwrap_or(&entry.default)
            .clone()
    }
}
