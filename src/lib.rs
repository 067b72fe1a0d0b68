//! itemkit — template helpers for CMS items.
//!
//! Re-exports the core library and the file-backed field catalog so that the
//! binary, integration tests and benches can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! FieldCatalog ─┐
//!  (or a host   ├──► normalizer ──► Item.fields_by_name ──► accessor
//!   loader)   ──┘
//!
//! truncate (independent, pure)
//! ```

pub mod cli;

pub use itemkit_catalog::{CatalogError, FieldCatalog};
pub use itemkit_core::*;
