//! itemkit-catalog — file-backed field source for itemkit.
//!
//! A host CMS normally loads custom fields from its own storage. Outside the
//! host (the CLI, tests, static renders) a [`FieldCatalog`] plays that role:
//! it serves field definitions from a JSON file and implements
//! [`itemkit_core::FieldLoader`].

pub mod catalog;

pub use catalog::{CatalogError, FieldCatalog};
