//! itemkit-core — template helpers for CMS items.
//!
//! This crate holds the shared item/field types plus the three helpers a
//! template layer reaches for:
//!
//! ```text
//! Item.fields ──► normalizer::process ──► Item.fields_by_name ──► accessor::field_*
//!
//! markup ──► truncate::strip_tags ──► truncate::truncate
//! ```
//!
//! Everything is synchronous and operates on caller-owned data.

pub mod accessor;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod truncate;
pub mod types;

pub use accessor::{
    field_group, field_label, field_options, field_property, field_value, or_false,
};
pub use error::PropertyParseError;
pub use normalizer::{
    decode_json, is_json, normalize_field, process, process_as, FieldLoader, NoLoader,
    DEFAULT_TYPE_ALIAS,
};
pub use truncate::{strip_tags, truncate, truncate_default, DEFAULT_LIMIT, ELLIPSIS};
pub use types::{
    Field, FieldList, FieldOption, FieldProperty, FieldsByName, Item, NormalizedField, RawValue,
    CHECKBOXES,
};
