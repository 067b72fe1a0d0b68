//! Normalizer — reshapes an [`Item`]'s raw field collection into a name-keyed
//! lookup of [`NormalizedField`]s.
//!
//! For each field the value is unwrapped (one-element lists become scalars),
//! then either resolved against the field's options (`checkboxes` fields) or,
//! when it is a JSON string, decoded.
//!
//! # JSON detection is permissive
//!
//! A value counts as JSON whenever it parses as a JSON document. That
//! includes bare numbers (`"42"` becomes `42`), `true`/`false`/`null` and the
//! empty string (which becomes `null`). Templates in the wild depend on this,
//! so it is kept as is.

use serde_json::Value;
use tracing::{debug, trace};

use crate::types::{Field, FieldList, FieldOption, FieldsByName, Item, NormalizedField};

/// Content type assumed when an item carries no `type_alias`.
pub const DEFAULT_TYPE_ALIAS: &str = "com_content.article";

// ---------------------------------------------------------------------------
// Field loading
// ---------------------------------------------------------------------------

/// Source of an item's field collection, consulted only when `item.fields`
/// is absent.
///
/// Loading is infallible at call time. A loader that can fail (a file, a
/// database) should surface that when it is constructed.
pub trait FieldLoader {
    /// Fields for `item` of content type `type_alias`. `prepare_value` asks
    /// the host to run its value preparation (rendering, plugin hooks) first.
    fn fields(&self, type_alias: &str, item: &Item, prepare_value: bool) -> Vec<Field>;
}

impl<F> FieldLoader for F
where
    F: Fn(&str, &Item, bool) -> Vec<Field>,
{
    fn fields(&self, type_alias: &str, item: &Item, prepare_value: bool) -> Vec<Field> {
        self(type_alias, item, prepare_value)
    }
}

/// A loader with nothing to offer, for items whose fields are always
/// preloaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLoader;

impl FieldLoader for NoLoader {
    fn fields(&self, _type_alias: &str, _item: &Item, _prepare_value: bool) -> Vec<Field> {
        Vec::new()
    }
}

// ---------------------------------------------------------------------------
// Processing
// ---------------------------------------------------------------------------

/// Normalise `item` in place and hand it back.
///
/// Items without a `type_alias` are treated as [`DEFAULT_TYPE_ALIAS`].
pub fn process<'a, L>(item: &'a mut Item, loader: &L) -> &'a mut Item
where
    L: FieldLoader + ?Sized,
{
    process_as(item, loader, DEFAULT_TYPE_ALIAS)
}

/// [`process`] with a caller-chosen default content type.
///
/// `fields_by_name` is rebuilt from scratch; duplicate names resolve to the
/// last field while keeping the position of the first.
pub fn process_as<'a, L>(item: &'a mut Item, loader: &L, default_type_alias: &str) -> &'a mut Item
where
    L: FieldLoader + ?Sized,
{
    if item.fields.is_none() {
        let type_alias = item
            .type_alias
            .clone()
            .unwrap_or_else(|| default_type_alias.to_string());
        let loaded = loader.fields(&type_alias, item, true);
        debug!(type_alias = %type_alias, count = loaded.len(), "loaded fields for item");
        item.fields = Some(FieldList::Fields(loaded));
    }

    let mut by_name = FieldsByName::new();
    match &item.fields {
        Some(FieldList::Fields(fields)) => {
            for field in fields {
                let normalized = normalize_field(field);
                trace!(field = %field.name, value = %normalized.value, "normalised field");
                by_name.insert(field.name.clone(), normalized);
            }
        }
        Some(FieldList::Malformed(raw)) => {
            debug!(kind = json_kind(raw), "ignoring malformed field collection");
        }
        None => {}
    }

    item.fields_by_name = Some(by_name);
    item.processed = true;
    item
}

/// Build the template-facing view of a single field.
pub fn normalize_field(field: &Field) -> NormalizedField {
    let value = if field.is_checkboxes() {
        selected_options(field)
    } else {
        match field.raw_value.unwrapped() {
            Value::String(text) => decode_json(&text).unwrap_or(Value::String(text)),
            other => other,
        }
    };

    NormalizedField {
        name: field.name.clone(),
        value,
        label: field.label.clone(),
        group: field.group_id,
        options: field.options.clone(),
    }
}

/// The options of a checkboxes field that are selected, in option order.
fn selected_options(field: &Field) -> Value {
    field
        .options
        .iter()
        .flatten()
        .filter(|option| field.raw_value.contains(&option.value))
        .map(FieldOption::to_json)
        .collect::<Vec<_>>()
        .into()
}

// ---------------------------------------------------------------------------
// JSON primitives
// ---------------------------------------------------------------------------

/// Whether `text` is a JSON document. The empty string counts; text made
/// only of whitespace does not.
pub fn is_json(text: &str) -> bool {
    text.is_empty() || serde_json::from_str::<serde::de::IgnoredAny>(text).is_ok()
}

/// Decode `text` if it is a JSON document; the empty string decodes to `null`.
pub fn decode_json(text: &str) -> Option<Value> {
    if text.is_empty() {
        return Some(Value::Null);
    }
    serde_json::from_str(text).ok()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
