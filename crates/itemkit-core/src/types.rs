//! Core types for itemkit-core.
//!
//! This module defines the records shared across the crate: the host-supplied
//! [`Item`] with its raw [`Field`] collection, and the [`NormalizedField`]
//! view the normalizer builds from it.

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::PropertyParseError;

/// Field type tag of multi-select checkbox fields.
pub const CHECKBOXES: &str = "checkboxes";

/// Name → normalised field, in field-collection order.
pub type FieldsByName = IndexMap<String, NormalizedField>;

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// A content record being rendered (an article, a contact, a category …).
///
/// The host owns the item. [`crate::normalizer::process`] mutates it in place:
/// it may fill in `fields` from a loader, always rebuilds `fields_by_name`,
/// and sets `processed`. Attributes the crate does not know about are kept in
/// `extra` and written back out untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Host identifier, used by loaders that key fields per item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Content type tag, e.g. `com_content.article`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_alias: Option<String>,
    /// Raw custom fields. `None` means "not loaded yet".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldList>,
    /// Derived lookup, rebuilt from `fields` on every normalisation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields_by_name: Option<FieldsByName>,
    /// True once `fields_by_name` reflects `fields`.
    #[serde(default)]
    pub processed: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// An item with a preloaded field collection.
    pub fn with_fields(fields: Vec<Field>) -> Self {
        Self {
            fields: Some(FieldList::Fields(fields)),
            ..Self::default()
        }
    }

    /// Swap in a new field collection. The item is marked unprocessed so the
    /// next accessor call rebuilds the lookup.
    pub fn replace_fields(&mut self, fields: Vec<Field>) {
        self.fields = Some(FieldList::Fields(fields));
        self.processed = false;
    }

    /// The normalised field called `name`, if the item has been processed.
    pub fn field(&self, name: &str) -> Option<&NormalizedField> {
        self.fields_by_name.as_ref()?.get(name)
    }
}

/// The raw field collection attached to an item.
///
/// Hosts occasionally hand over something that is not a list at all; that is
/// kept verbatim as `Malformed` and normalises to an empty lookup. A list is
/// decoded entry by entry: an entry that is not a field at all (no name, not
/// an object) is dropped on its own and the rest of the list is kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldList {
    Fields(Vec<Field>),
    Malformed(Value),
}

impl FieldList {
    /// The well-formed fields, or an empty slice.
    pub fn as_slice(&self) -> &[Field] {
        match self {
            FieldList::Fields(fields) => fields,
            FieldList::Malformed(_) => &[],
        }
    }
}

impl<'de> Deserialize<'de> for FieldList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = match Value::deserialize(deserializer)? {
            Value::Array(entries) => entries,
            other => return Ok(FieldList::Malformed(other)),
        };

        let fields = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<Field>(entry) {
                Ok(field) => Some(field),
                Err(err) => {
                    debug!(index, %err, "skipping undecodable field entry");
                    None
                }
            })
            .collect();
        Ok(FieldList::Fields(fields))
    }
}

impl From<Vec<Field>> for FieldList {
    fn from(fields: Vec<Field>) -> Self {
        FieldList::Fields(fields)
    }
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// A custom field as loaded by the host.
///
/// Hosts are loose about scalar types (group ids arrive as `"2"`, labels as
/// `null`, values as numbers), so attributes are decoded leniently. Only a
/// missing `name` rejects the entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default)]
    pub raw_value: RawValue,
    #[serde(default, deserialize_with = "lenient_text")]
    pub label: String,
    /// Field group; 0 for ungrouped fields. Numeric strings are accepted.
    #[serde(default, deserialize_with = "lenient_group_id")]
    pub group_id: u64,
    /// Field type tag (`text`, `list`, `checkboxes`, `repeatable` …).
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: String,
    /// Every possible option, for choice-type fields. Either a list or an
    /// object of `{name, value}` entries (`{"options0": {...}, ...}`).
    #[serde(
        default,
        deserialize_with = "lenient_options",
        skip_serializing_if = "Option::is_none"
    )]
    pub options: Option<Vec<FieldOption>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Field {
    pub fn is_checkboxes(&self) -> bool {
        self.kind == CHECKBOXES
    }
}

/// A field's stored value: one string, or several for multi-value fields.
///
/// Decoding accepts any JSON: scalars become their text (`null` and `false`
/// become `""`, `true` becomes `"1"`), lists become `Multiple` with each
/// entry converted the same way, objects are kept as JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Single(String),
    Multiple(Vec<String>),
}

impl Default for RawValue {
    fn default() -> Self {
        RawValue::Single(String::new())
    }
}

impl RawValue {
    /// The template-facing value: a one-element list is unwrapped to its
    /// element, anything else is returned as is.
    pub fn unwrapped(&self) -> Value {
        match self {
            RawValue::Single(value) => Value::String(value.clone()),
            RawValue::Multiple(values) if values.len() == 1 => Value::String(values[0].clone()),
            RawValue::Multiple(values) => {
                Value::Array(values.iter().cloned().map(Value::String).collect())
            }
        }
    }

    /// Whether `candidate` is (one of) the selected value(s).
    ///
    /// Comparison is exact string equality: `"1"` does not match `"01"` or
    /// `"1.0"`, unlike a loosely typed host comparison.
    pub fn contains(&self, candidate: &str) -> bool {
        match self {
            RawValue::Single(value) => value == candidate,
            RawValue::Multiple(values) => values.iter().any(|v| v == candidate),
        }
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(values) => RawValue::Multiple(values.iter().map(scalar_text).collect()),
            other => RawValue::Single(scalar_text(&other)),
        })
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Single(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Single(value)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(values: Vec<String>) -> Self {
        RawValue::Multiple(values)
    }
}

impl From<Vec<&str>> for RawValue {
    fn from(values: Vec<&str>) -> Self {
        RawValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

/// One `{name, value}` choice of a list/checkboxes field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldOption {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub value: String,
}

impl FieldOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::json!({ "name": self.name, "value": self.value })
    }
}

// ---------------------------------------------------------------------------
// Lenient decoding
// ---------------------------------------------------------------------------

/// Text form of a loosely typed host value.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(&Value::deserialize(deserializer)?))
}

fn lenient_group_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_u64().unwrap_or_default(),
        Value::String(text) => text.trim().parse().unwrap_or_default(),
        _ => 0,
    })
}

fn lenient_options<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<FieldOption>>, D::Error> {
    let entries: Vec<Value> = match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries,
        Value::Object(entries) => entries.into_iter().map(|(_, entry)| entry).collect(),
        _ => return Ok(None),
    };
    entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).map_err(D::Error::custom))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

// ---------------------------------------------------------------------------
// Normalised view
// ---------------------------------------------------------------------------

/// A field as templates see it after normalisation.
///
/// `value` is the unwrapped raw value, the selected options for checkboxes
/// fields, or the decoded structure when the value was a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedField {
    pub name: String,
    pub value: Value,
    pub label: String,
    pub group: u64,
    pub options: Option<Vec<FieldOption>>,
}

impl NormalizedField {
    /// Read one property as a JSON value.
    pub fn property(&self, property: FieldProperty) -> Value {
        match property {
            FieldProperty::Name => Value::String(self.name.clone()),
            FieldProperty::Value => self.value.clone(),
            FieldProperty::Label => Value::String(self.label.clone()),
            FieldProperty::Group => Value::from(self.group),
            FieldProperty::Options => match &self.options {
                Some(options) => Value::Array(options.iter().map(FieldOption::to_json).collect()),
                None => Value::Null,
            },
        }
    }
}

/// The addressable properties of a [`NormalizedField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldProperty {
    Name,
    Value,
    Label,
    Group,
    Options,
}

impl FieldProperty {
    pub const ALL: [FieldProperty; 5] = [
        FieldProperty::Name,
        FieldProperty::Value,
        FieldProperty::Label,
        FieldProperty::Group,
        FieldProperty::Options,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldProperty::Name => "name",
            FieldProperty::Value => "value",
            FieldProperty::Label => "label",
            FieldProperty::Group => "group",
            FieldProperty::Options => "options",
        }
    }
}

impl std::fmt::Display for FieldProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldProperty {
    type Err = PropertyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldProperty::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PropertyParseError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
