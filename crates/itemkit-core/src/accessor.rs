//! Field accessors — read one property of one named field.
//!
//! Every accessor first makes sure the item has been normalised, running
//! [`process`] with the given loader if it has not. A missing field is `None`;
//! templates that need the classic `false` sentinel can use [`or_false`].

use serde_json::Value;

use crate::normalizer::{process, FieldLoader};
use crate::types::{FieldProperty, Item};

/// `property` of the field called `field_name`, or `None` if there is no
/// such field.
pub fn field_property<L>(
    item: &mut Item,
    loader: &L,
    field_name: &str,
    property: FieldProperty,
) -> Option<Value>
where
    L: FieldLoader + ?Sized,
{
    ensure_processed(item, loader);
    item.fields_by_name
        .as_ref()?
        .get(field_name)
        .map(|field| field.property(property))
}

/// The field's group id.
pub fn field_group<L: FieldLoader + ?Sized>(item: &mut Item, loader: &L, field_name: &str) -> Option<Value> {
    field_property(item, loader, field_name, FieldProperty::Group)
}

/// The field's display label.
pub fn field_label<L: FieldLoader + ?Sized>(item: &mut Item, loader: &L, field_name: &str) -> Option<Value> {
    field_property(item, loader, field_name, FieldProperty::Label)
}

/// Every possible option of the field (`null` for non-choice fields).
pub fn field_options<L: FieldLoader + ?Sized>(item: &mut Item, loader: &L, field_name: &str) -> Option<Value> {
    field_property(item, loader, field_name, FieldProperty::Options)
}

/// The field's normalised value.
pub fn field_value<L: FieldLoader + ?Sized>(item: &mut Item, loader: &L, field_name: &str) -> Option<Value> {
    field_property(item, loader, field_name, FieldProperty::Value)
}

/// Collapse a lookup to the template sentinel: the value, or `false`.
pub fn or_false(lookup: Option<Value>) -> Value {
    lookup.unwrap_or(Value::Bool(false))
}

fn ensure_processed<L: FieldLoader + ?Sized>(item: &mut Item, loader: &L) {
    if !item.processed {
        process(item, loader);
    }
}
