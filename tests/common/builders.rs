//! Test builders — ergonomic constructors for `Field` and `Item`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use itemkit::{Field, FieldOption, Item, RawValue};

// ---------------------------------------------------------------------------
// FieldBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Field`] test fixtures.
///
/// # Example
///
/// ```rust
/// let field = FieldBuilder::new("diet")
///     .kind("checkboxes")
///     .option("Vegan", "v")
///     .option("Gluten free", "gf")
///     .values(["v", "gf"])
///     .build();
/// ```
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            field: Field {
                label: name.clone(),
                name,
                kind: "text".to_string(),
                ..Field::default()
            },
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.field.raw_value = RawValue::Single(value.into());
        self
    }

    pub fn values<const N: usize>(mut self, values: [&str; N]) -> Self {
        self.field.raw_value = RawValue::Multiple(values.iter().map(|v| v.to_string()).collect());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.field.label = label.into();
        self
    }

    pub fn group(mut self, group_id: u64) -> Self {
        self.field.group_id = group_id;
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.field.kind = kind.into();
        self
    }

    pub fn option(mut self, name: &str, value: &str) -> Self {
        self.field
            .options
            .get_or_insert_with(Vec::new)
            .push(FieldOption::new(name, value));
        self
    }

    pub fn build(self) -> Field {
        self.field
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A plain text field.
pub fn text_field(name: &str, value: &str) -> Field {
    FieldBuilder::new(name).value(value).build()
}

/// A checkboxes field with options `A=1`, `B=2`, `C=3`.
pub fn abc_checkboxes<const N: usize>(name: &str, selected: [&str; N]) -> Field {
    FieldBuilder::new(name)
        .kind("checkboxes")
        .option("A", "1")
        .option("B", "2")
        .option("C", "3")
        .values(selected)
        .build()
}

/// An item with preloaded fields.
pub fn item_with(fields: Vec<Field>) -> Item {
    Item::with_fields(fields)
}
