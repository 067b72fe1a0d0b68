//! Domain-specific assertion macros for itemkit harnesses.
//!
//! These add context-rich failure messages that make it clear which field
//! was wrong and what the item actually contained.

// ---------------------------------------------------------------------------
// Field assertions
// ---------------------------------------------------------------------------

/// Assert that a processed `Item` has a field whose normalised value equals
/// the given JSON.
///
/// ```rust
/// assert_field_value!(item, "servings", 4);
/// ```
#[macro_export]
macro_rules! assert_field_value {
    ($item:expr, $name:expr, $($value:tt)+) => {{
        let item: &itemkit::Item = &$item;
        let name: &str = $name;
        let expected = serde_json::json!($($value)+);
        match item.field(name) {
            Some(field) if field.value == expected => {}
            Some(field) => panic!(
                "assert_field_value! failed:\n  fields_by_name[{:?}].value\n  expected: {}\n  actual:   {}",
                name, expected, field.value
            ),
            None => panic!(
                "assert_field_value! failed: field {:?} not found.\n  Available fields: {:?}",
                name,
                item.fields_by_name
                    .as_ref()
                    .map(|m| m.keys().collect::<Vec<_>>())
                    .unwrap_or_default()
            ),
        }
    }};
}

/// Assert that an `Item` has been processed and has exactly the given field
/// names, in order.
///
/// ```rust
/// assert_field_names!(item, ["subtitle", "diet"]);
/// ```
#[macro_export]
macro_rules! assert_field_names {
    ($item:expr, [$($name:expr),* $(,)?]) => {{
        let item: &itemkit::Item = &$item;
        assert!(item.processed, "assert_field_names! failed: item not processed");
        let actual: Vec<&str> = item
            .fields_by_name
            .as_ref()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default();
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(actual, expected, "assert_field_names! failed");
    }};
}
