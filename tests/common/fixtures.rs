//! Static fixtures used across harnesses: item documents as a host would hand
//! them over, a field catalog, and markup snippets for the truncator.

use itemkit::Item;

/// A recipe article with one field of each interesting shape.
pub const ARTICLE_JSON: &str = r#"{
    "id": 42,
    "title": "Spring greens",
    "state": 1,
    "fields": [
        { "name": "subtitle", "raw_value": "Fresh from the garden", "label": "Subtitle", "group_id": 1, "type": "text" },
        { "name": "diet", "raw_value": ["v", "gf"], "label": "Diet", "group_id": 2, "type": "checkboxes",
          "options": [
              { "name": "Vegan", "value": "v" },
              { "name": "Nut free", "value": "nf" },
              { "name": "Gluten free", "value": "gf" }
          ] },
        { "name": "servings", "raw_value": ["4"], "label": "Servings", "group_id": 1, "type": "integer" },
        { "name": "steps", "raw_value": "{\"row0\":{\"step\":\"Wash\"},\"row1\":{\"step\":\"Chop\"}}",
          "label": "Steps", "group_id": 2, "type": "repeatable" },
        { "name": "tags", "raw_value": ["spring", "quick"], "label": "Tags", "group_id": 0, "type": "list" },
        { "name": "course", "raw_value": "main", "label": "Course", "group_id": 0, "type": "list",
          "options": [ { "name": "Starter", "value": "starter" }, { "name": "Main", "value": "main" } ],
          "params": { "display": 2 } }
    ]
}"#;

/// An article as a loosely typed host hands it over: numeric and null raw
/// values, string group ids, a null label, and two entries that are not
/// fields at all.
pub const LOOSE_ARTICLE_JSON: &str = r#"{
    "id": 43,
    "fields": [
        { "name": "subtitle", "raw_value": "Kept", "label": "Subtitle", "group_id": 1, "type": "text" },
        { "name": "rating", "raw_value": 5, "label": null, "group_id": "2", "type": "integer" },
        { "name": "notes", "raw_value": null, "label": "Notes", "group_id": "", "type": "textarea" },
        { "label": "Nameless" },
        "not a field",
        { "name": "colours", "raw_value": ["r", 2], "label": "Colours", "group_id": "3", "type": "checkboxes",
          "options": [ { "name": "Red", "value": "r" }, { "name": "Blue", "value": "b" }, { "name": "Two", "value": 2 } ] }
    ]
}"#;

/// A contact that arrives without fields; they come from [`CATALOG_JSON`].
pub const CONTACT_JSON: &str = r#"{
    "id": 7,
    "type_alias": "com_contact.contact",
    "name": "Ada"
}"#;

/// Field catalog covering the contact above.
pub const CATALOG_JSON: &str = r#"{
    "com_contact.contact": {
        "default": [
            { "name": "phone", "raw_value": "", "label": "Phone", "type": "text" }
        ],
        "items": {
            "7": [
                { "name": "phone", "raw_value": "555-0100", "label": "Phone", "type": "text" },
                { "name": "office", "raw_value": "3", "label": "Office", "group_id": 4, "type": "integer" }
            ]
        }
    }
}"#;

/// Markup snippets and their stripped text.
pub const MARKUP_CORPUS: &[(&str, &str)] = &[
    ("<p>Plain paragraph.</p>", "Plain paragraph."),
    ("<h2 class=\"lead\">Title</h2><p>Body <a href='/x'>link</a>.</p>", "TitleBody link."),
    ("<ul><li>one</li><li>two</li></ul>", "onetwo"),
    ("Text with <!-- a comment --> inside", "Text with  inside"),
    ("<img src=\"a.png\" alt=\"x > y\"/>caption", "caption"),
    ("3 < 4 and 5 > 4", "3 < 4 and 5 > 4"),
    ("I <3 markup", "I "),
];

pub fn article() -> Item {
    serde_json::from_str(ARTICLE_JSON).expect("ARTICLE_JSON must parse")
}

pub fn loose_article() -> Item {
    serde_json::from_str(LOOSE_ARTICLE_JSON).expect("LOOSE_ARTICLE_JSON must parse")
}

pub fn contact() -> Item {
    serde_json::from_str(CONTACT_JSON).expect("CONTACT_JSON must parse")
}

/// A long paragraph of `n` numbered words, e.g. `w0 w1 w2 …`.
pub fn numbered_words(n: usize) -> String {
    (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
}
