//! Demo records for a freshly started server.

use super::types::{ItemDraft, RecipeDraft};

/// Shopping-list entries loaded when seeding is enabled.
pub fn demo_items() -> Vec<ItemDraft> {
    vec![
        ItemDraft::new("Eggs"),
        ItemDraft::new("Milk"),
        ItemDraft {
            name: "Bread".to_string(),
            checked: true,
        },
    ]
}

/// Recipes loaded when seeding is enabled.
pub fn demo_recipes() -> Vec<RecipeDraft> {
    vec![
        RecipeDraft::new("Pancakes", ["flour", "eggs", "milk", "butter"]),
        RecipeDraft::new("Omelette", ["eggs", "salt", "pepper"]),
    ]
}
