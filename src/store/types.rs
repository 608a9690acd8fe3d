//! Record types for the shopping list and recipe collections.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record::{Record, RecordId, Resource};

/// Shopping-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Server-assigned identifier.
    pub id: RecordId,
    /// What to buy.
    pub name: String,
    /// Whether the item has been picked up.
    pub checked: bool,
}

/// Fields of a shopping-list entry without its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemDraft {
    /// What to buy.
    pub name: String,
    /// Whether the item has been picked up.
    pub checked: bool,
}

impl ItemDraft {
    /// Unchecked item with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checked: false,
        }
    }
}

impl Record for Item {
    type Draft = ItemDraft;

    const RESOURCE: Resource = Resource::ShoppingList;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            checked: draft.checked,
        }
    }

    fn apply(&mut self, draft: ItemDraft) {
        self.name = draft.name;
        self.checked = draft.checked;
    }
}

/// Recipe with its ordered ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    /// Server-assigned identifier.
    pub id: RecordId,
    /// Recipe title.
    pub name: String,
    /// Ingredients in display order.
    pub ingredients: Vec<String>,
}

/// Fields of a recipe without its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDraft {
    /// Recipe title.
    pub name: String,
    /// Ingredients in display order.
    pub ingredients: Vec<String>,
}

impl RecipeDraft {
    /// Draft from a name and any iterable of ingredient names.
    pub fn new<I, S>(name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

impl Record for Recipe {
    type Draft = RecipeDraft;

    const RESOURCE: Resource = Resource::Recipes;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: RecipeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            ingredients: draft.ingredients,
        }
    }

    fn apply(&mut self, draft: RecipeDraft) {
        self.name = draft.name;
        self.ingredients = draft.ingredients;
    }
}
