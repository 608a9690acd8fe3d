//! In-memory record stores for shopping-list items and recipes.
//!
//! This module handles:
//! - Record types and their creation drafts
//! - The generic ordered store backing both resources
//! - Demo data for seeding a fresh process

pub mod memory;
pub mod record;
pub mod seed;
pub mod types;

pub use memory::{SharedStore, Store};
pub use record::{Record, RecordId, Replacement, Resource};
pub use types::{Item, ItemDraft, Recipe, RecipeDraft};
