//! Record identity and the trait shared by every stored resource.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use utoipa::ToSchema;

/// Resource collections exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
pub enum Resource {
    /// Shopping-list items.
    #[strum(serialize = "shopping-list")]
    ShoppingList,
    /// Recipes.
    #[strum(serialize = "recipes")]
    Recipes,
}

impl Resource {
    /// Collection path, e.g. `/recipes`.
    pub fn path(&self) -> String {
        format!("/{}", self)
    }

    /// Path of a single record, e.g. `/recipes/3`.
    pub fn record_path(&self, id: RecordId) -> String {
        format!("/{}/{}", self, id)
    }
}

/// Server-assigned record identifier.
///
/// Serialized as a bare JSON number. Identifiers start at 1 and are never
/// reused within a store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(RecordId)
    }
}

/// A record held by a [`Store`](super::Store).
///
/// Ties a record type to the draft it is built from and to the resource
/// collection it belongs to.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Non-id fields supplied by clients on create and replace.
    type Draft: Clone + Serialize + DeserializeOwned + Send + 'static;

    /// Collection this record lives in.
    const RESOURCE: Resource;

    /// Record identifier.
    fn id(&self) -> RecordId;

    /// Build a record from a draft and a freshly assigned id.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    /// Overwrite every non-id field with the draft.
    fn apply(&mut self, draft: Self::Draft);
}

/// Full-replacement body: the draft fields plus an optional echo of the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Replacement<D> {
    /// Id echoed by the client; must match the path id when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Replacement field values.
    #[serde(flatten)]
    pub fields: D,
}

impl<D> Replacement<D> {
    /// Replacement carrying the record id.
    pub fn new(id: RecordId, fields: D) -> Self {
        Self {
            id: Some(id),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_paths() {
        assert_eq!(Resource::ShoppingList.path(), "/shopping-list");
        assert_eq!(Resource::Recipes.record_path(RecordId(7)), "/recipes/7");
        assert_eq!(
            "shopping-list".parse::<Resource>().ok(),
            Some(Resource::ShoppingList)
        );
    }

    #[test]
    fn record_id_parses_only_integers() {
        assert_eq!("42".parse::<RecordId>().ok(), Some(RecordId(42)));
        assert!("abc".parse::<RecordId>().is_err());
        assert!("-1".parse::<RecordId>().is_err());
    }
}
