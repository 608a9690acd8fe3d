//! Ordered in-memory store shared by both resources.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::record::{Record, RecordId};
use crate::error::StoreError;

/// Store handle shared between request handlers.
pub type SharedStore<R> = Arc<RwLock<Store<R>>>;

/// Insertion-ordered collection of records with server-assigned ids.
#[derive(Debug, Clone)]
pub struct Store<R> {
    records: Vec<R>,
    next_id: u64,
}

impl<R: Record> Store<R> {
    /// Create an empty store. The first record gets id 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store pre-populated from drafts, in order.
    pub fn from_drafts(drafts: impl IntoIterator<Item = R::Draft>) -> Self {
        let mut store = Self::new();
        for draft in drafts {
            store.create(draft);
        }
        store
    }

    /// Wrap the store for sharing across handlers.
    pub fn into_shared(self) -> SharedStore<R> {
        Arc::new(RwLock::new(self))
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[R] {
        &self.records
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: RecordId) -> Result<&R, StoreError> {
        self.records
            .iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| Self::not_found(id))
    }

    /// Append a new record built from `draft` and return it.
    pub fn create(&mut self, draft: R::Draft) -> R {
        let id = RecordId(self.next_id);
        self.next_id += 1;

        let record = R::from_draft(id, draft);
        self.records.push(record.clone());
        record
    }

    /// Replace every non-id field of the record with `id`.
    ///
    /// The record keeps its position in the collection.
    pub fn update(&mut self, id: RecordId, draft: R::Draft) -> Result<R, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| Self::not_found(id))?;

        record.apply(draft);
        Ok(record.clone())
    }

    /// Remove the record with `id` and hand it back.
    pub fn delete(&mut self, id: RecordId) -> Result<R, StoreError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| Self::not_found(id))?;

        Ok(self.records.remove(index))
    }

    fn not_found(id: RecordId) -> StoreError {
        StoreError::NotFound {
            resource: R::RESOURCE,
            id,
        }
    }
}

impl<R: Record> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
