//! Resource-agnostic CRUD operations behind the HTTP handlers.
//!
//! Each function takes the shared store of one resource and performs a single
//! store operation under its lock, so a request's mutation completes before
//! the next one starts.

use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::error::ApiError;
use crate::metrics;
use crate::store::{Record, RecordId, Replacement, SharedStore};

/// Parse a path id. Anything that is not a record id cannot name a record.
pub fn parse_id<R: Record>(raw: &str) -> Result<RecordId, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound {
        resource: R::RESOURCE,
        id: raw.to_string(),
    })
}

/// Every record, in insertion order.
pub async fn list<R: Record>(store: &SharedStore<R>) -> Json<Vec<R>> {
    Json(store.read().await.list().to_vec())
}

/// One record by path id.
pub async fn get<R: Record>(store: &SharedStore<R>, raw_id: &str) -> Result<Json<R>, ApiError> {
    let id = parse_id::<R>(raw_id)?;
    let record = store.read().await.get(id)?.clone();
    Ok(Json(record))
}

/// Store a new record and answer 201 with it.
pub async fn create<R: Record>(store: &SharedStore<R>, draft: R::Draft) -> (StatusCode, Json<R>) {
    let record = store.write().await.create(draft);

    metrics::inc_records_created(R::RESOURCE);
    info!(resource = %R::RESOURCE, id = %record.id(), "Record created");

    (StatusCode::CREATED, Json(record))
}

/// Replace the non-id fields of the record named by the path.
pub async fn replace<R: Record>(
    store: &SharedStore<R>,
    raw_id: &str,
    body: Replacement<R::Draft>,
) -> Result<Json<R>, ApiError> {
    let id = parse_id::<R>(raw_id)?;

    if let Some(body_id) = body.id {
        if body_id != id {
            return Err(ApiError::Validation(format!(
                "body id {} does not match path id {}",
                body_id, id
            )));
        }
    }

    let record = store.write().await.update(id, body.fields)?;

    metrics::inc_records_updated(R::RESOURCE);
    info!(resource = %R::RESOURCE, id = %id, "Record replaced");

    Ok(Json(record))
}

/// Remove the record named by the path and answer 204.
pub async fn delete<R: Record>(store: &SharedStore<R>, raw_id: &str) -> Result<StatusCode, ApiError> {
    let id = parse_id::<R>(raw_id)?;
    store.write().await.delete(id)?;

    metrics::inc_records_deleted(R::RESOURCE);
    info!(resource = %R::RESOURCE, id = %id, "Record deleted");

    Ok(StatusCode::NO_CONTENT)
}
