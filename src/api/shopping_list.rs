//! `/shopping-list` handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::crud;
use super::extract::JsonBody;
use super::handlers::AppState;
use crate::error::{ApiError, ErrorBody};
use crate::store::{Item, ItemDraft, Replacement};

/// List every shopping-list item.
#[utoipa::path(
    get,
    path = "/shopping-list",
    tag = "shopping-list",
    responses((status = 200, description = "All items in insertion order", body = Vec<Item>))
)]
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    crud::list(&state.shopping_list).await
}

/// Fetch one item.
#[utoipa::path(
    get,
    path = "/shopping-list/{id}",
    tag = "shopping-list",
    params(("id" = String, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 404, description = "Unknown id", body = ErrorBody)
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    crud::get(&state.shopping_list, &id).await
}

/// Add an item.
#[utoipa::path(
    post,
    path = "/shopping-list",
    tag = "shopping-list",
    request_body = ItemDraft,
    responses(
        (status = 201, description = "Stored item with its new id", body = Item),
        (status = 400, description = "Missing or malformed fields", body = ErrorBody)
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<ItemDraft>,
) -> (StatusCode, Json<Item>) {
    crud::create(&state.shopping_list, draft).await
}

/// Replace an item's name and checked flag.
#[utoipa::path(
    put,
    path = "/shopping-list/{id}",
    tag = "shopping-list",
    params(("id" = String, Path, description = "Item id")),
    request_body = Item,
    responses(
        (status = 200, description = "Updated item", body = Item),
        (status = 400, description = "Malformed body or id mismatch", body = ErrorBody),
        (status = 404, description = "Unknown id", body = ErrorBody)
    )
)]
pub async fn replace_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<Replacement<ItemDraft>>,
) -> Result<Json<Item>, ApiError> {
    crud::replace(&state.shopping_list, &id, body).await
}

/// Remove an item.
#[utoipa::path(
    delete,
    path = "/shopping-list/{id}",
    tag = "shopping-list",
    params(("id" = String, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item removed"),
        (status = 404, description = "Unknown id", body = ErrorBody)
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    crud::delete(&state.shopping_list, &id).await
}
