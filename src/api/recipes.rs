//! `/recipes` handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::crud;
use super::extract::JsonBody;
use super::handlers::AppState;
use crate::error::{ApiError, ErrorBody};
use crate::store::{Recipe, RecipeDraft, Replacement};

/// List every recipe.
#[utoipa::path(
    get,
    path = "/recipes",
    tag = "recipes",
    responses((status = 200, description = "All recipes in insertion order", body = Vec<Recipe>))
)]
pub async fn list_recipes(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    crud::list(&state.recipes).await
}

/// Fetch one recipe.
#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "recipes",
    params(("id" = String, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "The recipe", body = Recipe),
        (status = 404, description = "Unknown id", body = ErrorBody)
    )
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    crud::get(&state.recipes, &id).await
}

/// Add a recipe.
#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipes",
    request_body = RecipeDraft,
    responses(
        (status = 201, description = "Stored recipe with its new id", body = Recipe),
        (status = 400, description = "Missing or malformed fields", body = ErrorBody)
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<RecipeDraft>,
) -> (StatusCode, Json<Recipe>) {
    crud::create(&state.recipes, draft).await
}

/// Replace a recipe's name and ingredients.
#[utoipa::path(
    put,
    path = "/recipes/{id}",
    tag = "recipes",
    params(("id" = String, Path, description = "Recipe id")),
    request_body = Recipe,
    responses(
        (status = 200, description = "Updated recipe", body = Recipe),
        (status = 400, description = "Malformed body or id mismatch", body = ErrorBody),
        (status = 404, description = "Unknown id", body = ErrorBody)
    )
)]
pub async fn replace_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<Replacement<RecipeDraft>>,
) -> Result<Json<Recipe>, ApiError> {
    crud::replace(&state.recipes, &id, body).await
}

/// Remove a recipe.
#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    tag = "recipes",
    params(("id" = String, Path, description = "Recipe id")),
    responses(
        (status = 204, description = "Recipe removed"),
        (status = 404, description = "Unknown id", body = ErrorBody)
    )
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    crud::delete(&state.recipes, &id).await
}
