//! OpenAPI document for the resource routes.

use axum::Json;
use utoipa::OpenApi;

use super::{recipes, shopping_list};
use crate::error::ErrorBody;
use crate::store::{Item, ItemDraft, Recipe, RecipeDraft, RecordId};

/// OpenAPI description of every resource route.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pantry API",
        description = "In-memory shopping list and recipe store"
    ),
    paths(
        shopping_list::list_items,
        shopping_list::get_item,
        shopping_list::create_item,
        shopping_list::replace_item,
        shopping_list::delete_item,
        recipes::list_recipes,
        recipes::get_recipe,
        recipes::create_recipe,
        recipes::replace_recipe,
        recipes::delete_recipe,
    ),
    components(schemas(Item, ItemDraft, Recipe, RecipeDraft, RecordId, ErrorBody)),
    tags(
        (name = "shopping-list", description = "Shopping-list items"),
        (name = "recipes", description = "Recipes and their ingredients")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
