//! HTTP API route definitions.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::{middleware::from_fn, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{health, metrics, ready, status, AppState};
use super::middleware::track_latency;
use super::openapi::openapi_json;
use super::recipes::{create_recipe, delete_recipe, get_recipe, list_recipes, replace_recipe};
use super::shopping_list::{create_item, delete_item, get_item, list_items, replace_item};
use crate::error::ApiError;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health))
        .route("/ready", get(ready))
        // Status and metrics
        .route("/api/v1/status", get(status))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json))
        // Shopping list
        .route("/shopping-list", get(list_items).post(create_item))
        .route(
            "/shopping-list/:id",
            get(get_item).put(replace_item).delete(delete_item),
        )
        // Recipes
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/recipes/:id",
            get(get_recipe).put(replace_recipe).delete(delete_recipe),
        )
        .route_layer(from_fn(track_latency))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "handler panicked".to_string());
    ApiError::Internal(detail).into_response()
}
