//! Application state and operational HTTP handlers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::store::seed::{demo_items, demo_recipes};
use crate::store::{Item, Recipe, SharedStore, Store};

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Whether the server is accepting requests.
    pub ready: Arc<AtomicBool>,
    /// Shopping-list items.
    pub shopping_list: SharedStore<Item>,
    /// Recipes.
    pub recipes: SharedStore<Recipe>,
    /// When this state was created.
    pub started_at: OffsetDateTime,
    /// Prometheus exposition handle, if a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new app state with empty stores.
    pub fn new() -> Self {
        Self::with_stores(Store::new(), Store::new())
    }

    /// Create app state with both stores holding the demo records.
    pub fn seeded() -> Self {
        Self::with_stores(
            Store::from_drafts(demo_items()),
            Store::from_drafts(demo_recipes()),
        )
    }

    /// Create app state around existing stores.
    pub fn with_stores(shopping_list: Store<Item>, recipes: Store<Recipe>) -> Self {
        Self {
            ready: Arc::new(AtomicBool::new(false)),
            shopping_list: shopping_list.into_shared(),
            recipes: recipes.into_shared(),
            started_at: OffsetDateTime::now_utc(),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle so `/metrics` can render it.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Set ready state.
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    /// Check if ready.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// Whether service is ready.
    pub ready: bool,
}

/// Status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Service status.
    pub status: &'static str,
    /// Start time, RFC 3339.
    pub started_at: String,
    /// Seconds since start.
    pub uptime_seconds: i64,
    /// Record counts.
    pub counts: CountsResponse,
}

/// Record counts in status response.
#[derive(Debug, Serialize)]
pub struct CountsResponse {
    /// Shopping-list items stored.
    pub shopping_list: usize,
    /// Recipes stored.
    pub recipes: usize,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Readiness check handler - returns 200 if ready, 503 otherwise.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let is_ready = state.is_ready();
    let response = ReadyResponse { ready: is_ready };

    if is_ready {
        (StatusCode::OK, Json(response))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response))
    }
}

/// Status handler - returns uptime and record counts.
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let shopping_list = state.shopping_list.read().await.len();
    let recipes = state.recipes.read().await.len();

    let status = if state.is_ready() { "running" } else { "starting" };
    let uptime = OffsetDateTime::now_utc() - state.started_at;

    Json(StatusResponse {
        status,
        started_at: state
            .started_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| state.started_at.unix_timestamp().to_string()),
        uptime_seconds: uptime.whole_seconds(),
        counts: CountsResponse {
            shopping_list,
            recipes,
        },
    })
}

/// Prometheus exposition. 404 when no recorder is installed.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
