//! HTTP API module: resource routes plus health, status and metrics endpoints.

pub mod crud;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod recipes;
pub mod routes;
pub mod shopping_list;

pub use handlers::AppState;
pub use routes::create_router;
