//! Unified error types for the pantry API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::metrics;
use crate::store::{RecordId, Resource};

/// Unified error type for the pantry API.
#[derive(Error, Debug)]
pub enum PantryError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration values failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The background server task panicked or was cancelled.
    #[error("server task failed: {0}")]
    ServerTask(#[from] tokio::task::JoinError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// In-memory store errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the requested id.
    #[error("{resource} record {id} not found")]
    NotFound {
        /// Collection that was searched.
        resource: Resource,
        /// Requested id.
        id: RecordId,
    },
}

/// Request-level errors, rendered as JSON responses.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed body, missing fields or conflicting ids.
    #[error("{0}")]
    Validation(String),

    /// Unknown record id.
    #[error("{resource} record {id} not found")]
    NotFound {
        /// Collection that was searched.
        resource: Resource,
        /// Id as it appeared in the request path.
        id: String,
    },

    /// Anything else. Detail is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { resource, id } => ApiError::NotFound {
                resource,
                id: id.to_string(),
            },
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        metrics::inc_requests_rejected(status.as_u16());

        let message = match &self {
            ApiError::Internal(detail) => {
                error!(detail = %detail, "Request failed");
                "internal server error".to_string()
            }
            other => {
                debug!(status = status.as_u16(), "Request rejected: {}", other);
                other.to_string()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// HTTP client errors.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport or decoding failure.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a status other than the expected one.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// Status code returned.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

impl ClientError {
    /// Status code of an unexpected response, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::UnexpectedStatus { status, .. } => Some(*status),
            ClientError::Http(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, PantryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_statuses() {
        assert_eq!(
            ApiError::Validation("missing field `name`".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn panicked_server_task_is_not_reported_as_io() {
        let join_err = tokio::spawn(async { panic!("serve loop crashed") })
            .await
            .unwrap_err();

        let err = PantryError::from(join_err);
        assert!(matches!(err, PantryError::ServerTask(_)));
        assert!(err.to_string().starts_with("server task failed"));
    }

    #[test]
    fn store_not_found_maps_to_404() {
        let err: ApiError = StoreError::NotFound {
            resource: Resource::Recipes,
            id: RecordId(4),
        }
        .into();

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "recipes record 4 not found");
    }
}
