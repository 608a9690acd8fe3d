//! Prometheus metrics for request latency and store activity.
//!
//! This module provides metrics for:
//! - HTTP request latency per matched route
//! - Records created, updated and deleted per resource
//! - Requests rejected with a client or server error

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::store::Resource;

// === Metric Name Constants ===

/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";
/// Records created counter metric name.
pub const METRIC_RECORDS_CREATED: &str = "records_created_total";
/// Records updated counter metric name.
pub const METRIC_RECORDS_UPDATED: &str = "records_updated_total";
/// Records deleted counter metric name.
pub const METRIC_RECORDS_DELETED: &str = "records_deleted_total";
/// Rejected requests counter metric name.
pub const METRIC_REQUESTS_REJECTED: &str = "requests_rejected_total";

/// Install the global Prometheus recorder and register metric descriptions.
///
/// Call this once at startup. The returned handle renders the exposition
/// served on `/metrics`.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );
    describe_counter!(METRIC_RECORDS_CREATED, "Total number of records created");
    describe_counter!(METRIC_RECORDS_UPDATED, "Total number of records replaced");
    describe_counter!(METRIC_RECORDS_DELETED, "Total number of records deleted");
    describe_counter!(
        METRIC_REQUESTS_REJECTED,
        "Total number of requests answered with an error status"
    );

    debug!("Metrics initialized");
    Ok(handle)
}

/// Record HTTP request latency.
pub fn record_http_latency(start: Instant, endpoint: &str, status: u16) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .record(latency_ms);
}

/// Increment records created counter.
pub fn inc_records_created(resource: Resource) {
    let label: &'static str = resource.into();
    counter!(METRIC_RECORDS_CREATED, "resource" => label).increment(1);
}

/// Increment records updated counter.
pub fn inc_records_updated(resource: Resource) {
    let label: &'static str = resource.into();
    counter!(METRIC_RECORDS_UPDATED, "resource" => label).increment(1);
}

/// Increment records deleted counter.
pub fn inc_records_deleted(resource: Resource) {
    let label: &'static str = resource.into();
    counter!(METRIC_RECORDS_DELETED, "resource" => label).increment(1);
}

/// Increment rejected requests counter.
pub fn inc_requests_rejected(status: u16) {
    counter!(METRIC_REQUESTS_REJECTED, "status" => status.to_string()).increment(1);
}
