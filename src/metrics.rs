//! Request metrics.
//!
//! Emitted through the `metrics` facade; with no recorder installed every
//! call is a no-op, so an exporter can be wired in without touching handlers.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(METRIC_HTTP_REQUESTS, "Total number of HTTP requests served");
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Record one served request and its latency.
pub fn record_http_request(start: Instant, route: &str, status: u16) {
    let latency_ms = elapsed_ms(start);
    counter!(
        METRIC_HTTP_REQUESTS,
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "route" => route.to_string()).record(latency_ms);
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
