//! Prometheus metrics for portal-service.
//!
//! Exposes lookup/render collectors and an HTTP handler for the `/metrics` endpoint.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

lazy_static! {
    /// Channel lookups by kind (direct, search) and outcome (found, not_found, empty).
    pub static ref CHANNEL_LOOKUPS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "portal_channel_lookups_total",
        "Channel lookups segmented by kind and outcome",
        &["kind", "outcome"]
    )
    .expect("failed to register portal_channel_lookups_total");

    /// Rendered pages by template (home, stream).
    pub static ref PAGE_RENDERS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "portal_page_renders_total",
        "Rendered pages segmented by page",
        &["page"]
    )
    .expect("failed to register portal_page_renders_total");
}

pub fn record_lookup(kind: &str, outcome: &str) {
    CHANNEL_LOOKUPS_TOTAL
        .with_label_values(&[kind, outcome])
        .inc();
}

pub fn record_render(page: &str) {
    PAGE_RENDERS_TOTAL.with_label_values(&[page]).inc();
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
