//! Client-side RPC metrics using Prometheus.
//!
//! Counters and histograms are recorded for every call dispatched through a
//! client facade:
//!
//! - **Counters**: completed calls by method and status code, retries, pages
//!   fetched by pagers
//! - **Histograms**: end-to-end call latency, retries included

use once_cell::sync::Lazy;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::Arc;
use tracing::error;

/// Global metrics registry
static METRICS_REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Global metrics instance
pub static METRICS: Lazy<Arc<Metrics>> = Lazy::new(|| {
    let metrics = Metrics::new();
    if let Err(e) = metrics.register(&METRICS_REGISTRY) {
        error!("Failed to register metrics: {}", e);
    }
    Arc::new(metrics)
});

/// Metrics collector for pubsub-gapic
pub struct Metrics {
    /// Completed calls by method and final status code (counter)
    pub rpc_requests_total: IntCounterVec,
    /// Retried attempts by method (counter)
    pub rpc_retries_total: IntCounterVec,
    /// Follow-up pages fetched by pagers (counter)
    pub pages_fetched_total: IntCounterVec,
    /// Call latency in seconds, retries included (histogram)
    pub rpc_latency_seconds: HistogramVec,
}

impl Metrics {
    /// Create a new Metrics instance
    pub fn new() -> Self {
        let rpc_requests_total = IntCounterVec::new(
            Opts::new("pubsub_gapic_rpc_requests_total", "Total completed RPC calls"),
            &["method", "code"],
        )
        .expect("Failed to create rpc_requests_total metric");

        let rpc_retries_total = IntCounterVec::new(
            Opts::new("pubsub_gapic_rpc_retries_total", "Total retried RPC attempts"),
            &["method"],
        )
        .expect("Failed to create rpc_retries_total metric");

        let pages_fetched_total = IntCounterVec::new(
            Opts::new(
                "pubsub_gapic_pages_fetched_total",
                "Total follow-up pages fetched by pagers",
            ),
            &["method"],
        )
        .expect("Failed to create pages_fetched_total metric");

        let rpc_latency_seconds = HistogramVec::new(
            HistogramOpts::new("pubsub_gapic_rpc_latency_seconds", "RPC latency in seconds")
                .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
            &["method"],
        )
        .expect("Failed to create rpc_latency_seconds metric");

        Self {
            rpc_requests_total,
            rpc_retries_total,
            pages_fetched_total,
            rpc_latency_seconds,
        }
    }

    /// Register all metrics with the registry
    fn register(&self, registry: &Registry) -> Result<(), prometheus::Error> {
        registry.register(Box::new(self.rpc_requests_total.clone()))?;
        registry.register(Box::new(self.rpc_retries_total.clone()))?;
        registry.register(Box::new(self.pages_fetched_total.clone()))?;
        registry.register(Box::new(self.rpc_latency_seconds.clone()))?;
        Ok(())
    }

    /// Record a completed call.
    pub fn observe_call(&self, method: &str, code: tonic::Code, seconds: f64) {
        self.rpc_requests_total
            .with_label_values(&[method, code_label(code)])
            .inc();
        self.rpc_latency_seconds
            .with_label_values(&[method])
            .observe(seconds);
    }

    /// Gather metrics in Prometheus text format
    pub fn gather(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = METRICS_REGISTRY.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap_or_default())
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the global metrics instance
pub fn get_metrics() -> Arc<Metrics> {
    METRICS.clone()
}

/// Render the global registry in Prometheus text format.
pub fn gather() -> Result<String, prometheus::Error> {
    METRICS.gather()
}

fn code_label(code: tonic::Code) -> &'static str {
    use tonic::Code;
    match code {
        Code::Ok => "OK",
        Code::Cancelled => "CANCELLED",
        Code::Unknown => "UNKNOWN",
        Code::InvalidArgument => "INVALID_ARGUMENT",
        Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
        Code::NotFound => "NOT_FOUND",
        Code::AlreadyExists => "ALREADY_EXISTS",
        Code::PermissionDenied => "PERMISSION_DENIED",
        Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
        Code::FailedPrecondition => "FAILED_PRECONDITION",
        Code::Aborted => "ABORTED",
        Code::OutOfRange => "OUT_OF_RANGE",
        Code::Unimplemented => "UNIMPLEMENTED",
        Code::Internal => "INTERNAL",
        Code::Unavailable => "UNAVAILABLE",
        Code::DataLoss => "DATA_LOSS",
        Code::Unauthenticated => "UNAUTHENTICATED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        metrics.observe_call("GetTopic", tonic::Code::Ok, 0.01);
    }

    #[test]
    fn test_global_metrics_lazy_initialization() {
        let metrics1 = get_metrics();
        let metrics2 = get_metrics();
        assert!(Arc::ptr_eq(&metrics1, &metrics2));
    }

    #[test]
    fn test_metrics_gather() {
        let metrics = get_metrics();
        metrics.observe_call("ListTopics", tonic::Code::Unavailable, 0.2);
        metrics.rpc_retries_total.with_label_values(&["ListTopics"]).inc();

        let output = metrics.gather().expect("Failed to gather metrics");
        assert!(output.contains("pubsub_gapic_rpc_requests_total"));
        assert!(output.contains("code=\"UNAVAILABLE\""));
        assert!(output.contains("pubsub_gapic_rpc_retries_total"));
    }

    #[test]
    fn test_code_labels() {
        assert_eq!(code_label(tonic::Code::Ok), "OK");
        assert_eq!(code_label(tonic::Code::DeadlineExceeded), "DEADLINE_EXCEEDED");
    }
}
