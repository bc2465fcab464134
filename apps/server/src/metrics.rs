//! Metrics collection for the weather server
//!
//! Holds the Prometheus collectors behind an explicitly constructed
//! registry object owned by application state, rather than process-wide
//! globals. Label children are created lazily on first observation, so a
//! scrape only lists routes and status codes that have actually been seen.

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::time::Duration;

/// Request pipeline metrics.
pub struct Metrics {
    registry: Registry,
    /// Total HTTP requests by route pattern
    pub http_requests_total: IntCounterVec,
    /// HTTP responses by status code
    pub response_status: IntCounterVec,
    /// Request duration in seconds by route pattern
    pub http_response_time_seconds: HistogramVec,
}

impl Metrics {
    /// Build the registry and register all collectors into it.
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Number of get requests."),
            &["path"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let response_status = IntCounterVec::new(
            Opts::new("response_status", "Status of HTTP response"),
            &["status"],
        )?;
        registry.register(Box::new(response_status.clone()))?;

        let http_response_time_seconds = HistogramVec::new(
            HistogramOpts::new("http_response_time_seconds", "Duration of HTTP requests."),
            &["path"],
        )?;
        registry.register(Box::new(http_response_time_seconds.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            response_status,
            http_response_time_seconds,
        })
    }

    /// Record one completed request.
    ///
    /// Called by the middleware after the handler has fully finished, so a
    /// scrape never sees a partially recorded request.
    pub fn observe_request(&self, path: &str, status: u16, elapsed: Duration) {
        self.response_status
            .with_label_values(&[&status.to_string()])
            .inc();
        self.http_requests_total.with_label_values(&[path]).inc();
        self.http_response_time_seconds
            .with_label_values(&[path])
            .observe(elapsed.as_secs_f64());
    }

    /// Render the current registry snapshot in Prometheus text format.
    ///
    /// Gathering reads the collectors without mutating them; concurrent
    /// increments may land between label series but individual counter
    /// values are always consistent.
    pub fn encode(&self) -> prometheus::Result<Vec<u8>> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(metrics: &Metrics) -> String {
        String::from_utf8(metrics.encode().unwrap()).unwrap()
    }

    #[test]
    fn observe_request_increments_all_three_aggregates() {
        let metrics = Metrics::new().unwrap();

        metrics.observe_request("/ping", 200, Duration::from_millis(2));
        metrics.observe_request("/ping", 200, Duration::from_millis(3));
        metrics.observe_request("/", 500, Duration::from_millis(40));

        assert_eq!(
            metrics
                .http_requests_total
                .with_label_values(&["/ping"])
                .get(),
            2
        );
        assert_eq!(
            metrics.http_requests_total.with_label_values(&["/"]).get(),
            1
        );
        assert_eq!(
            metrics.response_status.with_label_values(&["200"]).get(),
            2
        );
        assert_eq!(
            metrics.response_status.with_label_values(&["500"]).get(),
            1
        );
        assert_eq!(
            metrics
                .http_response_time_seconds
                .with_label_values(&["/ping"])
                .get_sample_count(),
            2
        );
    }

    #[test]
    fn scrape_lists_observed_labels_only() {
        let metrics = Metrics::new().unwrap();
        metrics.observe_request("/ping", 200, Duration::from_millis(1));

        let output = render(&metrics);
        assert!(output.contains(r#"http_requests_total{path="/ping"} 1"#));
        assert!(output.contains(r#"response_status{status="200"} 1"#));
        assert!(!output.contains(r#"path="/version""#));
        assert!(!output.contains(r#"status="500""#));
    }

    #[test]
    fn encode_does_not_mutate_counters() {
        let metrics = Metrics::new().unwrap();
        metrics.observe_request("/health", 200, Duration::from_millis(1));

        let first = render(&metrics);
        let second = render(&metrics);
        assert_eq!(first, second);
        assert_eq!(
            metrics
                .http_requests_total
                .with_label_values(&["/health"])
                .get(),
            1
        );
    }
}
