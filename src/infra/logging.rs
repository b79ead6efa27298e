//! Tracing setup and the stopgap metric line used by the summarization path.

/// Install the global tracing subscriber. Safe to call more than once;
/// later calls are no-ops. `RUST_LOG` overrides the `info` default.
pub fn init() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Emit a structured metric line (tool, metric name, value). Stands in for
/// a real exporter; grep for `"metric"` in the logs to aggregate.
pub fn log_metric(tool: &str, metric: &str, value: f64) {
    tracing::info!(tool, metric, value, "metric");
}
