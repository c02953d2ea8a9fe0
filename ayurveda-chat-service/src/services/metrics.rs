//! Metrics collection for ayurveda-chat-service.
//!
//! HTTP request metrics come from the shared `metrics` middleware; provider
//! call outcomes are tracked in a dedicated Prometheus registry.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use prometheus::{IntCounterVec, Opts, Registry};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
pub static PROMETHEUS_REGISTRY: OnceLock<Registry> = OnceLock::new();
pub static CHAT_PROVIDER_CALLS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize metrics collection. Subsequent calls are no-ops.
pub fn init_metrics() -> Result<(), String> {
    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| format!("failed to install Prometheus recorder: {}", e))?;
    let _ = METRICS_HANDLE.set(handle);

    let registry = Registry::new();

    let provider_calls_counter = IntCounterVec::new(
        Opts::new(
            "chat_provider_calls_total",
            "Total text provider calls by provider and status",
        ),
        &["provider", "status"],
    )
    .map_err(|e| format!("failed to create chat_provider_calls_total: {}", e))?;

    registry
        .register(Box::new(provider_calls_counter.clone()))
        .map_err(|e| format!("failed to register chat_provider_calls_total: {}", e))?;

    let _ = PROMETHEUS_REGISTRY.set(registry);
    let _ = CHAT_PROVIDER_CALLS_TOTAL.set(provider_calls_counter);

    Ok(())
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    let mut output = METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string());

    if let Some(registry) = PROMETHEUS_REGISTRY.get() {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let metric_families = registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).ok();
        if let Ok(custom_metrics) = String::from_utf8(buffer) {
            output.push_str(&custom_metrics);
        }
    }

    output
}

/// Record a provider call outcome.
pub fn record_provider_call(provider: &str, status: &str) {
    if let Some(counter) = CHAT_PROVIDER_CALLS_TOTAL.get() {
        counter.with_label_values(&[provider, status]).inc();
    }
}
