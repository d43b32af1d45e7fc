//! Prometheus middleware; request counters and latency per route.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use once_cell::sync::Lazy;

/// Shared middleware handle; building it twice would re-register collectors.
pub static METRICS: Lazy<PrometheusMetrics> = Lazy::new(|| {
    PrometheusMetricsBuilder::new("battle_reward")
        .endpoint("/metrics")
        .exclude("/ping")
        .build()
        .expect("metrics builder")
});
