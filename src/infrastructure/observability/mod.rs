//! Observability infrastructure - Prometheus metrics

mod metrics;

pub use metrics::{
    create_metrics_router, init_metrics, record_description_generated, record_http_request,
    PrometheusMetrics,
};
