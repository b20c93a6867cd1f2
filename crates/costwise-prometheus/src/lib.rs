//! Prometheus metrics backend for the costwise service.
//!
//! Provides [`PrometheusMetrics`], an implementation of
//! [`costwise_core::MetricsBackend`] that exposes metrics in Prometheus
//! format.
//!
//! ## Metrics
//! - `costwise_predictions_total` - Counter of served predictions
//! - `costwise_updates_total{outcome}` - Counter of online updates
//! - `costwise_predicted_cost` - Histogram of clamped predicted costs
//!
//! ## HTTP server
//! This crate does NOT serve `/metrics` itself. Wire [`PrometheusMetrics::gather`]
//! into the application's HTTP framework:
//!
//! ```rust,ignore
//! async fn metrics_handler(State(metrics): State<Arc<PrometheusMetrics>>) -> Response {
//!     let families = metrics.gather();
//!     let encoder = prometheus::TextEncoder::new();
//!     let mut buffer = vec![];
//!     encoder.encode(&families, &mut buffer).unwrap();
//!     // build the response from buffer
//! }
//! ```

mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
