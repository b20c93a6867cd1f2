use std::sync::Arc;

use prometheus::{Counter, CounterVec, Histogram, Opts, Registry, proto::MetricFamily};

use costwise_core::{MetricsBackend, UpdateOutcome};

/// Prometheus metrics backend for the cost service.
///
/// ## Label cardinality
/// The only label is `outcome`, bounded to "applied" / "failed".
#[derive(Clone)]
pub struct PrometheusMetrics {
    predictions: Counter,
    updates: CounterVec,
    predicted_cost: Histogram,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Create a backend registered against a custom registry.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let predictions = Counter::with_opts(Opts::new(
            "costwise_predictions_total",
            "Total number of predictions served",
        ))?;
        registry.register(Box::new(predictions.clone()))?;

        let updates = CounterVec::new(
            Opts::new("costwise_updates_total", "Total number of online updates"),
            &["outcome"],
        )?;
        registry.register(Box::new(updates.clone()))?;

        let predicted_cost = Histogram::with_opts(
            prometheus::HistogramOpts::new(
                "costwise_predicted_cost",
                "Clamped predicted cost values",
            )
            .buckets(vec![
                10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0,
            ]),
        )?;
        registry.register(Box::new(predicted_cost.clone()))?;

        Ok(Self {
            predictions,
            updates,
            predicted_cost,
            registry,
        })
    }

    /// Create a backend with its own private registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metrics for exposition on a `/metrics` endpoint.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// The underlying registry, for registering application metrics
    /// alongside the service ones.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_prediction(&self, cost: i64) {
        self.predictions.inc();
        self.predicted_cost.observe(cost as f64);
    }

    fn record_update(&self, outcome: UpdateOutcome) {
        self.updates.with_label_values(&[outcome.as_label()]).inc();
    }
}
