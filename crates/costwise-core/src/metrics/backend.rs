use std::sync::Arc;

/// How an online update terminated, for metrics classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Both stages stepped and the artifact was persisted.
    Applied,
    /// The update or its persistence failed.
    Failed,
}

impl UpdateOutcome {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            UpdateOutcome::Applied => "applied",
            UpdateOutcome::Failed => "failed",
        }
    }
}

/// Backend metrics collection interface.
///
/// Implementations are injected into the cost service and called once per
/// completed operation.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record a served prediction and its clamped cost value.
    fn record_prediction(&self, cost: i64);

    /// Record the outcome of an online update.
    fn record_update(&self, outcome: UpdateOutcome);
}

/// Shared handle to a metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;
