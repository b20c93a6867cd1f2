use crate::metrics::backend::{MetricsBackend, UpdateOutcome};

/// No-op metrics backend that compiles to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_prediction(&self, _: i64) {}

    #[inline(always)]
    fn record_update(&self, _: UpdateOutcome) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_metrics_is_zero_size() {
        assert_eq!(std::mem::size_of::<NoOpMetrics>(), 0);
    }

    #[test]
    fn noop_can_be_called_repeatedly() {
        let metrics = NoOpMetrics;
        for _ in 0..1000 {
            metrics.record_prediction(10);
            metrics.record_update(UpdateOutcome::Applied);
            metrics.record_update(UpdateOutcome::Failed);
        }
    }
}
