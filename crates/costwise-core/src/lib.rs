pub mod error;
pub mod metrics;
pub mod service;
pub mod store;

pub mod prelude {
    pub use crate::error::CoreError;
    pub use crate::metrics::{MetricsBackend, MetricsHandle, UpdateOutcome, noop_metrics};
    pub use crate::service::CostService;
    pub use crate::store::{ModelStore, StoreError};
}

pub use error::CoreError;
pub use metrics::{MetricsBackend, MetricsHandle, NoOpMetrics, UpdateOutcome, noop_metrics};
pub use service::CostService;
pub use store::{ModelStore, StoreError};
