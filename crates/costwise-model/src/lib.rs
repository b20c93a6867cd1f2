mod error;
pub use error::{ModelError, ModelResult};

mod task;
pub use task::{TagList, TaskDescription};

mod schema;
pub use schema::{BASE_FEATURES, FeatureSchema, SCHEMA_VERSION};

mod pipeline;
pub use pipeline::{CostModel, RunningScaler, SgdRegressor};
