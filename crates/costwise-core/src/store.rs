//! Owner of the process-wide model slot and its on-disk artifact.
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{info, warn};

use costwise_model::{CostModel, ModelError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("artifact I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("artifact (de)serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("artifact rejected: {0}")]
    Model(#[from] ModelError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Loads, holds and persists the single shared [`CostModel`].
///
/// There is exactly one store per process; every read of the current
/// model and every committed update goes through it. The slot starts
/// empty when the artifact is absent — the service must come up anyway so
/// a model can be provisioned later.
///
/// Persistence is a plain whole-artifact overwrite. A crash mid-write can
/// corrupt the file; callers treat the artifact as best-effort durable.
#[derive(Debug)]
pub struct ModelStore {
    path: PathBuf,
    current: RwLock<Option<CostModel>>,
}

impl ModelStore {
    /// Open the store against an artifact path.
    ///
    /// An existing artifact is deserialized and validated against its
    /// embedded schema; a missing one logs a warning and leaves the slot
    /// empty. Any other I/O or parse failure is an error — a present but
    /// unreadable artifact should stop startup, not be silently ignored.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let current = match fs::read(&path) {
            Ok(bytes) => {
                let model: CostModel = serde_json::from_slice(&bytes)?;
                model.validate()?;
                info!(path = %path.display(), "model artifact loaded");
                Some(model)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    path = %path.display(),
                    "model artifact not found; starting without a model"
                );
                None
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            current: RwLock::new(current),
        })
    }

    /// Artifact location on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a model currently occupies the slot.
    pub fn is_loaded(&self) -> bool {
        self.current.read().is_some()
    }

    /// Shared read access to the slot.
    pub fn model(&self) -> RwLockReadGuard<'_, Option<CostModel>> {
        self.current.read()
    }

    /// Exclusive access to the slot.
    ///
    /// This guard is the single-writer serialization point: holding it
    /// across the whole update protocol (mutate both stages, then
    /// persist) keeps concurrent updates from interleaving gradient
    /// steps or racing artifact writes.
    pub fn model_mut(&self) -> RwLockWriteGuard<'_, Option<CostModel>> {
        self.current.write()
    }

    /// Overwrite the artifact with the given model state.
    pub fn persist(&self, model: &CostModel) -> StoreResult<()> {
        let bytes = serde_json::to_vec(model)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }

    /// Install a model into the slot and persist it.
    ///
    /// Supports provisioning after a degraded (empty) startup; also
    /// replaces an already-loaded model.
    pub fn provision(&self, model: CostModel) -> StoreResult<()> {
        model.validate()?;
        self.persist(&model)?;
        *self.current.write() = Some(model);
        info!(path = %self.path.display(), "model provisioned");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use costwise_model::{CostModel, FeatureSchema, TaskDescription};

    use super::{ModelStore, StoreError};

    #[test]
    fn missing_artifact_starts_unloaded() {
        let dir = tempdir().unwrap();
        let store = ModelStore::open(dir.path().join("cost_model.json")).unwrap();
        assert!(!store.is_loaded());
    }

    #[test]
    fn provision_then_reopen_round_trips_parameters() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cost_model.json");

        let mut model = CostModel::new(FeatureSchema::default());
        let task = TaskDescription::new("Harden auth", "security review", ["security"].as_slice());
        // 0.01 * 95.0 is not exactly representable, so this round trip
        // only holds with lossless float serialization.
        let row = model.extract(&task);
        model.learn(row.view(), 95.0).unwrap();
        let trained_intercept = model.regressor().intercept();
        assert_ne!(trained_intercept, 0.95);

        let store = ModelStore::open(&path).unwrap();
        store.provision(model).unwrap();
        assert!(store.is_loaded());

        let reopened = ModelStore::open(&path).unwrap();
        assert!(reopened.is_loaded());
        let guard = reopened.model();
        let loaded = guard.as_ref().unwrap();
        assert_eq!(loaded.regressor().intercept(), trained_intercept);
        assert_eq!(loaded.scaler().samples_seen(), 1);
    }

    #[test]
    fn corrupt_artifact_fails_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cost_model.json");
        std::fs::write(&path, b"{not json").unwrap();

        let err = ModelStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Serde(_)));
    }

    #[test]
    fn width_mismatched_artifact_is_rejected_at_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cost_model.json");

        let model = CostModel::new(FeatureSchema::default());
        let mut json: serde_json::Value = serde_json::to_value(&model).unwrap();
        json["schema"]["vocabulary"].as_array_mut().unwrap().pop();
        std::fs::write(&path, serde_json::to_vec(&json).unwrap()).unwrap();

        let err = ModelStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Model(_)));
    }

    #[test]
    fn persist_overwrites_previous_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cost_model.json");

        let store = ModelStore::open(&path).unwrap();
        store.provision(CostModel::new(FeatureSchema::default())).unwrap();
        let first = std::fs::read(&path).unwrap();

        {
            let mut guard = store.model_mut();
            let model = guard.as_mut().unwrap();
            let task = TaskDescription::new("t", "d", ["qa"].as_slice());
            let row = model.extract(&task);
            model.learn(row.view(), 42.0).unwrap();
            store.persist(model).unwrap();
        }

        let second = std::fs::read(&path).unwrap();
        assert_ne!(first, second);
    }
}
