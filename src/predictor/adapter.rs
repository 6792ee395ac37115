//! Stable wrapper around the external model's single capability.

use std::path::PathBuf;
use std::sync::OnceLock;

use super::{LinearModel, Predictor};
use crate::error::PredictError;
use crate::models::InputRecord;

/// Cached load failure: the artifact location and the underlying cause.
#[derive(Debug, Clone)]
struct ModelFault {
    path: String,
    reason: String,
}

impl ModelFault {
    fn to_error(&self) -> PredictError {
        PredictError::ModelUnavailable { path: self.path.clone(), reason: self.reason.clone() }
    }
}

/// Owns the model for the process lifetime. The artifact is loaded once,
/// lazily, on first use; both success and failure are cached, so a missing
/// or corrupt artifact makes every later call fail fast with
/// `ModelUnavailable`. The loaded model is read-only and safe to share
/// across concurrent callers.
///
/// Callers are responsible for validating records before prediction; the
/// adapter does not re-validate.
pub struct PredictorAdapter {
    path: Option<PathBuf>,
    loaded: OnceLock<Result<Box<dyn Predictor + Send + Sync>, ModelFault>>,
}

impl PredictorAdapter {
    /// Adapter over the serialized artifact at `path`. Nothing is read
    /// until the first prediction.
    pub fn from_artifact(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()), loaded: OnceLock::new() }
    }

    /// Adapter over an already-constructed predictor (e.g. the demo stub).
    pub fn from_predictor(predictor: impl Predictor + Send + Sync + 'static) -> Self {
        let boxed: Box<dyn Predictor + Send + Sync> = Box::new(predictor);
        Self { path: None, loaded: OnceLock::from(Ok(boxed)) }
    }

    /// Whether the model has been loaded successfully. False both before
    /// first use and after a failed load.
    pub fn is_ready(&self) -> bool {
        matches!(self.loaded.get(), Some(Ok(_)))
    }

    fn model(&self) -> Result<&(dyn Predictor + Send + Sync), PredictError> {
        let slot = self.loaded.get_or_init(|| match &self.path {
            Some(path) => match LinearModel::load(path) {
                Ok(model) => Ok(Box::new(model) as Box<dyn Predictor + Send + Sync>),
                Err(e) => Err(ModelFault {
                    path: path.display().to_string(),
                    reason: format!("{e:#}"),
                }),
            },
            None => Err(ModelFault {
                path: String::new(),
                reason: "no model artifact configured".to_string(),
            }),
        });

        match slot {
            Ok(model) => Ok(model.as_ref()),
            Err(fault) => Err(fault.to_error()),
        }
    }

    /// Predict a single record. Runs the model's batch predict over a
    /// one-row batch and takes element 0.
    pub fn predict_one(&self, record: &InputRecord) -> Result<f64, PredictError> {
        let predictions = self.predict_many(std::slice::from_ref(record))?;
        predictions.first().copied().ok_or_else(|| PredictError::PredictionFailed {
            reason: "model returned an empty batch for a single-row input".to_string(),
        })
    }

    /// Predict an arbitrary-length batch in one model invocation. A model
    /// failure rejects the whole batch with the same cause; the artifact
    /// has no per-row failure signal. No retries.
    pub fn predict_many(&self, records: &[InputRecord]) -> Result<Vec<f64>, PredictError> {
        let predictions = self.model()?.predict(records)?;
        if predictions.len() != records.len() {
            return Err(PredictError::PredictionFailed {
                reason: format!(
                    "model returned {} predictions for {} rows",
                    predictions.len(),
                    records.len()
                ),
            });
        }
        Ok(predictions)
    }
}
