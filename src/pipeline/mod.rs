//! Request orchestration: builder → validator → predictor → history.
//!
//! Both entry points take the adapter and store as explicit arguments;
//! there is no ambient process state. For multi-user hosting, give each
//! session its own `HistoryStore` (see `crate::session`) — the adapter is
//! read-only after load and safe to share.
//!
//! Batch results deliberately do not touch the history store: the history
//! tracks interactive single predictions only, so `summary()` keeps its
//! meaning regardless of batch jobs run in the same session.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::batch::{BatchOutcome, read_batch_file};
use crate::error::PredictError;
use crate::history::HistoryStore;
use crate::models::{HistoryEntry, InputRecord};
use crate::predictor::PredictorAdapter;
use crate::utils::environment;
use crate::validate::{ValidationResult, validate};

/// Outcome of a single successful prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub predicted_yield: f64,
    pub timestamp: DateTime<Utc>,
}

/// Resource bounds applied to uploaded batch files.
#[derive(Debug, Clone)]
pub struct BatchLimits {
    pub max_rows: usize,
}

impl BatchLimits {
    pub fn new(max_rows: usize) -> Self {
        Self { max_rows }
    }
}

impl Default for BatchLimits {
    /// Configured limit from the environment, or the built-in default.
    fn default() -> Self {
        Self { max_rows: environment::max_batch_rows() }
    }
}

/// Validate a record, score it, and append the result to the session
/// history. A failed validation or prediction mutates nothing.
pub fn predict_single(
    record: InputRecord,
    adapter: &PredictorAdapter,
    store: &mut HistoryStore,
) -> Result<Prediction, PredictError> {
    if let ValidationResult::Invalid { missing_fields } = validate(&record) {
        return Err(PredictError::ValidationFailed { missing_fields });
    }

    let predicted_yield = adapter.predict_one(&record)?;
    let timestamp = Utc::now();
    store.append(HistoryEntry { record, predicted_yield, timestamp });

    Ok(Prediction { predicted_yield, timestamp })
}

/// Load an uploaded file, score every row in one model invocation, and
/// return the original table augmented with a `Predicted_Yield` column,
/// row order preserved. All-or-nothing: any parse or model failure rejects
/// the whole batch.
pub fn predict_batch(
    path: &Path,
    adapter: &PredictorAdapter,
    limits: &BatchLimits,
) -> Result<BatchOutcome, PredictError> {
    let table = read_batch_file(path, limits.max_rows)?;
    let predictions = adapter.predict_many(&table.records)?;
    Ok(BatchOutcome::from_scored(table, predictions))
}
