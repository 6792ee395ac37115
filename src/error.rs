//! Error taxonomy for the prediction pipeline.
//!
//! Every failure a caller can act on is a distinct variant, so consumers
//! branch on kind rather than matching error text. `ModelUnavailable` is the
//! only fatal condition: once the artifact fails to load, all prediction
//! operations keep failing until an operator replaces it and restarts. All
//! other variants are per-request and leave the system in its prior state.

use thiserror::Error;

/// Failures surfaced by validation, model invocation, and batch loading.
#[derive(Debug, Error)]
pub enum PredictError {
    /// The model artifact is missing or failed to deserialize. Fatal to all
    /// prediction operations for the rest of the process.
    #[error("model unavailable ({path}): {reason}")]
    ModelUnavailable { path: String, reason: String },

    /// The record failed pre-submission validation. Field names are in
    /// column order.
    #[error("validation failed; missing fields: {}", .missing_fields.join(", "))]
    ValidationFailed { missing_fields: Vec<&'static str> },

    /// The model rejected well-formed input (e.g. an unseen categorical
    /// value) or failed internally. No history entry is recorded.
    #[error("prediction failed: {reason}")]
    PredictionFailed { reason: String },

    /// The uploaded batch file is malformed or missing required columns.
    /// The whole batch is rejected; there are no partial results.
    #[error("batch file rejected: {reason}")]
    BatchParseFailed { reason: String },

    /// The batch exceeds the configured row cap.
    #[error("batch has {rows} rows, exceeding the configured limit of {limit}")]
    InputTooLarge { rows: usize, limit: usize },
}
