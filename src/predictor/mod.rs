//! The prediction capability and its implementations.
//!
//! # Error Handling Strategy
//!
//! The model artifact is an external collaborator: this crate never
//! inspects its internal correctness, only its loadability and its ability
//! to score well-formed rows. Loading happens once, lazily, on first use;
//! the outcome (success or failure) is cached for the remainder of the
//! process. A failed load leaves the adapter permanently unavailable and
//! every subsequent call fails fast with `ModelUnavailable` carrying the
//! original cause. Inference failures (e.g. an unseen categorical value)
//! surface as `PredictionFailed` and are recoverable per request.

pub mod adapter;
pub mod artifact;
pub mod stub;

pub use adapter::PredictorAdapter;
pub use artifact::LinearModel;
pub use stub::ConstantPredictor;

use crate::error::PredictError;
use crate::models::InputRecord;

/// Batch prediction over the fixed ten-column schema. Implementations must
/// return one value per input row, in row order.
pub trait Predictor {
    fn predict(&self, batch: &[InputRecord]) -> Result<Vec<f64>, PredictError>;
}
