//! AgriYield Predictor - Crop yield prediction over a pre-trained model
//!
//! This library wraps a pre-trained regression artifact behind a stable
//! prediction pipeline. It supports:
//!
//! - Building and validating input records (soil nutrients, environment,
//!   crop information)
//! - Single and batch prediction through a lazily-loaded model adapter
//! - An in-memory, per-session prediction history with aggregate
//!   statistics and CSV export
//! - Scoring uploaded CSV tables, preserving columns and row order
//!
//! # Example
//!
//! ```
//! use agriyield_predictor::history::HistoryStore;
//! use agriyield_predictor::models::InputRecord;
//! use agriyield_predictor::pipeline::predict_single;
//! use agriyield_predictor::predictor::{ConstantPredictor, PredictorAdapter};
//!
//! let adapter = PredictorAdapter::from_predictor(ConstantPredictor::default());
//! let mut history = HistoryStore::new();
//!
//! let record = InputRecord::builder()
//!     .crop("Wheat")
//!     .season("Kharif")
//!     .soil_type("Loamy")
//!     .build()?;
//! let prediction = predict_single(record, &adapter, &mut history)?;
//! assert_eq!(prediction.predicted_yield, 2.5);
//! assert_eq!(history.summary().count, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod batch;
pub mod cli;
pub mod error;
pub mod history;
pub mod models;
pub mod pipeline;
pub mod predictor;
pub mod session;
pub mod utils;
pub mod validate;

// Re-export commonly used types
pub use error::PredictError;
pub use history::HistoryStore;
pub use models::{HistoryEntry, HistorySummary, InputRecord};
pub use pipeline::{BatchLimits, Prediction, predict_batch, predict_single};
pub use predictor::{ConstantPredictor, LinearModel, Predictor, PredictorAdapter};
pub use validate::{ValidationResult, validate};
