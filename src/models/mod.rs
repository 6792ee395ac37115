//! Data models for the prediction pipeline.
//!
//! - [`InputRecord`] - one row of model input, built via [`InputRecordBuilder`]
//! - [`HistoryEntry`] - a record plus its predicted yield and timestamp
//! - [`HistorySummary`] - aggregate statistics over the history
//! - `preset` - named sample records for quick experimentation
//!
//! Records serialize with the model's column names (`N`, `P`, `K`, ...,
//! `Soil_Type`); the fixed column order lives in [`COLUMN_ORDER`].

pub mod history;
pub mod preset;
pub mod record;

pub use history::{HistoryEntry, HistorySummary};
pub use record::{
    CATEGORICAL_COLUMNS, COLUMN_ORDER, InputRecord, InputRecordBuilder, NUMERIC_COLUMNS,
    RecordError,
};
