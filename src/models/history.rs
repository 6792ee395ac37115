use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::InputRecord;

/// A successful prediction: the submitted record, the model's output, and
/// when it happened. Created by the history store and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(flatten)]
    pub record: InputRecord,
    #[serde(rename = "Predicted_Yield")]
    pub predicted_yield: f64,
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Aggregate statistics over the history. `mean_yield`/`max_yield` are None
/// when there is no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub count: usize,
    pub mean_yield: Option<f64>,
    pub max_yield: Option<f64>,
}
