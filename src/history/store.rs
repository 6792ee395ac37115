use chrono::{DateTime, Utc};

use crate::models::{CATEGORICAL_COLUMNS, COLUMN_ORDER, HistoryEntry, HistorySummary, NUMERIC_COLUMNS};
use crate::utils::csv;

/// Timestamp format used in exported CSVs.
const EXPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only, insertion-ordered log of successful predictions for one
/// session. Caller-owned; construct one per session context and pass it
/// explicitly to the pipeline. Unbounded by design: entries are small and
/// the store lives for a single interactive session.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful prediction. No deduplication, no size cap.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion (== chronological) order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The last `n` entries in insertion order (most-recent last).
    pub fn recent(&self, n: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    /// Aggregate statistics, computed fresh on each call. Mean and max are
    /// None when the store is empty.
    pub fn summary(&self) -> HistorySummary {
        let count = self.entries.len();
        if count == 0 {
            return HistorySummary { count: 0, mean_yield: None, max_yield: None };
        }

        let total: f64 = self.entries.iter().map(|e| e.predicted_yield).sum();
        let max = self
            .entries
            .iter()
            .map(|e| e.predicted_yield)
            .fold(f64::NEG_INFINITY, f64::max);

        HistorySummary {
            count,
            mean_yield: Some(total / count as f64),
            max_yield: Some(max),
        }
    }

    /// Serialize the full history as UTF-8 CSV: one row per entry, the ten
    /// record columns followed by `Predicted_Yield` and `Timestamp`, header
    /// included, standard quote escaping.
    pub fn export_csv(&self) -> Vec<u8> {
        let mut out = String::new();
        csv::push_row(
            &mut out,
            COLUMN_ORDER.into_iter().chain(["Predicted_Yield", "Timestamp"]),
        );

        for entry in &self.entries {
            let mut fields: Vec<String> = Vec::with_capacity(COLUMN_ORDER.len() + 2);
            for column in NUMERIC_COLUMNS {
                fields.push(entry.record.numeric_value(column).unwrap_or(0.0).to_string());
            }
            for column in CATEGORICAL_COLUMNS {
                fields.push(entry.record.categorical_value(column).unwrap_or("").to_string());
            }
            fields.push(entry.predicted_yield.to_string());
            fields.push(entry.timestamp.format(EXPORT_TIMESTAMP_FORMAT).to_string());
            csv::push_row(&mut out, fields.iter().map(String::as_str));
        }

        out.into_bytes()
    }

    /// Empty the store. Irreversible.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Download filename for an export performed at `when`:
/// `yield_predictions_<YYYYMMDD_HHMMSS>.csv`.
pub fn export_filename(when: DateTime<Utc>) -> String {
    format!("yield_predictions_{}.csv", when.format("%Y%m%d_%H%M%S"))
}
