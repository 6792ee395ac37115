use crate::models::InputRecord;
use crate::utils::csv;

/// A parsed batch file: the original header and cells (extra columns
/// preserved), plus one [`InputRecord`] per data row. Transient; batch
/// rows never enter the history store.
#[derive(Debug, Clone)]
pub struct BatchTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub records: Vec<InputRecord>,
}

/// A scored batch: the original table with a `Predicted_Yield` column
/// appended, row order preserved.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub predictions: Vec<f64>,
}

impl BatchOutcome {
    /// Attach predictions to the table they were scored from. Callers
    /// guarantee one prediction per row.
    pub fn from_scored(table: BatchTable, predictions: Vec<f64>) -> Self {
        let mut columns = table.columns;
        columns.push("Predicted_Yield".to_string());

        let rows = table
            .rows
            .into_iter()
            .zip(&predictions)
            .map(|(mut row, prediction)| {
                row.push(prediction.to_string());
                row
            })
            .collect();

        Self { columns, rows, predictions }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serialize the augmented table as UTF-8 CSV, header included.
    pub fn to_csv(&self) -> Vec<u8> {
        let mut out = String::new();
        csv::push_row(&mut out, self.columns.iter().map(String::as_str));
        for row in &self.rows {
            csv::push_row(&mut out, row.iter().map(String::as_str));
        }
        out.into_bytes()
    }
}
