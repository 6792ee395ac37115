//! Strict loader for uploaded batch files.
//!
//! Unlike an interactive history parser, a scoring job is all-or-nothing:
//! any malformed cell, ragged row, or missing required column rejects the
//! whole file with `BatchParseFailed`, and a file over the configured row
//! cap is rejected with `InputTooLarge`. There are no partial results.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::PredictError;
use crate::models::{COLUMN_ORDER, InputRecord};
use crate::utils::csv;
use crate::utils::files::validate_file_size;

use super::table::BatchTable;

/// Positions of the ten schema columns within the uploaded header.
struct ColumnIndices {
    n: usize,
    p: usize,
    k: usize,
    temperature: usize,
    humidity: usize,
    ph: usize,
    rainfall: usize,
    crop: usize,
    season: usize,
    soil_type: usize,
}

impl ColumnIndices {
    fn resolve(columns: &[String]) -> Result<Self, PredictError> {
        let missing: Vec<&str> = COLUMN_ORDER
            .into_iter()
            .filter(|required| !columns.iter().any(|c| c == required))
            .collect();
        if !missing.is_empty() {
            return Err(PredictError::BatchParseFailed {
                reason: format!("missing required columns: {}", missing.join(", ")),
            });
        }

        let index = |name: &str| {
            columns.iter().position(|c| c == name).expect("presence checked above")
        };
        Ok(Self {
            n: index("N"),
            p: index("P"),
            k: index("K"),
            temperature: index("temperature"),
            humidity: index("humidity"),
            ph: index("ph"),
            rainfall: index("rainfall"),
            crop: index("Crop"),
            season: index("Season"),
            soil_type: index("Soil_Type"),
        })
    }
}

fn parse_numeric(
    row: &[String],
    index: usize,
    column: &str,
    row_number: usize,
) -> Result<f64, PredictError> {
    let cell = &row[index];
    cell.trim().parse::<f64>().map_err(|_| PredictError::BatchParseFailed {
        reason: format!("row {row_number}: invalid numeric value {cell:?} in column {column}"),
    })
}

/// Read and parse an uploaded CSV into a [`BatchTable`].
///
/// The header must contain all ten schema columns; extra columns are
/// preserved and carried through to the scored output.
pub fn read_batch_file(path: &Path, max_rows: usize) -> Result<BatchTable, PredictError> {
    let mut file = File::open(path).map_err(|e| PredictError::BatchParseFailed {
        reason: format!("failed to open {}: {e}", path.display()),
    })?;
    validate_file_size(&file, path)
        .map_err(|e| PredictError::BatchParseFailed { reason: format!("{e:#}") })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| PredictError::BatchParseFailed {
        reason: format!("failed to read {}: {e}", path.display()),
    })?;

    let mut rows =
        csv::parse(&contents).map_err(|reason| PredictError::BatchParseFailed { reason })?;
    if rows.is_empty() {
        return Err(PredictError::BatchParseFailed {
            reason: "file contains no header row".to_string(),
        });
    }

    let columns = rows.remove(0);
    let indices = ColumnIndices::resolve(&columns)?;

    if rows.len() > max_rows {
        return Err(PredictError::InputTooLarge { rows: rows.len(), limit: max_rows });
    }

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let row_number = i + 1;
        if row.len() != columns.len() {
            return Err(PredictError::BatchParseFailed {
                reason: format!(
                    "row {row_number}: expected {} fields, found {}",
                    columns.len(),
                    row.len()
                ),
            });
        }

        records.push(InputRecord {
            n: parse_numeric(row, indices.n, "N", row_number)?,
            p: parse_numeric(row, indices.p, "P", row_number)?,
            k: parse_numeric(row, indices.k, "K", row_number)?,
            temperature: parse_numeric(row, indices.temperature, "temperature", row_number)?,
            humidity: parse_numeric(row, indices.humidity, "humidity", row_number)?,
            ph: parse_numeric(row, indices.ph, "ph", row_number)?,
            rainfall: parse_numeric(row, indices.rainfall, "rainfall", row_number)?,
            crop: row[indices.crop].clone(),
            season: row[indices.season].clone(),
            soil_type: row[indices.soil_type].clone(),
        });
    }

    Ok(BatchTable { columns, rows, records })
}
