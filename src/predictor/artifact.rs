//! The serialized model artifact: a pre-trained linear regression.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::Predictor;
use crate::error::PredictError;
use crate::models::{CATEGORICAL_COLUMNS, InputRecord, NUMERIC_COLUMNS};

/// A pre-trained linear regression loaded from a JSON artifact: an
/// intercept, per-numeric-column coefficients, and per-categorical-column
/// weight tables. Read-only after load.
///
/// Columns absent from the artifact simply contribute nothing; a
/// categorical *value* absent from a present weight table is an inference
/// failure (the estimator was never fitted on it).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    intercept: f64,
    #[serde(default)]
    coefficients: HashMap<String, f64>,
    #[serde(default)]
    categories: HashMap<String, HashMap<String, f64>>,
}

impl LinearModel {
    pub fn new(
        intercept: f64,
        coefficients: HashMap<String, f64>,
        categories: HashMap<String, HashMap<String, f64>>,
    ) -> Self {
        Self { intercept, coefficients, categories }
    }

    /// Deserialize the artifact at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read model artifact: {}", path.display()))?;
        let model: LinearModel = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse model artifact: {}", path.display()))?;
        Ok(model)
    }

    fn score(&self, record: &InputRecord) -> Result<f64, PredictError> {
        let mut total = self.intercept;

        for column in NUMERIC_COLUMNS {
            if let Some(coefficient) = self.coefficients.get(column) {
                total += coefficient * record.numeric_value(column).unwrap_or(0.0);
            }
        }

        for column in CATEGORICAL_COLUMNS {
            if let Some(table) = self.categories.get(column) {
                let value = record.categorical_value(column).unwrap_or("");
                match table.get(value) {
                    Some(weight) => total += weight,
                    None => {
                        return Err(PredictError::PredictionFailed {
                            reason: format!("unseen {column} value: {value:?}"),
                        });
                    }
                }
            }
        }

        Ok(total)
    }
}

impl Predictor for LinearModel {
    fn predict(&self, batch: &[InputRecord]) -> Result<Vec<f64>, PredictError> {
        batch.iter().map(|record| self.score(record)).collect()
    }
}
