//! Pre-submission validation of input records.
//!
//! A record must pass [`validate`] before it is handed to the predictor.
//! The rule is the reference application's, kept verbatim: a categorical
//! field (`Crop`, `Season`, `Soil_Type`) is missing iff its value is the
//! empty string. Numeric fields are never flagged, even at their zero or
//! default values, so an all-default numeric record still validates. A
//! genuine zero nitrogen reading is therefore indistinguishable from a
//! field left untouched; tightening that rule is a stakeholder decision,
//! not ours (see DESIGN.md).

use crate::models::{CATEGORICAL_COLUMNS, InputRecord};

/// Outcome of validating a record. `Invalid` names the missing fields in
/// column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid { missing_fields: Vec<&'static str> },
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// Check a record for missing fields. Pure function of the record.
pub fn validate(record: &InputRecord) -> ValidationResult {
    let missing_fields: Vec<&'static str> = CATEGORICAL_COLUMNS
        .into_iter()
        .filter(|column| {
            record.categorical_value(column).is_some_and(|value| value.is_empty())
        })
        .collect();

    if missing_fields.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid { missing_fields }
    }
}
