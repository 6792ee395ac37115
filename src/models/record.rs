use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Numeric feature columns, in the order the model expects them.
pub const NUMERIC_COLUMNS: [&str; 7] =
    ["N", "P", "K", "temperature", "humidity", "ph", "rainfall"];

/// Categorical feature columns, in the order the model expects them.
pub const CATEGORICAL_COLUMNS: [&str; 3] = ["Crop", "Season", "Soil_Type"];

/// Full column schema: numeric features followed by categorical features.
pub const COLUMN_ORDER: [&str; 10] = [
    "N",
    "P",
    "K",
    "temperature",
    "humidity",
    "ph",
    "rainfall",
    "Crop",
    "Season",
    "Soil_Type",
];

/// One row of model input: soil nutrients, environmental readings, and crop
/// information. Immutable once built; construct via [`InputRecord::builder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
    #[serde(rename = "Crop")]
    pub crop: String,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "Soil_Type")]
    pub soil_type: String,
}

/// Rejected field values at record construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange { field: &'static str, value: f64, min: f64, max: f64 },
}

impl InputRecord {
    pub fn builder() -> InputRecordBuilder {
        InputRecordBuilder::new()
    }

    /// Value of a numeric column by schema name, or None for unknown columns.
    pub fn numeric_value(&self, column: &str) -> Option<f64> {
        match column {
            "N" => Some(self.n),
            "P" => Some(self.p),
            "K" => Some(self.k),
            "temperature" => Some(self.temperature),
            "humidity" => Some(self.humidity),
            "ph" => Some(self.ph),
            "rainfall" => Some(self.rainfall),
            _ => None,
        }
    }

    /// Value of a categorical column by schema name, or None for unknown columns.
    pub fn categorical_value(&self, column: &str) -> Option<&str> {
        match column {
            "Crop" => Some(&self.crop),
            "Season" => Some(&self.season),
            "Soil_Type" => Some(&self.soil_type),
            _ => None,
        }
    }
}

/// Fluent builder for [`InputRecord`], pre-filled with the input form's
/// default values. `ph` and `humidity` are domain-bounded and checked at
/// build time.
#[derive(Debug, Clone)]
pub struct InputRecordBuilder {
    n: f64,
    p: f64,
    k: f64,
    temperature: f64,
    humidity: f64,
    ph: f64,
    rainfall: f64,
    crop: String,
    season: String,
    soil_type: String,
}

impl InputRecordBuilder {
    pub fn new() -> Self {
        Self {
            n: 100.0,
            p: 50.0,
            k: 30.0,
            temperature: 25.0,
            humidity: 60.0,
            ph: 6.5,
            rainfall: 50.0,
            crop: String::new(),
            season: String::new(),
            soil_type: String::new(),
        }
    }

    /// Start from an existing record, e.g. a preset.
    pub fn from_record(record: &InputRecord) -> Self {
        Self {
            n: record.n,
            p: record.p,
            k: record.k,
            temperature: record.temperature,
            humidity: record.humidity,
            ph: record.ph,
            rainfall: record.rainfall,
            crop: record.crop.clone(),
            season: record.season.clone(),
            soil_type: record.soil_type.clone(),
        }
    }

    pub fn n(mut self, value: f64) -> Self {
        self.n = value;
        self
    }

    pub fn p(mut self, value: f64) -> Self {
        self.p = value;
        self
    }

    pub fn k(mut self, value: f64) -> Self {
        self.k = value;
        self
    }

    pub fn temperature(mut self, value: f64) -> Self {
        self.temperature = value;
        self
    }

    pub fn humidity(mut self, value: f64) -> Self {
        self.humidity = value;
        self
    }

    pub fn ph(mut self, value: f64) -> Self {
        self.ph = value;
        self
    }

    pub fn rainfall(mut self, value: f64) -> Self {
        self.rainfall = value;
        self
    }

    pub fn crop(mut self, value: impl Into<String>) -> Self {
        self.crop = value.into();
        self
    }

    pub fn season(mut self, value: impl Into<String>) -> Self {
        self.season = value.into();
        self
    }

    pub fn soil_type(mut self, value: impl Into<String>) -> Self {
        self.soil_type = value.into();
        self
    }

    /// Finalize the record, rejecting out-of-range `ph` or `humidity`.
    pub fn build(self) -> Result<InputRecord, RecordError> {
        if !(0.0..=14.0).contains(&self.ph) {
            return Err(RecordError::OutOfRange {
                field: "ph",
                value: self.ph,
                min: 0.0,
                max: 14.0,
            });
        }
        if !(0.0..=100.0).contains(&self.humidity) {
            return Err(RecordError::OutOfRange {
                field: "humidity",
                value: self.humidity,
                min: 0.0,
                max: 100.0,
            });
        }

        Ok(InputRecord {
            n: self.n,
            p: self.p,
            k: self.k,
            temperature: self.temperature,
            humidity: self.humidity,
            ph: self.ph,
            rainfall: self.rainfall,
            crop: self.crop,
            season: self.season,
            soil_type: self.soil_type,
        })
    }
}

impl Default for InputRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_form_defaults() {
        let record = InputRecord::builder().build().unwrap();
        assert_eq!(record.n, 100.0);
        assert_eq!(record.p, 50.0);
        assert_eq!(record.k, 30.0);
        assert_eq!(record.temperature, 25.0);
        assert_eq!(record.humidity, 60.0);
        assert_eq!(record.ph, 6.5);
        assert_eq!(record.rainfall, 50.0);
        assert!(record.crop.is_empty());
    }

    #[test]
    fn test_builder_rejects_out_of_range_ph() {
        let result = InputRecord::builder().ph(14.5).build();
        assert_eq!(
            result.unwrap_err(),
            RecordError::OutOfRange { field: "ph", value: 14.5, min: 0.0, max: 14.0 }
        );
    }

    #[test]
    fn test_builder_rejects_out_of_range_humidity() {
        assert!(InputRecord::builder().humidity(-1.0).build().is_err());
        assert!(InputRecord::builder().humidity(101.0).build().is_err());
        assert!(InputRecord::builder().humidity(0.0).build().is_ok());
        assert!(InputRecord::builder().humidity(100.0).build().is_ok());
    }

    #[test]
    fn test_column_lookup_by_schema_name() {
        let record = InputRecord::builder().n(42.0).crop("Wheat").build().unwrap();
        assert_eq!(record.numeric_value("N"), Some(42.0));
        assert_eq!(record.numeric_value("Crop"), None);
        assert_eq!(record.categorical_value("Crop"), Some("Wheat"));
        assert_eq!(record.categorical_value("ph"), None);
    }

    #[test]
    fn test_serde_uses_model_column_names() {
        let record = InputRecord::builder().crop("Rice").season("Kharif").build().unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["N"], 100.0);
        assert_eq!(json["Crop"], "Rice");
        assert_eq!(json["Soil_Type"], "");
    }

    #[test]
    fn test_column_order_covers_all_fields() {
        assert_eq!(COLUMN_ORDER.len(), NUMERIC_COLUMNS.len() + CATEGORICAL_COLUMNS.len());
        let record = InputRecord::builder().build().unwrap();
        for column in NUMERIC_COLUMNS {
            assert!(record.numeric_value(column).is_some(), "missing numeric column {column}");
        }
        for column in CATEGORICAL_COLUMNS {
            assert!(
                record.categorical_value(column).is_some(),
                "missing categorical column {column}"
            );
        }
    }
}
