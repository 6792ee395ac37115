//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use agriyield_predictor::models::InputRecord;
use serde_json::json;

/// The full ten-column batch header, in schema order.
pub const FULL_HEADER: &str = "N,P,K,temperature,humidity,ph,rainfall,Crop,Season,Soil_Type";

/// A fully-populated Wheat/Kharif/Loamy reference record.
pub fn wheat_record() -> InputRecord {
    InputRecord::builder()
        .n(100.0)
        .p(50.0)
        .k(30.0)
        .temperature(25.0)
        .humidity(60.0)
        .ph(6.5)
        .rainfall(50.0)
        .crop("Wheat")
        .season("Kharif")
        .soil_type("Loamy")
        .build()
        .expect("reference record is in range")
}

/// Builder for model artifact JSON files.
pub struct ArtifactBuilder {
    intercept: f64,
    coefficients: Vec<(String, f64)>,
    categories: Vec<(String, String, f64)>,
}

impl ArtifactBuilder {
    pub fn new() -> Self {
        Self { intercept: 0.0, coefficients: Vec::new(), categories: Vec::new() }
    }

    pub fn intercept(mut self, value: f64) -> Self {
        self.intercept = value;
        self
    }

    pub fn coefficient(mut self, column: &str, value: f64) -> Self {
        self.coefficients.push((column.to_string(), value));
        self
    }

    pub fn category(mut self, column: &str, value: &str, weight: f64) -> Self {
        self.categories.push((column.to_string(), value.to_string(), weight));
        self
    }

    pub fn to_json(&self) -> String {
        let mut coefficients = serde_json::Map::new();
        for (column, value) in &self.coefficients {
            coefficients.insert(column.clone(), json!(value));
        }

        let mut categories = serde_json::Map::new();
        for (column, value, weight) in &self.categories {
            let table = categories
                .entry(column.clone())
                .or_insert_with(|| json!({}))
                .as_object_mut()
                .expect("category tables are objects");
            table.insert(value.clone(), json!(weight));
        }

        json!({
            "intercept": self.intercept,
            "coefficients": coefficients,
            "categories": categories,
        })
        .to_string()
    }

    /// Write the artifact into `dir` and return its path.
    pub fn write_to(&self, dir: &Path) -> PathBuf {
        let path = dir.join("final_best_model.json");
        fs::write(&path, self.to_json()).expect("Failed to write model artifact");
        path
    }
}

impl Default for ArtifactBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write an intercept-only artifact that predicts `value` for every row.
pub fn constant_artifact(dir: &Path, value: f64) -> PathBuf {
    ArtifactBuilder::new().intercept(value).write_to(dir)
}

/// Builder for uploaded batch CSV files.
pub struct BatchFileBuilder {
    header: String,
    rows: Vec<String>,
}

impl BatchFileBuilder {
    /// New batch file with the full ten-column header.
    pub fn new() -> Self {
        Self { header: FULL_HEADER.to_string(), rows: Vec::new() }
    }

    /// Replace the header line entirely.
    pub fn header(mut self, header: &str) -> Self {
        self.header = header.to_string();
        self
    }

    /// Append a raw CSV data line.
    pub fn row(mut self, line: &str) -> Self {
        self.rows.push(line.to_string());
        self
    }

    /// Append `count` copies of a wheat row matching the full header.
    pub fn wheat_rows(mut self, count: usize) -> Self {
        for _ in 0..count {
            self.rows.push("100,50,30,25,60,6.5,50,Wheat,Kharif,Loamy".to_string());
        }
        self
    }

    /// Write the file into `dir` under `filename` and return its path.
    pub fn write_to(&self, dir: &Path, filename: &str) -> PathBuf {
        let path = dir.join(filename);
        let mut contents = self.header.clone();
        contents.push('\n');
        for row in &self.rows {
            contents.push_str(row);
            contents.push('\n');
        }
        fs::write(&path, contents).expect("Failed to write batch file");
        path
    }
}

impl Default for BatchFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
