/// Integration tests for history CSV export: round trips and quoting
mod common;

use agriyield_predictor::history::HistoryStore;
use agriyield_predictor::models::InputRecord;
use agriyield_predictor::pipeline::predict_single;
use agriyield_predictor::predictor::{ConstantPredictor, PredictorAdapter};
use agriyield_predictor::utils::csv;
use common::wheat_record;

fn store_with_predictions(yields: &[f64]) -> HistoryStore {
    let mut store = HistoryStore::new();
    for (i, value) in yields.iter().enumerate() {
        let adapter = PredictorAdapter::from_predictor(ConstantPredictor::new(*value));
        let record = InputRecord::builder()
            .n(i as f64)
            .crop("Wheat")
            .season("Kharif")
            .soil_type("Loamy")
            .build()
            .unwrap();
        predict_single(record, &adapter, &mut store).unwrap();
    }
    store
}

#[test]
fn test_export_round_trip_recovers_every_entry() {
    let store = store_with_predictions(&[2.0, 4.0, 6.0]);

    let text = String::from_utf8(store.export_csv()).unwrap();
    let rows = csv::parse(&text).unwrap();

    // Header plus one data row per entry.
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].len(), 12);

    for (i, row) in rows[1..].iter().enumerate() {
        let entry = &store.entries()[i];
        assert_eq!(row[0].parse::<f64>().unwrap(), entry.record.n);
        assert_eq!(row[5].parse::<f64>().unwrap(), entry.record.ph);
        assert_eq!(row[7], entry.record.crop);
        assert_eq!(row[10].parse::<f64>().unwrap(), entry.predicted_yield);
        assert_eq!(row[11], entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string());
    }
}

#[test]
fn test_export_round_trip_with_quoted_fields() {
    let mut store = HistoryStore::new();
    let adapter = PredictorAdapter::from_predictor(ConstantPredictor::default());
    let record = InputRecord::builder()
        .crop("Wheat, winter")
        .season("Kharif")
        .soil_type("the \"good\" loam")
        .build()
        .unwrap();
    predict_single(record.clone(), &adapter, &mut store).unwrap();

    let text = String::from_utf8(store.export_csv()).unwrap();
    let rows = csv::parse(&text).unwrap();
    assert_eq!(rows[1][7], "Wheat, winter");
    assert_eq!(rows[1][9], "the \"good\" loam");
}

#[test]
fn test_export_of_empty_store_is_header_only() {
    let store = HistoryStore::new();
    let text = String::from_utf8(store.export_csv()).unwrap();
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn test_export_covers_full_history_not_just_recent() {
    let store = store_with_predictions(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(store.recent(2).len(), 2);

    let text = String::from_utf8(store.export_csv()).unwrap();
    assert_eq!(text.lines().count(), 6);
}

#[test]
fn test_export_after_clear_forgets_everything() {
    let mut store = store_with_predictions(&[1.0, 2.0]);
    store.clear();

    let text = String::from_utf8(store.export_csv()).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert_eq!(store.summary().count, 0);

    // The store is reusable after clearing.
    let adapter = PredictorAdapter::from_predictor(ConstantPredictor::default());
    predict_single(wheat_record(), &adapter, &mut store).unwrap();
    assert_eq!(store.summary().count, 1);
}
