use std::collections::HashMap;
use std::hint::black_box;

use agriyield_predictor::models::InputRecord;
use agriyield_predictor::predictor::{LinearModel, PredictorAdapter};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate a synthetic batch of N records with varied numeric values
fn generate_records(count: usize) -> Vec<InputRecord> {
    (0..count)
        .map(|i| {
            InputRecord::builder()
                .n((i % 200) as f64)
                .p((i % 80) as f64)
                .rainfall((i % 300) as f64)
                .crop("Wheat")
                .season("Kharif")
                .soil_type("Loamy")
                .build()
                .unwrap()
        })
        .collect()
}

fn linear_adapter() -> PredictorAdapter {
    let coefficients = HashMap::from([
        ("N".to_string(), 0.01),
        ("P".to_string(), 0.005),
        ("rainfall".to_string(), 0.002),
    ]);
    let categories = HashMap::from([
        ("Crop".to_string(), HashMap::from([("Wheat".to_string(), 0.5)])),
        ("Season".to_string(), HashMap::from([("Kharif".to_string(), 0.25)])),
    ]);
    PredictorAdapter::from_predictor(LinearModel::new(1.0, coefficients, categories))
}

fn bench_predict_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("predict_many");
    let adapter = linear_adapter();

    for size in [100, 1_000, 10_000].iter() {
        let records = generate_records(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| adapter.predict_many(black_box(&records)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_predict_many);
criterion_main!(benches);
