//! Criterion benchmarks for symptomatic.
//!
//! Covers the three hot paths: symptom analysis, model training and
//! prediction (single and batched).

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use symptomatic::analysis::analyzer::SymptomAnalyzer;
use symptomatic::config::SymptomaticConfig;
use symptomatic::dataset::{Dataset, DiseaseRecord, PrecautionBook, SymptomToken};
use symptomatic::ml::model::SymptomModel;
use symptomatic::prediction::PredictionService;

const SYMPTOM_POOL: &[&str] = &[
    "itching",
    "skin rash",
    "chills",
    "fatigue",
    "high fever",
    "vomiting",
    "headache",
    "nausea",
    "cough",
    "chest pain",
    "breathlessness",
    "sweating",
    "joint pain",
    "abdominal pain",
    "diarrhoea",
    "muscle pain",
    "loss of appetite",
    "yellowish skin",
    "dark urine",
    "blurred and distorted vision",
];

/// Build a synthetic dataset with `diseases` labels and `rows` rows per label.
fn generate_dataset(diseases: usize, rows: usize) -> Dataset {
    let mut records = Vec::with_capacity(diseases * rows);
    for d in 0..diseases {
        for r in 0..rows {
            let symptoms = (0..5)
                .filter_map(|i| {
                    let index = (d * 7 + r * 3 + i * 5) % SYMPTOM_POOL.len();
                    SymptomToken::parse(SYMPTOM_POOL[index])
                })
                .collect();
            records.push(DiseaseRecord::new(format!("Disease {d:03}"), symptoms));
        }
    }
    Dataset::from_parts(records, PrecautionBook::new(4))
}

fn generate_queries(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            (0..3)
                .map(|j| SYMPTOM_POOL[(i * 11 + j * 7) % SYMPTOM_POOL.len()].replace(' ', "_"))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect()
}

fn bench_analysis(c: &mut Criterion) {
    let analyzer = SymptomAnalyzer::new().unwrap();
    let queries = generate_queries(100);

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("symptom_analyzer", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(analyzer.symptoms(black_box(query)).unwrap());
            }
        })
    });
    group.finish();
}

fn bench_training(c: &mut Criterion) {
    let config = SymptomaticConfig::default();
    let dataset = generate_dataset(40, 10);

    c.bench_function("train_40_diseases", |b| {
        b.iter(|| black_box(SymptomModel::train(dataset.clone(), &config).unwrap()))
    });
}

fn bench_prediction(c: &mut Criterion) {
    let config = SymptomaticConfig::default();
    let model = SymptomModel::train(generate_dataset(40, 10), &config).unwrap();
    let service = PredictionService::new(Arc::new(model), config.prediction.clone());
    let queries = generate_queries(200);

    let mut group = c.benchmark_group("prediction");
    group.bench_function("single", |b| {
        b.iter(|| black_box(service.predict(black_box("chills, high fever, headache"), 5)))
    });

    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("sequential_200", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(service.predict(query, 5).unwrap());
            }
        })
    });
    group.bench_function("batch_200", |b| {
        b.iter(|| black_box(service.predict_batch(&queries, 5)))
    });
    group.finish();
}

criterion_group!(benches, bench_analysis, bench_training, bench_prediction);
criterion_main!(benches);
