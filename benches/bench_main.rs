use benchplot::elements::{BenchmarkRecord, Dataset};
use benchplot::phases::load_dataset_from_reader;
use benchplot::CHARTS;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

const BLOOMS: [&str; 2] = ["on", "off"];
const COMPACTIONS: [&str; 2] = ["leveled", "universal"];
const FORMATS: [&str; 3] = ["block", "plain", "cuckoo"];

fn make_results_csv(nr_rows: usize) -> String {
    (0..nr_rows)
        .map(|i| {
            format!(
                "{},{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
                100_000 * (1 + i % 4),
                (i % 5) as f64 / 10.0,
                BLOOMS[i % BLOOMS.len()],
                COMPACTIONS[i % COMPACTIONS.len()],
                FORMATS[i % FORMATS.len()],
                [1, 10, 100, 1000][i % 4],
                0.4 + (i % 7) as f64 * 0.01,
                0.2 + (i % 11) as f64 * 0.01,
                250_000.0 + i as f64,
                500_000.0 - i as f64,
                0.000004,
                0.000002,
                48_000 + i % 1000,
                6_291_456 + i * 4096,
            )
        })
        .collect()
}

fn load_benchmark(c: &mut Criterion) {
    let csv = make_results_csv(10_000);
    c.bench_function("load 10k results", |b| {
        b.iter(|| load_dataset_from_reader(black_box(csv.as_bytes())).map(|d| d.len()))
    });
}

fn aggregate_benchmark(c: &mut Criterion) {
    let csv = make_results_csv(10_000);
    let records: Vec<BenchmarkRecord> = match load_dataset_from_reader(csv.as_bytes()) {
        Ok(dataset) => dataset.records().to_vec(),
        Err(err) => panic!("failed to build benchmark dataset: {}", err),
    };

    c.bench_function("aggregate all charts over 10k results", |b| {
        b.iter_batched(
            || Dataset::new(records.clone()),
            |dataset| CHARTS.iter().map(|spec| spec.aggregate(&dataset).bars.len()).sum::<usize>(),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, load_benchmark, aggregate_benchmark);
criterion_main!(benches);
