use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use crop_advisor_rust::{
    score_rule_based, score_rule_based_batch, CropAdvisor, CropCatalog, InputVector, Season,
    SoilType, WeatherSample,
};

const BATCH_SIZE: usize = 1024;

fn generate_inputs(count: usize) -> Vec<InputVector> {
    let soils = SoilType::all();
    let seasons = Season::all();

    (0..count)
        .map(|idx| InputVector {
            nitrogen: 20.0 + (idx * 7 % 130) as f64,
            phosphorus: 10.0 + (idx * 11 % 80) as f64,
            potassium: 10.0 + (idx * 13 % 140) as f64,
            temperature: 12.0 + (idx * 3 % 26) as f64,
            humidity: 30.0 + (idx * 5 % 70) as f64,
            rainfall: 200.0 + (idx * 37 % 1200) as f64,
            ph: 4.5 + (idx % 40) as f64 * 0.1,
            soil: soils[idx % soils.len()],
            season: seasons[idx % seasons.len()],
            region: format!("region-{:02}", idx % 8),
        })
        .collect()
}

fn benchmark_rule_scoring(c: &mut Criterion) {
    let catalog = CropCatalog::bundled();
    let inputs = generate_inputs(BATCH_SIZE);

    let mut group = c.benchmark_group("rule_scoring");

    group.throughput(Throughput::Elements(1));
    group.bench_function("score_single_input", |b| {
        b.iter(|| {
            let scores = score_rule_based(&inputs[0], &catalog).unwrap();
            criterion::black_box(scores);
        });
    });

    group.throughput(Throughput::Elements(BATCH_SIZE as u64));
    group.bench_function("score_1024_inputs_parallel", |b| {
        b.iter(|| {
            let scores = score_rule_based_batch(&inputs, &catalog).unwrap();
            criterion::black_box(scores);
        });
    });

    group.finish();
}

fn benchmark_recommend_pipeline(c: &mut Criterion) {
    let advisor = CropAdvisor::new();
    let inputs = generate_inputs(BATCH_SIZE);

    let mut group = c.benchmark_group("recommend_pipeline");
    group.throughput(Throughput::Elements(BATCH_SIZE as u64));
    group.bench_function("recommend_1024_requests", |b| {
        b.iter(|| {
            for (idx, input) in inputs.iter().enumerate() {
                let live = WeatherSample {
                    temperature: 18.0 + (idx % 20) as f64,
                    humidity: 35.0 + (idx % 50) as f64,
                };
                let recommendation = advisor.recommend(input, None, Some(live)).unwrap();
                criterion::black_box(recommendation);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, benchmark_rule_scoring, benchmark_recommend_pipeline);
criterion_main!(benches);
