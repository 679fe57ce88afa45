//! Scoring throughput over a synthetic roster
//!
//! Deterministic tables (no RNG): 1000 athletes x 30 indicators, mixed
//! polarity, four categories, one role.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polars::prelude::*;
use roster_scorer::{build_results, RosterScorer, ScorerConfig};

const CATEGORIES: [&str; 4] = ["DEFENSE", "ATTACK", "PASSING", "PHYSICAL"];

fn synthetic_entities(n_entities: usize, n_indicators: usize) -> DataFrame {
    let mut columns: Vec<Column> = Vec::with_capacity(n_indicators + 2);

    let names: Vec<String> = (0..n_entities)
        .map(|i| format!("athlete_{:04}", i))
        .collect();
    let codes: Vec<String> = (0..n_entities).map(|i| format!("A{:04}", i)).collect();
    columns.push(Series::new("player_name".into(), names).into());
    columns.push(Series::new("COD".into(), codes).into());

    for j in 0..n_indicators {
        let values: Vec<f64> = (0..n_entities)
            .map(|i| ((i * 37 + j * 13) % 101) as f64)
            .collect();
        columns.push(Series::new(format!("ind_{:02}", j).into(), values).into());
    }

    DataFrame::new(columns).unwrap()
}

fn synthetic_weights(n_indicators: usize) -> DataFrame {
    let indicators: Vec<String> = (0..n_indicators).map(|j| format!("ind_{:02}", j)).collect();
    let polarities: Vec<&str> = (0..n_indicators)
        .map(|j| {
            if j % 3 == 0 {
                "lower is better"
            } else {
                "higher is better"
            }
        })
        .collect();
    let categories: Vec<&str> = (0..n_indicators)
        .map(|j| CATEGORIES[j % CATEGORIES.len()])
        .collect();
    let weights: Vec<f64> = (0..n_indicators).map(|j| 1.0 + (j % 5) as f64).collect();

    DataFrame::new(vec![
        Series::new("INDICADOR".into(), indicators).into(),
        Series::new("Melhor para".into(), polarities).into(),
        Series::new("CLASSIFICACAO RANKING".into(), categories).into(),
        Series::new("ROLE".into(), weights).into(),
    ])
    .unwrap()
}

fn bench_score_roster(c: &mut Criterion) {
    let scorer = RosterScorer::new(
        synthetic_entities(1000, 30),
        synthetic_weights(30),
        ScorerConfig::default(),
    )
    .unwrap();

    c.bench_function("score_1000x30", |b| {
        b.iter(|| scorer.score(black_box("ROLE")).unwrap())
    });

    let config = ScorerConfig::default();
    c.bench_function("score_and_build_1000x30", |b| {
        b.iter(|| {
            let scores = scorer.score(black_box("ROLE")).unwrap();
            build_results(&scores, &config).unwrap()
        })
    });
}

criterion_group!(benches, bench_score_roster);
criterion_main!(benches);
