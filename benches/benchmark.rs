use criterion::{criterion_group, criterion_main, Criterion};
use lexical_fit::{calculate_fit_score, extract_matching_keywords, rank_candidates};
use std::hint::black_box;

const SKILLS: &[&str] = &[
    "rust", "python", "kubernetes", "postgresql", "docker", "terraform", "react",
    "typescript", "kafka", "redis", "graphql", "linux", "aws", "gcp", "spark",
    "airflow", "tokio", "grpc", "prometheus", "grafana",
];

// deterministic pseudo-document of roughly `words` words
fn synth_document(seed: u32, words: usize) -> String {
    let mut x = seed.max(1);
    let mut out = String::with_capacity(words * 8);
    for i in 0..words {
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        if i % 3 == 0 {
            out.push_str(SKILLS[x as usize % SKILLS.len()]);
        } else {
            out.push_str(&format!("term{}", x % 500));
        }
        out.push_str(if i % 12 == 11 { ". " } else { " " });
    }
    out
}

fn scoring_benchmark(c: &mut Criterion) {
    let reference = synth_document(7, 600);
    let candidate = synth_document(42, 1500);

    c.bench_function("fit_score", |b| {
        b.iter(|| calculate_fit_score(black_box(&candidate), black_box(&reference)))
    });

    c.bench_function("matching_keywords", |b| {
        b.iter(|| extract_matching_keywords(black_box(&candidate), black_box(&reference), 10))
    });

    let candidates: Vec<(usize, String)> = (0..64).map(|i| (i, synth_document(i as u32 + 100, 1000))).collect();
    c.bench_function("rank_64", |b| {
        b.iter(|| rank_candidates(black_box(&reference), black_box(&candidates)))
    });
}

criterion_group!(benches, scoring_benchmark);
criterion_main!(benches);
