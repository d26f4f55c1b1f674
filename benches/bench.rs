// Criterion benchmarks for Mentor Match

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use mentor_match::core::{gap, score, tokenize};
use mentor_match::models::Candidate;

const SKILLS: &[&str] = &[
    "rust", "python", "react", "node", "sql", "docker", "kubernetes", "aws",
    "machine learning", "data science", "go", "java", "typescript", "graphql",
];

fn create_candidate(id: usize) -> Candidate {
    let skills = (0..(id % 6 + 2))
        .map(|j| SKILLS[(id * 7 + j * 3) % SKILLS.len()].to_string())
        .collect();
    Candidate::new(skills).with_field("_id", id)
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize", |b| {
        b.iter(|| tokenize(black_box(SKILLS)));
    });
}

fn bench_scoring(c: &mut Criterion) {
    let student = ["react", "node", "machine learning", "sql"];

    let mut group = c.benchmark_group("scoring");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Candidate> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("score", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| score(black_box(&student), black_box(&candidates)));
            },
        );
    }

    group.finish();
}

fn bench_gap(c: &mut Criterion) {
    let student = &SKILLS[..7];
    c.bench_function("gap", |b| {
        b.iter(|| gap(black_box(student), black_box(SKILLS)));
    });
}

criterion_group!(benches, bench_tokenize, bench_scoring, bench_gap);

criterion_main!(benches);
