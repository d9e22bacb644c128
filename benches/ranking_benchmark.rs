use criterion::{black_box, criterion_group, criterion_main, Criterion};
use school_autocomplete::{
    core::School,
    ranking::{PrefixRanker, Ranker},
};

fn create_test_candidates(count: usize) -> Vec<School> {
    (0..count)
        .map(|i| {
            School::new(format!("State University of Test {}", i))
                .with_url(format!("https://www.test{}.edu", i))
                .with_enrollment(if i % 3 == 0 { None } else { Some((i * 37 % 50_000) as u64) })
        })
        .collect()
}

fn bench_prefix_ranking(c: &mut Criterion) {
    let ranker = PrefixRanker::new();

    let candidates_100 = create_test_candidates(100);
    let candidates_1000 = create_test_candidates(1000);
    let candidates_5000 = create_test_candidates(5000);

    c.bench_function("prefix_rank_100", |b| {
        b.iter(|| black_box(ranker.rank("test 5", &candidates_100)));
    });

    c.bench_function("prefix_rank_1000", |b| {
        b.iter(|| black_box(ranker.rank("test 25", &candidates_1000)));
    });

    c.bench_function("prefix_rank_5000", |b| {
        b.iter(|| black_box(ranker.rank("test", &candidates_5000)));
    });
}

criterion_group!(benches, bench_prefix_ranking);
criterion_main!(benches);
