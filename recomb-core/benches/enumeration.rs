use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recomb_core::{Grouping, Recombiner, Sequence};

fn generate_sources(groups: usize, per_group: usize, length: usize) -> Vec<Vec<Sequence>> {
    let pattern = b"ATCGATCG";
    (0..groups)
        .map(|g| {
            (0..per_group)
                .map(|i| {
                    let data = pattern.iter().cycle().skip(g + i).take(length).copied().collect();
                    Sequence::new(format!("g{}_s{}", g, i), data)
                })
                .collect()
        })
        .collect()
}

fn bench_flat_enumeration(c: &mut Criterion) {
    let recombiner = Recombiner::from_sources(
        generate_sources(1, 20, 1000),
        Grouping::Flat,
        &["250", "500"],
    )
    .unwrap();

    c.bench_function("flat_20seq_2bp_count", |b| {
        b.iter(|| black_box(recombiner.count()))
    });

    c.bench_function("flat_20seq_2bp_assemble", |b| {
        b.iter(|| {
            let total: usize = recombiner.recombinants().map(|r| black_box(r.len())).sum();
            black_box(total)
        })
    });
}

fn bench_grouped_enumeration(c: &mut Criterion) {
    let recombiner = Recombiner::from_sources(
        generate_sources(4, 6, 1000),
        Grouping::BySource,
        &["200,400,600"],
    )
    .unwrap();

    c.bench_function("grouped_4x6_3bp_count", |b| {
        b.iter(|| black_box(recombiner.count()))
    });
}

criterion_group!(benches, bench_flat_enumeration, bench_grouped_enumeration);
criterion_main!(benches);
