use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use vose_sampler::{AliasTable, Sampler};

fn gen_pairs(n: usize) -> Vec<(usize, f64)> {
    let mut rng = Pcg32::seed_from_u64(777);
    let weights: Vec<f64> = (0..n).map(|_| 0.1 + rng.random::<f64>()).collect();
    let total: f64 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).enumerate().collect()
}

fn bench_alias_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("alias_build");
    for &n in &[2usize, 8, 64, 256, 1024] {
        let pairs = gen_pairs(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("from_pairs_n={n}"), |b| {
            b.iter(|| black_box(AliasTable::from_pairs(black_box(pairs.clone()))).unwrap());
        });
    }
    group.finish();
}

fn bench_alias_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("alias_sample");
    const DRAWS_PER_ITER: usize = 1024;

    for &n in &[2usize, 8, 64, 256, 1024] {
        let table = AliasTable::from_pairs(gen_pairs(n)).unwrap();
        group.throughput(Throughput::Elements(DRAWS_PER_ITER as u64));

        group.bench_function(format!("sample_one_n={n}"), |b| {
            b.iter_batched_ref(
                || Sampler::new(&table, Pcg32::seed_from_u64(999)),
                |sampler| {
                    let mut s = 0usize;
                    for _ in 0..DRAWS_PER_ITER {
                        s ^= *sampler.sample_one();
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("sample_n_n={n}"), |b| {
            b.iter_batched_ref(
                || Sampler::new(&table, Pcg32::seed_from_u64(1001)),
                |sampler| black_box(sampler.sample_n(DRAWS_PER_ITER as i64).unwrap()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(alias, bench_alias_build, bench_alias_sample);
criterion_main!(alias);
