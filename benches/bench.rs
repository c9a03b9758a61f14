use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use snusort_rs::generator::random_permutation;
use snusort_rs::{Algorithm, HybridSort, RandomizedQuickSort, Sort};

const SEED: u64 = 0;

fn bench_sort(c: &mut Criterion, group_name: &str, algorithm: Algorithm, exps: &[u32]) {
    let mut group = c.benchmark_group(group_name);

    for &exp in exps {
        let len = 4usize.pow(exp);
        let mut rng = StdRng::seed_from_u64(SEED);

        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched_ref(
                || random_permutation(len, &mut rng).expect("allocate input"),
                |v| algorithm.sort(black_box(v.as_mut_slice()), &mut StdRng::seed_from_u64(SEED)),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_algorithms(c: &mut Criterion) {
    let exps = [4, 6, 8, 10];

    bench_sort(c, "RandomizedQuickSort", RandomizedQuickSort.into(), &exps);
    for k in [8, 16, 32] {
        let hybrid = HybridSort::new(k).expect("valid threshold");
        bench_sort(c, &format!("SNUSort_k{k}"), hybrid.into(), &exps);
    }
}

fn bench_threshold_sweep(c: &mut Criterion) {
    let len = 4usize.pow(8);
    let mut group = c.benchmark_group("SNUSort_k_sweep");
    let mut rng = StdRng::seed_from_u64(SEED);

    for k in [1, 2, 4, 8, 12, 16, 24, 32, 48, 64, 128] {
        let hybrid = HybridSort::new(k).expect("valid threshold");
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, _| {
            b.iter_batched_ref(
                || random_permutation(len, &mut rng).expect("allocate input"),
                |v| hybrid.sort(black_box(v.as_mut_slice()), &mut StdRng::seed_from_u64(SEED)),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_algorithms, bench_threshold_sweep);
criterion_main!(benches);
