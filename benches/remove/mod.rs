use avltree::AvlTree;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("remove");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the tree, and the keys it holds.
    let mut rand = Lfsr::default();
    let keys = (0..n_values).map(|_| rand.next()).collect::<Vec<_>>();
    let t = keys.iter().copied().collect::<AvlTree<_>>();

    // Remove every key, draining the tree.
    g.throughput(Throughput::Elements(n_values as _)); // Keys removed per second
    g.bench_function(
        BenchmarkId::from(BenchName {
            bench_name: "hit",
            n_values,
        }),
        |b| {
            b.iter_batched(
                || t.clone(),
                |mut t| {
                    for k in &keys {
                        assert!(t.remove(k).is_some());
                    }
                    t
                },
                criterion::BatchSize::PerIteration,
            );
        },
    );

    // Remove keys that do not exist, which leaves the tree unchanged.
    let misses = (0..n_values).map(|_| rand.next()).collect::<Vec<_>>();
    g.bench_function(
        BenchmarkId::from(BenchName {
            bench_name: "miss",
            n_values,
        }),
        |b| {
            b.iter_batched(
                || t.clone(),
                |mut t| {
                    for k in &misses {
                        assert!(t.remove(k).is_none());
                    }
                    t
                },
                criterion::BatchSize::PerIteration,
            );
        },
    );
}
