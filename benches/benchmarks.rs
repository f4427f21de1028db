//! Benchmarks for perceptron training and classification.

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ndarray::{Array1, Array2};
use perceptron_rs::{
    Config, Perceptron, RandomInitialization, SimpleWeightUpdate, WeightInitialization,
    WeightUpdate, utils::rng_from_seed
};
use rand::Rng;

/// `n_classes` well-separated blobs: class `c` sits at `10 * c` on
/// every feature, jittered by up to 1.
fn blobs(n_features: usize, n_samples: usize, n_classes: usize) -> (Array2<f64>, Vec<usize>) {
    let mut rng = rng_from_seed(42);
    let labels: Vec<usize> = (0..n_samples).map(|j| j % n_classes).collect();
    let x = Array2::from_shape_fn((n_features, n_samples), |(_, j)| {
        10.0 * labels[j] as f64 + rng.random::<f64>()
    });
    (x, labels)
}

fn bench_train(c: &mut Criterion) {
    let mut group = c.benchmark_group("train");

    for n_samples in [100, 1000, 5000] {
        let (x, y) = blobs(16, n_samples, 4);

        group.bench_with_input(
            BenchmarkId::from_parameter(n_samples),
            &n_samples,
            |b, _| {
                b.iter(|| black_box(Perceptron::new(x.view(), &y, 100).unwrap()));
            }
        );
    }

    group.finish();
}

fn bench_train_weighted(c: &mut Criterion) {
    let (x, y) = blobs(16, 1000, 4);
    let base = Perceptron::new(x.view(), &y, 100).unwrap();
    let cost: Vec<f64> = (0..y.len()).map(|j| 1.0 + (j % 3) as f64).collect();

    c.bench_function("train_weighted_1000", |b| {
        b.iter(|| black_box(Perceptron::boosted(&base, x.view(), &cost, &y).unwrap()));
    });
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for n_features in [8, 64, 256] {
        let (x, y) = blobs(n_features, 1000, 10);
        let config = Config::with_iterations(50).unwrap();
        let p = Perceptron::with_strategies(
            x.view(),
            &y,
            config,
            RandomInitialization::new(7),
            SimpleWeightUpdate
        )
        .unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(n_features),
            &n_features,
            |b, _| {
                b.iter(|| black_box(p.classify(black_box(x.view())).unwrap()));
            }
        );
    }

    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let (mut weights, mut bias) = RandomInitialization::new(1).initialize(256, 10);
    let x = Array1::from_elem(256, 0.5);

    c.bench_function("update_256x10", |b| {
        b.iter(|| {
            SimpleWeightUpdate.update(black_box(x.view()), &mut weights, &mut bias, 3, 7);
        });
    });
}

criterion_group!(
    benches,
    bench_train,
    bench_train_weighted,
    bench_classify,
    bench_update
);
criterion_main!(benches);
