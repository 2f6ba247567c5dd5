/*
 * Galaxy Benchmark
 *
 * Measures generation throughput, full regeneration through the lifecycle
 * manager, and the per-frame projection of a generated galaxy.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use galaxy::{
    generate_with, GalaxyLifecycleManager, GalaxyParams, PerspectiveCamera, PointRenderer,
    Renderer, Scene,
};

// Benchmark generation for increasing particle counts
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for count in [1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let params = GalaxyParams { count: n, ..Default::default() };
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(generate_with(&params, &mut rng)));
        });
    }

    group.finish();
}

// Benchmark dispose-then-generate through the manager
fn bench_regenerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("regenerate");

    for count in [10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let params = GalaxyParams { count: n, ..Default::default() };
            let mut manager = GalaxyLifecycleManager::new(Scene::new(), Some(42));
            b.iter(|| black_box(manager.regenerate(&params)));
        });
    }

    group.finish();
}

// Benchmark projecting the galaxy into sprites for one frame
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for count in [10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let params = GalaxyParams { count: n, ..Default::default() };
            let mut manager = GalaxyLifecycleManager::new(Scene::new(), Some(42));
            manager.regenerate(&params);

            let mut camera = PerspectiveCamera::new(75.0, 16.0 / 9.0, 0.1, 100.0);
            camera.position = nannou::prelude::vec3(3.0, 3.0, 3.0);
            let mut renderer = PointRenderer::new(1280.0, 720.0, 2.0);

            b.iter(|| {
                renderer.render(manager.scene(), &camera);
                black_box(renderer.sprites().len())
            });
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_generate, bench_regenerate, bench_render
}
criterion_main!(benches);
