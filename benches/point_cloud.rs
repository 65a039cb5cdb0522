use criterion::{criterion_group, criterion_main, Criterion, black_box};

use bladecast::grass::{build, build_parallel, generate_samples, GenerationParameters};
use bladecast::surface::{HeightfieldSurface, PlaneSurface};
use bladecast::terrain::TerrainParams;

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_sample_10k(c: &mut Criterion) {
    let params = GenerationParameters::new(10_000, 1000.0, Vec2::splat(64.0));

    c.bench_function("sample_10k", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| generate_samples(black_box(&params), black_box(Vec3::ZERO), &mut rng));
    });
}

fn bench_build_plane_10k(c: &mut Criterion) {
    let params = GenerationParameters::new(10_000, 1000.0, Vec2::splat(64.0));
    let samples = generate_samples(&params, Vec3::ZERO, &mut StdRng::seed_from_u64(1));
    let plane = PlaneSurface::new(0.0);

    c.bench_function("build_plane_10k", |b| {
        b.iter(|| build(black_box(&samples), &plane));
    });
}

fn bench_build_heightfield(c: &mut Criterion) {
    let params = GenerationParameters::new(50_000, 1000.0, Vec2::splat(128.0));
    let samples = generate_samples(&params, Vec3::ZERO, &mut StdRng::seed_from_u64(1));
    let surface = HeightfieldSurface::from_params(TerrainParams::default());

    c.bench_function("build_heightfield_50k_sequential", |b| {
        b.iter(|| build(black_box(&samples), &surface));
    });

    c.bench_function("build_heightfield_50k_parallel", |b| {
        b.iter(|| build_parallel(black_box(&samples), &surface));
    });
}

criterion_group!(
    benches,
    bench_sample_10k,
    bench_build_plane_10k,
    bench_build_heightfield,
);
criterion_main!(benches);
