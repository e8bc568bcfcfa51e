//! Curve-fitting benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Kernel operations by matrix order (product, determinant, inverse)
//! - Least-squares solves by design width
//! - Model fits by sample count (1K to 50K points)
//! - The closed-form linear path against the matrix path
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use curvefit_rs::prelude::*;
use rand::prelude::*;
use rand_distr::{Distribution, Normal};
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate noisy linear data y = 2x + 1 + noise.
fn generate_linear_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.2).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 * 10.0 / size as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 2.0 * xi + 1.0 + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

/// Generate noisy quadratic data y = x^2 - 3x + 2 + noise.
fn generate_quadratic_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.5).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 * 10.0 / size as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| xi * xi - 3.0 * xi + 2.0 + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

/// Generate noisy exponential growth data (strictly positive).
fn generate_growth_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(1.0, 0.05).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 * 5.0 / size as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 2.0 * 1.7f64.powf(xi) * noise_dist.sample(&mut rng).abs().max(0.01))
        .collect();
    (x, y)
}

/// Generate a well-conditioned square matrix (diagonally dominant).
fn generate_square_matrix(order: usize, seed: u64) -> Matrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 1.0).unwrap();

    let mut rows = Vec::with_capacity(order);
    for r in 0..order {
        let mut row: Vec<f64> = (0..order).map(|_| dist.sample(&mut rng)).collect();
        row[r] += order as f64 * 2.0;
        rows.push(row);
    }
    Matrix::from_rows(rows).unwrap()
}

// ============================================================================
// Kernel Benchmarks
// ============================================================================

fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel");

    for &order in &[2usize, 3, 4] {
        let m = generate_square_matrix(order, 42);

        group.bench_with_input(BenchmarkId::new("determinant", order), &m, |b, m| {
            b.iter(|| black_box(m.determinant().unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("inverse", order), &m, |b, m| {
            b.iter(|| black_box(m.inverse().unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("matmul", order), &m, |b, m| {
            b.iter(|| black_box(m.matmul(m).unwrap()))
        });
    }

    group.finish();
}

fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_least_squares");

    for &size in &[100usize, 1_000, 10_000] {
        let (x, y) = generate_linear_data(size, 7);
        let rows: Vec<Vec<f64>> = x.iter().map(|&v| vec![1.0, v]).collect();
        let design = Matrix::from_rows(rows).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(design, y),
            |b, (design, y)| b.iter(|| black_box(design.solve_least_squares(y).unwrap())),
        );
    }

    group.finish();
}

// ============================================================================
// Model Fit Benchmarks
// ============================================================================

fn bench_fits(c: &mut Criterion) {
    let mut group = c.benchmark_group("fits");

    for &size in &[1_000usize, 10_000, 50_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (x, y) = generate_linear_data(size, 1);
        group.bench_with_input(
            BenchmarkId::new("linear", size),
            &(x.clone(), y.clone()),
            |b, (x, y)| b.iter(|| black_box(fit_linear(x, y).unwrap())),
        );
        group.bench_with_input(
            BenchmarkId::new("linear_direct", size),
            &(x, y),
            |b, (x, y)| b.iter(|| black_box(fit_line_direct(x, y).unwrap())),
        );

        let (x, y) = generate_quadratic_data(size, 2);
        group.bench_with_input(
            BenchmarkId::new("quadratic", size),
            &(x, y),
            |b, (x, y)| b.iter(|| black_box(fit_quadratic(x, y).unwrap())),
        );

        let (x, y) = generate_growth_data(size, 3);
        group.bench_with_input(
            BenchmarkId::new("exponential", size),
            &(x, y),
            |b, (x, y)| b.iter(|| black_box(fit_exponential(x, y).unwrap())),
        );
    }

    group.finish();
}

fn bench_api(c: &mut Criterion) {
    let mut group = c.benchmark_group("api");

    let (x, y) = generate_quadratic_data(10_000, 11);
    let builder = CurveFit::new().model(ModelKind::Quadratic).return_diagnostics();

    group.throughput(Throughput::Elements(10_000));
    group.bench_function("quadratic_with_diagnostics_10k", |b| {
        b.iter(|| black_box(builder.fit(&x, &y).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_kernel, bench_solver, bench_fits, bench_api);
criterion_main!(benches);
