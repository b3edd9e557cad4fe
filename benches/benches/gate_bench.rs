//! # Gate Composition Benchmarks
//!
//! Measures the cost of expanding catalogue gates to full register operators.
//! Both paths grow as O(4^n) in the register size.
//!
//! Run: `cargo bench --bench gate_bench`

use auqs_core::{Gate, GateMatrix, generate_gate};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Benchmark the catalogue lookup
fn bench_gate_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_lookup");

    group.bench_function("hadamard", |b| b.iter(|| black_box(Gate::H.matrix())));

    group.bench_function("parse_and_lookup", |b| {
        b.iter(|| black_box(auqs_core::gates::lookup(black_box("TDagger"))))
    });

    group.finish();
}

/// Benchmark the Kronecker product of two operators
fn bench_kron(c: &mut Criterion) {
    let mut group = c.benchmark_group("kron");

    for dim in [2usize, 8, 32] {
        let a = GateMatrix::identity(dim);
        let h = Gate::H.matrix().expect("H is single-qubit");
        group.bench_with_input(BenchmarkId::from_parameter(dim), &dim, |b, _| {
            b.iter(|| black_box(a.kron(&h)))
        });
    }

    group.finish();
}

/// Benchmark full single-qubit expansion
fn bench_single_qubit_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_qubit_expansion");

    for n in [2usize, 4, 6, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(generate_gate(Gate::H, n, n / 2, None)))
        });
    }

    group.finish();
}

/// Benchmark CNOT expansion (two Kronecker folds plus a sum)
fn bench_cnot_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("cnot_expansion");

    for n in [2usize, 4, 6, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(generate_gate(Gate::Cnot, n, 0, Some(n - 1))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_gate_lookup,
    bench_kron,
    bench_single_qubit_expansion,
    bench_cnot_expansion,
);

criterion_main!(benches);
