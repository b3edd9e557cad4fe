//! # Register Benchmarks
//!
//! Measures register creation, gate application and measurement.
//!
//! Run: `cargo bench --bench register_bench`

use auqs_core::{Gate, QuantumRegister, circuits};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Benchmark register allocation in |0…0⟩
fn bench_register_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("register_creation");

    for n in [2usize, 6, 10] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(QuantumRegister::new(n)))
        });
    }

    group.finish();
}

/// Benchmark a single Hadamard application
fn bench_apply_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_gate");

    for n in [2usize, 4, 6, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || QuantumRegister::new(n).expect("register within limits"),
                |mut reg| {
                    reg.apply_gate(Gate::H, 0, None).expect("valid gate");
                    reg
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// Benchmark the two-qubit SWAP circuit end to end
fn bench_swap_circuit(c: &mut Criterion) {
    c.bench_function("swap_circuit", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            let mut reg = QuantumRegister::new(2).expect("register within limits");
            reg.apply_gate(Gate::X, 0, None).expect("valid gate");
            circuits::swap(&mut reg, 0, 1).expect("valid swap");
            black_box(reg.measure(&mut rng))
        })
    });
}

/// Benchmark weighted measurement over a uniform superposition
fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");

    for n in [2usize, 6, 10] {
        let mut prepared = QuantumRegister::new(n).expect("register within limits");
        for q in 0..n {
            prepared.apply_gate(Gate::H, q, None).expect("valid gate");
        }
        let mut rng = StdRng::seed_from_u64(7);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter_batched(
                || prepared.clone(),
                |mut reg| black_box(reg.measure(&mut rng)),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_register_creation,
    bench_apply_gate,
    bench_swap_circuit,
    bench_measure,
);

criterion_main!(benches);
