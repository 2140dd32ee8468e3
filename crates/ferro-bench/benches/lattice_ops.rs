//! Criterion micro-benchmarks for lattice operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ferro_lattice::SpinLattice;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Gather neighbour spins for all 10K cells of a 100x100 lattice.
fn bench_neighbour_spins_10k(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let lattice = SpinLattice::random(100, 100, &mut rng).unwrap();

    c.bench_function("neighbour_spins_10k", |b| {
        b.iter(|| {
            for y in 0..100 {
                for x in 0..100 {
                    let n = lattice.neighbour_spins(x, y);
                    black_box(&n);
                }
            }
        });
    });
}

/// Mean spin over 10K cells.
fn bench_mean_spin_10k(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let lattice = SpinLattice::random(100, 100, &mut rng).unwrap();

    c.bench_function("mean_spin_10k", |b| {
        b.iter(|| black_box(lattice.mean_spin()));
    });
}

criterion_group!(benches, bench_neighbour_spins_10k, bench_mean_spin_10k);
criterion_main!(benches);
