//! FermionCore Benchmark Suite

use fermioncore::csr::CsrMatrix;
use fermioncore::{random_state, DenseFermion, OperatorBuilder, SparseFermion};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

fn header(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("BENCHMARK: {}", title);
    println!("{}", "=".repeat(60));
}

fn time_per_iter<T>(n_iters: usize, mut f: impl FnMut() -> T) -> f64 {
    let start = Instant::now();
    for _ in 0..n_iters {
        std::hint::black_box(f());
    }
    start.elapsed().as_secs_f64() / n_iters as f64
}

fn benchmark_dense_construction() {
    header("Dense Operator Construction");

    for n_modes in [2, 4, 6, 8] {
        let Ok(f) = DenseFermion::new(n_modes) else {
            continue;
        };
        let mid = n_modes / 2;
        let n_iters = if n_modes <= 6 { 100 } else { 5 };

        let cop = time_per_iter(n_iters, || f.annihilation(mid));
        let nop = time_per_iter(n_iters, || f.number(mid));

        println!(
            "  N={:2} ({:4}x{:4}): a_i {:10.1} μs, n_i {:10.1} μs",
            n_modes,
            f.dim(),
            f.dim(),
            cop * 1e6,
            nop * 1e6
        );
    }
}

fn benchmark_sparse_construction() {
    header("Sparse Operator Construction");

    for n_modes in [4, 8, 12, 16] {
        let Ok(f) = SparseFermion::new(n_modes) else {
            continue;
        };
        let mid = n_modes / 2;
        let n_iters = if n_modes <= 12 { 100 } else { 10 };

        let cop = time_per_iter(n_iters, || f.annihilation(mid));
        let nop = time_per_iter(n_iters, || f.number(mid));
        let list = time_per_iter(n_iters.min(10), || f.number_list());

        let nnz = f.annihilation(mid).map(|m| m.nnz()).unwrap_or(0);
        println!(
            "  N={:2} (dim {:6}, nnz {:6}): a_i {:10.1} μs, n_i {:10.1} μs, number_list {:10.1} μs",
            n_modes,
            f.dim(),
            nnz,
            cop * 1e6,
            nop * 1e6,
            list * 1e6
        );
    }
}

fn benchmark_apply() {
    header("Operator Application (Total Number on Random State)");

    let mut rng = StdRng::seed_from_u64(0);

    for n_modes in [8, 12, 16] {
        let Ok(f) = SparseFermion::new(n_modes) else {
            continue;
        };
        let total = f
            .number_list()
            .iter()
            .fold(CsrMatrix::zeros(f.dim(), f.dim()), |acc, n| acc.add(n));
        let psi = random_state(f.dim(), &mut rng);

        let elapsed = time_per_iter(100, || f.apply(&total, &psi));
        let mean_occupation: f64 = psi
            .iter()
            .zip(f.apply(&total, &psi).iter())
            .map(|(a, b)| (a.conj() * b).re)
            .sum();

        println!(
            "  N={:2}: {:8.1} μs per apply, <N> = {:.3}",
            n_modes,
            elapsed * 1e6,
            mean_occupation
        );
    }
}

fn main() {
    println!("\n{}", "#".repeat(60));
    println!("#  FermionCore Rust Benchmark Suite");
    println!("{}", "#".repeat(60));

    benchmark_dense_construction();
    benchmark_sparse_construction();
    benchmark_apply();

    println!("\n{}", "=".repeat(60));
    println!("BENCHMARK COMPLETE");
    println!("{}", "=".repeat(60));
}
