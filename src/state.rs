//! State vectors over the 2^N-dimensional Fock space

use ndarray::Array1;
use num_complex::Complex64;
use rand::Rng;
use rand_distr::StandardNormal;

/// Computational basis vector with a single unit entry at `index`.
pub fn basis_state(dim: usize, index: usize) -> Array1<Complex64> {
    let mut state = Array1::zeros(dim);
    state[index] = Complex64::new(1.0, 0.0);
    state
}

/// Euclidean norm of a state vector.
pub fn norm(state: &Array1<Complex64>) -> f64 {
    state.iter().map(|x| x.norm_sqr()).sum::<f64>().sqrt()
}

/// Draw a normalized random state with Gaussian amplitudes.
///
/// Uniformly distributed over the unit sphere in C^dim, which makes it a
/// convenient probe for operator identities.
pub fn random_state<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Array1<Complex64> {
    let mut state: Array1<Complex64> = (0..dim)
        .map(|_| {
            let re: f64 = rng.sample(StandardNormal);
            let im: f64 = rng.sample(StandardNormal);
            Complex64::new(re, im)
        })
        .collect();

    let n = norm(&state);
    if n > 0.0 {
        state.mapv_inplace(|x| x / n);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_basis_state() {
        let s = basis_state(8, 7);
        assert_eq!(s.len(), 8);
        assert_eq!(s[7], Complex64::new(1.0, 0.0));
        assert_eq!(s.iter().filter(|x| x.norm() > 0.0).count(), 1);
    }

    #[test]
    fn test_random_state_normalized() {
        let mut rng = StdRng::seed_from_u64(7);
        for dim in [2, 16, 128] {
            let s = random_state(dim, &mut rng);
            assert_eq!(s.len(), dim);
            assert_abs_diff_eq!(norm(&s), 1.0, epsilon = 1e-12);
        }
    }
}
