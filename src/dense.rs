//! Dense Jordan-Wigner Backend
//!
//! Full `2^N x 2^N` complex matrices. Memory grows as `4^N`, so this is
//! meant for small systems and for cross-checking the sparse backend.

use log::debug;
use ndarray::{linalg::kron, Array1, Array2};
use num_complex::Complex64;

use crate::builder::{check_mode, hilbert_dim, jordan_wigner_string, OperatorBuilder};
use crate::error::Result;
use crate::generators::to_array;

/// Fermionic operators as dense matrices.
#[derive(Clone, Debug)]
pub struct DenseFermion {
    n_modes: usize,
    dim: usize,
}

impl DenseFermion {
    /// Create a system of `n_modes` fermionic modes.
    pub fn new(n_modes: usize) -> Result<Self> {
        let dim = hilbert_dim(n_modes)?;
        Ok(Self { n_modes, dim })
    }

    /// Kronecker chain for a mode already known to be valid.
    fn build_annihilation(&self, index: usize) -> Array2<Complex64> {
        debug!(
            "building dense annihilation operator for mode {} of {}",
            index, self.n_modes
        );

        let mut cop = Array2::from_elem((1, 1), Complex64::new(1.0, 0.0));
        for factor in jordan_wigner_string(self.n_modes, index) {
            cop = kron(&cop, &to_array(factor.generator()));
        }
        cop
    }
}

impl OperatorBuilder for DenseFermion {
    type Operator = Array2<Complex64>;

    fn n_modes(&self) -> usize {
        self.n_modes
    }

    fn dim(&self) -> usize {
        self.dim
    }

    fn annihilation(&self, index: usize) -> Result<Array2<Complex64>> {
        check_mode(index, self.n_modes)?;
        Ok(self.build_annihilation(index))
    }

    fn creation(&self, index: usize) -> Result<Array2<Complex64>> {
        check_mode(index, self.n_modes)?;
        let cop = self.build_annihilation(index);
        Ok(cop.t().to_owned())
    }

    fn number(&self, index: usize) -> Result<Array2<Complex64>> {
        check_mode(index, self.n_modes)?;
        let cop = self.build_annihilation(index);
        Ok(cop.t().dot(&cop))
    }

    #[inline]
    fn apply(&self, op: &Array2<Complex64>, state: &Array1<Complex64>) -> Array1<Complex64> {
        op.dot(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FermionError;
    use crate::generators::{IDENTITY, LOWERING, NEG_PAULI_Z};

    const TOL: f64 = 1e-12;

    fn max_abs_diff(a: &Array2<Complex64>, b: &Array2<Complex64>) -> f64 {
        assert_eq!(a.shape(), b.shape());
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).norm())
            .fold(0.0, f64::max)
    }

    fn anticommutator(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
        a.dot(b) + b.dot(a)
    }

    #[test]
    fn test_two_mode_operators() {
        let f = DenseFermion::new(2).unwrap();
        assert_eq!(f.dim(), 4);

        let a0 = f.annihilation(0).unwrap();
        let expected0 = kron(&to_array(&LOWERING), &to_array(&IDENTITY));
        assert!(max_abs_diff(&a0, &expected0) < TOL);

        let a1 = f.annihilation(1).unwrap();
        let expected1 = kron(&to_array(&NEG_PAULI_Z), &to_array(&LOWERING));
        assert!(max_abs_diff(&a1, &expected1) < TOL);
    }

    #[test]
    fn test_creation_is_transpose() {
        let f = DenseFermion::new(3).unwrap();
        for i in 0..3 {
            let cop = f.annihilation(i).unwrap();
            let cdg = f.creation(i).unwrap();
            assert!(max_abs_diff(&cdg, &cop.t().to_owned()) < TOL);
        }
    }

    #[test]
    fn test_anticommutation_relations() {
        let n = 3;
        let f = DenseFermion::new(n).unwrap();
        let identity = Array2::<Complex64>::eye(f.dim());
        let zero = Array2::<Complex64>::zeros((f.dim(), f.dim()));

        for i in 0..n {
            let ai = f.annihilation(i).unwrap();
            let ai_dg = f.creation(i).unwrap();
            assert!(max_abs_diff(&anticommutator(&ai, &ai_dg), &identity) < TOL);

            for j in 0..n {
                if i == j {
                    continue;
                }
                let aj = f.annihilation(j).unwrap();
                let aj_dg = f.creation(j).unwrap();
                assert!(max_abs_diff(&anticommutator(&ai, &aj), &zero) < TOL);
                assert!(max_abs_diff(&anticommutator(&ai, &aj_dg), &zero) < TOL);
            }
        }
    }

    #[test]
    fn test_number_operator_spectrum() {
        let f = DenseFermion::new(3).unwrap();
        let dim = f.dim();

        for i in 0..3 {
            let n = f.number(i).unwrap();
            let n_h = n.t().mapv(|x| x.conj());
            assert!(max_abs_diff(&n, &n_h) < TOL, "n_{} not Hermitian", i);

            // Diagonal in the occupation basis
            for r in 0..dim {
                for c in 0..dim {
                    if r != c {
                        assert!(n[[r, c]].norm() < TOL);
                    }
                }
            }

            let ones = (0..dim).filter(|&k| (n[[k, k]].re - 1.0).abs() < TOL).count();
            let zeros = (0..dim).filter(|&k| n[[k, k]].norm() < TOL).count();
            assert_eq!(ones, dim / 2);
            assert_eq!(zeros, dim / 2);
        }
    }

    #[test]
    fn test_total_number_two_modes() {
        let f = DenseFermion::new(2).unwrap();
        let total = f.number(0).unwrap() + f.number(1).unwrap();

        let mut diag: Vec<f64> = total.diag().iter().map(|x| x.re).collect();
        diag.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(diag, vec![0.0, 1.0, 1.0, 2.0]);
    }

    #[test]
    fn test_vacuum_annihilated() {
        let f = DenseFermion::new(4).unwrap();
        let vac = f.vacuum_state();
        assert_eq!(vac.len(), 16);
        assert_eq!(vac[15], Complex64::new(1.0, 0.0));

        for i in 0..4 {
            let out = f.apply(&f.annihilation(i).unwrap(), &vac);
            assert!(out.iter().all(|x| x.norm() < TOL));
        }
    }

    #[test]
    fn test_out_of_range() {
        let f = DenseFermion::new(2).unwrap();
        assert!(matches!(
            f.annihilation(2),
            Err(FermionError::OutOfRange { index: 2, n_modes: 2 })
        ));
        assert!(f.creation(5).is_err());
        assert!(f.number(2).is_err());
    }

    #[test]
    fn test_zero_modes_rejected() {
        assert!(matches!(
            DenseFermion::new(0),
            Err(FermionError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_fock_state() {
        let f = DenseFermion::new(3).unwrap();

        let psi = f.fock_state(&[1]).unwrap();
        let n1 = f.number(1).unwrap();
        let out = f.apply(&n1, &psi);
        assert!(out.iter().zip(psi.iter()).all(|(a, b)| (a - b).norm() < TOL));

        let n0 = f.number(0).unwrap();
        assert!(f.apply(&n0, &psi).iter().all(|x| x.norm() < TOL));

        // Pauli exclusion
        let doubled = f.fock_state(&[2, 2]).unwrap();
        assert!(doubled.iter().all(|x| x.norm() < TOL));

        assert!(f.fock_state(&[3]).is_err());
    }
}
