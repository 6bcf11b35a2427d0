//! Jordan-Wigner Operator Builder
//!
//! Backend-independent part of the construction: mode validation, the
//! ordered factor string, and the `OperatorBuilder` interface both
//! backends implement.
//!
//! The annihilation operator of mode `i` in an `N`-mode system is
//!
//! a_i = (-Z) ⊗ ... ⊗ (-Z) ⊗ σ⁻ ⊗ I ⊗ ... ⊗ I
//!
//! with `i` parity factors on the left. Factors are combined left to
//! right starting from the scalar 1, so mode 0 is the most significant
//! bit of the basis index.

use ndarray::Array1;
use num_complex::Complex64;

use crate::error::{FermionError, Result};
use crate::generators::{Generator, IDENTITY, LOWERING, NEG_PAULI_Z};
use crate::state::basis_state;

/// One tensor factor in the Jordan-Wigner string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Factor {
    /// `-Z` on a mode left of the target
    Parity,
    /// σ⁻ on the target mode
    Lowering,
    /// `I` on a mode right of the target
    Identity,
}

impl Factor {
    /// The 2x2 generator this factor stands for.
    pub fn generator(self) -> &'static Generator {
        match self {
            Factor::Parity => &NEG_PAULI_Z,
            Factor::Lowering => &LOWERING,
            Factor::Identity => &IDENTITY,
        }
    }
}

/// Ordered factors of the annihilation operator for mode `index`,
/// position 0 first.
pub fn jordan_wigner_string(n_modes: usize, index: usize) -> impl Iterator<Item = Factor> {
    (0..n_modes).map(move |k| {
        if k < index {
            Factor::Parity
        } else if k == index {
            Factor::Lowering
        } else {
            Factor::Identity
        }
    })
}

/// Validate a mode count and return the Hilbert space dimension `2^n_modes`.
pub fn hilbert_dim(n_modes: usize) -> Result<usize> {
    if n_modes == 0 {
        return Err(FermionError::invalid_argument(
            "n_modes must be a positive integer",
        ));
    }
    if n_modes >= usize::BITS as usize {
        return Err(FermionError::invalid_argument(format!(
            "2^{} basis states do not fit in usize",
            n_modes
        )));
    }
    Ok(1 << n_modes)
}

/// Check that `index` names a mode of an `n_modes` system.
#[inline]
pub fn check_mode(index: usize, n_modes: usize) -> Result<()> {
    if index < n_modes {
        Ok(())
    } else {
        Err(FermionError::out_of_range(index, n_modes))
    }
}

/// Capability shared by the dense and sparse backends.
pub trait OperatorBuilder {
    /// Matrix type produced by this backend.
    type Operator;

    /// Number of fermionic modes.
    fn n_modes(&self) -> usize;

    /// Hilbert space dimension, `2^n_modes`.
    fn dim(&self) -> usize;

    /// Annihilation operator `a_i`.
    fn annihilation(&self, index: usize) -> Result<Self::Operator>;

    /// Creation operator `a_i†`, the transpose of `a_i`.
    fn creation(&self, index: usize) -> Result<Self::Operator>;

    /// Number operator `n_i = a_i† a_i`.
    fn number(&self, index: usize) -> Result<Self::Operator>;

    /// Multiply an operator into a state vector.
    fn apply(&self, op: &Self::Operator, state: &Array1<Complex64>) -> Array1<Complex64>;

    /// State annihilated by every `a_i`: unit entry at the last basis index.
    fn vacuum_state(&self) -> Array1<Complex64> {
        let dim = self.dim();
        basis_state(dim, dim - 1)
    }

    /// Occupation-number state `a†_{o0} a†_{o1} ... |vac⟩`.
    ///
    /// The rightmost mode is created first. Listing a mode twice gives the
    /// zero vector.
    fn fock_state(&self, occupied: &[usize]) -> Result<Array1<Complex64>> {
        for &mode in occupied {
            check_mode(mode, self.n_modes())?;
        }

        let mut state = self.vacuum_state();
        for &mode in occupied.iter().rev() {
            let cdg = self.creation(mode)?;
            state = self.apply(&cdg, &state);
        }
        Ok(state)
    }
}
