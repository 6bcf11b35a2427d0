//! Single-qubit Generator Matrices
//!
//! Fixed 2x2 building blocks of the Jordan-Wigner construction. Stored as
//! plain `const` arrays so every backend converts them into its own
//! representation on demand.

use ndarray::Array2;
use num_complex::Complex64;

/// Row-major 2x2 complex matrix.
pub type Generator = [[Complex64; 2]; 2];

const O: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

pub const IDENTITY: Generator = [[ONE, O], [O, ONE]];

pub const PAULI_X: Generator = [[O, ONE], [ONE, O]];

pub const PAULI_Y: Generator = [[O, Complex64::new(0.0, -1.0)], [I, O]];

pub const PAULI_Z: Generator = [[ONE, O], [O, Complex64::new(-1.0, 0.0)]];

/// Jordan-Wigner parity string factor, `-Z`.
pub const NEG_PAULI_Z: Generator = [[Complex64::new(-1.0, 0.0), O], [O, ONE]];

/// σ⁺ = ½(X + iY)
pub const RAISING: Generator = [[O, ONE], [O, O]];

/// σ⁻ = ½(X − iY)
pub const LOWERING: Generator = [[O, O], [ONE, O]];

/// Convert a generator into a dense 2x2 array.
pub fn to_array(g: &Generator) -> Array2<Complex64> {
    Array2::from_shape_fn((2, 2), |(r, c)| g[r][c])
}
