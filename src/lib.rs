//! FermionCore: Jordan-Wigner Fermionic Operators
//!
//! Matrix representations of fermionic creation, annihilation and number
//! operators for an N-mode system, mapped onto N qubits with the
//! Jordan-Wigner transformation. Dense (`ndarray`) and sparse (CSR)
//! backends share one construction rule.

pub mod builder;
pub mod config;
pub mod csr;
pub mod dense;
pub mod error;
pub mod generators;
pub mod sparse;
pub mod state;

pub use builder::{jordan_wigner_string, Factor, OperatorBuilder};
pub use config::FermionConfig;
pub use csr::CsrMatrix;
pub use dense::DenseFermion;
pub use error::{FermionError, Result};
pub use sparse::SparseFermion;
pub use state::{basis_state, random_state};
