//! System Configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::builder::hilbert_dim;
use crate::dense::DenseFermion;
use crate::error::Result;
use crate::sparse::SparseFermion;

/// Persistable description of a fermionic system.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FermionConfig {
    pub n_modes: usize,
}

impl FermionConfig {
    pub fn new(n_modes: usize) -> Self {
        Self { n_modes }
    }

    /// Check that the mode count describes a representable system.
    pub fn validate(&self) -> Result<()> {
        hilbert_dim(self.n_modes).map(|_| ())
    }

    /// Build the dense backend.
    pub fn dense(&self) -> Result<DenseFermion> {
        DenseFermion::new(self.n_modes)
    }

    /// Build the sparse backend.
    pub fn sparse(&self) -> Result<SparseFermion> {
        SparseFermion::new(self.n_modes)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, filepath: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(filepath, json)?;
        Ok(())
    }

    /// Load and validate configuration from a JSON file.
    pub fn load(filepath: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(filepath)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }
}
