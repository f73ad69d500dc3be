//! Simulation configuration.
//!
//! Defaults are hardcoded in the `Default` impl and can be overridden by a
//! TOML document. Missing keys fall back to their defaults.
//!
//! ```toml
//! dimension = 25
//! cell_spacing = 3.1
//! initial_alive_probability = 0.2
//! seed = 42
//! num_threads = 4
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, Result};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LatticeConfig {
    /// Side length of the cubic lattice.
    pub dimension: usize,
    /// Distance between rendered cells. Only the host engine uses this.
    pub cell_spacing: f32,
    /// Chance that each cell starts alive.
    pub initial_alive_probability: f64,
    /// Fixed seed for reproducible runs; entropy is used when absent.
    pub seed: Option<u64>,
    /// Worker threads used for stepping (0 is treated as 1).
    pub num_threads: usize,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            dimension: 25,
            cell_spacing: 3.1,
            initial_alive_probability: 0.2,
            seed: None,
            num_threads: 1,
        }
    }
}

impl LatticeConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: LatticeConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks the options the lattice itself depends on.
    pub fn validate(&self) -> Result<()> {
        validate_dimension(self.dimension)?;
        validate_probability(self.initial_alive_probability)
    }
}

/// Rejects a zero side length and sides whose cube overflows `usize`.
pub fn validate_dimension(dimension: usize) -> Result<usize> {
    if dimension == 0 {
        return Err(LatticeError::invalid_config("dimension must be at least 1"));
    }
    dimension
        .checked_mul(dimension)
        .and_then(|sq| sq.checked_mul(dimension))
        .ok_or_else(|| {
            LatticeError::invalid_config(format!("dimension {} is too large", dimension))
        })
}

pub fn validate_probability(p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(LatticeError::invalid_config(format!(
            "alive probability {} is outside [0, 1]",
            p
        )))
    }
}
