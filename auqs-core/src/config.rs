//! Simulator configuration
//!
//! Sources, lowest precedence first: [`Default`], a TOML file, then the
//! `AUQS_*` environment variables.
//!
//! ```toml
//! seed = 42
//! tolerance = 1e-9
//! max_qubits = 10
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{QuantumError, QuantumResult};

/// Environment variable overriding [`SimulatorConfig::seed`]
pub const ENV_SEED: &str = "AUQS_SEED";
/// Environment variable overriding [`SimulatorConfig::tolerance`]
pub const ENV_TOLERANCE: &str = "AUQS_TOLERANCE";
/// Environment variable overriding [`SimulatorConfig::max_qubits`]
pub const ENV_MAX_QUBITS: &str = "AUQS_MAX_QUBITS";

/// Register and measurement settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Measurement RNG seed (`None` draws from OS entropy)
    pub seed: Option<u64>,
    /// Tolerance for the normalization check before sampling
    pub tolerance: f64,
    /// Largest register that may be allocated
    pub max_qubits: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tolerance: 1e-9,
            max_qubits: 12,
        }
    }
}

impl SimulatorConfig {
    /// Parses a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> QuantumResult<Self> {
        toml::from_str(content)
            .map_err(|e| QuantumError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Loads a TOML config file
    pub fn load(path: &Path) -> QuantumResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| QuantumError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Serializes back to TOML
    pub fn to_toml_string(&self) -> QuantumResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| QuantumError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Defaults overridden by the environment
    pub fn from_env() -> QuantumResult<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Overrides fields from `AUQS_*` variables that are set
    pub fn apply_env(&mut self) -> QuantumResult<()> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) -> QuantumResult<()> {
        if let Some(seed) = var(ENV_SEED) {
            self.seed = Some(parse_var(ENV_SEED, &seed)?);
        }
        if let Some(tolerance) = var(ENV_TOLERANCE) {
            self.tolerance = parse_var(ENV_TOLERANCE, &tolerance)?;
        }
        if let Some(max_qubits) = var(ENV_MAX_QUBITS) {
            self.max_qubits = parse_var(ENV_MAX_QUBITS, &max_qubits)?;
        }
        Ok(())
    }

    /// Measurement RNG for this configuration
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> QuantumResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| QuantumError::Config(format!("{}: cannot parse '{}'", key, value)))
}
