//! Solver settings, loadable from TOML.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rounding::RoundingConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Knobs for `Solver`.
///
/// Missing fields in a TOML document fall back to the defaults:
///
/// ```toml
/// iterations = 10000
/// max_restarts = 16
/// guess_low = 10.0
/// guess_high = 20.0
/// residual_tolerance = 0.001
///
/// [rounding]
/// epsilon = 0.0001
/// scale = 1000.0
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Newton-Raphson steps per attempt.
    pub iterations: usize,
    /// Fresh guesses allowed after a zero derivative, a non-finite step or
    /// a pass that ends off a root.
    pub max_restarts: usize,
    pub guess_low: f64,
    pub guess_high: f64,
    /// Largest `|f(x)|` at which a Newton pass counts as having found a root.
    pub residual_tolerance: f64,
    pub rounding: RoundingConfig,
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            iterations: 10_000,
            max_restarts: 16,
            guess_low: 10.0,
            guess_high: 20.0,
            residual_tolerance: 1e-3,
            rounding: RoundingConfig::default(),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::Invalid("iterations must be positive".into()));
        }
        if !(self.guess_low.is_finite() && self.guess_high.is_finite()) {
            return Err(ConfigError::Invalid("guess range must be finite".into()));
        }
        if self.guess_low >= self.guess_high {
            return Err(ConfigError::Invalid(format!(
                "empty guess range [{}, {})",
                self.guess_low, self.guess_high
            )));
        }
        if !(self.residual_tolerance.is_finite() && self.residual_tolerance > 0.0) {
            return Err(ConfigError::Invalid(
                "residual tolerance must be positive and finite".into(),
            ));
        }
        if !self.rounding.is_valid() {
            return Err(ConfigError::Invalid(
                "rounding epsilon and scale must be positive and finite".into(),
            ));
        }
        Ok(())
    }

    pub fn from_toml_str(s: &str) -> Result<SolverConfig, ConfigError> {
        let cfg: SolverConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<SolverConfig, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        SolverConfig::from_toml_str(&content)
    }
}
