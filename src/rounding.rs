//! Tolerance policy for comparing floating point values.
//!
//! Every place that needs to decide whether two doubles are "the same"
//! (matching roots, deduplicating extrema, displaying coefficients) goes
//! through `smart_round` with a `RoundingConfig`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rounding tolerances.
///
/// Values within `epsilon` of an integer snap to that integer; everything else
/// is rounded to `1 / scale` (three decimals for the default scale of 1000).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundingConfig {
    pub epsilon: f64,
    pub scale: f64,
}

impl RoundingConfig {
    pub fn new(epsilon: f64, scale: f64) -> RoundingConfig {
        assert!(epsilon > 0.0);
        assert!(epsilon.is_finite());
        assert!(scale > 0.0);
        assert!(scale.is_finite());
        RoundingConfig { epsilon, scale }
    }

    pub fn is_valid(&self) -> bool {
        self.epsilon > 0.0 && self.epsilon.is_finite() && self.scale > 0.0 && self.scale.is_finite()
    }
}

impl Default for RoundingConfig {
    fn default() -> RoundingConfig {
        RoundingConfig {
            epsilon: 1e-4,
            scale: 1000.0,
        }
    }
}

/// Round half up, so that -2.5 goes to -2 rather than away from zero.
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Snap `v` to the nearest integer when it is within tolerance, otherwise
/// round it to the configured number of decimals.
pub fn smart_round(v: f64, cfg: &RoundingConfig) -> f64 {
    let nearest = round_half_up(v);
    if (nearest - v).abs() < cfg.epsilon {
        return nearest;
    }
    round_half_up(v * cfg.scale) / cfg.scale
}

/// Sorted, duplicate-free copy of `values`.
///
/// Two values are duplicates when they `smart_round` to the same number; the
/// smallest member of each run is kept.
pub fn canonicalize(values: &[f64], cfg: &RoundingConfig) -> Vec<f64> {
    let mut out = values.to_vec();
    if out.len() < 2 {
        return out;
    }
    out.sort_by(|a, b| a.total_cmp(b));
    out.dedup_by(|cur, kept| smart_round(*cur, cfg) == smart_round(*kept, cfg));
    out
}

/// Displays a value smart-rounded with the default tolerances, so that
/// integral values print without a fractional part.
#[derive(Clone, Copy, Debug)]
pub struct Rounded(pub f64);

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // adding zero turns -0 into 0
        write!(f, "{}", smart_round(self.0, &RoundingConfig::default()) + 0.0)
    }
}
