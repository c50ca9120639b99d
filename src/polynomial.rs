//! Single-variable real polynomials.

use std::fmt;

use thiserror::Error;

use crate::config::SolverConfig;
use crate::intervals::{self, Sign};
use crate::rounding::{smart_round, Rounded, RoundingConfig};
use crate::solver::{RootError, Solver};

/// Reasons a coefficient sequence does not describe a polynomial.
#[derive(Debug, Error, PartialEq)]
pub enum PolynomialError {
    #[error("a polynomial needs at least one coefficient")]
    Empty,

    #[error("coefficient of x^{index} is not finite")]
    NonFinite { index: usize },

    #[error("leading coefficient of a degree {degree} polynomial must be non-zero")]
    ZeroLeadingCoefficient { degree: usize },
}

/// Polynomial with real coefficients.
///
/// Coefficients are stored by increasing power, so `coeffs[0]` is the
/// constant term.  The coefficient at the degree is non-zero unless the
/// polynomial is a constant.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Builds a polynomial from coefficients in ascending power order.
    pub fn new(coeffs: Vec<f64>) -> Result<Polynomial, PolynomialError> {
        if coeffs.is_empty() {
            return Err(PolynomialError::Empty);
        }
        if let Some(index) = coeffs.iter().position(|c| !c.is_finite()) {
            return Err(PolynomialError::NonFinite { index });
        }
        let degree = coeffs.len() - 1;
        if degree > 0 && coeffs[degree] == 0.0 {
            return Err(PolynomialError::ZeroLeadingCoefficient { degree });
        }
        Ok(Polynomial { coeffs })
    }

    pub fn constant(c: f64) -> Polynomial {
        Polynomial { coeffs: vec![c] }
    }

    /// Internal constructor for derived polynomials.  Trailing zeros are
    /// dropped so the leading-coefficient invariant survives rounding.
    pub(crate) fn from_raw(mut coeffs: Vec<f64>) -> Polynomial {
        while coeffs.len() > 1 && coeffs[coeffs.len() - 1] == 0.0 {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(0.0);
        }
        Polynomial { coeffs }
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Coefficient of `x^i`; zero beyond the degree.
    pub fn coefficient_at(&self, i: usize) -> f64 {
        self.coeffs.get(i).copied().unwrap_or(0.0)
    }

    pub fn leading_coefficient(&self) -> f64 {
        self.coeffs[self.degree()]
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// True for `f(x) = 0`, which has every x as a root.
    pub fn is_zero(&self) -> bool {
        self.degree() == 0 && self.coeffs[0] == 0.0
    }

    /// Evaluates the polynomial at `x` (Horner's scheme).
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }

    /// First derivative, with each coefficient passed through `smart_round`
    /// to keep repeated differentiation free of floating point noise.
    pub fn derivative(&self) -> Polynomial {
        self.derivative_with(&RoundingConfig::default())
    }

    pub fn derivative_with(&self, rounding: &RoundingConfig) -> Polynomial {
        if self.degree() == 0 {
            return Polynomial::constant(0.0);
        }
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| smart_round(i as f64 * c, rounding))
            .collect();
        Polynomial::from_raw(coeffs)
    }

    /// Real roots using a solver with default settings and an entropy-seeded
    /// initial guess.  The result is neither sorted nor deduplicated.
    pub fn find_roots(&self) -> Result<Vec<f64>, RootError> {
        Solver::from_entropy(SolverConfig::default()).find_roots(self)
    }

    /// Sign of the polynomial on each interval delimited by the canonical
    /// `points`.  See `intervals::sign_intervals`.
    pub fn sign_intervals(&self, points: &[f64]) -> Vec<Sign> {
        intervals::sign_intervals(self, points)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.degree();
        if n == 0 {
            return write!(f, "{}", Rounded(self.coeffs[0]));
        }

        let cfg = RoundingConfig::default();
        for i in (0..=n).rev() {
            let c = self.coeffs[i];
            if c == 0.0 {
                continue;
            }

            let sign = match (i == n, c < 0.0) {
                (true, true) => "-",
                (true, false) => "",
                (false, true) => " - ",
                (false, false) => " + ",
            };
            f.write_str(sign)?;

            let magnitude = smart_round(c.abs(), &cfg);
            if magnitude != 1.0 || i == 0 {
                write!(f, "{}", Rounded(magnitude))?;
            }

            match i {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{}", i)?,
            }
        }
        Ok(())
    }
}
