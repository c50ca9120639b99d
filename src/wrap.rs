//! Evaluation traits the Newton driver iterates over.

use crate::polynomial::Polynomial;
use crate::rounding::RoundingConfig;

/// Trait evaluating: f(x) with x in R^1.
pub trait RealFnEval {
    fn eval_f(&self, x: f64) -> f64;
}

/// Trait evaluating the derivative: df(x) with x in R^1.
pub trait RealDfEval {
    fn eval_df(&self, x: f64) -> f64;
}

/// Wraps a polynomial and its derivative to implement RealFnEval and
/// RealDfEval.  The derivative is computed once, up front.
pub struct PolyAndFirst<'a> {
    pub f: &'a Polynomial,
    pub df: Polynomial,
}

impl<'a> PolyAndFirst<'a> {
    pub fn new(f: &'a Polynomial, rounding: &RoundingConfig) -> PolyAndFirst<'a> {
        PolyAndFirst {
            f,
            df: f.derivative_with(rounding),
        }
    }
}

impl<'a> RealFnEval for PolyAndFirst<'a> {
    fn eval_f(&self, x: f64) -> f64 {
        self.f.evaluate(x)
    }
}

impl<'a> RealDfEval for PolyAndFirst<'a> {
    fn eval_df(&self, x: f64) -> f64 {
        self.df.evaluate(x)
    }
}
