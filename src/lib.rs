//! Real roots, derivatives and sign intervals of single-variable polynomials.
//!
//! Polynomials are built from coefficients in ascending power order.  Roots
//! are approximated with Newton-Raphson from a random starting point and then
//! divided out, so an n-th degree polynomial costs at most n Newton runs.
//! Root sets are compared through `rounding::smart_round`, which also keeps
//! repeated differentiation free of floating point noise.
//!
//! # Examples
//!
//! ```
//! use polyroots::intervals::Sign;
//! use polyroots::polynomial::Polynomial;
//! use polyroots::rounding::{canonicalize, RoundingConfig};
//!
//! // f(x) = x^2 - 1
//! let f = Polynomial::new(vec![-1.0, 0.0, 1.0]).expect("polynomial");
//!
//! let roots = canonicalize(&f.find_roots().expect("roots"), &RoundingConfig::default());
//! assert_eq!(roots.len(), 2);
//! assert!((roots[0] + 1.0).abs() < 1e-9);
//! assert!((roots[1] - 1.0).abs() < 1e-9);
//!
//! // positive outside the roots, negative between them
//! let signs = f.sign_intervals(&roots);
//! assert_eq!(signs, vec![Sign::Positive, Sign::Negative, Sign::Positive]);
//! ```
//!
//! For the whole calculus picture (extrema, monotonicity, concavity) see
//! `analysis::Analysis`.

pub mod analysis;
pub mod config;
pub mod guess;
pub mod intervals;
pub mod polynomial;
pub mod rounding;
pub mod solver;
pub mod wrap;

pub use crate::analysis::Analysis;
pub use crate::config::SolverConfig;
pub use crate::polynomial::{Polynomial, PolynomialError};
pub use crate::solver::{RootError, Solver};
