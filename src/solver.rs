//! Real root finding for polynomials.
//!
//! Roots are located one at a time with Newton-Raphson and divided out of
//! the polynomial by synthetic division.  Before searching an even degree
//! polynomial, its extrema are inspected to decide whether a real root exists
//! at all.
//!
//! # Examples
//!
//! ```
//! use polyroots::config::SolverConfig;
//! use polyroots::polynomial::Polynomial;
//! use polyroots::rounding::canonicalize;
//! use polyroots::solver::Solver;
//!
//! // x^3 - 6x^2 + 11x - 6 = (x - 1)(x - 2)(x - 3)
//! let f = Polynomial::new(vec![-6.0, 11.0, -6.0, 1.0]).expect("polynomial");
//!
//! // seeded so the initial guesses are reproducible
//! let cfg = SolverConfig::default();
//! let mut solver = Solver::from_seed(cfg.clone(), 7);
//! let roots = canonicalize(&solver.find_roots(&f).expect("roots"), &cfg.rounding);
//!
//! assert_eq!(roots.len(), 3);
//! for (got, want) in roots.iter().zip(&[1.0, 2.0, 3.0]) {
//!     assert!((got - want).abs() < 1e-6);
//! }
//! ```

use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::SolverConfig;
use crate::guess::{GuessSource, UniformGuess};
use crate::polynomial::Polynomial;
use crate::wrap::PolyAndFirst;

mod driver;

pub use self::driver::{fixed_newton, restarting_newton};

/// Root finding error conditions.
///
/// To help with diagnostics, these errors typically return the last relevant
/// `x` position.
#[derive(Debug, Error, PartialEq)]
pub enum RootError {
    /// Derivative went to zero while Newton-Raphson needed it for a step.
    #[error("derivative vanished at x = {x}")]
    ZeroDerivative { x: f64 },

    /// The next Newton step was NaN or infinite.
    #[error("newton step from x = {x} is not finite")]
    IteratedToNaN { x: f64 },

    /// Every starting point tried failed.
    #[error("newton-raphson did not converge after {restarts} restarts")]
    NonConvergence { restarts: usize },
}

/// Divides `f` by `(x - alpha)` with synthetic division, dropping the
/// remainder.  Only meaningful when `alpha` is (close to) a root of `f`.
pub fn deflate(f: &Polynomial, alpha: f64) -> Polynomial {
    let n = f.degree();
    if n == 0 {
        return Polynomial::constant(0.0);
    }

    let mut quotient = vec![0.0; n];
    let mut carry = f.coefficient_at(n);
    for i in (0..n).rev() {
        quotient[i] = carry;
        carry = f.coefficient_at(i) + alpha * carry;
    }
    Polynomial::from_raw(quotient)
}

/// Polynomial root finder.
///
/// Owns its guess source, which is the only non-deterministic part of root
/// finding.  Inject `FixedGuesses` or a seeded `UniformGuess` to replay exact
/// runs.
pub struct Solver<G: GuessSource> {
    config: SolverConfig,
    guesses: G,
}

impl Solver<UniformGuess<StdRng>> {
    pub fn from_entropy(config: SolverConfig) -> Solver<UniformGuess<StdRng>> {
        let guesses = UniformGuess::from_entropy(config.guess_low, config.guess_high);
        Solver::new(config, guesses)
    }

    pub fn from_seed(config: SolverConfig, seed: u64) -> Solver<UniformGuess<StdRng>> {
        let guesses = UniformGuess::from_seed(seed, config.guess_low, config.guess_high);
        Solver::new(config, guesses)
    }
}

impl<G: GuessSource> Solver<G> {
    pub fn new(config: SolverConfig, guesses: G) -> Solver<G> {
        assert!(config.validate().is_ok());
        Solver { config, guesses }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Approximates one root of `f` with a fixed-length Newton-Raphson run.
    ///
    /// A run that ends where `|f(x)|` exceeds the configured residual
    /// tolerance is retried from a fresh guess.  Callers should only ask when
    /// a real root is known to exist; otherwise the restart budget runs out.
    pub fn approximate_root(&mut self, f: &Polynomial) -> Result<f64, RootError> {
        let wrapped = PolyAndFirst::new(f, &self.config.rounding);
        restarting_newton(
            &wrapped,
            &mut self.guesses,
            self.config.iterations,
            self.config.max_restarts,
            self.config.residual_tolerance,
        )
    }

    /// All real roots of `f` that could be located, unsorted and possibly
    /// with repeats.
    ///
    /// The root found on `f` itself comes last, preceded by the roots of the
    /// successive quotients.
    pub fn find_roots(&mut self, f: &Polynomial) -> Result<Vec<f64>, RootError> {
        let mut roots = Vec::new();
        let mut current = f.clone();

        loop {
            let n = current.degree();
            let root = match n {
                0 => break,
                1 => {
                    roots.push(-current.coefficient_at(0) / current.coefficient_at(1));
                    break;
                }
                // odd degree always crosses the axis
                _ if n % 2 == 1 => self.approximate_root(&current)?,
                _ => match self.even_degree_root(&current)? {
                    Some(root) => root,
                    None => break,
                },
            };

            trace!(degree = n, root, "deflating");
            roots.push(root);
            current = deflate(&current, root);
        }

        roots.reverse();
        Ok(roots)
    }

    /// Decides from the extrema of an even degree `f` whether it has a real
    /// root, and finds one if so.
    fn even_degree_root(&mut self, f: &Polynomial) -> Result<Option<f64>, RootError> {
        let extrema = self.find_roots(&f.derivative_with(&self.config.rounding))?;

        let mut all_positive = true;
        let mut all_negative = true;
        for &x in &extrema {
            let y = f.evaluate(x);
            if y > 0.0 {
                all_negative = false;
            } else if y < 0.0 {
                all_positive = false;
            } else if y == 0.0 {
                debug!(x, "extremum touches the axis");
                return Ok(Some(x));
            }
        }

        let lead = f.leading_coefficient();
        let exists = (lead < 0.0 && all_positive)
            || (lead > 0.0 && all_negative)
            || (!all_positive && !all_negative);
        if !exists {
            debug!(degree = f.degree(), all_positive, all_negative, "no real root");
            return Ok(None);
        }
        self.approximate_root(f).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guess::FixedGuesses;
    use crate::rounding::{canonicalize, RoundingConfig};

    fn poly(coeffs: &[f64]) -> Polynomial {
        Polynomial::new(coeffs.to_vec()).expect("valid polynomial")
    }

    struct RootTest {
        name: &'static str,
        coeffs: Vec<f64>,
        roots: Vec<f64>,
    }

    fn make_root_tests() -> Vec<RootTest> {
        vec![
            RootTest {
                name: "Factored Cubic",
                coeffs: vec![-6.0, 11.0, -6.0, 1.0],
                roots: vec![1.0, 2.0, 3.0],
            },
            RootTest {
                name: "Factored Parabola",
                coeffs: vec![20.0, -9.0, 1.0],
                roots: vec![4.0, 5.0],
            },
            RootTest {
                name: "Wikipedia NR Parabola",
                coeffs: vec![-612.0, 0.0, 1.0],
                roots: vec![-24.7386337537, 24.7386337537],
            },
            RootTest {
                name: "Wikipedia Bisection Cubic",
                coeffs: vec![-2.0, -1.0, 0.0, 1.0],
                roots: vec![1.52137970680457],
            },
            RootTest {
                name: "Isaac Newton's NR Example",
                coeffs: vec![-5.0, -2.0, 0.0, 1.0],
                roots: vec![2.0945514815423265],
            },
            RootTest {
                name: "Quartic With Four Roots",
                coeffs: vec![6.0, -1.0, -7.0, 1.0, 1.0],
                roots: vec![-3.0, -1.0, 1.0, 2.0],
            },
            RootTest {
                name: "Downward Quartic",
                coeffs: vec![-6.0, 1.0, 7.0, -1.0, -1.0],
                roots: vec![-3.0, -1.0, 1.0, 2.0],
            },
            RootTest {
                name: "Double Root Parabola",
                coeffs: vec![1.0, -2.0, 1.0],
                roots: vec![1.0],
            },
            RootTest {
                name: "Cubic With Double Root",
                coeffs: vec![2.0, -3.0, 0.0, 1.0],
                roots: vec![-2.0, 1.0],
            },
            RootTest {
                name: "Parabola Without Roots",
                coeffs: vec![1.0, 0.0, 1.0],
                roots: vec![],
            },
            RootTest {
                name: "Quartic Without Roots",
                coeffs: vec![1.0, 0.0, 0.0, 0.0, 1.0],
                roots: vec![],
            },
            RootTest {
                name: "Inverted Parabola Without Roots",
                coeffs: vec![-3.0, 2.0, -1.0],
                roots: vec![],
            },
            RootTest {
                name: "Inverted Parabola",
                coeffs: vec![4.0, 0.0, -1.0],
                roots: vec![-2.0, 2.0],
            },
            RootTest {
                name: "Cubic With Newton Cycle",
                coeffs: vec![2.0, -2.0, 0.0, 1.0],
                roots: vec![-1.7692923542386314],
            },
            RootTest {
                name: "Nonzero Constant",
                coeffs: vec![5.0],
                roots: vec![],
            },
            RootTest {
                name: "Zero Constant",
                coeffs: vec![0.0],
                roots: vec![],
            },
        ]
    }

    #[test]
    fn test_find_roots() {
        let rounding = RoundingConfig::default();
        for t in make_root_tests() {
            for seed in 0..4 {
                let f = poly(&t.coeffs);
                let mut solver = Solver::from_seed(SolverConfig::default(), seed);
                let found = solver.find_roots(&f).expect("found roots");

                for r in &found {
                    assert!(
                        f.evaluate(*r).abs() < 1e-3,
                        "{} f({}) = {}",
                        t.name,
                        r,
                        f.evaluate(*r)
                    );
                }

                let got = canonicalize(&found, &rounding);
                assert_eq!(got.len(), t.roots.len(), "{} roots wanted={:?}, got={:?}", t.name, t.roots, got);
                for (g, w) in got.iter().zip(&t.roots) {
                    assert!((g - w).abs() < 1e-6, "{} root wanted={}, got={}", t.name, w, g);
                }
            }
        }
    }

    #[test]
    fn test_find_roots_skips_newton_cycle() {
        // from [10, 20) a share of starts fall into the 0 <-> 1 cycle; those
        // passes must be retried rather than deflated by
        let f = poly(&[2.0, -2.0, 0.0, 1.0]);
        for seed in 0..100 {
            let mut solver = Solver::from_seed(SolverConfig::default(), seed);
            let found = solver.find_roots(&f).expect("found roots");
            assert_eq!(found.len(), 1, "seed {} got={:?}", seed, found);
            assert!(f.evaluate(found[0]).abs() < 1e-3, "seed {} f({}) != 0", seed, found[0]);
            assert!((found[0] + 1.7692923542386314).abs() < 1e-6);
        }
    }

    #[test]
    fn test_find_roots_inverted_parabola() {
        // lead < 0 with every extremum above the axis
        let f = poly(&[4.0, 0.0, -1.0]);
        let mut solver = Solver::new(SolverConfig::default(), FixedGuesses::new(vec![15.0]));
        let roots = solver.find_roots(&f).expect("found roots");
        assert_eq!(roots.len(), 2);
        assert!((roots[0] + 2.0).abs() < 1e-9, "got={:?}", roots);
        assert!((roots[1] - 2.0).abs() < 1e-9, "got={:?}", roots);
    }

    #[test]
    fn test_find_roots_linear() {
        let mut solver = Solver::new(SolverConfig::default(), FixedGuesses::new(vec![15.0]));
        assert_eq!(solver.find_roots(&poly(&[3.0, 2.0])), Ok(vec![-1.5]));
        assert_eq!(solver.find_roots(&poly(&[0.0, -4.0])).map(|r| r[0] == 0.0), Ok(true));
    }

    #[test]
    fn test_find_roots_order() {
        // the root found on the cubic itself is last, the closed form one first
        let f = poly(&[-6.0, 11.0, -6.0, 1.0]);
        let mut solver = Solver::new(SolverConfig::default(), FixedGuesses::new(vec![15.0]));
        let roots = solver.find_roots(&f).expect("found roots");
        assert_eq!(roots.len(), 3);
        assert!((roots[0] - 1.0).abs() < 1e-9);
        assert!((roots[1] - 2.0).abs() < 1e-9);
        assert!((roots[2] - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_find_roots_propagates_non_convergence() {
        // every attempt from x=0 steps onto x=2 where f' vanishes
        let f = poly(&[-8.0, 4.0, -4.0, 1.0]);
        let cfg = SolverConfig {
            max_restarts: 2,
            ..SolverConfig::default()
        };
        let mut solver = Solver::new(cfg, FixedGuesses::new(vec![0.0]));
        assert_eq!(
            solver.find_roots(&f),
            Err(RootError::NonConvergence { restarts: 2 })
        );
    }

    #[test]
    fn test_approximate_root() {
        let f = poly(&[-5.0, -2.0, 0.0, 1.0]);
        let mut solver = Solver::new(SolverConfig::default(), FixedGuesses::new(vec![12.5]));
        let root = solver.approximate_root(&f).expect("found root");
        assert!((root - 2.0945514815423265).abs() < 1e-9);
    }

    #[test]
    fn test_deflate() {
        let f = poly(&[-6.0, 11.0, -6.0, 1.0]);
        assert_eq!(deflate(&f, 3.0).coefficients(), &[2.0, -3.0, 1.0]);
        assert_eq!(deflate(&f, 1.0).coefficients(), &[6.0, -5.0, 1.0]);

        // 6x^3 - 41x^2 + 59x - 20 = (6x^2 - 11x + 4)(x - 5)
        let g = poly(&[-20.0, 59.0, -41.0, 6.0]);
        assert_eq!(deflate(&g, 5.0).coefficients(), &[4.0, -11.0, 6.0]);
    }

    #[test]
    fn test_deflate_low_degree() {
        assert_eq!(deflate(&poly(&[-3.0, 1.0]), 3.0).coefficients(), &[1.0]);
        assert_eq!(deflate(&poly(&[7.0]), 1.0).coefficients(), &[0.0]);
    }

    #[test]
    #[should_panic]
    fn test_solver_rejects_invalid_config() {
        let cfg = SolverConfig {
            iterations: 0,
            ..SolverConfig::default()
        };
        let _ = Solver::new(cfg, FixedGuesses::new(vec![1.0]));
    }

    #[test]
    fn test_root_error_display() {
        let err = RootError::NonConvergence { restarts: 16 };
        assert_eq!(
            err.to_string(),
            "newton-raphson did not converge after 16 restarts"
        );
    }
}
