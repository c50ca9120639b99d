use tracing::{debug, trace};

use super::RootError;
use crate::guess::GuessSource;
use crate::wrap::{RealDfEval, RealFnEval};

/// Runs Newton-Raphson for exactly `iterations` steps from `start`.
///
/// There is no convergence test: the final iterate is returned whatever it
/// is.  The only shortcut is an exact zero of f, after which every further
/// step would leave x unchanged anyway.
pub fn fixed_newton<F>(f: &F, start: f64, iterations: usize) -> Result<f64, RootError>
where
    F: RealFnEval + RealDfEval,
{
    assert!(start.is_finite());

    let mut x = start;
    for _ in 0..iterations {
        let f_x = f.eval_f(x);
        if f_x == 0.0 {
            break;
        }
        x = nr_iteration(f, x, f_x)?;
    }
    Ok(x)
}

/// Evaluate a single iteration for Newton's method.  Returns an error if the
/// derivative evaluates to zero or the step leaves the finite reals.
fn nr_iteration<F>(f: &F, x: f64, f_x: f64) -> Result<f64, RootError>
where
    F: RealFnEval + RealDfEval,
{
    let denom = f.eval_df(x);
    if denom == 0.0 {
        return Err(RootError::ZeroDerivative { x });
    }
    let x_new = x - f_x / denom;
    if !x_new.is_finite() {
        return Err(RootError::IteratedToNaN { x });
    }
    Ok(x_new)
}

/// Driver that keeps drawing starting points until a full `fixed_newton`
/// pass ends on a zero of `f`, i.e. `|f(x)| <= tolerance`.
///
/// A start where the derivative is zero is redrawn before iterating.  Redraws,
/// failed passes and passes that end off a root (Newton caught in a cycle)
/// share the `max_restarts` budget.
pub fn restarting_newton<F, G>(
    f: &F,
    guesses: &mut G,
    iterations: usize,
    max_restarts: usize,
    tolerance: f64,
) -> Result<f64, RootError>
where
    F: RealFnEval + RealDfEval,
    G: GuessSource,
{
    let mut restarts = 0;
    loop {
        let start = guesses.next_guess();
        if f.eval_df(start) == 0.0 {
            trace!(start, "zero derivative at initial guess");
        } else {
            match fixed_newton(f, start, iterations) {
                Ok(x) => {
                    let residual = f.eval_f(x).abs();
                    if residual <= tolerance {
                        return Ok(x);
                    }
                    debug!(start, x, residual, "newton attempt ended off a root");
                }
                Err(err) => debug!(start, %err, "newton attempt abandoned"),
            }
        }

        if restarts == max_restarts {
            return Err(RootError::NonConvergence { restarts });
        }
        restarts += 1;
    }
}
