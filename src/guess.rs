//! Sources of initial guesses for Newton-Raphson.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies starting points for the Newton driver.
pub trait GuessSource {
    fn next_guess(&mut self) -> f64;
}

/// Uniform draws from the half-open range [low, high).
pub struct UniformGuess<R: Rng> {
    rng: R,
    low: f64,
    high: f64,
}

impl<R: Rng> UniformGuess<R> {
    pub fn new(rng: R, low: f64, high: f64) -> UniformGuess<R> {
        assert!(low < high);
        assert!(low.is_finite() && high.is_finite());
        UniformGuess { rng, low, high }
    }
}

impl UniformGuess<StdRng> {
    pub fn from_seed(seed: u64, low: f64, high: f64) -> UniformGuess<StdRng> {
        UniformGuess::new(StdRng::seed_from_u64(seed), low, high)
    }

    pub fn from_entropy(low: f64, high: f64) -> UniformGuess<StdRng> {
        UniformGuess::new(StdRng::from_entropy(), low, high)
    }
}

impl<R: Rng> GuessSource for UniformGuess<R> {
    fn next_guess(&mut self) -> f64 {
        self.rng.gen_range(self.low..self.high)
    }
}

/// Replays a fixed list of guesses, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct FixedGuesses {
    guesses: Vec<f64>,
    next: usize,
}

impl FixedGuesses {
    pub fn new(guesses: Vec<f64>) -> FixedGuesses {
        assert!(!guesses.is_empty());
        assert!(guesses.iter().all(|g| g.is_finite()));
        FixedGuesses { guesses, next: 0 }
    }
}

impl GuessSource for FixedGuesses {
    fn next_guess(&mut self) -> f64 {
        let g = self.guesses[self.next];
        self.next = (self.next + 1) % self.guesses.len();
        g
    }
}
