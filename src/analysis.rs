//! Calculus report for a polynomial: intercepts, sign, monotonicity,
//! extrema, concavity and inflection points.
//!
//! Everything here is composed from root finding on `f`, `f'` and `f''`
//! followed by the interval analysis of each.

use std::fmt;

use tracing::debug;

use crate::guess::GuessSource;
use crate::intervals::{classify_extrema, sign_intervals, Extremum, ExtremumKind, Sign};
use crate::polynomial::Polynomial;
use crate::rounding::{canonicalize, Rounded};
use crate::solver::{RootError, Solver};

/// Open interval of the real line.  A missing bound is unbounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub lo: Option<f64>,
    pub hi: Option<f64>,
}

impl Interval {
    pub fn whole_line() -> Interval {
        Interval { lo: None, hi: None }
    }

    pub fn contains(&self, x: f64) -> bool {
        self.lo.map_or(true, |lo| lo < x) && self.hi.map_or(true, |hi| x < hi)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.lo, self.hi) {
            (None, None) => f.write_str("all x"),
            (None, Some(hi)) => write!(f, "x < {}", Rounded(hi)),
            (Some(lo), None) => write!(f, "x > {}", Rounded(lo)),
            (Some(lo), Some(hi)) => write!(f, "{} < x < {}", Rounded(lo), Rounded(hi)),
        }
    }
}

/// A point on the curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn on(f: &Polynomial, x: f64) -> Point {
        Point { x, y: f.evaluate(x) }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", Rounded(self.x), Rounded(self.y))
    }
}

/// Where a function is positive and where it is negative.
///
/// Both lists are empty for the zero polynomial, which is neither.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignChart {
    pub positive: Vec<Interval>,
    pub negative: Vec<Interval>,
}

impl SignChart {
    /// Splits the line at the canonical `points` and sorts each piece by the
    /// sign of `f` on it.
    pub fn of(f: &Polynomial, points: &[f64]) -> SignChart {
        let mut chart = SignChart::default();
        if f.is_zero() {
            return chart;
        }

        let signs = sign_intervals(f, points);
        for (i, sign) in signs.into_iter().enumerate() {
            let interval = Interval {
                lo: if i == 0 { None } else { Some(points[i - 1]) },
                hi: points.get(i).copied(),
            };
            match sign {
                Sign::Positive => chart.positive.push(interval),
                Sign::Negative => chart.negative.push(interval),
            }
        }
        chart
    }

    /// True when the line was cut at one or more points.
    fn is_split(&self) -> bool {
        self.positive.len() + self.negative.len() > 1
    }
}

/// Where a function crosses the x axis.
#[derive(Clone, Debug, PartialEq)]
pub enum Intercepts {
    /// The zero polynomial touches the axis everywhere.
    Everywhere,
    At(Vec<f64>),
}

/// Full report for a polynomial and its first two derivatives.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub function: Polynomial,
    pub x_intercepts: Intercepts,
    pub y_intercept: Point,
    /// Positivity and negativity of f.
    pub sign_chart: SignChart,

    pub first_derivative: Polynomial,
    pub minima: Vec<Point>,
    pub maxima: Vec<Point>,
    /// Increasing (positive f') and decreasing (negative f') intervals.
    pub monotonicity: SignChart,

    pub second_derivative: Polynomial,
    pub inflection_points: Vec<Point>,
    /// Concave up (positive f'') and concave down (negative f'') intervals.
    pub concavity: SignChart,
}

impl Analysis {
    pub fn of<G: GuessSource>(f: &Polynomial, solver: &mut Solver<G>) -> Result<Analysis, RootError> {
        let rounding = solver.config().rounding;

        let roots = canonicalize(&solver.find_roots(f)?, &rounding);
        let x_intercepts = if f.is_zero() {
            Intercepts::Everywhere
        } else {
            Intercepts::At(roots.clone())
        };
        let sign_chart = SignChart::of(f, &roots);

        let first = f.derivative_with(&rounding);
        let extrema = sign_changes(&first, solver)?;
        let (minima, maxima): (Vec<Extremum>, Vec<Extremum>) = extrema
            .iter()
            .partition(|e| e.kind == ExtremumKind::Minimum);
        let monotonicity = SignChart::of(&first, &xs(&extrema));

        let second = first.derivative_with(&rounding);
        let inflections = sign_changes(&second, solver)?;
        let concavity = SignChart::of(&second, &xs(&inflections));

        debug!(
            roots = roots.len(),
            extrema = extrema.len(),
            inflections = inflections.len(),
            "analysis complete"
        );

        Ok(Analysis {
            function: f.clone(),
            x_intercepts,
            y_intercept: Point::on(f, 0.0),
            sign_chart,
            first_derivative: first,
            minima: minima.iter().map(|e| Point::on(f, e.x)).collect(),
            maxima: maxima.iter().map(|e| Point::on(f, e.x)).collect(),
            monotonicity,
            second_derivative: second,
            inflection_points: inflections.iter().map(|e| Point::on(f, e.x)).collect(),
            concavity,
        })
    }
}

/// Roots of `g` at which `g` changes sign.
fn sign_changes<G: GuessSource>(
    g: &Polynomial,
    solver: &mut Solver<G>,
) -> Result<Vec<Extremum>, RootError> {
    if g.degree() == 0 {
        return Ok(Vec::new());
    }
    let rounding = solver.config().rounding;
    let roots = canonicalize(&solver.find_roots(g)?, &rounding);
    let signs = sign_intervals(g, &roots);
    Ok(classify_extrema(&roots, &signs))
}

fn xs(extrema: &[Extremum]) -> Vec<f64> {
    extrema.iter().map(|e| e.x).collect()
}

struct Joined<'a, T: fmt::Display>(&'a [T]);

impl<'a, T: fmt::Display> fmt::Display for Joined<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("none");
        }
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// One side of a sign chart.  An empty side reads "no x" when the line was
/// never split (constants, the zero polynomial) and "none" otherwise.
struct Side<'a> {
    intervals: &'a [Interval],
    split: bool,
}

impl<'a> Side<'a> {
    fn both(chart: &'a SignChart) -> (Side<'a>, Side<'a>) {
        let split = chart.is_split();
        (
            Side { intervals: &chart.positive, split },
            Side { intervals: &chart.negative, split },
        )
    }
}

impl<'a> fmt::Display for Side<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.intervals.is_empty() && !self.split {
            return f.write_str("no x");
        }
        write!(f, "{}", Joined(self.intervals))
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "f(x) = {}", self.function)?;
        writeln!(f, "domain: all x")?;
        match &self.x_intercepts {
            Intercepts::Everywhere => writeln!(f, "x-intercepts: all x")?,
            Intercepts::At(xs) => {
                let points: Vec<Point> = xs.iter().map(|&x| Point { x, y: 0.0 }).collect();
                writeln!(f, "x-intercepts: {}", Joined(&points))?;
            }
        }
        writeln!(f, "y-intercept: {}", self.y_intercept)?;
        let (positive, negative) = Side::both(&self.sign_chart);
        writeln!(f, "positive: {}", positive)?;
        writeln!(f, "negative: {}", negative)?;

        writeln!(f)?;
        writeln!(f, "f'(x) = {}", self.first_derivative)?;
        writeln!(f, "minimum points: {}", Joined(&self.minima))?;
        writeln!(f, "maximum points: {}", Joined(&self.maxima))?;
        let (increasing, decreasing) = Side::both(&self.monotonicity);
        writeln!(f, "increasing: {}", increasing)?;
        writeln!(f, "decreasing: {}", decreasing)?;

        writeln!(f)?;
        writeln!(f, "f''(x) = {}", self.second_derivative)?;
        writeln!(f, "inflection points: {}", Joined(&self.inflection_points))?;
        let (up, down) = Side::both(&self.concavity);
        writeln!(f, "concave up: {}", up)?;
        write!(f, "concave down: {}", down)
    }
}
