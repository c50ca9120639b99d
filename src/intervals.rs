//! Sign of a polynomial between consecutive roots.

use crate::polynomial::Polynomial;

/// Sign of a polynomial on an open interval.  Orders `Negative < Positive`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative = -1,
    Positive = 1,
}

impl Sign {
    /// `Positive` for values above zero, `Negative` for everything else.
    pub fn of(v: f64) -> Sign {
        if v > 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    pub fn as_i8(self) -> i8 {
        self as i8
    }
}

impl From<Sign> for i8 {
    fn from(s: Sign) -> i8 {
        s.as_i8()
    }
}

/// Sign of `f` on each interval delimited by `points`.
///
/// `points` must be canonical (sorted, no near-duplicates).  The result has
/// one entry more than `points`: the left unbounded interval, each gap, then
/// the right unbounded interval.  Each interval is sampled once, at its
/// midpoint or one unit past the outermost point.
///
/// With no points the whole line shares the sign of the leading coefficient.
pub fn sign_intervals(f: &Polynomial, points: &[f64]) -> Vec<Sign> {
    if points.is_empty() {
        return vec![Sign::of(f.leading_coefficient())];
    }
    debug_assert!(points.windows(2).all(|w| w[0] < w[1]));

    let last = points.len();
    (0..=last)
        .map(|i| {
            let s = if i == 0 {
                points[0] - 1.0
            } else if i == last {
                points[last - 1] + 1.0
            } else {
                (points[i - 1] + points[i]) / 2.0
            };
            Sign::of(f.evaluate(s))
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtremumKind {
    Minimum,
    Maximum,
}

/// A critical point where the derivative changes sign.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extremum {
    pub x: f64,
    pub kind: ExtremumKind,
}

/// Classifies `points` (roots of a derivative) by the derivative's sign on
/// either side.  Going from negative to positive is a minimum, positive to
/// negative a maximum; points without a sign change are dropped.
pub fn classify_extrema(points: &[f64], signs: &[Sign]) -> Vec<Extremum> {
    assert_eq!(signs.len(), points.len() + 1);

    points
        .iter()
        .zip(signs.windows(2))
        .filter_map(|(&x, w)| {
            let kind = if w[0] < w[1] {
                ExtremumKind::Minimum
            } else if w[0] > w[1] {
                ExtremumKind::Maximum
            } else {
                return None;
            };
            Some(Extremum { x, kind })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Sign::{Negative as N, Positive as P};

    fn poly(coeffs: &[f64]) -> Polynomial {
        Polynomial::new(coeffs.to_vec()).expect("valid polynomial")
    }

    #[test]
    fn test_sign_of() {
        assert_eq!(Sign::of(3.0), P);
        assert_eq!(Sign::of(-3.0), N);

        // zero counts as negative
        assert_eq!(Sign::of(0.0), N);
        assert_eq!(i8::from(P), 1);
        assert_eq!(N.as_i8(), -1);
    }

    #[test]
    fn test_sign_intervals_parabola() {
        let f = poly(&[-1.0, 0.0, 1.0]);
        assert_eq!(sign_intervals(&f, &[-1.0, 1.0]), vec![P, N, P]);
    }

    #[test]
    fn test_sign_intervals_cubic() {
        // 6x^3 - 41x^2 + 59x - 20 has roots 0.5, 4/3 and 5
        let f = poly(&[-20.0, 59.0, -41.0, 6.0]);
        let points = [0.5, 4.0 / 3.0, 5.0];
        assert_eq!(sign_intervals(&f, &points), vec![N, P, N, P]);
    }

    #[test]
    fn test_sign_intervals_no_points() {
        assert_eq!(sign_intervals(&poly(&[5.0]), &[]), vec![P]);
        assert_eq!(sign_intervals(&poly(&[-5.0]), &[]), vec![N]);
        assert_eq!(sign_intervals(&poly(&[1.0, 0.0, 1.0]), &[]), vec![P]);
        assert_eq!(sign_intervals(&poly(&[-1.0, 0.0, -1.0]), &[]), vec![N]);
    }

    #[test]
    fn test_sign_intervals_length() {
        let f = poly(&[6.0, -1.0, -7.0, 1.0, 1.0]);
        let points = [-3.0, -1.0, 1.0, 2.0];
        let signs = sign_intervals(&f, &points);
        assert_eq!(signs.len(), points.len() + 1);
        assert_eq!(signs, vec![P, N, P, N, P]);
    }

    #[test]
    fn test_classify_extrema() {
        let points = [1.0, 2.0, 3.0];
        let signs = [P, N, N, P];
        let got = classify_extrema(&points, &signs);
        assert_eq!(
            got,
            vec![
                Extremum {
                    x: 1.0,
                    kind: ExtremumKind::Maximum
                },
                Extremum {
                    x: 3.0,
                    kind: ExtremumKind::Minimum
                },
            ]
        );
    }

    #[test]
    fn test_classify_extrema_empty() {
        assert!(classify_extrema(&[], &[P]).is_empty());
    }

    #[test]
    #[should_panic]
    fn test_classify_extrema_length_mismatch() {
        let _ = classify_extrema(&[1.0], &[P]);
    }
}
