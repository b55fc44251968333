//! Piecewise-linear lookups over a strictly increasing axis.
//!
//! Every tabulated quantity in the crate (hydrostatic columns, KN curves, GZ
//! samples) is resolved through these helpers so that bracket search and the
//! interpolation formula live in one place.

/// Location of a query value on a sorted axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bracket {
    /// The query coincides with the axis value at this index.
    Exact(usize),
    /// The query lies strictly between the axis values at these indices.
    Between(usize, usize),
}

/// Locate `x` on the strictly increasing axis `xs` by binary search.
///
/// Returns `None` when `xs` is empty or `x` lies outside the closed range
/// `[xs[0], xs[last]]` (NaN never matches).
pub(crate) fn bracket(xs: &[f64], x: f64) -> Option<Bracket> {
    let (first, last) = (*xs.first()?, *xs.last()?);
    if !(x >= first && x <= last) {
        return None;
    }

    let idx = xs.partition_point(|&value| value < x);
    if xs[idx] == x {
        Some(Bracket::Exact(idx))
    } else {
        Some(Bracket::Between(idx - 1, idx))
    }
}

/// Closed range covered by a sorted axis.
pub(crate) fn span(xs: &[f64]) -> Option<(f64, f64)> {
    Some((*xs.first()?, *xs.last()?))
}

/// Straight line through `(x0, y0)` and `(x1, y1)` evaluated at `x`.
pub(crate) fn lerp(x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> f64 {
    let slope = (y1 - y0) / (x1 - x0);
    slope * (x - x0) + y0
}

/// Interpolate `ys` over `xs` at `x`, returning the stored value on an exact
/// axis match. `None` when `x` is outside the axis.
pub(crate) fn interpolate(xs: &[f64], ys: &[f64], x: f64) -> Option<f64> {
    debug_assert_eq!(xs.len(), ys.len());
    match bracket(xs, x)? {
        Bracket::Exact(idx) => Some(ys[idx]),
        Bracket::Between(lo, hi) => Some(lerp(xs[lo], ys[lo], xs[hi], ys[hi], x)),
    }
}

/// True when every value is finite and strictly greater than its predecessor.
pub(crate) fn is_strictly_increasing(xs: &[f64]) -> bool {
    xs.iter().all(|x| x.is_finite()) && xs.windows(2).all(|pair| pair[0] < pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    const AXIS: [f64; 4] = [1.0, 2.0, 4.0, 8.0];

    #[test]
    fn bracket_finds_exact_matches_including_endpoints() {
        assert_eq!(bracket(&AXIS, 1.0), Some(Bracket::Exact(0)));
        assert_eq!(bracket(&AXIS, 4.0), Some(Bracket::Exact(2)));
        assert_eq!(bracket(&AXIS, 8.0), Some(Bracket::Exact(3)));
    }

    #[test]
    fn bracket_returns_neighbours_between_points() {
        assert_eq!(bracket(&AXIS, 1.5), Some(Bracket::Between(0, 1)));
        assert_eq!(bracket(&AXIS, 7.99), Some(Bracket::Between(2, 3)));
    }

    #[test]
    fn bracket_rejects_values_outside_axis_and_nan() {
        assert_eq!(bracket(&AXIS, 0.999), None);
        assert_eq!(bracket(&AXIS, 8.001), None);
        assert_eq!(bracket(&AXIS, f64::NAN), None);
        assert_eq!(bracket(&[], 1.0), None);
    }

    #[test]
    fn interpolate_is_linear_between_points() {
        let ys = [10.0, 20.0, 40.0, 80.0];
        assert_eq!(interpolate(&AXIS, &ys, 3.0), Some(30.0));
        assert_eq!(interpolate(&AXIS, &ys, 2.0), Some(20.0));
        assert_eq!(interpolate(&AXIS, &ys, 9.0), None);
    }

    #[test]
    fn strictly_increasing_rejects_duplicates_and_non_finite() {
        assert!(is_strictly_increasing(&AXIS));
        assert!(!is_strictly_increasing(&[1.0, 1.0, 2.0]));
        assert!(!is_strictly_increasing(&[1.0, f64::INFINITY]));
        assert!(is_strictly_increasing(&[]));
    }
}
