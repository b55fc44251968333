use crate::error::{Error, Result};
use crate::interpolate;

/// KN tabulated against displacement for one heel angle.
#[derive(Debug, Clone, PartialEq)]
pub struct KnCurve {
    displacements: Vec<f64>,
    kn: Vec<f64>,
}

impl KnCurve {
    /// Build a curve from `(displacement, KN)` points.
    ///
    /// Displacements must be finite and strictly increasing; at least two
    /// points are needed to form a bracket.
    pub fn new(points: impl IntoIterator<Item = (f64, f64)>) -> Result<Self> {
        let (displacements, kn): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();

        if displacements.len() < 2 {
            return Err(Error::InsufficientData {
                what: "KN curve".to_string(),
                found: displacements.len(),
            });
        }
        if !interpolate::is_strictly_increasing(&displacements) {
            return Err(Error::KnDataValidation {
                message: "curve displacements must be finite, unique and strictly increasing"
                    .to_string(),
            });
        }
        if let Some(idx) = kn.iter().position(|value| !value.is_finite()) {
            return Err(Error::KnDataValidation {
                message: format!(
                    "KN at displacement {} must be a finite number",
                    displacements[idx]
                ),
            });
        }

        Ok(Self { displacements, kn })
    }

    /// Closed displacement range covered by this curve.
    pub fn displacement_range(&self) -> (f64, f64) {
        interpolate::span(&self.displacements).unwrap_or((f64::NAN, f64::NAN))
    }

    /// KN at `displacement`, linear between the bracketing points.
    pub fn interpolate(&self, displacement: f64) -> Result<f64> {
        interpolate::interpolate(&self.displacements, &self.kn, displacement).ok_or_else(|| {
            let (min, max) = self.displacement_range();
            Error::OutOfRangeDisplacement {
                displacement,
                min,
                max,
            }
        })
    }

    /// Stored `(displacement, KN)` points in ascending displacement order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.displacements
            .iter()
            .copied()
            .zip(self.kn.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.displacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displacements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_of_two_point_curve_is_the_mean() {
        let curve = KnCurve::new([(40_000.0, 3.5), (60_000.0, 4.5)]).unwrap();
        assert_eq!(curve.interpolate(50_000.0).unwrap(), 4.0);
    }

    #[test]
    fn outside_curve_reports_its_span() {
        let curve = KnCurve::new([(40_000.0, 3.5), (60_000.0, 4.5)]).unwrap();
        match curve.interpolate(60_000.5).unwrap_err() {
            Error::OutOfRangeDisplacement {
                displacement,
                min,
                max,
            } => {
                assert_eq!(displacement, 60_000.5);
                assert_eq!((min, max), (40_000.0, 60_000.0));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_short_or_unsorted_curves() {
        assert!(matches!(
            KnCurve::new([(1.0, 1.0)]),
            Err(Error::InsufficientData { found: 1, .. })
        ));
        assert!(matches!(
            KnCurve::new([(2.0, 1.0), (1.0, 1.0)]),
            Err(Error::KnDataValidation { .. })
        ));
        assert!(matches!(
            KnCurve::new([(1.0, 1.0), (2.0, f64::NAN)]),
            Err(Error::KnDataValidation { .. })
        ));
    }
}
