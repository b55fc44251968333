use tracing::debug;

use crate::error::{Error, Result};

use super::curve::KnCurve;

/// Cross-curves of stability: one [`KnCurve`] per stored heel angle.
///
/// Curves are kept in ascending angle order. Zero heel is implicit (KN = 0 at
/// every displacement) and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct KnSurface {
    curves: Vec<(f64, KnCurve)>,
}

impl KnSurface {
    /// Build a surface from `(heel angle, curve)` pairs in any order.
    ///
    /// An explicit 0° curve is dropped. Negative, non-finite or repeated
    /// angles are rejected, and at least one non-zero curve is required.
    pub fn from_curves(curves: Vec<(f64, KnCurve)>) -> Result<Self> {
        let mut curves = curves;

        if let Some((angle, _)) = curves
            .iter()
            .find(|(angle, _)| !angle.is_finite() || *angle < 0.0)
        {
            return Err(Error::KnDataValidation {
                message: format!("heel angle {angle} must be a finite, non-negative number"),
            });
        }

        let before = curves.len();
        curves.retain(|(angle, _)| *angle != 0.0);
        if curves.len() < before {
            debug!("dropping explicit 0° cross-curve; zero heel is implicit");
        }

        curves.sort_by(|a, b| a.0.total_cmp(&b.0));
        if let Some(pair) = curves.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(Error::KnDataValidation {
                message: format!("heel angle {} appears more than once", pair[0].0),
            });
        }

        if curves.is_empty() {
            return Err(Error::KnDataValidation {
                message: "cross-curves need at least one non-zero heel angle".to_string(),
            });
        }

        Ok(Self { curves })
    }

    /// KN for `displacement` at `heel_angle` degrees.
    ///
    /// Stored angles interpolate along their own curve. Angles between stored
    /// curves interpolate each bracketing curve at `displacement`, then
    /// linearly across the angle bracket; below the lowest stored angle the
    /// lower bracket is the implicit zero curve.
    pub fn interpolate(&self, displacement: f64, heel_angle: f64) -> Result<f64> {
        if heel_angle == 0.0 {
            return Ok(0.0);
        }

        let max = self.max_angle();
        if !(heel_angle > 0.0 && heel_angle <= max) {
            return Err(Error::OutOfRangeAngle {
                angle: heel_angle,
                max,
            });
        }

        let hi = self.curves.partition_point(|(angle, _)| *angle < heel_angle);
        let (hi_angle, hi_curve) = &self.curves[hi];
        if *hi_angle == heel_angle {
            return hi_curve.interpolate(displacement);
        }

        let Some(lo) = hi.checked_sub(1) else {
            let kn_hi = hi_curve.interpolate(displacement)?;
            return Ok(heel_angle * kn_hi / hi_angle);
        };

        let (lo_angle, lo_curve) = &self.curves[lo];
        let (lo_min, lo_max) = lo_curve.displacement_range();
        let (hi_min, hi_max) = hi_curve.displacement_range();
        let (min, max) = (lo_min.max(hi_min), lo_max.min(hi_max));
        if !(displacement >= min && displacement <= max) {
            return Err(Error::OutOfRangeDisplacement {
                displacement,
                min,
                max,
            });
        }

        let kn_lo = lo_curve.interpolate(displacement)?;
        let kn_hi = hi_curve.interpolate(displacement)?;
        Ok(kn_lo + (heel_angle - lo_angle) * (kn_hi - kn_lo) / (hi_angle - lo_angle))
    }

    /// Stored heel angles, ascending.
    pub fn angles(&self) -> impl Iterator<Item = f64> + '_ {
        self.curves.iter().map(|(angle, _)| *angle)
    }

    /// Highest stored heel angle.
    pub fn max_angle(&self) -> f64 {
        self.curves.last().map_or(0.0, |(angle, _)| *angle)
    }

    /// Displacement span shared by every stored curve, `None` when the curves
    /// do not overlap.
    pub fn displacement_range(&self) -> Option<(f64, f64)> {
        let (min, max) = self.curves.iter().fold(
            (f64::NEG_INFINITY, f64::INFINITY),
            |(min, max), (_, curve)| {
                let (lo, hi) = curve.displacement_range();
                (min.max(lo), max.min(hi))
            },
        );
        (min <= max).then_some((min, max))
    }

    /// The curve stored for exactly `heel_angle`, if any.
    pub fn curve(&self, heel_angle: f64) -> Option<&KnCurve> {
        let idx = self.curves.partition_point(|(angle, _)| *angle < heel_angle);
        self.curves
            .get(idx)
            .filter(|(angle, _)| *angle == heel_angle)
            .map(|(_, curve)| curve)
    }

    /// Number of stored (non-zero) heel angles.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}
