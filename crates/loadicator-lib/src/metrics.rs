//! Scalars derived from a GZ curve.
//!
//! All functions take samples in ascending heel-angle order, as produced by
//! [`crate::gz::GzCurveBuilder`].

use serde::Serialize;

use crate::gz::{GzCurve, GzSample};
use crate::interpolate::lerp;

/// `(GZ, angle)` of the largest righting arm; ties keep the lowest angle.
/// `(0.0, 0.0)` for an empty curve.
pub fn max_gz(samples: &[GzSample]) -> (f64, f64) {
    samples
        .iter()
        .fold(None, |best: Option<&GzSample>, sample| match best {
            Some(best) if best.gz >= sample.gz => Some(best),
            _ => Some(sample),
        })
        .map_or((0.0, 0.0), |best| (best.gz, best.angle))
}

/// Heel angle where GZ first falls from positive to zero or below, found by
/// linear interpolation between the two samples either side of the crossing.
pub fn vanishing_angle(samples: &[GzSample]) -> Option<f64> {
    samples.windows(2).find_map(|pair| {
        let (a, b) = (pair[0], pair[1]);
        (a.gz > 0.0 && b.gz <= 0.0)
            .then(|| a.angle - a.gz * (b.angle - a.angle) / (b.gz - a.gz))
    })
}

/// Area under the curve in metre-radians between `start` and `end` degrees.
///
/// Only samples with `start <= angle <= end` are integrated (trapezoidal
/// rule); no points are synthesised at the bounds.
pub fn area(samples: &[GzSample], start: f64, end: f64) -> f64 {
    let window: Vec<&GzSample> = samples
        .iter()
        .filter(|s| s.angle >= start && s.angle <= end)
        .collect();
    window
        .windows(2)
        .map(|pair| {
            let dx = (pair[1].angle - pair[0].angle).to_radians();
            dx * (pair[0].gz + pair[1].gz) / 2.0
        })
        .sum()
}

/// GZ at `angle`: the stored sample on an exact match, linear between
/// neighbours otherwise, and the first/last GZ outside the sampled span.
pub fn gz_at_angle(samples: &[GzSample], angle: f64) -> Option<f64> {
    let (first, last) = (samples.first()?, samples.last()?);
    if angle <= first.angle {
        return Some(first.gz);
    }
    if angle >= last.angle {
        return Some(last.gz);
    }

    let hi = samples.partition_point(|s| s.angle < angle);
    let (a, b) = (samples[hi - 1], samples[hi]);
    if b.angle == angle {
        return Some(b.gz);
    }
    Some(lerp(a.angle, a.gz, b.angle, b.gz, angle))
}

/// Headline stability figures for one loading condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StabilityMetrics {
    pub gm: f64,
    pub max_gz: f64,
    pub angle_at_max_gz: f64,
    pub vanishing_angle: Option<f64>,
    /// Zero when the curve is empty.
    pub gz_at_30: f64,
    pub area_0_30: f64,
    pub area_0_40: f64,
    pub area_30_40: f64,
}

impl StabilityMetrics {
    pub fn from_curve(curve: &GzCurve) -> Self {
        let (max_gz, angle_at_max_gz) = curve.max_gz();
        Self {
            gm: curve.gm(),
            max_gz,
            angle_at_max_gz,
            vanishing_angle: curve.vanishing_angle(),
            gz_at_30: curve.gz_at_angle(30.0).unwrap_or(0.0),
            area_0_30: curve.area(0.0, 30.0),
            area_0_40: curve.area(0.0, 40.0),
            area_30_40: curve.area(30.0, 40.0),
        }
    }
}
