//! Righting-arm (GZ) curve assembly.
//!
//! For each heel angle on the grid, `GZ = KN - KG * sin(heel)`, with KN read
//! from the cross-curves at the displacement for the given draft.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::hydrostatics::{HydrostaticProperty, HydrostaticTable};
use crate::kn::KnSurface;
use crate::metrics;

/// Upper end of the default heel-angle grid in degrees.
pub const DEFAULT_MAX_ANGLE: f64 = 90.0;

/// Spacing of the default heel-angle grid in degrees.
pub const DEFAULT_ANGLE_STEP: f64 = 5.0;

/// Largest heel angle accepted on a caller grid.
const MAX_GRID_ANGLE: f64 = 180.0;

/// Most intervals a stepped grid may have (a 0.05° step up to 90°).
pub const MAX_GRID_INTERVALS: u32 = 1800;

/// `0, 5, ..., 90` degrees.
pub fn default_angle_grid() -> Vec<f64> {
    (0..=18).map(|i| f64::from(i) * DEFAULT_ANGLE_STEP).collect()
}

/// `0, step, 2 * step, ...` up to and including `max` when it falls on the grid.
pub fn angle_grid(step: f64, max: f64) -> Result<Vec<f64>> {
    if !(step.is_finite() && step > 0.0) {
        return Err(Error::InvalidInput {
            message: format!("angle step must be a positive number of degrees, got {step}"),
        });
    }
    if !(max.is_finite() && (0.0..=MAX_GRID_ANGLE).contains(&max)) {
        return Err(Error::InvalidInput {
            message: format!("maximum grid angle must be within [0°, {MAX_GRID_ANGLE}°], got {max}"),
        });
    }

    // Tolerance keeps `max` on the grid when `max / step` lands a hair below an integer.
    let intervals = (max / step + 1e-9).floor();
    if intervals > f64::from(MAX_GRID_INTERVALS) {
        return Err(Error::InvalidInput {
            message: format!(
                "angle step {step}° gives more than {MAX_GRID_INTERVALS} grid intervals up to {max}°; \
                 use a step of at least {}°",
                max / f64::from(MAX_GRID_INTERVALS)
            ),
        });
    }
    // Bounded above, so the conversion is exact.
    let count = intervals as u32;
    Ok((0..=count).map(|i| f64::from(i) * step).collect())
}

/// What to do with a grid angle whose KN lookup falls outside the cross-curves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnglePolicy {
    /// Drop the angle from the curve and record it in [`GzCurve::omitted_angles`].
    #[default]
    Omit,
    /// Fail the whole build with the range error.
    Strict,
}

/// One point of the righting-arm curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GzSample {
    /// Heel angle in degrees.
    pub angle: f64,
    pub kn: f64,
    pub gz: f64,
}

/// Hydrostatic values the curve was built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HydrostaticSnapshot {
    pub displacement: f64,
    pub kb: f64,
    pub km: f64,
    /// `KM - KG`.
    pub gm: f64,
}

/// A righting-arm curve for one loading condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GzCurve {
    pub draft: f64,
    pub kg: f64,
    pub hydrostatics: HydrostaticSnapshot,
    /// Samples in ascending heel-angle order.
    pub samples: Vec<GzSample>,
    /// Requested angles dropped under [`AnglePolicy::Omit`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub omitted_angles: Vec<f64>,
}

impl GzCurve {
    pub fn gm(&self) -> f64 {
        self.hydrostatics.gm
    }

    /// `(GZ, angle)` of the first maximum.
    pub fn max_gz(&self) -> (f64, f64) {
        metrics::max_gz(&self.samples)
    }

    pub fn vanishing_angle(&self) -> Option<f64> {
        metrics::vanishing_angle(&self.samples)
    }

    /// Area under the curve between two heel angles in metre-radians.
    pub fn area(&self, start: f64, end: f64) -> f64 {
        metrics::area(&self.samples, start, end)
    }

    pub fn gz_at_angle(&self, angle: f64) -> Option<f64> {
        metrics::gz_at_angle(&self.samples, angle)
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Combines hydrostatics and cross-curves into [`GzCurve`]s.
#[derive(Debug, Clone, Copy)]
pub struct GzCurveBuilder<'a> {
    hydrostatics: &'a HydrostaticTable,
    kn: &'a KnSurface,
    policy: AnglePolicy,
}

impl<'a> GzCurveBuilder<'a> {
    pub fn new(hydrostatics: &'a HydrostaticTable, kn: &'a KnSurface) -> Self {
        Self {
            hydrostatics,
            kn,
            policy: AnglePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AnglePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the curve at `draft` and `kg` over the default grid.
    pub fn build_default(&self, draft: f64, kg: f64) -> Result<GzCurve> {
        self.build(draft, kg, &default_angle_grid())
    }

    /// Build the curve at `draft` and `kg` over `angles` (degrees).
    ///
    /// The grid is sorted and deduplicated. Every angle must be finite and
    /// within `[0°, 180°]`.
    pub fn build(&self, draft: f64, kg: f64, angles: &[f64]) -> Result<GzCurve> {
        if !kg.is_finite() {
            return Err(Error::InvalidInput {
                message: format!("KG must be a finite number, got {kg}"),
            });
        }
        let grid = normalize_grid(angles)?;

        let displacement = self
            .hydrostatics
            .interpolate(draft, HydrostaticProperty::Displacement)?;
        let kb = self.hydrostatics.interpolate(draft, HydrostaticProperty::Kb)?;
        let tkm = self
            .hydrostatics
            .interpolate(draft, HydrostaticProperty::Tkm)?;
        let km = kb + tkm;
        let hydrostatics = HydrostaticSnapshot {
            displacement,
            kb,
            km,
            gm: km - kg,
        };

        let mut samples = Vec::with_capacity(grid.len());
        let mut omitted_angles = Vec::new();
        for angle in grid {
            let kn = if angle == 0.0 {
                0.0
            } else {
                match self.kn.interpolate(displacement, angle) {
                    Ok(kn) => kn,
                    Err(err) if err.is_range_error() && self.policy == AnglePolicy::Omit => {
                        debug!(angle, displacement, error = %err, "omitting heel angle from GZ curve");
                        omitted_angles.push(angle);
                        continue;
                    }
                    Err(err) => return Err(err),
                }
            };
            let gz = kn - kg * angle.to_radians().sin();
            samples.push(GzSample { angle, kn, gz });
        }

        Ok(GzCurve {
            draft,
            kg,
            hydrostatics,
            samples,
            omitted_angles,
        })
    }
}

fn normalize_grid(angles: &[f64]) -> Result<Vec<f64>> {
    if let Some(angle) = angles
        .iter()
        .find(|angle| !(angle.is_finite() && (0.0..=MAX_GRID_ANGLE).contains(*angle)))
    {
        return Err(Error::InvalidInput {
            message: format!("heel angle {angle} is outside [0°, {MAX_GRID_ANGLE}°]"),
        });
    }
    let mut grid = angles.to_vec();
    grid.sort_by(f64::total_cmp);
    grid.dedup();
    Ok(grid)
}
