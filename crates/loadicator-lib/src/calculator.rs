//! End-to-end stability calculation for one loading condition.

use serde::Serialize;
use tracing::info;

use crate::compliance::{self, ComplianceResult};
use crate::dataset::{ValidRanges, VesselData};
use crate::error::{Error, Result};
use crate::gz::{self, AnglePolicy, GzCurve, GzCurveBuilder};
use crate::hydrostatics::HydrostaticProperties;
use crate::metrics::StabilityMetrics;

/// Settings applied to every calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    /// Heel angles in degrees; sorted and deduplicated before use.
    pub angle_grid: Vec<f64>,
    pub angle_policy: AnglePolicy,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            angle_grid: gz::default_angle_grid(),
            angle_policy: AnglePolicy::default(),
        }
    }
}

impl CalculatorConfig {
    /// Grid `0, step, ..., 90` degrees with the default policy.
    pub fn with_angle_step(step: f64) -> Result<Self> {
        Ok(Self {
            angle_grid: gz::angle_grid(step, gz::DEFAULT_MAX_ANGLE)?,
            ..Self::default()
        })
    }

    pub fn with_policy(mut self, angle_policy: AnglePolicy) -> Self {
        self.angle_policy = angle_policy;
        self
    }
}

/// The loading condition being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StabilityInput {
    /// Mean draft (m).
    pub draft: f64,
    /// Vertical centre of gravity above keel (m).
    pub kg: f64,
}

/// Everything computed for one loading condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StabilityReport {
    pub input: StabilityInput,
    pub hydrostatics: HydrostaticProperties,
    pub metrics: StabilityMetrics,
    pub curve: GzCurve,
    pub compliance: ComplianceResult,
}

impl StabilityReport {
    pub fn is_compliant(&self) -> bool {
        self.compliance.pass
    }
}

/// Owns one vessel's data and evaluates loading conditions against it.
///
/// Holds no interior mutability; a shared reference can be used from many
/// threads at once.
#[derive(Debug, Clone)]
pub struct StabilityCalculator {
    data: VesselData,
    config: CalculatorConfig,
}

impl StabilityCalculator {
    pub fn new(data: VesselData, config: CalculatorConfig) -> Self {
        Self { data, config }
    }

    pub fn data(&self) -> &VesselData {
        &self.data
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn ranges(&self) -> ValidRanges {
        self.data.ranges()
    }

    /// Evaluate intact stability at `draft` (m) with centre of gravity `kg` (m).
    pub fn calculate_stability(&self, draft: f64, kg: f64) -> Result<StabilityReport> {
        if !draft.is_finite() {
            return Err(Error::InvalidInput {
                message: format!("draft must be a finite number, got {draft}"),
            });
        }
        if !(kg.is_finite() && kg > 0.0) {
            return Err(Error::InvalidInput {
                message: format!("KG must be a positive number, got {kg}"),
            });
        }

        let hydrostatics = self.data.hydrostatics.all_properties(draft)?;
        let curve = GzCurveBuilder::new(&self.data.hydrostatics, &self.data.kn)
            .with_policy(self.config.angle_policy)
            .build(draft, kg, &self.config.angle_grid)?;
        let metrics = StabilityMetrics::from_curve(&curve);
        let compliance = compliance::evaluate(&metrics);

        info!(
            draft,
            kg,
            gm = metrics.gm,
            max_gz = metrics.max_gz,
            omitted = curve.omitted_angles.len(),
            compliant = compliance.pass,
            "calculated stability"
        );

        Ok(StabilityReport {
            input: StabilityInput { draft, kg },
            hydrostatics,
            metrics,
            curve,
            compliance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydrostatics::{HydrostaticRow, HydrostaticTable};
    use crate::kn::{KnCurve, KnSurface};

    fn calculator(config: CalculatorConfig) -> StabilityCalculator {
        let table = HydrostaticTable::from_rows(vec![
            HydrostaticRow::new(9.0, 44_600.0, 4.52, 4.50),
            HydrostaticRow::new(10.0, 50_000.0, 5.00, 4.00),
            HydrostaticRow::new(11.0, 55_500.0, 5.48, 3.70),
        ])
        .unwrap();
        let flat = |kn: f64| KnCurve::new([(40_000.0, kn), (60_000.0, kn)]).unwrap();
        let surface = KnSurface::from_curves(vec![
            (10.0, flat(1.57)),
            (20.0, flat(2.98)),
            (30.0, flat(4.00)),
            (40.0, flat(4.95)),
            (50.0, flat(5.70)),
        ])
        .unwrap();
        StabilityCalculator::new(VesselData::new(table, surface), config)
    }

    #[test]
    fn low_kg_condition_is_compliant() {
        let report = calculator(CalculatorConfig::default())
            .calculate_stability(10.0, 6.0)
            .unwrap();

        assert!((report.metrics.gm - 3.0).abs() < 1e-9);
        assert!((report.hydrostatics.km - 9.0).abs() < 1e-9);
        assert_eq!(report.metrics.angle_at_max_gz, 50.0);
        assert!(report.is_compliant());
        assert_eq!(report.curve.omitted_angles.first(), Some(&55.0));
    }

    #[test]
    fn high_kg_condition_fails() {
        let report = calculator(CalculatorConfig::default())
            .calculate_stability(10.0, 8.5)
            .unwrap();

        assert!((report.metrics.gm - 0.5).abs() < 1e-9);
        assert!((report.metrics.gz_at_30 - (4.0 - 8.5 * 0.5)).abs() < 1e-9);
        assert!(!report.is_compliant());
    }

    #[test]
    fn rejects_non_positive_kg_and_non_finite_draft() {
        let calc = calculator(CalculatorConfig::default());
        assert!(matches!(
            calc.calculate_stability(10.0, 0.0),
            Err(Error::InvalidInput { .. })
        ));
        assert!(matches!(
            calc.calculate_stability(f64::NAN, 6.0),
            Err(Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn draft_outside_table_reports_valid_range() {
        let err = calculator(CalculatorConfig::default())
            .calculate_stability(12.0, 6.0)
            .unwrap_err();
        assert!(matches!(err, Error::OutOfRangeDraft { min, max, .. } if min == 9.0 && max == 11.0));
    }

    #[test]
    fn strict_config_fails_when_grid_exceeds_curves() {
        let config = CalculatorConfig::default().with_policy(AnglePolicy::Strict);
        let err = calculator(config).calculate_stability(10.0, 6.0).unwrap_err();
        assert!(matches!(err, Error::OutOfRangeAngle { .. }));
    }

    #[test]
    fn angle_step_changes_grid() {
        let config = CalculatorConfig::with_angle_step(10.0).unwrap();
        assert_eq!(config.angle_grid.len(), 10);
        let report = calculator(config).calculate_stability(10.0, 6.0).unwrap();
        assert_eq!(report.curve.samples.len(), 6);
    }

    #[test]
    fn calculator_is_shareable_across_threads() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<StabilityCalculator>();
    }
}
