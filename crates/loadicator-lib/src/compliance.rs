//! IMO Intact Stability Code general criteria.

use std::fmt;

use serde::Serialize;

use crate::metrics::StabilityMetrics;

/// Minimum initial metacentric height (m).
pub const MIN_GM: f64 = 0.15;
/// Minimum area under the GZ curve up to 30° (m·rad).
pub const MIN_AREA_0_30: f64 = 0.055;
/// Minimum area under the GZ curve up to 40° (m·rad).
pub const MIN_AREA_0_40: f64 = 0.090;
/// Minimum area under the GZ curve between 30° and 40° (m·rad).
pub const MIN_AREA_30_40: f64 = 0.030;
/// Minimum righting arm at 30° heel (m).
pub const MIN_GZ_AT_30: f64 = 0.20;
/// Minimum heel angle at which the maximum righting arm occurs (degrees).
pub const MIN_ANGLE_OF_MAX_GZ: f64 = 25.0;

/// The six general intact stability criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    MetacentricHeight,
    Area0To30,
    Area0To40,
    Area30To40,
    RightingArmAt30,
    AngleOfMaxGz,
}

impl CriterionKind {
    /// Evaluation order used in reports.
    pub const ALL: [CriterionKind; 6] = [
        CriterionKind::MetacentricHeight,
        CriterionKind::Area0To30,
        CriterionKind::Area0To40,
        CriterionKind::Area30To40,
        CriterionKind::RightingArmAt30,
        CriterionKind::AngleOfMaxGz,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CriterionKind::MetacentricHeight => "Metacentric height (GM)",
            CriterionKind::Area0To30 => "Area 0-30°",
            CriterionKind::Area0To40 => "Area 0-40°",
            CriterionKind::Area30To40 => "Area 30-40°",
            CriterionKind::RightingArmAt30 => "GZ at 30°",
            CriterionKind::AngleOfMaxGz => "Angle of max GZ",
        }
    }

    pub fn threshold(self) -> f64 {
        match self {
            CriterionKind::MetacentricHeight => MIN_GM,
            CriterionKind::Area0To30 => MIN_AREA_0_30,
            CriterionKind::Area0To40 => MIN_AREA_0_40,
            CriterionKind::Area30To40 => MIN_AREA_30_40,
            CriterionKind::RightingArmAt30 => MIN_GZ_AT_30,
            CriterionKind::AngleOfMaxGz => MIN_ANGLE_OF_MAX_GZ,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            CriterionKind::MetacentricHeight | CriterionKind::RightingArmAt30 => "m",
            CriterionKind::Area0To30 | CriterionKind::Area0To40 | CriterionKind::Area30To40 => {
                "m·rad"
            }
            CriterionKind::AngleOfMaxGz => "°",
        }
    }

    fn actual(self, metrics: &StabilityMetrics) -> f64 {
        match self {
            CriterionKind::MetacentricHeight => metrics.gm,
            CriterionKind::Area0To30 => metrics.area_0_30,
            CriterionKind::Area0To40 => metrics.area_0_40,
            CriterionKind::Area30To40 => metrics.area_30_40,
            CriterionKind::RightingArmAt30 => metrics.gz_at_30,
            CriterionKind::AngleOfMaxGz => metrics.angle_at_max_gz,
        }
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the actual value is compared with the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Comparison {
    #[serde(rename = ">=")]
    AtLeast,
}

impl Comparison {
    pub fn holds(self, actual: f64, threshold: f64) -> bool {
        match self {
            Comparison::AtLeast => actual >= threshold,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::AtLeast => "≥",
        }
    }
}

/// One evaluated criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceCriterion {
    pub kind: CriterionKind,
    pub name: &'static str,
    pub actual: f64,
    pub threshold: f64,
    pub comparison: Comparison,
    pub unit: &'static str,
    pub pass: bool,
}

impl ComplianceCriterion {
    /// Requirement text, e.g. `GZ at 30° ≥ 0.20 m`.
    pub fn requirement(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name,
            self.comparison.symbol(),
            self.threshold,
            self.unit
        )
    }
}

/// Every criterion plus the aggregate verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceResult {
    pub criteria: Vec<ComplianceCriterion>,
    /// True only when every criterion passes.
    pub pass: bool,
}

impl ComplianceResult {
    pub fn failed(&self) -> impl Iterator<Item = &ComplianceCriterion> {
        self.criteria.iter().filter(|criterion| !criterion.pass)
    }

    pub fn criterion(&self, kind: CriterionKind) -> Option<&ComplianceCriterion> {
        self.criteria.iter().find(|criterion| criterion.kind == kind)
    }
}

/// Evaluate the general criteria against `metrics`.
pub fn evaluate(metrics: &StabilityMetrics) -> ComplianceResult {
    let criteria: Vec<ComplianceCriterion> = CriterionKind::ALL
        .into_iter()
        .map(|kind| {
            let actual = kind.actual(metrics);
            let threshold = kind.threshold();
            let comparison = Comparison::AtLeast;
            ComplianceCriterion {
                kind,
                name: kind.name(),
                actual,
                threshold,
                comparison,
                unit: kind.unit(),
                pass: comparison.holds(actual, threshold),
            }
        })
        .collect();
    let pass = criteria.iter().all(|criterion| criterion.pass);
    ComplianceResult { criteria, pass }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing() -> StabilityMetrics {
        StabilityMetrics {
            gm: 1.2,
            max_gz: 1.1,
            angle_at_max_gz: 40.0,
            vanishing_angle: None,
            gz_at_30: 0.9,
            area_0_30: 0.2,
            area_0_40: 0.35,
            area_30_40: 0.15,
        }
    }

    #[test]
    fn all_criteria_passing_is_compliant() {
        let result = evaluate(&passing());
        assert_eq!(result.criteria.len(), 6);
        assert!(result.pass);
        assert_eq!(result.failed().count(), 0);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let metrics = StabilityMetrics {
            gm: MIN_GM,
            angle_at_max_gz: MIN_ANGLE_OF_MAX_GZ,
            ..passing()
        };
        let result = evaluate(&metrics);
        assert!(result.pass);
        assert!(result.criterion(CriterionKind::MetacentricHeight).unwrap().pass);
    }

    #[test]
    fn single_failure_fails_overall_verdict() {
        let metrics = StabilityMetrics {
            gz_at_30: 0.19,
            ..passing()
        };
        let result = evaluate(&metrics);
        assert!(!result.pass);
        let failed: Vec<_> = result.failed().map(|c| c.kind).collect();
        assert_eq!(failed, vec![CriterionKind::RightingArmAt30]);
    }

    #[test]
    fn requirement_text_names_threshold_and_unit() {
        let result = evaluate(&passing());
        let gz = result.criterion(CriterionKind::RightingArmAt30).unwrap();
        assert_eq!(gz.requirement(), "GZ at 30° ≥ 0.2 m");
    }
}
