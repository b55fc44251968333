//! Output formatting for stability reports and valid-range listings.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use loadicator_lib::{HydrostaticProperty, StabilityReport, ValidRanges};

use crate::terminal::{format_with_separators, ColorPalette};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Serialize any command result as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Render a stability report as text.
pub fn format_report_text(report: &StabilityReport, palette: &ColorPalette) -> String {
    ReportText { report, palette }.to_string()
}

/// Render the valid query ranges as text.
pub fn format_ranges_text(ranges: &ValidRanges) -> String {
    RangesText(ranges).to_string()
}

const RULE_WIDTH: usize = 64;

struct ReportText<'a> {
    report: &'a StabilityReport,
    palette: &'a ColorPalette,
}

impl ReportText<'_> {
    fn heading(&self, f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
        let p = self.palette;
        writeln!(f)?;
        writeln!(f, "{}{title}{}", p.bold, p.reset)
    }
}

impl fmt::Display for ReportText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.palette;
        let r = self.report;
        let h = &r.hydrostatics;
        let m = &r.metrics;
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{}{rule}{}", p.gray, p.reset)?;
        writeln!(f, "{}STABILITY CALCULATION REPORT{}", p.bold, p.reset)?;
        writeln!(f, "{}{rule}{}", p.gray, p.reset)?;

        self.heading(f, "INPUT")?;
        writeln!(f, "  Draft:                  {:.2} m", r.input.draft)?;
        writeln!(f, "  KG:                     {:.2} m", r.input.kg)?;

        self.heading(f, "HYDROSTATICS")?;
        writeln!(
            f,
            "  Displacement:           {} t",
            format_with_separators(h.displacement.round().max(0.0) as u64)
        )?;
        writeln!(f, "  KB:                     {:.3} m", h.kb)?;
        writeln!(f, "  TKM:                    {:.3} m", h.tkm)?;
        writeln!(f, "  KM:                     {:.3} m", h.km)?;
        writeln!(f, "  GM:                     {:.3} m", m.gm)?;
        if let Some(tpc) = h.tpc {
            writeln!(
                f,
                "  TPC:                    {tpc:.2} {}",
                HydrostaticProperty::Tpc.unit()
            )?;
        }
        if let Some(mtc) = h.mtc {
            writeln!(
                f,
                "  MTC:                    {mtc:.1} {}",
                HydrostaticProperty::Mtc.unit()
            )?;
        }
        if let Some(lcb) = h.lcb {
            writeln!(
                f,
                "  LCB:                    {lcb:.3} {}",
                HydrostaticProperty::Lcb.unit()
            )?;
        }
        if let Some(lcf) = h.lcf {
            writeln!(
                f,
                "  LCF:                    {lcf:.3} {}",
                HydrostaticProperty::Lcf.unit()
            )?;
        }

        self.heading(f, "STABILITY")?;
        writeln!(f, "  Maximum GZ:             {:.3} m", m.max_gz)?;
        writeln!(f, "  Angle at maximum GZ:    {:.1}°", m.angle_at_max_gz)?;
        match m.vanishing_angle {
            Some(angle) => writeln!(f, "  Vanishing angle:        {angle:.1}°")?,
            None => writeln!(f, "  Vanishing angle:        beyond computed curve")?,
        }
        writeln!(f, "  GZ at 30°:              {:.3} m", m.gz_at_30)?;
        writeln!(f, "  Area 0-30°:             {:.4} m·rad", m.area_0_30)?;
        writeln!(f, "  Area 0-40°:             {:.4} m·rad", m.area_0_40)?;
        writeln!(f, "  Area 30-40°:            {:.4} m·rad", m.area_30_40)?;

        self.heading(f, "GZ CURVE")?;
        writeln!(f, "  {:>8}  {:>8}  {:>8}", "Heel (°)", "KN (m)", "GZ (m)")?;
        writeln!(f, "  {}{}{}", p.gray, "-".repeat(30), p.reset)?;
        for sample in &r.curve.samples {
            let color = if sample.gz < 0.0 { p.red } else { "" };
            let reset = if color.is_empty() { "" } else { p.reset };
            writeln!(
                f,
                "  {:>8.1}  {:>8.3}  {color}{:>8.3}{reset}",
                sample.angle, sample.kn, sample.gz
            )?;
        }
        if !r.curve.omitted_angles.is_empty() {
            let angles = r
                .curve
                .omitted_angles
                .iter()
                .map(|angle| format!("{angle}°"))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                f,
                "  {}Omitted (outside cross-curve data): {angles}{}",
                p.yellow, p.reset
            )?;
        }

        self.heading(f, "IMO INTACT STABILITY CODE CRITERIA")?;
        for criterion in &r.compliance.criteria {
            writeln!(
                f,
                "  {:<32} {:>10.4} {:<6} {}",
                criterion.requirement(),
                criterion.actual,
                criterion.unit,
                p.verdict(criterion.pass)
            )?;
        }

        writeln!(f)?;
        let (tag, verdict) = if r.compliance.pass {
            (p.tag_pass, "COMPLIANT")
        } else {
            (p.tag_fail, "NON-COMPLIANT")
        };
        writeln!(f, "OVERALL: {tag} {verdict} {}", p.reset)
    }
}

struct RangesText<'a>(&'a ValidRanges);

impl fmt::Display for RangesText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranges = self.0;
        writeln!(f, "Valid ranges:")?;
        writeln!(
            f,
            "  Draft:                      {:.3} - {:.3} m",
            ranges.draft.0, ranges.draft.1
        )?;
        if let Some((min, max)) = ranges.displacement {
            writeln!(
                f,
                "  Displacement (hydrostatic): {min:.1} - {max:.1} t"
            )?;
        }
        match ranges.kn_displacement {
            Some((min, max)) => {
                writeln!(f, "  Displacement (all KN):      {min:.1} - {max:.1} t")?
            }
            None => writeln!(f, "  Displacement (all KN):      curves do not overlap")?,
        }
        let angles = ranges
            .heel_angles
            .iter()
            .map(|angle| angle.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "  Heel angles:                0 (implicit), {angles}")?;
        writeln!(f, "  Maximum heel angle:         {}°", ranges.max_heel_angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges() -> ValidRanges {
        ValidRanges {
            draft: (4.0, 13.0),
            displacement: Some((18_000.0, 66_600.0)),
            kn_displacement: Some((20_000.0, 75_000.0)),
            heel_angles: vec![5.0, 10.0, 75.0],
            max_heel_angle: 75.0,
        }
    }

    #[test]
    fn ranges_text_lists_draft_and_angles() {
        let text = format_ranges_text(&ranges());
        assert!(text.contains("4.000 - 13.000 m"), "{text}");
        assert!(text.contains("0 (implicit), 5, 10, 75"), "{text}");
        assert!(text.contains("Maximum heel angle:         75°"), "{text}");
    }

    #[test]
    fn ranges_json_is_valid() {
        let json = to_json(&ranges()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["max_heel_angle"], 75.0);
        assert_eq!(value["draft"][1], 13.0);
    }
}
