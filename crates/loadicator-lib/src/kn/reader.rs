//! KN cross-curve CSV loading.
//!
//! Columns come in pairs, one pair per heel angle: displacement then KN. The
//! header cell over each pair's first column names the angle (`"5 degrees"`,
//! `"10"`, `"15 deg"`); the second header cell is ignored. Curves end at
//! different depths, so rows are ragged.

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::tabular;

use super::curve::KnCurve;
use super::surface::KnSurface;

impl KnSurface {
    /// Load cross-curves from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let surface = Self::from_reader(file)?;
        let (displacement_min, displacement_max) = surface
            .displacement_range()
            .unwrap_or((f64::NAN, f64::NAN));
        info!(
            path = %path.display(),
            curves = surface.len(),
            max_angle = surface.max_angle(),
            displacement_min,
            displacement_max,
            "loaded KN cross-curves"
        );
        Ok(surface)
    }

    /// Load cross-curves from a reader (e.g., file or in-memory buffer).
    ///
    /// Only rows where both cells of a pair are numeric contribute to that
    /// curve. Each curve is sorted by displacement and repeated displacements
    /// keep their first KN.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = tabular::reader_builder().from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut columns: Vec<(f64, Vec<(f64, f64)>)> = Vec::new();
        let mut pair_indices: Vec<usize> = Vec::new();
        for (pair, header) in headers.iter().step_by(2).enumerate() {
            match parse_angle(header) {
                Some(angle) => {
                    columns.push((angle, Vec::new()));
                    pair_indices.push(pair * 2);
                }
                None => debug!(header, "skipping cross-curve column without a heel angle"),
            }
        }

        if columns.is_empty() {
            return Err(Error::KnDataValidation {
                message: "no heel angle found in the cross-curve header".to_string(),
            });
        }

        for result in csv_reader.records() {
            let record = result?;
            let cell = |index: usize| {
                record
                    .get(index)
                    .and_then(|raw| tabular::parse_number(raw).ok().flatten())
            };
            for ((_, points), &x_index) in columns.iter_mut().zip(&pair_indices) {
                if let (Some(displacement), Some(kn)) = (cell(x_index), cell(x_index + 1)) {
                    points.push((displacement, kn));
                }
            }
        }

        let curves = columns
            .into_iter()
            .map(|(angle, mut points)| {
                points.sort_by(|a, b| a.0.total_cmp(&b.0));
                points.dedup_by(|later, earlier| later.0 == earlier.0);
                let curve = KnCurve::new(points).map_err(|err| Error::KnDataValidation {
                    message: format!("{angle}° curve: {err}"),
                })?;
                Ok((angle, curve))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_curves(curves)
    }
}

/// Leading number of a header cell: `"15 degrees"`, `"15°"` and `"15"` all
/// give `15.0`.
fn parse_angle(header: &str) -> Option<f64> {
    let header = header.trim();
    let end = header
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .unwrap_or(header.len());
    header[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_angle_from_header_variants() {
        assert_eq!(parse_angle("5 degrees"), Some(5.0));
        assert_eq!(parse_angle(" 12.5° "), Some(12.5));
        assert_eq!(parse_angle("15 deg"), Some(15.0));
        assert_eq!(parse_angle(""), None);
        assert_eq!(parse_angle("Displacement"), None);
    }

    #[test]
    fn loads_paired_columns_with_ragged_rows() {
        let csv = "5 degrees,,10 degrees,\n\
                   30000,0.92,30000,1.83\n\
                   15000,1.05,15000,2.08\n\
                   45000,0.82,,\n";
        let surface = KnSurface::from_reader(Cursor::new(csv)).expect("surface loads");

        assert_eq!(surface.angles().collect::<Vec<_>>(), vec![5.0, 10.0]);
        assert_eq!(
            surface.curve(5.0).unwrap().displacement_range(),
            (15_000.0, 45_000.0)
        );
        assert_eq!(surface.displacement_range(), Some((15_000.0, 30_000.0)));
        assert_eq!(surface.interpolate(15_000.0, 10.0).unwrap(), 2.08);
    }

    #[test]
    fn blank_cell_mid_column_does_not_end_curve() {
        let csv = "10 degrees,\n20000,1.9\n30000,\n40000,1.7\n";
        let surface = KnSurface::from_reader(Cursor::new(csv)).unwrap();
        let curve = surface.curve(10.0).unwrap();
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.displacement_range(), (20_000.0, 40_000.0));
    }

    #[test]
    fn non_numeric_cells_are_skipped() {
        let csv = "20,\nX,Y\n40000,3.0\nn/a,2.9\n60000,2.8\n";
        let surface = KnSurface::from_reader(Cursor::new(csv)).unwrap();
        assert_eq!(surface.curve(20.0).unwrap().len(), 2);
    }

    #[test]
    fn header_without_angles_is_rejected() {
        let csv = "Displacement,KN\n1,2\n3,4\n";
        let err = KnSurface::from_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, Error::KnDataValidation { .. }));
    }

    #[test]
    fn single_point_curve_names_its_angle() {
        let csv = "30 degrees,\n45000,4.1\n";
        let err = KnSurface::from_reader(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("30° curve"), "{err}");
    }
}
