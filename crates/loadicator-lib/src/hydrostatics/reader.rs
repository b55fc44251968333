//! Hydrostatic particulars CSV loading.
//!
//! The file carries one row per draft with a header row. Header cells are
//! matched after normalization so both plain (`draft,displacement,kb,tkm`)
//! and decorated (`Draft (m),Δ(tonne),KB (m),TKM (m)`) exports load.
//! Unrecognised columns are ignored.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::tabular;

use super::property::HydrostaticProperty;
use super::table::HydrostaticTable;

/// Normalized header spellings accepted for the draft axis.
const DRAFT_HEADERS: &[&str] = &["draft", "draftm", "draught", "draughtm"];

/// Normalized header spellings accepted per property.
const PROPERTY_HEADERS: &[(HydrostaticProperty, &[&str])] = &[
    (
        HydrostaticProperty::Displacement,
        &[
            "displacement",
            "displacementt",
            "displacementtonne",
            "displacementtonnes",
            "disp",
            "δ",
            "δt",
            "δtonne",
            "δtonnes",
        ],
    ),
    (HydrostaticProperty::Kb, &["kb", "kbm"]),
    (HydrostaticProperty::Tkm, &["tkm", "tkmm", "kmt", "kmtm"]),
    (
        HydrostaticProperty::Tpc,
        &["tpc", "tpct", "tpctonnes", "tpctcm"],
    ),
    (
        HydrostaticProperty::Mtc,
        &["mtc", "mtctm", "mct", "mctc", "mtctmcm"],
    ),
    (HydrostaticProperty::Lcb, &["lcb", "lcbm"]),
    (HydrostaticProperty::Lcf, &["lcf", "lcfm"]),
];

impl HydrostaticTable {
    /// Load a hydrostatic table from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let table = Self::from_reader(file)?;
        let (draft_min, draft_max) = table.draft_range();
        info!(
            path = %path.display(),
            rows = table.len(),
            draft_min,
            draft_max,
            "loaded hydrostatic table"
        );
        Ok(table)
    }

    /// Load a hydrostatic table from a reader (e.g., file or in-memory buffer).
    ///
    /// Rows are sorted by draft and rows repeating an earlier draft are
    /// dropped. Blank cells in an optional column drop that column; blank cells
    /// in a required column are an error.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = tabular::reader_builder().from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let normalized_headers: Vec<String> =
            headers.iter().map(tabular::normalize_header).collect();
        let find_column = |candidates: &[&str]| {
            candidates
                .iter()
                .find_map(|candidate| normalized_headers.iter().position(|h| h == candidate))
        };

        let draft_index = find_column(DRAFT_HEADERS).ok_or_else(|| Error::MissingProperty {
            property: "Draft".to_string(),
        })?;

        let property_columns: Vec<(HydrostaticProperty, usize)> = PROPERTY_HEADERS
            .iter()
            .filter_map(|(property, candidates)| {
                find_column(*candidates).map(|index| (*property, index))
            })
            .collect();

        if let Some(missing) = HydrostaticProperty::REQUIRED
            .iter()
            .find(|required| !property_columns.iter().any(|(p, _)| p == *required))
        {
            return Err(Error::MissingProperty {
                property: missing.label().to_string(),
            });
        }

        let mut rows: Vec<(f64, Vec<Option<f64>>)> = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |pos| pos.line());

            let Some(draft) = read_cell(&record, draft_index, "Draft", line)? else {
                debug!(line, "skipping hydrostatic row without a draft");
                continue;
            };

            let values = property_columns
                .iter()
                .map(|(property, index)| read_cell(&record, *index, property.label(), line))
                .collect::<Result<Vec<_>>>()?;

            rows.push((draft, values));
        }

        rows.sort_by(|a, b| a.0.total_cmp(&b.0));
        let before = rows.len();
        rows.dedup_by(|later, earlier| later.0 == earlier.0);
        if rows.len() < before {
            debug!(dropped = before - rows.len(), "dropped duplicate draft rows");
        }

        let drafts: Vec<f64> = rows.iter().map(|(draft, _)| *draft).collect();
        let mut columns = BTreeMap::new();
        for (position, (property, _)) in property_columns.iter().enumerate() {
            let values: Option<Vec<f64>> = rows.iter().map(|(_, values)| values[position]).collect();
            match values {
                Some(values) => {
                    columns.insert(*property, values);
                }
                None if property.is_required() => {
                    return Err(Error::HydrostaticDataValidation {
                        message: format!("{property} column has blank cells"),
                    });
                }
                None => {
                    warn!(%property, "ignoring hydrostatic column with blank cells");
                }
            }
        }

        Self::from_columns(drafts, columns)
    }
}

fn read_cell(record: &StringRecord, index: usize, column: &str, line: u64) -> Result<Option<f64>> {
    let Some(raw) = record.get(index) else {
        return Ok(None);
    };
    tabular::parse_number(raw).map_err(|err| Error::HydrostaticDataValidation {
        message: format!("invalid {column} value '{raw}' at line {line}: {err}"),
    })
}
