use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::interpolate::{self, span};

use super::property::HydrostaticProperty;

/// One row of hydrostatic particulars at a given draft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HydrostaticRow {
    pub draft: f64,
    pub displacement: f64,
    pub kb: f64,
    pub tkm: f64,
    pub tpc: Option<f64>,
    pub mtc: Option<f64>,
    pub lcb: Option<f64>,
    pub lcf: Option<f64>,
}

impl HydrostaticRow {
    /// Row carrying only the required columns.
    pub fn new(draft: f64, displacement: f64, kb: f64, tkm: f64) -> Self {
        Self {
            draft,
            displacement,
            kb,
            tkm,
            tpc: None,
            mtc: None,
            lcb: None,
            lcf: None,
        }
    }

    fn value(&self, property: HydrostaticProperty) -> Option<f64> {
        match property {
            HydrostaticProperty::Displacement => Some(self.displacement),
            HydrostaticProperty::Kb => Some(self.kb),
            HydrostaticProperty::Tkm => Some(self.tkm),
            HydrostaticProperty::Tpc => self.tpc,
            HydrostaticProperty::Mtc => self.mtc,
            HydrostaticProperty::Lcb => self.lcb,
            HydrostaticProperty::Lcf => self.lcf,
        }
    }
}

/// Every loaded hydrostatic property resolved at a single draft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HydrostaticProperties {
    pub draft: f64,
    pub displacement: f64,
    pub kb: f64,
    pub tkm: f64,
    /// Height of the transverse metacentre, `KB + TKM`.
    pub km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tpc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lcb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lcf: Option<f64>,
}

/// Hydrostatic particulars stored column-wise against a strictly increasing
/// draft axis. Built once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct HydrostaticTable {
    drafts: Vec<f64>,
    columns: BTreeMap<HydrostaticProperty, Vec<f64>>,
}

impl HydrostaticTable {
    /// Build a table from rows. Optional columns are kept only when every row
    /// provides a value.
    pub fn from_rows(rows: impl IntoIterator<Item = HydrostaticRow>) -> Result<Self> {
        let rows: Vec<HydrostaticRow> = rows.into_iter().collect();
        let drafts = rows.iter().map(|row| row.draft).collect();

        let mut columns = BTreeMap::new();
        for property in HydrostaticProperty::ALL {
            let values: Option<Vec<f64>> = rows.iter().map(|row| row.value(property)).collect();
            if let Some(values) = values {
                columns.insert(property, values);
            }
        }

        Self::from_columns(drafts, columns)
    }

    /// Build a table from a draft axis and any subset of property columns.
    ///
    /// Required properties are not enforced here; a table without them only
    /// fails once a lookup asks for the absent column.
    pub fn from_columns(
        drafts: Vec<f64>,
        columns: BTreeMap<HydrostaticProperty, Vec<f64>>,
    ) -> Result<Self> {
        if drafts.len() < 2 {
            return Err(Error::InsufficientData {
                what: "hydrostatic table".to_string(),
                found: drafts.len(),
            });
        }

        if !interpolate::is_strictly_increasing(&drafts) {
            return Err(Error::HydrostaticDataValidation {
                message: "draft values must be finite, unique and strictly increasing".to_string(),
            });
        }

        for (property, values) in &columns {
            if values.len() != drafts.len() {
                return Err(Error::HydrostaticDataValidation {
                    message: format!(
                        "{property} column has {} values for {} drafts",
                        values.len(),
                        drafts.len()
                    ),
                });
            }
            if let Some(idx) = values.iter().position(|value| !value.is_finite()) {
                return Err(Error::HydrostaticDataValidation {
                    message: format!(
                        "{property} at draft {} must be a finite number",
                        drafts[idx]
                    ),
                });
            }
        }

        Ok(Self { drafts, columns })
    }

    /// Interpolate `property` linearly between the two rows bracketing `draft`.
    ///
    /// A draft that coincides with a stored row returns that row's value as
    /// stored.
    pub fn interpolate(&self, draft: f64, property: HydrostaticProperty) -> Result<f64> {
        let values = self
            .columns
            .get(&property)
            .ok_or_else(|| Error::MissingProperty {
                property: property.label().to_string(),
            })?;

        interpolate::interpolate(&self.drafts, values, draft).ok_or_else(|| {
            let (min, max) = self.draft_range();
            Error::OutOfRangeDraft { draft, min, max }
        })
    }

    /// Resolve every loaded property at `draft` and derive `KM = KB + TKM`.
    pub fn all_properties(&self, draft: f64) -> Result<HydrostaticProperties> {
        let optional = |property: HydrostaticProperty| -> Result<Option<f64>> {
            if self.has_property(property) {
                self.interpolate(draft, property).map(Some)
            } else {
                Ok(None)
            }
        };

        let displacement = self.interpolate(draft, HydrostaticProperty::Displacement)?;
        let kb = self.interpolate(draft, HydrostaticProperty::Kb)?;
        let tkm = self.interpolate(draft, HydrostaticProperty::Tkm)?;

        Ok(HydrostaticProperties {
            draft,
            displacement,
            kb,
            tkm,
            km: kb + tkm,
            tpc: optional(HydrostaticProperty::Tpc)?,
            mtc: optional(HydrostaticProperty::Mtc)?,
            lcb: optional(HydrostaticProperty::Lcb)?,
            lcf: optional(HydrostaticProperty::Lcf)?,
        })
    }

    /// Whether the column for `property` was loaded.
    pub fn has_property(&self, property: HydrostaticProperty) -> bool {
        self.columns.contains_key(&property)
    }

    /// Loaded properties in column order.
    pub fn properties(&self) -> impl Iterator<Item = HydrostaticProperty> + '_ {
        self.columns.keys().copied()
    }

    /// Closed draft range covered by the table.
    pub fn draft_range(&self) -> (f64, f64) {
        span(&self.drafts).unwrap_or((f64::NAN, f64::NAN))
    }

    /// Smallest and largest tabulated displacement, if that column is loaded.
    pub fn displacement_range(&self) -> Option<(f64, f64)> {
        let values = self.columns.get(&HydrostaticProperty::Displacement)?;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    /// Stored draft axis.
    pub fn drafts(&self) -> &[f64] {
        &self.drafts
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}
