use std::fmt;

use serde::Serialize;

/// A hydrostatic quantity tabulated against draft.
///
/// Draft itself is the table index and `KM` is derived (`KB + TKM`), so
/// neither appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HydrostaticProperty {
    /// Displacement in tonnes.
    Displacement,
    /// Height of the centre of buoyancy above the keel.
    Kb,
    /// Transverse metacentric radius (BM) added to KB to give KM.
    Tkm,
    /// Tonnes per centimetre immersion.
    Tpc,
    /// Moment to change trim one centimetre.
    Mtc,
    /// Longitudinal centre of buoyancy.
    Lcb,
    /// Longitudinal centre of flotation.
    Lcf,
}

impl HydrostaticProperty {
    /// Every property, in table column order.
    pub const ALL: [HydrostaticProperty; 7] = [
        HydrostaticProperty::Displacement,
        HydrostaticProperty::Kb,
        HydrostaticProperty::Tkm,
        HydrostaticProperty::Tpc,
        HydrostaticProperty::Mtc,
        HydrostaticProperty::Lcb,
        HydrostaticProperty::Lcf,
    ];

    /// Properties the stability pipeline cannot run without.
    pub const REQUIRED: [HydrostaticProperty; 3] = [
        HydrostaticProperty::Displacement,
        HydrostaticProperty::Kb,
        HydrostaticProperty::Tkm,
    ];

    /// Conventional column label.
    pub fn label(self) -> &'static str {
        match self {
            HydrostaticProperty::Displacement => "Displacement",
            HydrostaticProperty::Kb => "KB",
            HydrostaticProperty::Tkm => "TKM",
            HydrostaticProperty::Tpc => "TPC",
            HydrostaticProperty::Mtc => "MTC",
            HydrostaticProperty::Lcb => "LCB",
            HydrostaticProperty::Lcf => "LCF",
        }
    }

    /// Unit the column is tabulated in.
    pub fn unit(self) -> &'static str {
        match self {
            HydrostaticProperty::Displacement => "t",
            HydrostaticProperty::Tpc => "t/cm",
            HydrostaticProperty::Mtc => "t·m/cm",
            HydrostaticProperty::Kb
            | HydrostaticProperty::Tkm
            | HydrostaticProperty::Lcb
            | HydrostaticProperty::Lcf => "m",
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

impl fmt::Display for HydrostaticProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
