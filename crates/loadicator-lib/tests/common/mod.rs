//! Fixture helpers shared by the integration tests.

use std::path::PathBuf;

use loadicator_lib::{CalculatorConfig, StabilityCalculator, VesselData};

/// Directory holding the sample vessel's `hydrostatics.csv` and `kn_curves.csv`.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_vessel() -> VesselData {
    VesselData::load(&fixtures_dir()).expect("load fixture vessel data")
}

#[allow(dead_code)]
pub fn fixture_calculator(config: CalculatorConfig) -> StabilityCalculator {
    StabilityCalculator::new(fixture_vessel(), config)
}
