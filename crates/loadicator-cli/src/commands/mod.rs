// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments and dispatches here.

pub mod calculate;
pub mod ranges;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use loadicator_lib::{resolve_data_dir, VesselData, VesselDataPaths};

/// Where to find the vessel data files.
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Directory containing hydrostatics.csv and kn_curves.csv
    /// (default: $LOADICATOR_DATA_DIR, then the platform data directory).
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Hydrostatic particulars CSV, overriding the data directory's file.
    #[arg(long, global = true)]
    pub hydrostatics: Option<PathBuf>,

    /// KN cross-curves CSV, overriding the data directory's file.
    #[arg(long, global = true)]
    pub kn_curves: Option<PathBuf>,
}

impl DataArgs {
    /// Resolve the data file paths; the data directory is only consulted for
    /// files not given explicitly.
    pub fn resolve_paths(&self) -> Result<VesselDataPaths> {
        if let (Some(hydrostatics), Some(kn_curves)) = (&self.hydrostatics, &self.kn_curves) {
            return Ok(VesselDataPaths {
                hydrostatics: hydrostatics.clone(),
                kn_curves: kn_curves.clone(),
            });
        }

        let dir = resolve_data_dir(self.data_dir.as_deref())
            .context("failed to locate the vessel data directory")?;
        let defaults = VesselDataPaths::in_dir(&dir);
        Ok(VesselDataPaths {
            hydrostatics: self.hydrostatics.clone().unwrap_or(defaults.hydrostatics),
            kn_curves: self.kn_curves.clone().unwrap_or(defaults.kn_curves),
        })
    }
}

/// Load the vessel's hydrostatic table and cross-curves.
pub fn load_vessel_data(args: &DataArgs) -> Result<VesselData> {
    let paths = args.resolve_paths()?;
    VesselData::from_paths(&paths).with_context(|| {
        format!(
            "failed to load vessel data from {} and {}",
            paths.hydrostatics.display(),
            paths.kn_curves.display()
        )
    })
}
