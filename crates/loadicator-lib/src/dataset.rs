use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::hydrostatics::HydrostaticTable;
use crate::kn::KnSurface;

/// Default filename for the hydrostatic particulars table.
pub const HYDROSTATICS_FILENAME: &str = "hydrostatics.csv";

/// Default filename for the KN cross-curves.
pub const KN_CURVES_FILENAME: &str = "kn_curves.csv";

/// Environment variable overriding the vessel data directory.
pub const DATA_DIR_ENV: &str = "LOADICATOR_DATA_DIR";

/// Paths to the vessel data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VesselDataPaths {
    pub hydrostatics: PathBuf,
    pub kn_curves: PathBuf,
}

impl VesselDataPaths {
    /// The default filenames inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            hydrostatics: dir.join(HYDROSTATICS_FILENAME),
            kn_curves: dir.join(KN_CURVES_FILENAME),
        }
    }
}

/// Resolve the platform data directory using project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "loadicator", "loadicator").ok_or(Error::DataDirUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Resolve the vessel data directory.
///
/// Resolution order:
/// 1. Explicit `dir` argument.
/// 2. `LOADICATOR_DATA_DIR` environment variable.
/// 3. Platform-specific project data directory.
pub fn resolve_data_dir(dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = dir {
        debug!(path = %explicit.display(), "using explicit data directory");
        return Ok(explicit.to_path_buf());
    }

    if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        let path = PathBuf::from(env_path);
        debug!(path = %path.display(), "using data directory from {DATA_DIR_ENV}");
        return Ok(path);
    }

    default_data_dir()
}

/// Immutable snapshot of one vessel's hydrostatic and cross-curve data.
#[derive(Debug, Clone, PartialEq)]
pub struct VesselData {
    pub hydrostatics: HydrostaticTable,
    pub kn: KnSurface,
}

impl VesselData {
    pub fn new(hydrostatics: HydrostaticTable, kn: KnSurface) -> Self {
        Self { hydrostatics, kn }
    }

    /// Load both tables from their default filenames inside `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::from_paths(&VesselDataPaths::in_dir(dir))
    }

    /// Load both tables from explicit file paths.
    pub fn from_paths(paths: &VesselDataPaths) -> Result<Self> {
        let hydrostatics = HydrostaticTable::from_path(&paths.hydrostatics)?;
        let kn = KnSurface::from_path(&paths.kn_curves)?;
        let data = Self::new(hydrostatics, kn);

        let ranges = data.ranges();
        if let (Some((hydro_min, hydro_max)), Some((kn_min, kn_max))) =
            (ranges.displacement, ranges.kn_displacement)
        {
            if hydro_min < kn_min || hydro_max > kn_max {
                info!(
                    hydro_min,
                    hydro_max,
                    kn_min,
                    kn_max,
                    "cross-curves do not cover every tabulated displacement; some drafts will omit angles"
                );
            }
        }
        Ok(data)
    }

    /// Query limits implied by the loaded tables.
    pub fn ranges(&self) -> ValidRanges {
        ValidRanges {
            draft: self.hydrostatics.draft_range(),
            displacement: self.hydrostatics.displacement_range(),
            kn_displacement: self.kn.displacement_range(),
            heel_angles: self.kn.angles().collect(),
            max_heel_angle: self.kn.max_angle(),
        }
    }
}

/// Valid query ranges for a loaded vessel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidRanges {
    /// Draft span of the hydrostatic table (m).
    pub draft: (f64, f64),
    /// Displacement span of the hydrostatic table (t).
    pub displacement: Option<(f64, f64)>,
    /// Displacement span shared by every cross-curve (t).
    pub kn_displacement: Option<(f64, f64)>,
    /// Stored cross-curve heel angles (degrees), zero excluded.
    pub heel_angles: Vec<f64>,
    pub max_heel_angle: f64,
}
