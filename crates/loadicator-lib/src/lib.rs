//! Loadicator library entry points.
//!
//! This crate loads a vessel's hydrostatic particulars and KN cross-curves,
//! builds righting-arm (GZ) curves for a loading condition, derives the
//! headline stability figures and checks them against the IMO Intact Stability
//! Code general criteria. Higher-level consumers (the CLI) should only depend
//! on the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod calculator;
pub mod compliance;
pub mod dataset;
pub mod error;
pub mod gz;
pub mod hydrostatics;
mod interpolate;
pub mod kn;
pub mod metrics;
mod tabular;

pub use calculator::{CalculatorConfig, StabilityCalculator, StabilityInput, StabilityReport};
pub use compliance::{ComplianceCriterion, ComplianceResult, CriterionKind};
pub use dataset::{resolve_data_dir, ValidRanges, VesselData, VesselDataPaths};
pub use error::{Error, Result};
pub use gz::{default_angle_grid, AnglePolicy, GzCurve, GzCurveBuilder, GzSample};
pub use hydrostatics::{HydrostaticProperties, HydrostaticProperty, HydrostaticTable};
pub use kn::{KnCurve, KnSurface};
pub use metrics::StabilityMetrics;
