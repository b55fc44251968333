//! Calculate command handler for evaluating one loading condition.

use anyhow::{Context, Result};
use clap::Args;

use loadicator_cli::output::{format_report_text, to_json, OutputFormat};
use loadicator_cli::terminal::ColorPalette;
use loadicator_lib::{AnglePolicy, CalculatorConfig, StabilityCalculator};

use super::{load_vessel_data, DataArgs};

/// Arguments for the `calculate` subcommand.
#[derive(Args, Debug, Clone)]
pub struct CalculateArgs {
    /// Mean draft in metres.
    #[arg(long)]
    pub draft: f64,

    /// Vertical centre of gravity above keel (KG) in metres.
    #[arg(long)]
    pub kg: f64,

    /// Heel-angle grid spacing in degrees (grid runs 0 to 90).
    #[arg(long)]
    pub angle_step: Option<f64>,

    /// Fail when a grid angle falls outside the cross-curves instead of
    /// omitting it.
    #[arg(long)]
    pub strict_angles: bool,
}

impl CalculateArgs {
    fn config(&self) -> Result<CalculatorConfig> {
        let config = match self.angle_step {
            Some(step) => CalculatorConfig::with_angle_step(step)?,
            None => CalculatorConfig::default(),
        };
        let policy = if self.strict_angles {
            AnglePolicy::Strict
        } else {
            AnglePolicy::Omit
        };
        Ok(config.with_policy(policy))
    }
}

/// Handle the `calculate` subcommand.
pub fn handle_calculate(
    args: &CalculateArgs,
    data: &DataArgs,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let config = args.config().context("invalid calculation settings")?;
    let calculator = StabilityCalculator::new(load_vessel_data(data)?, config);

    let report = calculator
        .calculate_stability(args.draft, args.kg)
        .with_context(|| {
            format!(
                "failed to calculate stability at draft {} m, KG {} m",
                args.draft, args.kg
            )
        })?;

    match format {
        OutputFormat::Json => println!("{}", to_json(&report)?),
        OutputFormat::Text => print!("{}", format_report_text(&report, palette)),
    }
    Ok(())
}
