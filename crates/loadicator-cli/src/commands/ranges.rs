//! Ranges command handler for listing valid query limits.

use anyhow::Result;

use loadicator_cli::output::{format_ranges_text, to_json, OutputFormat};

use super::{load_vessel_data, DataArgs};

/// Handle the `ranges` subcommand.
pub fn handle_ranges(data: &DataArgs, format: OutputFormat) -> Result<()> {
    let vessel = load_vessel_data(data)?;
    let ranges = vessel.ranges();

    match format {
        OutputFormat::Json => println!("{}", to_json(&ranges)?),
        OutputFormat::Text => print!("{}", format_ranges_text(&ranges)),
    }
    Ok(())
}
