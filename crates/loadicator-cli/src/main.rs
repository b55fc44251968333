mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use loadicator_cli::output::OutputFormat;
use loadicator_cli::terminal::ColorPalette;

use commands::calculate::{handle_calculate, CalculateArgs};
use commands::ranges::handle_ranges;
use commands::DataArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Vessel intact stability calculator")]
struct Cli {
    #[command(flatten)]
    data: DataArgs,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Disable ANSI colors in text output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the GZ curve for a loading condition and check the IMO criteria.
    Calculate(CalculateArgs),
    /// List the draft, displacement and heel-angle ranges of the loaded data.
    Ranges,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let palette = ColorPalette::for_flag(cli.no_color);

    match &cli.command {
        Command::Calculate(args) => handle_calculate(args, &cli.data, cli.format, &palette),
        Command::Ranges => handle_ranges(&cli.data, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
