//! Platform CLI - Command Line Access to Processed Market Data
//!
//! Loads a snapshot description and answers curve, fixing and spot queries
//! against it.
//!
//! # Commands
//!
//! - `platform inspect` - Summarise the snapshot contents
//! - `platform discount --curve USD --dates 2021-06-04` - Discount factors and zero rates
//! - `platform forward --curve USD --start 2021-03-01 --end 2021-09-01` - Simple forward rates
//! - `platform fixings --fixing-type LIBOR --tenor 3M --dates 2020-12-31` - Historical fixings
//! - `platform spot --asset AAPL --dates 2021-01-04` - Historical spots
//! - `platform check` - Validate the snapshot file
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate only orchestrates
//! `platform_market`; all market data semantics live there.

use clap::{Parser, Subcommand};
use platform_core::types::{Date, Period};
use platform_market::curves::CurveType;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

use commands::OutputFormat;
pub use error::{CliError, Result};

/// Processed market data CLI
#[derive(Parser)]
#[command(name = "platform")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Snapshot description file
    #[arg(
        short,
        long,
        global = true,
        env = "PLATFORM_SNAPSHOT",
        default_value = "snapshot.toml"
    )]
    snapshot: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise currencies, assets, curves and series in the snapshot
    Inspect,

    /// Discount factors and zero rates of a curve
    Discount {
        /// Curve type (e.g. USD, USD-SOFR, FWD:AAPL)
        #[arg(short, long)]
        curve: CurveType,

        /// Query dates (YYYY-MM-DD, comma separated)
        #[arg(short, long, value_delimiter = ',', required = true)]
        dates: Vec<Date>,
    },

    /// Simple forward rates from one start date
    Forward {
        /// Curve type (e.g. USD, USD-SOFR, FWD:AAPL)
        #[arg(short, long)]
        curve: CurveType,

        /// Accrual start date (YYYY-MM-DD)
        #[arg(long)]
        start: Date,

        /// Accrual end dates (YYYY-MM-DD, comma separated)
        #[arg(long, value_delimiter = ',', required = true)]
        end: Vec<Date>,
    },

    /// Historical rate fixings
    Fixings {
        /// Published index name (e.g. LIBOR)
        #[arg(long)]
        fixing_type: String,

        /// Fixing tenor (e.g. 3M)
        #[arg(short, long)]
        tenor: Period,

        /// Query dates (YYYY-MM-DD, comma separated)
        #[arg(short, long, value_delimiter = ',', required = true)]
        dates: Vec<Date>,
    },

    /// Historical spot values of an asset
    Spot {
        /// Asset identifier
        #[arg(short, long)]
        asset: String,

        /// Query dates (YYYY-MM-DD, comma separated)
        #[arg(short, long, value_delimiter = ',', required = true)]
        dates: Vec<Date>,
    },

    /// Validate the snapshot description and exit
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; RUST_LOG takes precedence over --verbose
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    if let Err(e) = run(cli) {
        error!("{}", e);
        return Err(e.into());
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let path = cli.snapshot.as_str();
    let format = cli.format;

    match cli.command {
        Commands::Inspect => commands::inspect::run(path, format),
        Commands::Discount { curve, dates } => commands::discount::run(path, &curve, &dates, format),
        Commands::Forward { curve, start, end } => {
            commands::forward::run(path, &curve, start, &end, format)
        }
        Commands::Fixings {
            fixing_type,
            tenor,
            dates,
        } => commands::fixings::run(path, &fixing_type, tenor, &dates, format),
        Commands::Spot { asset, dates } => commands::spot::run(path, &asset, &dates, format),
        Commands::Check => commands::check::run(path),
    }
}
