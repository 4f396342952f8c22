//! Volgrid CLI - command-line front-end for the pricing engine.
//!
//! # Commands
//!
//! - `volgrid price` - Price a European option and print its Greeks
//! - `volgrid grid` - Build a (spot × volatility) P&L scenario grid and
//!   print breakevens and summary statistics
//!
//! Rate and volatility are accepted in percent (`--rate 5 --vol 20`),
//! mirroring how the interactive tool collects them, and converted to
//! decimals before they reach the engine.

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Volgrid option pricing CLI
#[derive(Parser)]
#[command(name = "volgrid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Shared option-contract arguments.
#[derive(clap::Args, Clone, Copy)]
struct ContractArgs {
    /// Current stock price
    #[arg(short = 's', long, default_value = "100.0")]
    spot: f64,

    /// Strike price
    #[arg(short = 'k', long, default_value = "100.0")]
    strike: f64,

    /// Time to expiration in years
    #[arg(short = 't', long, default_value = "0.25")]
    expiry: f64,

    /// Risk-free rate in percent
    #[arg(short = 'r', long, default_value = "5.0")]
    rate: f64,

    /// Volatility in percent
    #[arg(long, default_value = "20.0")]
    vol: f64,

    /// Call or put
    #[arg(short = 'o', long, value_enum, default_value_t = OptionTypeArg::Call)]
    option_type: OptionTypeArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum OptionTypeArg {
    Call,
    Put,
}

#[derive(Clone, Copy, ValueEnum)]
enum PositionArg {
    Long,
    Short,
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Pnl,
    Price,
    PctPnl,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option and print its Greeks
    Price {
        #[command(flatten)]
        contract: ContractArgs,
    },

    /// Build a P&L scenario grid and print its analytics
    Grid {
        #[command(flatten)]
        contract: ContractArgs,

        /// Spot range in percent: low bound
        #[arg(long, default_value = "-40.0", allow_hyphen_values = true)]
        spot_low: f64,

        /// Spot range in percent: high bound
        #[arg(long, default_value = "40.0", allow_hyphen_values = true)]
        spot_high: f64,

        /// Volatility range in percent: low bound
        #[arg(long, default_value = "-30.0", allow_hyphen_values = true)]
        vol_low: f64,

        /// Volatility range in percent: high bound
        #[arg(long, default_value = "50.0", allow_hyphen_values = true)]
        vol_high: f64,

        /// Grid resolution N (N×N scenarios)
        #[arg(short = 'n', long, default_value = "30")]
        resolution: usize,

        /// Long or short position
        #[arg(short = 'p', long, value_enum, default_value_t = PositionArg::Long)]
        position: PositionArg,

        /// Matrix driving breakeven/summary analytics
        #[arg(short = 'm', long, value_enum, default_value_t = MetricArg::Pnl)]
        metric: MetricArg,

        /// Absolute breakeven tolerance in currency units
        #[arg(long, default_value = "0.01")]
        tolerance: f64,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price { contract } => commands::price::run(&contract),
        Commands::Grid {
            contract,
            spot_low,
            spot_high,
            vol_low,
            vol_high,
            resolution,
            position,
            metric,
            tolerance,
        } => commands::grid::run(
            &contract,
            (spot_low, spot_high),
            (vol_low, vol_high),
            resolution,
            position,
            metric,
            tolerance,
        ),
    }
}
