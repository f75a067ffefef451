use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dd_dimension::HalfYearDayRule;
use dd_time::DateKey;

/// Date and time dimension generator.
#[derive(Parser)]
#[command(
    name = "datedim",
    version,
    about = "Date and time dimension tables for analytical warehouses"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Write the date dimension as CSV.
    Dates(DatesArgs),
    /// Write the time-of-day dimension as CSV.
    Times(TimesArgs),
    /// Print every attribute of a single date key.
    Show(ShowArgs),
}

/// Arguments for the `dates` subcommand.
#[derive(clap::Args)]
pub struct DatesArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override output CSV path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// First date key (YYYYMMDD), inclusive.
    #[arg(long)]
    pub start: Option<DateKey>,

    /// Last date key (YYYYMMDD), inclusive.
    #[arg(long)]
    pub end: Option<DateKey>,

    /// Numbering of `day_of_year_half`: "cumulative" or "legacy".
    #[arg(long = "half-year-day")]
    pub half_year_day: Option<HalfYearDayRule>,
}

/// Arguments for the `times` subcommand.
#[derive(clap::Args)]
pub struct TimesArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override output CSV path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the sampling step in seconds.
    #[arg(long)]
    pub step: Option<u32>,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Date key to describe (YYYYMMDD).
    pub key: DateKey,

    /// Numbering of `day_of_year_half`: "cumulative" or "legacy".
    #[arg(long = "half-year-day", default_value = "cumulative")]
    pub half_year_day: HalfYearDayRule,
}
