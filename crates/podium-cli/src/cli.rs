//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "podium",
    version,
    about = "Olympic medal analytics - reconcile, normalize, and query Summer Games data",
    long_about = "Loads the Olympic CSV datasets, reconciles country names against the\n\
                  canonical registry, restricts the relational model to Summer editions,\n\
                  and answers the dashboard's analytical queries."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory containing the Olympic CSV datasets.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = ".",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Emit JSON payloads instead of tables.
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load all datasets and print reconciliation diagnostics.
    Summary,

    /// List registered countries.
    Countries,

    /// List retained Summer editions.
    Games,

    /// Medal tally joined with editions, by year then total.
    MedalTally,

    /// Distinct Summer years, ascending.
    Years,

    /// Host city and country per Summer edition.
    HostCities,

    /// Medal history for one country.
    CountryMedals(CountryMedalsArgs),

    /// List Summer sports.
    Sports,

    /// Per-sport medal breakdown by year and country.
    SportMedals(SportMedalsArgs),

    /// Host-country performance timelines on the four-year grid.
    HostPerformance,

    /// Clustered country x sport co-occurrence heatmap.
    Heatmap(HeatmapArgs),
}

#[derive(Parser)]
pub struct CountryMedalsArgs {
    /// Country display name as registered (e.g. "United States").
    #[arg(value_name = "COUNTRY")]
    pub country: String,
}

#[derive(Parser)]
pub struct SportMedalsArgs {
    /// Sport name as it appears in the event data (e.g. "Swimming").
    #[arg(value_name = "SPORT")]
    pub sport: String,
}

#[derive(Parser)]
pub struct HeatmapArgs {
    /// Medal type to count.
    #[arg(long = "medal-type", value_enum, default_value = "total")]
    pub medal_type: MedalTypeArg,

    /// Named year range (all, recent, 1990s, 1980s, 1970s, historical).
    #[arg(long = "year-range", value_name = "RANGE", default_value = "recent")]
    pub year_range: String,

    /// Number of top countries to keep.
    #[arg(long = "countries", value_name = "N", default_value_t = 25)]
    pub country_count: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MedalTypeArg {
    Total,
    Gold,
    Silver,
    Bronze,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum LogFormatArg {
    #[default]
    Pretty,
    Compact,
    Json,
}
