//! CLI argument definitions for the chart tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// The dataset the reference charts are built from.
pub const DEFAULT_SOURCE: &str =
    "https://raw.githubusercontent.com/datasets/covid-19/master/data/countries-aggregated.csv";

#[derive(Parser)]
#[command(
    name = "casetrend",
    version,
    about = "Render COVID-19 case trend charts from a public dataset",
    long_about = "Fetch a per-country time series of COVID-19 case counts and render\n\
                  two line charts: absolute cases and cases per 100,000 people.\n\
                  Series are identified by inline labels instead of a legend."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

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
    /// Fetch the dataset and render both charts.
    Chart(ChartArgs),

    /// List the configured countries with populations and colors.
    Countries(CountriesArgs),
}

#[derive(Parser)]
pub struct ChartArgs {
    /// Dataset source: an http(s) URL or a local CSV path.
    #[arg(value_name = "SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Output directory for the chart images.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Image format to write.
    #[arg(long = "format", value_enum, default_value = "png")]
    pub format: ImageFormatArg,

    /// JSON chart configuration (countries, populations, colors, styles).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CountriesArgs {
    /// JSON chart configuration to list instead of the built-in default.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// CLI image format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ImageFormatArg {
    Png,
    Svg,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
