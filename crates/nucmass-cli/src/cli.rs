use clap::{Args, Parser, Subcommand};
use nucmass::core::models::nucleus::Nucleus;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "nucmass developers",
    version,
    about = "nucmass - Nuclear masses, radii and binding energies from the semi-empirical mass formula.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a list of nuclei, print one report line each and render the plots.
    Report(ReportArgs),
    /// Show the term-by-term binding energy breakdown of a single nucleus.
    Inspect(InspectArgs),
}

/// Arguments for the `report` subcommand.
#[derive(Args, Debug)]
pub struct ReportArgs {
    // --- Input ---
    /// A nucleus to evaluate, as `A,Z` or in symbol notation (e.g. `U-238`).
    /// Can be used multiple times. Without `-n` or `-i` the built-in list is evaluated.
    #[arg(short = 'n', long = "nuclide", value_name = "NUCLIDE")]
    pub nuclides: Vec<Nucleus>,

    /// Path to a CSV file with `a` and `z` columns listing the nuclei to evaluate.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Path to a mass model TOML file replacing the built-in coefficients.
    #[arg(short, long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Output ---
    /// Directory the plots are written to, overriding the config file.
    #[arg(long, value_name = "DIR")]
    pub plot_dir: Option<PathBuf>,

    /// Skip rendering the plots.
    #[arg(long)]
    pub no_plots: bool,

    /// Also write the results as a CSV table to this path.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv_output: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S coefficients.pairing=11.18
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// The nucleus to inspect, as `A,Z` or in symbol notation (e.g. `Fe-56`).
    #[arg(required = true, value_name = "NUCLIDE")]
    pub nuclide: Nucleus,

    /// Path to a mass model TOML file replacing the built-in coefficients.
    #[arg(short, long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}
