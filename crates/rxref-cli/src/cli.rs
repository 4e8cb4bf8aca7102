//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rxref",
    version,
    about = "Find the reference product matching a clinical query in a registry export",
    long_about = "Search a reference-product registry (CSV export) for the rows matching \
                  an active ingredient, administration route, dosage form, release type \
                  and strength, despite free-text source descriptions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Search the registry for reference products matching a query.
    Search(SearchArgs),

    /// Classify a raw dosage-form description and print the parsed axes.
    Classify(ClassifyArgs),
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Path to the registry sheet exported as CSV.
    #[arg(value_name = "REGISTRY_CSV")]
    pub registry: PathBuf,

    /// Active ingredient (INN, grouping or chemical name).
    #[arg(long)]
    pub ingredient: String,

    /// Administration routes, e.g. "oral" or "intravenous, intramuscular".
    #[arg(long, default_value = "")]
    pub routes: String,

    /// Base dosage form, e.g. "tablets".
    #[arg(long = "form", default_value = "")]
    pub base_form: String,

    /// Release type, e.g. "conventional", "prolonged", "enteric".
    #[arg(long = "release", default_value = "")]
    pub release_type: String,

    /// Dosage strength, e.g. "500 mg".
    #[arg(long, default_value = "")]
    pub dosage: String,

    /// Select this reference product without prompting.
    #[arg(long, value_name = "NAME")]
    pub reference: Option<String>,

    /// Maximum rows shown in the match preview.
    #[arg(long, default_value_t = 10)]
    pub preview: usize,

    /// Write the search report as JSON to this path.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Raw dosage-form description, e.g. "enteric-coated tablets".
    #[arg(value_name = "FORM_TEXT")]
    pub form_text: String,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
