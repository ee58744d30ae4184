//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};

use crate::cli::commands::{
    completions::CompletionsArgs, export::ExportArgs, import::ImportArgs, preview::PreviewArgs,
};
use crate::core::locale::Locale;

#[derive(Parser)]
#[command(name = "invx")]
#[command(author, version, about = "Inventory exchange toolkit")]
#[command(
    long_about = "Import and export point-of-sale inventory records (products, sales, purchases, expenses) as spreadsheet-friendly CSV."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct GlobalOpts {
    /// Language for column headers and labels (default: from config, else en)
    #[arg(long, short = 'l', global = true, value_enum)]
    pub locale: Option<Locale>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export entities from a YAML/JSON collection to CSV
    Export(ExportArgs),

    /// Import entities from a CSV file
    Import(ImportArgs),

    /// Show how a CSV file decodes
    Preview(PreviewArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
