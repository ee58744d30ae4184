//! `invx export` command - Export entities to CSV

use console::style;
use miette::Result;
use std::path::{Path, PathBuf};

use crate::cli::helpers::{load_config, parse_entity_type};
use crate::cli::GlobalOpts;
use crate::core::identity::EntityPrefix;
use crate::core::loader::load_entities;
use crate::entities::{Expense, Product, Purchase, Sale};
use crate::exchange::{ExportSummary, Exporter, FileSink, MapContext, Sink, StdoutSink};

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Entity type to export (product, sale, purchase, expense)
    #[arg(value_parser = parse_entity_type)]
    pub entity_type: EntityPrefix,

    /// YAML or JSON file holding the entity collection
    pub input: PathBuf,

    /// Directory to write the CSV file into (default: config output_dir, else .)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// File name for the export (default: the entity's plural, e.g. products)
    #[arg(long)]
    pub name: Option<String>,

    /// Label recorded with the export
    #[arg(long)]
    pub sheet: Option<String>,

    /// Write the CSV to standard output instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Do not prefix the file with a UTF-8 byte-order mark
    #[arg(long)]
    pub no_bom: bool,

    /// chrono format for date columns (default: config date_format, else %Y-%m-%d)
    #[arg(long)]
    pub date_format: Option<String>,
}

pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global);
    let mut ctx = MapContext::from_config(&config);
    if let Some(ref format) = args.date_format {
        ctx = ctx.with_date_format(format);
    }
    let bom = config.bom() && !args.no_bom;
    let filename = args
        .name
        .clone()
        .unwrap_or_else(|| args.entity_type.plural().to_string());
    let sheet = args.sheet.as_deref();

    if args.stdout {
        export_with(StdoutSink, bom, &args, &ctx, &filename, sheet)?;
        return Ok(());
    }

    let dir = args.output.clone().unwrap_or_else(|| config.output_dir());
    let sink = FileSink::new(&dir);
    let summary = export_with(sink, bom, &args, &ctx, &filename, sheet)?;

    if !global.quiet {
        println!(
            "{} Exported {} {} to {}",
            style("✓").green(),
            style(summary.rows).cyan(),
            args.entity_type.plural(),
            style(dir.join(&summary.filename).display()).yellow()
        );
    }
    Ok(())
}

fn export_with<S: Sink>(
    sink: S,
    bom: bool,
    args: &ExportArgs,
    ctx: &MapContext,
    filename: &str,
    sheet: Option<&str>,
) -> Result<ExportSummary> {
    let mut exporter = Exporter::new(sink).with_bom(bom);
    let input: &Path = &args.input;

    let summary = match args.entity_type {
        EntityPrefix::Prd => {
            exporter.export_entities(&load_entities::<Product>(input)?, ctx, filename, sheet)?
        }
        EntityPrefix::Sale => {
            exporter.export_entities(&load_entities::<Sale>(input)?, ctx, filename, sheet)?
        }
        EntityPrefix::Pur => {
            exporter.export_entities(&load_entities::<Purchase>(input)?, ctx, filename, sheet)?
        }
        EntityPrefix::Exp => {
            exporter.export_entities(&load_entities::<Expense>(input)?, ctx, filename, sheet)?
        }
        other => {
            return Err(miette::miette!("Export not supported for {}", other.as_str()));
        }
    };
    Ok(summary)
}
