//! `invx preview` command - Show how a CSV file decodes

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::truncate_str;
use crate::cli::GlobalOpts;
use crate::exchange::decode::{decode_report, DecodeMode, DecodeReport};
use crate::exchange::read_import_file;

#[derive(clap::Args, Debug)]
pub struct PreviewArgs {
    /// CSV file to inspect
    pub file: PathBuf,

    /// Decode with full RFC 4180 rules (quoted cells may span lines)
    #[arg(long)]
    pub strict: bool,

    /// Show at most this many rows
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Print decoded rows as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PreviewArgs, global: &GlobalOpts) -> Result<()> {
    let text = read_import_file(&args.file)?;
    let mode = if args.strict {
        DecodeMode::Strict
    } else {
        DecodeMode::Lenient
    };
    let report = decode_report(&text, mode);
    let limit = args.limit.unwrap_or(usize::MAX);

    if args.json {
        let rows: Vec<_> = report.records.iter().take(limit).collect();
        println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?);
    } else if report.headers.is_empty() {
        println!("{}", style("No rows found").dim());
    } else {
        println!("{}", render_table(&report, limit));
    }

    if !global.quiet {
        eprintln!(
            "{} {} row(s) decoded, {} dropped",
            style("→").blue(),
            style(report.records.len()).cyan(),
            style(report.skipped.len()).dim()
        );
        for skipped in &report.skipped {
            eprintln!(
                "  {} line {}: expected {} field(s), found {}",
                style("✗").red(),
                skipped.line,
                skipped.expected,
                skipped.found
            );
        }
    }
    Ok(())
}

fn render_table(report: &DecodeReport, limit: usize) -> String {
    let mut table = Builder::default();
    table.push_record(report.headers.iter().map(String::as_str));
    for record in report.records.iter().take(limit) {
        table.push_record(
            record
                .values()
                .map(|v| truncate_str(&v.as_text().replace('\n', " "), 40)),
        );
    }
    table.build().with(Style::markdown()).to_string()
}
