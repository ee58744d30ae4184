//! `invx import` command - Import entities from CSV files

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::{load_config, parse_entity_type, truncate_str};
use crate::cli::GlobalOpts;
use crate::core::entity::Entity;
use crate::core::identity::EntityPrefix;
use crate::core::loader::{render_collection, save_collection, CollectionFormat};
use crate::core::locale::Locale;
use crate::entities::Product;
use crate::exchange::decode::SkippedRow;
use crate::exchange::encode::escape_field;
use crate::exchange::mapper::{Column, ExpenseColumn, ProductColumn, PurchaseColumn, SaleColumn};
use crate::exchange::{import_file, DecodeMode, ImportBatch, ImportOutcome};

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// Entity type to import (product)
    #[arg(value_parser = parse_entity_type)]
    pub entity_type: Option<EntityPrefix>,

    /// CSV file to import
    pub file: Option<PathBuf>,

    /// Generate a CSV template for the entity type
    #[arg(long)]
    pub template: bool,

    /// Parse the CSV and report without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Decode with full RFC 4180 rules (quoted cells may span lines)
    #[arg(long)]
    pub strict: bool,

    /// Write the imported collection here (default: standard output)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Collection format (default: from the output extension, else yaml)
    #[arg(long, value_enum)]
    pub format: Option<CollectionFormat>,
}

/// Import statistics
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub rows_processed: usize,
    pub entities_created: usize,
    pub skipped: usize,
    pub unresolved_links: usize,
    pub low_stock: usize,
}

impl ImportStats {
    pub fn from_outcome(outcome: &ImportOutcome<Product>) -> Self {
        Self {
            rows_processed: outcome.rows_processed(),
            entities_created: outcome.entities.len(),
            skipped: outcome.skipped.len(),
            unresolved_links: outcome
                .entities
                .iter()
                .filter(|p| !p.category.is_resolved() || !p.supplier.is_resolved())
                .count(),
            low_stock: outcome.entities.iter().filter(|p| p.is_low_stock()).count(),
        }
    }
}

pub fn run(args: ImportArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global);

    // Handle template generation
    if args.template {
        let entity_type = args.entity_type.ok_or_else(|| {
            miette::miette!(
                "Entity type required for template generation. Usage: invx import product --template"
            )
        })?;
        print!("{}", generate_template(entity_type, config.locale()));
        eprintln!();
        eprintln!(
            "{} Template generated. Redirect to file: invx import {} --template > {}.csv",
            style("→").blue(),
            entity_type.plural(),
            entity_type.plural()
        );
        return Ok(());
    }

    // Require both entity type and file for import
    let entity_type = args.entity_type.ok_or_else(|| {
        miette::miette!("Entity type required. Usage: invx import product data.csv")
    })?;

    if entity_type != EntityPrefix::Prd {
        return Err(miette::miette!(
            "Import not yet implemented for {}; only products can be imported",
            entity_type.plural()
        ));
    }

    let file_path = args.file.clone().ok_or_else(|| {
        miette::miette!("CSV file required. Usage: invx import product data.csv")
    })?;

    if !global.quiet {
        eprintln!(
            "{} Importing {} from {}{}",
            style("→").blue(),
            style(entity_type.plural()).cyan(),
            style(file_path.display()).yellow(),
            if args.dry_run {
                style(" (dry run)").dim().to_string()
            } else {
                String::new()
            }
        );
        eprintln!();
    }

    let mode = if args.strict {
        DecodeMode::Strict
    } else {
        DecodeMode::Lenient
    };
    let outcome: ImportOutcome<Product> = import_file(&file_path, mode, ImportBatch::new())?;

    if !global.quiet {
        report_rows(&outcome, global.verbose || args.dry_run);
    }

    let stats = ImportStats::from_outcome(&outcome);

    if !args.dry_run {
        match args.output {
            Some(ref path) => {
                let format = args
                    .format
                    .unwrap_or_else(|| CollectionFormat::from_path(path));
                save_collection(path, &outcome.entities, format)?;
                if !global.quiet {
                    eprintln!();
                    eprintln!(
                        "{} Wrote {} product(s) to {}",
                        style("✓").green(),
                        outcome.entities.len(),
                        style(path.display()).yellow()
                    );
                }
            }
            None => {
                let format = args.format.unwrap_or_default();
                print!("{}", render_collection(&outcome.entities, format)?);
            }
        }
    }

    if !global.quiet {
        print_summary(&stats, args.dry_run);
    }

    Ok(())
}

fn report_rows(outcome: &ImportOutcome<Product>, each_row: bool) {
    if each_row {
        for (idx, product) in outcome.entities.iter().enumerate() {
            eprintln!(
                "{} Row {}: {} - {} ({})",
                style("✓").green(),
                idx + 1,
                style(&product.sku).cyan(),
                truncate_str(product.display_name(), 30),
                product.sell_price
            );
        }
    }
    for SkippedRow {
        line,
        expected,
        found,
    } in &outcome.skipped
    {
        eprintln!(
            "{} Line {}: expected {} field(s), found {} (skipped)",
            style("✗").red(),
            line,
            expected,
            found
        );
    }
}

fn print_summary(stats: &ImportStats, dry_run: bool) {
    eprintln!();
    eprintln!("{}", style("─".repeat(50)).dim());
    eprintln!("{}", style("Import Summary").bold());
    eprintln!("{}", style("─".repeat(50)).dim());
    eprintln!("  Rows processed:   {}", style(stats.rows_processed).cyan());
    eprintln!("  Entities created: {}", style(stats.entities_created).green());
    if stats.skipped > 0 {
        eprintln!("  Skipped:          {}", style(stats.skipped).dim());
    }
    if stats.unresolved_links > 0 {
        eprintln!("  Unresolved links: {}", style(stats.unresolved_links).yellow());
    }
    if stats.low_stock > 0 {
        eprintln!("  At or below min:  {}", style(stats.low_stock).yellow());
    }

    if dry_run {
        eprintln!();
        eprintln!("{}", style("Dry run complete. Nothing was written.").yellow());
    }
}

/// CSV template for an entity type: header row, plus an example row where
/// one is defined
pub fn generate_template(entity_type: EntityPrefix, locale: Locale) -> String {
    match entity_type {
        EntityPrefix::Prd => template_for::<ProductColumn>(locale),
        EntityPrefix::Sale => template_for::<SaleColumn>(locale),
        EntityPrefix::Pur => template_for::<PurchaseColumn>(locale),
        EntityPrefix::Exp => template_for::<ExpenseColumn>(locale),
        _ => String::new(),
    }
}

fn template_for<C: Column>(locale: Locale) -> String {
    let headers: Vec<&str> = C::all().iter().map(|c| c.label(locale)).collect();
    let example: Vec<String> = C::all().iter().map(|c| escape_field(c.example())).collect();

    let mut out = headers.join(",");
    out.push('\n');
    if example.iter().any(|cell| !cell.is_empty()) {
        out.push_str(&example.join(","));
        out.push('\n');
    }
    out
}
