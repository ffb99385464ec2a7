//! Console summaries for completed runs.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use faers_acquire::FetchStats;

use crate::commands::ProcessSummary;

pub fn print_fetch_summary(stats: &FetchStats) {
    println!("Fetched {} records", stats.records);
    println!("Raw file: {}", stats.raw_file.display());
    println!("Fetch manifest: {}", stats.manifest_file.display());
}

pub fn print_process_summary(summary: &ProcessSummary) {
    let qa = &summary.result.qa;
    println!("Raw file: {}", qa.raw_file);
    println!(
        "Input: {} records, valid: {}, rejected: {}",
        qa.total_input, qa.total_valid, qa.total_rejected
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("SHA-256"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for artifact in &summary.deliverables.tables {
        table.add_row(vec![
            Cell::new(artifact.name),
            Cell::new(artifact.rows),
            Cell::new(short_digest(&artifact.sha256)),
        ]);
    }
    println!("{table}");
    println!("QA summary: {}", summary.deliverables.qa_summary.display());
    println!("Manifest: {}", summary.deliverables.manifest.display());
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn short_digest(hex: &str) -> &str {
    &hex[..hex.len().min(12)]
}
