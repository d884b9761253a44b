use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ReportResult;

/// Prints the end-of-run summary to stdout.
pub fn print_summary(result: &ReportResult) {
    println!("Output: {}", result.output_path.display());
    println!("Input rows: {}", result.input_rows);
    println!(
        "Serials with lifecycle data: {} of {}",
        result.matched_serials, result.serial_count
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Chunk"),
        header_cell("Serials"),
        header_cell("Records"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for chunk in &result.chunks {
        table.add_row(vec![
            Cell::new(chunk.index),
            Cell::new(chunk.serials),
            Cell::new(chunk.records),
            status_cell(chunk.dropped),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.serial_count).add_attribute(Attribute::Bold),
        Cell::new(result.record_count).add_attribute(Attribute::Bold),
        dropped_total_cell(result.dropped_chunks()),
    ]);
    println!("{table}");

    if result.dropped_chunks() > 0 {
        eprintln!(
            "warning: {} of {} chunks returned no data due to lookup failures",
            result.dropped_chunks(),
            result.chunks.len()
        );
    }
}

/// Shared table styling for summary and column listings.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(dropped: bool) -> Cell {
    if dropped {
        Cell::new("DROPPED")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✓").fg(Color::Green)
    }
}

fn dropped_total_cell(dropped: usize) -> Cell {
    if dropped > 0 {
        Cell::new(format!("{dropped} dropped"))
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✓").fg(Color::Green)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
