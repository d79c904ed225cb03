use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tracker_cli::types::ImportResult;

pub fn print_summary(result: &ImportResult) {
    println!("Source: {}", result.source);
    println!("Input: {}", result.input.display());
    if result.dry_run {
        println!("Dry run: no files written");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Accepted"),
        header_cell("Skipped"),
        header_cell("Range warnings"),
        header_cell("Statements"),
    ]);
    apply_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.records_read),
        Cell::new(result.rows_accepted).add_attribute(Attribute::Bold),
        count_cell(result.skipped_count(), Color::Yellow),
        count_cell(result.range_warnings, Color::Yellow),
        Cell::new(result.statements),
    ]);
    println!("{table}");

    print_outputs(result);
    print_skipped(result);
}

fn print_outputs(result: &ImportResult) {
    if result.outputs.is_empty() {
        println!("No output written (no rows accepted).");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Output"),
        header_cell("Rows"),
        header_cell("Statements"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for file in &result.outputs {
        let path = Cell::new(file.path.display());
        table.add_row(vec![
            if file.written {
                path.fg(Color::Green)
            } else {
                path.fg(Color::DarkGrey)
            },
            Cell::new(file.rows),
            Cell::new(file.statements),
        ]);
    }
    println!("{table}");
}

fn print_skipped(result: &ImportResult) {
    if result.skipped.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Record"), header_cell("Reason")]);
    apply_table_style(&mut table);
    for skipped in &result.skipped {
        table.add_row(vec![
            Cell::new(skipped.reference).fg(Color::Yellow),
            Cell::new(&skipped.reason),
        ]);
    }
    println!();
    println!("Skipped records:");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
