use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use order_cli::types::ValidateResult;

pub fn print_summary(result: &ValidateResult) {
    println!("Input: {}", result.input.display());
    println!("As of: {}", result.as_of);
    let prefix = if result.written { "Output" } else { "Output (dry run)" };
    println!(
        "{prefix}: {} {}",
        result.output_paths.valid.display(),
        result.output_paths.invalid.display()
    );

    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Input rows"), Cell::new(report.input_rows)]);
    table.add_row(vec![
        Cell::new("Dropped by cleaning"),
        count_cell(report.dropped_null_rows, Color::Yellow),
    ]);
    for outcome in &report.outcomes {
        table.add_row(vec![
            Cell::new(outcome.rule.label()),
            count_cell(outcome.rejected, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("Rescued duplicates"),
        count_cell(report.rescued_rows, Color::Blue),
    ]);
    table.add_row(vec![
        Cell::new("Valid")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Cell::new(report.valid_rows).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Invalid")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Cell::new(report.invalid_rows).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        dim_cell("Invalid without name"),
        count_cell(report.unnamed_invalid_rows, Color::Yellow),
    ]);
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
