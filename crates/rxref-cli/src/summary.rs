//! Console rendering of matches and reference options.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rxref_core::ClassifiedRow;
use rxref_model::ReferenceOption;

pub fn print_matches_preview(matches: &[&ClassifiedRow], limit: usize) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Reference"),
        header_cell("Trade name"),
        header_cell("Form"),
        header_cell("Dosage"),
        header_cell("Base form"),
        header_cell("Release"),
        header_cell("Routes"),
    ]);
    apply_table_style(&mut table);
    for row in matches.iter().take(limit) {
        table.add_row(vec![
            Cell::new(&row.row.reference_product),
            Cell::new(&row.row.trade_name),
            Cell::new(&row.row.form_text),
            Cell::new(&row.row.dosage_text),
            Cell::new(&row.parsed.base_form),
            Cell::new(row.parsed.release_type),
            routes_cell(row),
        ]);
    }
    println!("{table}");
    if matches.len() > limit {
        println!("... and {} more rows", matches.len() - limit);
    }
}

pub fn print_options(options: &[ReferenceOption]) {
    println!();
    if options.len() == 1 {
        println!("One reference product found:");
    } else {
        println!("Several possible reference products found:");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Reference product"),
        header_cell("Rows"),
        header_cell("Sample rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (idx, option) in options.iter().enumerate() {
        let sample = option
            .sample_rows
            .iter()
            .map(|row| format!("{} | {} | {}", row.trade_name, row.form, row.dosage))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&option.reference_product),
            Cell::new(option.rows_count),
            Cell::new(sample),
        ]);
    }
    println!("{table}");
}

pub fn print_selected_rows(rows: &[&ClassifiedRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Trade name"),
        header_cell("Form"),
        header_cell("Dosage"),
        header_cell("MA number"),
        header_cell("MA date"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.row.trade_name),
            Cell::new(&row.row.form_text),
            Cell::new(&row.row.dosage_text),
            Cell::new(row.row.authorization_number.as_deref().unwrap_or("-")),
            Cell::new(
                row.row
                    .authorization_date
                    .map(|date| date.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]);
    }
    println!("{table}");
}

fn routes_cell(row: &ClassifiedRow) -> Cell {
    if row.parsed.routes.is_empty() {
        Cell::new("undetermined").fg(Color::DarkGrey)
    } else {
        let routes: Vec<&str> = row.parsed.routes.iter().map(|route| route.as_str()).collect();
        Cell::new(routes.join(", "))
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
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
