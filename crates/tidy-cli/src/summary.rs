use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tidy_model::{CleanCategory, CleaningReport, ColumnKind};

use crate::types::{CleanResult, ColumnSummary, InspectResult};

pub fn print_clean_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    match &result.outputs {
        Some(outputs) => {
            println!("Output: {}", outputs.csv.display());
            println!("JSON report: {}", outputs.report_json.display());
            println!("Text report: {}", outputs.report_text.display());
        }
        None => println!("Dry run: nothing written"),
    }
    println!(
        "Rows: {} -> {}  Columns: {} -> {}",
        result.rows_in,
        result.rows_out,
        result.columns_in,
        result.columns.len()
    );
    println!("{}", category_table(&result.report));
    println!("{}", column_table(&result.columns));
    if !result.report.merged_columns.is_empty() {
        println!("Merged columns: {}", result.report.merged_columns.join(", "));
    }
    println!(
        "Duplicate rows removed: {}",
        result.report.duplicate_rows_removed
    );
}

pub fn print_inspect(result: &InspectResult) {
    println!("Input: {} ({} rows after cleaning)", result.input.display(), result.rows);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Role"), header_cell("Column")]);
    apply_table_style(&mut table);
    for (role, column) in &result.roles {
        let column_cell = match column {
            Some(name) => Cell::new(name),
            None => dim_cell("-"),
        };
        table.add_row(vec![Cell::new(role.as_str()), column_cell]);
    }
    println!("{table}");
    println!("{}", result.preview);
}

fn category_table(report: &CleaningReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Columns"),
        header_cell("Cells"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total = 0usize;
    for category in CleanCategory::ALL {
        let counts = report.counts(category);
        let cells = report.category_total(category);
        total += cells;
        table.add_row(vec![
            Cell::new(category.key()),
            count_cell(counts.values().filter(|count| **count > 0).count()),
            count_cell(cells),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(total).add_attribute(Attribute::Bold),
    ]);
    table
}

fn column_table(columns: &[ColumnSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Missing"),
        header_cell("Corrections"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for column in columns {
        table.add_row(vec![
            Cell::new(&column.name),
            kind_cell(column.kind),
            Cell::new(column.missing),
            count_cell(column.corrections),
        ]);
    }
    table
}

fn kind_cell(kind: ColumnKind) -> Cell {
    match kind {
        ColumnKind::Number => Cell::new(kind.as_str()).fg(Color::Blue),
        ColumnKind::Timestamp => Cell::new(kind.as_str()).fg(Color::Magenta),
        ColumnKind::Text => dim_cell(kind.as_str()),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{TimeZone, Utc};

    #[test]
    fn test_category_table_lists_every_category_and_total() {
        let mut report = CleaningReport::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        report
            .counts_mut(CleanCategory::NullsNormalized)
            .insert("email".to_string(), 2);
        report
            .counts_mut(CleanCategory::NullsNormalized)
            .insert("phone".to_string(), 0);
        report
            .counts_mut(CleanCategory::DatesParsed)
            .insert("order_date".to_string(), 5);

        let rendered = category_table(&report).to_string();
        for category in CleanCategory::ALL {
            assert!(rendered.contains(category.key()), "{category}");
        }
        let total_line = rendered
            .lines()
            .find(|line| line.contains("TOTAL"))
            .unwrap();
        assert!(total_line.contains('7'));
    }

    #[test]
    fn test_column_table_rows() {
        let columns = vec![ColumnSummary {
            name: "unit_price".to_string(),
            kind: ColumnKind::Number,
            missing: 1,
            corrections: 4,
        }];
        let rendered = column_table(&columns).to_string();
        assert!(rendered.contains("unit_price"));
        assert!(rendered.contains("number"));
    }
}
