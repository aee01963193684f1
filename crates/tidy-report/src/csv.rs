//! Cleaned table export.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tidy_model::Table;

use crate::common::ensure_parent_dir;

/// Writes a cleaned table to a CSV file, creating parent directories.
///
/// Missing cells are written as empty fields; see
/// [`Column::display_values`](tidy_model::Column::display_values) for how
/// numbers and timestamps are rendered.
pub fn write_csv_table(path: &Path, table: &Table) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_csv_to(file, table).with_context(|| format!("write {}", path.display()))
}

/// Writes a cleaned table as CSV to any writer.
pub fn write_csv_to<W: Write>(writer: W, table: &Table) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(table.column_names())?;

    let rendered: Vec<Vec<Option<String>>> = table
        .columns()
        .iter()
        .map(|column| column.display_values())
        .collect();
    for row in 0..table.height() {
        writer.write_record(
            rendered
                .iter()
                .map(|column| column[row].as_deref().unwrap_or("")),
        )?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tidy_model::{CellValue, Column};

    #[test]
    fn test_write_typed_columns() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let table = Table::new(vec![
            Column::new("order_id", vec![CellValue::from("ORD-1"), CellValue::from("ORD-2")]),
            Column::new("order_date", vec![CellValue::Timestamp(ts), CellValue::Missing]),
            Column::new("unit_price", vec![CellValue::Number(10.0), CellValue::Number(2.5)]),
            Column::new("tags", vec![CellValue::from("vip;gift"), CellValue::from("a, b")]),
        ])
        .unwrap();

        let mut out = Vec::new();
        write_csv_to(&mut out, &table).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "order_id,order_date,unit_price,tags\n\
             ORD-1,2024-03-04,10,vip;gift\n\
             ORD-2,,2.5,\"a, b\"\n"
        );
    }

    #[test]
    fn test_write_header_only() {
        let table = Table::new(vec![Column::new("a", Vec::new())]).unwrap();
        let mut out = Vec::new();
        write_csv_to(&mut out, &table).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\n");
    }
}
