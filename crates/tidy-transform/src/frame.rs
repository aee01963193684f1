//! Conversion of cleaned tables into polars frames.

use polars::prelude::{
    DataFrame, DataType, IntoColumn, NamedFrom, PolarsResult, Series, TimeUnit,
};
use tidy_model::{CellValue, Column, ColumnKind, Table};

/// Builds a typed [`DataFrame`] from a cleaned table.
///
/// Number columns become `Float64`, timestamp columns `Datetime(ms)`, and
/// every other column `String` using the export formatting. Missing cells
/// are null.
pub fn to_dataframe(table: &Table) -> PolarsResult<DataFrame> {
    let columns = table
        .columns()
        .iter()
        .map(|column| column_to_series(column).map(IntoColumn::into_column))
        .collect::<PolarsResult<Vec<_>>>()?;
    DataFrame::new(columns)
}

fn column_to_series(column: &Column) -> PolarsResult<Series> {
    let name = column.name.as_str();
    match column.kind() {
        ColumnKind::Number => {
            let values: Vec<Option<f64>> = column.values.iter().map(CellValue::as_number).collect();
            Ok(Series::new(name.into(), values))
        }
        ColumnKind::Timestamp => {
            let millis: Vec<Option<i64>> = column
                .values
                .iter()
                .map(|value| {
                    value
                        .as_timestamp()
                        .map(|ts| ts.and_utc().timestamp_millis())
                })
                .collect();
            Series::new(name.into(), millis).cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
        }
        ColumnKind::Text => Ok(Series::new(name.into(), column.display_values())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_column_types() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let table = Table::new(vec![
            Column::new("price", vec![CellValue::Number(2.5), CellValue::Missing]),
            Column::new("order_date", vec![CellValue::Timestamp(ts), CellValue::Missing]),
            Column::new("note", vec![CellValue::from("gift"), CellValue::Number(3.0)]),
        ])
        .unwrap();

        let df = to_dataframe(&table).unwrap();

        assert_eq!(df.shape(), (2, 3));
        assert_eq!(df.column("price").unwrap().dtype(), &DataType::Float64);
        assert_eq!(
            df.column("order_date").unwrap().dtype(),
            &DataType::Datetime(TimeUnit::Milliseconds, None)
        );
        assert_eq!(df.column("note").unwrap().dtype(), &DataType::String);
        assert_eq!(df.column("price").unwrap().null_count(), 1);
        let note = df.column("note").unwrap().str().unwrap();
        assert_eq!(note.get(1), Some("3"));
    }
}
