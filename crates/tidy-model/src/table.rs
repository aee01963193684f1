//! Column-oriented in-memory table.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::cell::{CellValue, format_number};
use crate::error::{ModelError, Result};

/// Storage type of a whole column, decided by its present cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Text,
    Number,
    Timestamp,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKind::Text => "text",
            ColumnKind::Number => "number",
            ColumnKind::Timestamp => "timestamp",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Builds a raw-text column; `None` entries become missing cells.
    pub fn from_raw<S: Into<String>>(name: impl Into<String>, raw: Vec<Option<S>>) -> Self {
        let values = raw
            .into_iter()
            .map(|value| CellValue::from_raw(value.map(Into::into)))
            .collect();
        Self::new(name, values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_missing()).count()
    }

    /// True while the column has not been re-typed: every present cell is text.
    pub fn is_text(&self) -> bool {
        self.values
            .iter()
            .all(|value| matches!(value, CellValue::Text(_) | CellValue::Missing))
    }

    /// The first `limit` present text values, in row order.
    pub fn text_sample(&self, limit: usize) -> Vec<&str> {
        self.values
            .iter()
            .filter_map(CellValue::as_text)
            .take(limit)
            .collect()
    }

    /// Number when every present cell is a number, timestamp when every
    /// present cell is a timestamp, text otherwise (including all-missing).
    pub fn kind(&self) -> ColumnKind {
        let mut present = self.values.iter().filter(|value| !value.is_missing());
        let Some(first) = present.next() else {
            return ColumnKind::Text;
        };
        match first {
            CellValue::Number(_) if present.all(|v| matches!(v, CellValue::Number(_))) => {
                ColumnKind::Number
            }
            CellValue::Timestamp(_) if present.all(|v| matches!(v, CellValue::Timestamp(_))) => {
                ColumnKind::Timestamp
            }
            _ => ColumnKind::Text,
        }
    }

    /// Renders every cell for export; missing cells are `None`.
    ///
    /// Numbers use their shortest decimal form. Timestamps print date-only
    /// when every timestamp in the column falls on midnight, and as
    /// `YYYY-MM-DD HH:MM:SS` (plus any fractional seconds) otherwise.
    pub fn display_values(&self) -> Vec<Option<String>> {
        let date_only = self
            .values
            .iter()
            .filter_map(CellValue::as_timestamp)
            .all(|ts| ts.time() == NaiveTime::MIN);
        let timestamp_format = if date_only {
            "%Y-%m-%d"
        } else {
            "%Y-%m-%d %H:%M:%S%.f"
        };
        self.values
            .iter()
            .map(|value| match value {
                CellValue::Missing => None,
                CellValue::Text(text) => Some(text.clone()),
                CellValue::Number(number) => Some(format_number(*number)),
                CellValue::Timestamp(ts) => Some(ts.format(timestamp_format).to_string()),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Creates a table, checking that every column has the same row count.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for column in &columns {
                if column.len() != expected {
                    return Err(ModelError::RaggedColumn {
                        column: column.name.clone(),
                        expected,
                        found: column.len(),
                    });
                }
            }
        }
        Ok(Self { columns })
    }

    /// Creates a table from a header row and row-major raw fields.
    pub fn from_rows(headers: &[String], rows: Vec<Vec<Option<String>>>) -> Result<Self> {
        let mut columns: Vec<Vec<CellValue>> = headers
            .iter()
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != headers.len() {
                return Err(ModelError::RaggedRow {
                    row: row_idx,
                    expected: headers.len(),
                    found: row.len(),
                });
            }
            for (column, raw) in columns.iter_mut().zip(row) {
                column.push(CellValue::from_raw(raw));
            }
        }
        Ok(Self {
            columns: headers
                .iter()
                .zip(columns)
                .map(|(name, values)| Column::new(name.clone(), values))
                .collect(),
        })
    }

    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Mutable access to the columns.
    ///
    /// Renaming and rewriting cells in place is fine. Callers must not change
    /// a column's length: every column has to keep [`height`](Self::height)
    /// cells.
    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Keeps columns whose mask entry is true. The mask must cover every column.
    pub fn retain_columns(&mut self, keep: &[bool]) {
        debug_assert_eq!(keep.len(), self.width());
        let mut flags = keep.iter();
        self.columns
            .retain(|_| flags.next().copied().unwrap_or(true));
    }

    /// Keeps rows whose mask entry is true. The mask must cover every row.
    pub fn retain_rows(&mut self, keep: &[bool]) {
        debug_assert_eq!(keep.len(), self.height());
        for column in &mut self.columns {
            let mut flags = keep.iter();
            column
                .values
                .retain(|_| flags.next().copied().unwrap_or(true));
        }
    }
}
