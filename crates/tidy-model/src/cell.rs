//! Cell values.
//!
//! Every cell starts life as raw text (or missing). The cleaning stages may
//! re-type a whole column to numbers or timestamps, so a cleaned column can
//! hold any mix of the four variants.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Missing,
    Text(String),
    Number(f64),
    Timestamp(NaiveDateTime),
}

impl CellValue {
    /// Build a cell from a raw field; `None` becomes missing.
    pub fn from_raw(raw: Option<String>) -> Self {
        match raw {
            Some(text) => CellValue::Text(text),
            None => CellValue::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::Timestamp(value) => Some(*value),
            _ => None,
        }
    }

    /// Hashable, totally ordered identity of the value.
    ///
    /// Two cells have equal keys exactly when they hold the same value;
    /// missing equals missing and `0.0` equals `-0.0`.
    pub fn key(&self) -> CellKey<'_> {
        match self {
            CellValue::Missing => CellKey::Missing,
            CellValue::Text(text) => CellKey::Text(text),
            CellValue::Number(value) => {
                let normalized = if *value == 0.0 { 0.0 } else { *value };
                CellKey::Number(normalized.to_bits())
            }
            CellValue::Timestamp(value) => CellKey::Timestamp(*value),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::Timestamp(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellKey<'a> {
    Missing,
    Text(&'a str),
    Number(u64),
    Timestamp(NaiveDateTime),
}

/// Formats a number in its shortest round-trip decimal form.
///
/// `10.0` renders as `10`, `2.5` as `2.5`, negative zero as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
