//! Cleaning report types.
//!
//! One report is produced per cleaning run. It records the header renames,
//! per-column counts for every correction category, the columns dropped by
//! the duplicate-column merge, and the number of duplicate rows removed.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Correction categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanCategory {
    NullsNormalized,
    TrimmedValues,
    NumericParsed,
    RangesNormalized,
    DatesParsed,
    EmailsNormalized,
    PhonesNormalized,
    CodesNormalized,
    NamesNormalized,
    TagsNormalized,
    StatusNormalized,
}

impl CleanCategory {
    pub const ALL: [CleanCategory; 11] = [
        CleanCategory::NullsNormalized,
        CleanCategory::TrimmedValues,
        CleanCategory::NumericParsed,
        CleanCategory::RangesNormalized,
        CleanCategory::DatesParsed,
        CleanCategory::EmailsNormalized,
        CleanCategory::PhonesNormalized,
        CleanCategory::CodesNormalized,
        CleanCategory::NamesNormalized,
        CleanCategory::TagsNormalized,
        CleanCategory::StatusNormalized,
    ];

    /// Report key, e.g. `nulls_normalized`.
    pub fn key(self) -> &'static str {
        match self {
            CleanCategory::NullsNormalized => "nulls_normalized",
            CleanCategory::TrimmedValues => "trimmed_values",
            CleanCategory::NumericParsed => "numeric_parsed",
            CleanCategory::RangesNormalized => "ranges_normalized",
            CleanCategory::DatesParsed => "dates_parsed",
            CleanCategory::EmailsNormalized => "emails_normalized",
            CleanCategory::PhonesNormalized => "phones_normalized",
            CleanCategory::CodesNormalized => "codes_normalized",
            CleanCategory::NamesNormalized => "names_normalized",
            CleanCategory::TagsNormalized => "tags_normalized",
            CleanCategory::StatusNormalized => "status_normalized",
        }
    }
}

impl fmt::Display for CleanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Cleaned column name -> number of affected cells, in table column order.
pub type ColumnCounts = IndexMap<String, usize>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRename {
    pub original: String,
    pub normalized: String,
}

/// Original header -> cleaned header, one entry per input column, in input order.
///
/// Serialized as a JSON object; entry order is preserved in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    entries: Vec<ColumnRename>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, original: impl Into<String>, normalized: impl Into<String>) {
        self.entries.push(ColumnRename {
            original: original.into(),
            normalized: normalized.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnRename> {
        self.entries.iter()
    }

    /// Cleaned name for an original header (first match).
    pub fn normalized(&self, original: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.original == original)
            .map(|entry| entry.normalized.as_str())
    }
}

impl FromIterator<(String, String)> for ColumnMapping {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut mapping = ColumnMapping::new();
        for (original, normalized) in iter {
            mapping.push(original, normalized);
        }
        mapping
    }
}

impl Serialize for ColumnMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.original, &entry.normalized)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ColumnMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MappingVisitor;

        impl<'de> Visitor<'de> for MappingVisitor {
            type Value = ColumnMapping;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of original column names to cleaned names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut mapping = ColumnMapping::new();
                while let Some((original, normalized)) = access.next_entry::<String, String>()? {
                    mapping.push(original, normalized);
                }
                Ok(mapping)
            }
        }

        deserializer.deserialize_map(MappingVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub generated_at: DateTime<Utc>,
    pub column_mapping: ColumnMapping,
    pub nulls_normalized: ColumnCounts,
    pub trimmed_values: ColumnCounts,
    pub numeric_parsed: ColumnCounts,
    pub ranges_normalized: ColumnCounts,
    pub dates_parsed: ColumnCounts,
    pub emails_normalized: ColumnCounts,
    pub phones_normalized: ColumnCounts,
    pub codes_normalized: ColumnCounts,
    pub names_normalized: ColumnCounts,
    pub tags_normalized: ColumnCounts,
    pub status_normalized: ColumnCounts,
    pub merged_columns: Vec<String>,
    pub duplicate_rows_removed: usize,
}

impl CleaningReport {
    pub fn new(generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            column_mapping: ColumnMapping::new(),
            nulls_normalized: ColumnCounts::new(),
            trimmed_values: ColumnCounts::new(),
            numeric_parsed: ColumnCounts::new(),
            ranges_normalized: ColumnCounts::new(),
            dates_parsed: ColumnCounts::new(),
            emails_normalized: ColumnCounts::new(),
            phones_normalized: ColumnCounts::new(),
            codes_normalized: ColumnCounts::new(),
            names_normalized: ColumnCounts::new(),
            tags_normalized: ColumnCounts::new(),
            status_normalized: ColumnCounts::new(),
            merged_columns: Vec::new(),
            duplicate_rows_removed: 0,
        }
    }

    pub fn counts(&self, category: CleanCategory) -> &ColumnCounts {
        match category {
            CleanCategory::NullsNormalized => &self.nulls_normalized,
            CleanCategory::TrimmedValues => &self.trimmed_values,
            CleanCategory::NumericParsed => &self.numeric_parsed,
            CleanCategory::RangesNormalized => &self.ranges_normalized,
            CleanCategory::DatesParsed => &self.dates_parsed,
            CleanCategory::EmailsNormalized => &self.emails_normalized,
            CleanCategory::PhonesNormalized => &self.phones_normalized,
            CleanCategory::CodesNormalized => &self.codes_normalized,
            CleanCategory::NamesNormalized => &self.names_normalized,
            CleanCategory::TagsNormalized => &self.tags_normalized,
            CleanCategory::StatusNormalized => &self.status_normalized,
        }
    }

    pub fn counts_mut(&mut self, category: CleanCategory) -> &mut ColumnCounts {
        match category {
            CleanCategory::NullsNormalized => &mut self.nulls_normalized,
            CleanCategory::TrimmedValues => &mut self.trimmed_values,
            CleanCategory::NumericParsed => &mut self.numeric_parsed,
            CleanCategory::RangesNormalized => &mut self.ranges_normalized,
            CleanCategory::DatesParsed => &mut self.dates_parsed,
            CleanCategory::EmailsNormalized => &mut self.emails_normalized,
            CleanCategory::PhonesNormalized => &mut self.phones_normalized,
            CleanCategory::CodesNormalized => &mut self.codes_normalized,
            CleanCategory::NamesNormalized => &mut self.names_normalized,
            CleanCategory::TagsNormalized => &mut self.tags_normalized,
            CleanCategory::StatusNormalized => &mut self.status_normalized,
        }
    }

    /// Count recorded for one column in one category.
    pub fn count(&self, category: CleanCategory, column: &str) -> Option<usize> {
        self.counts(category).get(column).copied()
    }

    /// Sum of all cells touched in a category.
    pub fn category_total(&self, category: CleanCategory) -> usize {
        self.counts(category).values().sum()
    }
}
