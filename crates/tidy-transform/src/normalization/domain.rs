//! Keyword-triggered value normalizers.
//!
//! Each rule pairs a predicate over the normalized column name with a pure
//! per-value transform. Rules run in [`VALUE_RULES`] order on text columns.

use tidy_model::{CleanCategory, Column};

use super::text::{collapse_whitespace, contains_any, title_case};
use super::whitespace::map_text_cells;

/// A name-triggered normalizer.
#[derive(Clone, Copy)]
pub struct ValueRule {
    pub category: CleanCategory,
    pub applies_to: fn(&str) -> bool,
    pub normalize: fn(&str) -> String,
}

impl std::fmt::Debug for ValueRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueRule")
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

impl ValueRule {
    /// Applies the rule to a column.
    ///
    /// Returns `None` when the name does not trigger the rule or the column
    /// is not text-typed; otherwise the number of changed cells.
    pub fn apply(&self, column: &mut Column) -> Option<usize> {
        if !(self.applies_to)(&column.name) || !column.is_text() {
            return None;
        }
        Some(map_text_cells(column, self.normalize))
    }
}

pub const VALUE_RULES: [ValueRule; 6] = [
    ValueRule {
        category: CleanCategory::EmailsNormalized,
        applies_to: is_email_column,
        normalize: normalize_email,
    },
    ValueRule {
        category: CleanCategory::PhonesNormalized,
        applies_to: is_phone_column,
        normalize: normalize_phone,
    },
    ValueRule {
        category: CleanCategory::CodesNormalized,
        applies_to: is_code_column,
        normalize: normalize_code,
    },
    ValueRule {
        category: CleanCategory::NamesNormalized,
        applies_to: is_name_column,
        normalize: title_case,
    },
    ValueRule {
        category: CleanCategory::TagsNormalized,
        applies_to: is_tag_column,
        normalize: normalize_tags,
    },
    ValueRule {
        category: CleanCategory::StatusNormalized,
        applies_to: is_status_column,
        normalize: normalize_status,
    },
];

fn is_email_column(name: &str) -> bool {
    name.contains("email")
}

fn is_phone_column(name: &str) -> bool {
    contains_any(name, &["phone", "tel"])
}

fn is_code_column(name: &str) -> bool {
    contains_any(name, &["currency", "code", "iso"])
}

fn is_name_column(name: &str) -> bool {
    contains_any(name, &["name", "customer", "client"]) && !name.contains("id")
}

fn is_tag_column(name: &str) -> bool {
    contains_any(name, &["tag", "label", "category"])
}

fn is_status_column(name: &str) -> bool {
    name.contains("status")
}

pub fn normalize_email(value: &str) -> String {
    collapse_whitespace(&value.to_lowercase())
}

/// Keeps only the digits when at least seven remain; shorter values are
/// not confidently phone numbers and are only whitespace-collapsed.
pub fn normalize_phone(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() >= 7 {
        digits
    } else {
        collapse_whitespace(value)
    }
}

pub fn normalize_code(value: &str) -> String {
    value.to_uppercase().trim().to_string()
}

/// Splits on `,`, `;`, `|` or `/`, trims and lower-cases the parts, drops
/// empty parts and rejoins with `;`. A value with no non-empty part is
/// returned unchanged.
pub fn normalize_tags(value: &str) -> String {
    let parts: Vec<String> = value
        .split([',', ';', '|', '/'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect();
    if parts.is_empty() {
        value.to_string()
    } else {
        parts.join(";")
    }
}

pub fn normalize_status(value: &str) -> String {
    collapse_whitespace(&value.to_lowercase())
}
