//! Human-readable report rendering.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use tidy_model::{CleanCategory, CleaningReport};

use crate::common::ensure_parent_dir;

/// Renders the plain-text report.
///
/// Layout: header and timestamp, the column mapping, one block per
/// category in report order, then the merged columns and the duplicate row
/// count. Output is deterministic for a given report.
pub fn render_text_report(report: &CleaningReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &CleaningReport) -> std::fmt::Result {
    writeln!(out, "Generic cleaning report")?;
    writeln!(
        out,
        "Generated at: {}",
        report
            .generated_at
            .to_rfc3339_opts(SecondsFormat::AutoSi, true)
    )?;
    writeln!(out)?;

    writeln!(out, "Column mapping (original -> cleaned):")?;
    for rename in report.column_mapping.iter() {
        writeln!(out, "- {} -> {}", rename.original, rename.normalized)?;
    }

    writeln!(out)?;
    writeln!(out, "Counts by category:")?;
    for category in CleanCategory::ALL {
        writeln!(out)?;
        writeln!(out, "{}:", category.key())?;
        for (column, count) in report.counts(category) {
            writeln!(out, "- {column}: {count}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Merged columns: {}", list_literal(&report.merged_columns))?;
    writeln!(out, "Duplicate rows removed: {}", report.duplicate_rows_removed)
}

/// `['a', 'b']`, switching to double quotes for names holding a single quote.
fn list_literal(items: &[String]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| {
            if item.contains('\'') && !item.contains('"') {
                format!("\"{item}\"")
            } else {
                format!("'{}'", item.replace('\\', "\\\\").replace('\'', "\\'"))
            }
        })
        .collect();
    format!("[{}]", quoted.join(", "))
}

pub fn write_text_report(path: &Path, report: &CleaningReport) -> Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, render_text_report(report))
        .with_context(|| format!("write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_literal() {
        assert_eq!(list_literal(&[]), "[]");
        assert_eq!(
            list_literal(&["E-mail".to_string(), "Order  ID".to_string()]),
            "['E-mail', 'Order  ID']"
        );
        assert_eq!(list_literal(&["Cust's".to_string()]), "[\"Cust's\"]");
    }
}
