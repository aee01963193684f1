//! Cleaning entry points.

use std::time::Instant;

use rayon::prelude::*;
use tidy_model::{CleaningOptions, CleaningReport, ColumnMapping, Parallelism, Table};
use tracing::{debug, info, info_span};

use crate::column::{ColumnDelta, clean_column};
use crate::dedupe::remove_duplicate_rows;
use crate::merge::merge_duplicate_columns;
use crate::normalization::normalize_column_name;
use crate::report::ReportBuilder;

/// A cleaned table and the report describing what was changed.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanOutcome {
    pub table: Table,
    pub report: CleaningReport,
}

/// Cleans a raw-text table with the default options.
pub fn clean_table(table: Table) -> CleanOutcome {
    clean_table_with_options(table, &CleaningOptions::default())
}

/// Cleans a raw-text table.
///
/// Headers are normalized and same-named columns merged before any column
/// is cleaned; the per-column chain then runs on each column independently
/// (in parallel unless [`Parallelism::Sequential`]), and exact duplicate
/// rows are removed last. Never fails: cells and columns that cannot be
/// converted are kept or blanked, never reported as errors.
pub fn clean_table_with_options(mut table: Table, options: &CleaningOptions) -> CleanOutcome {
    let span = info_span!("clean", rows = table.height(), columns = table.width());
    let _guard = span.enter();
    let start = Instant::now();

    let originals: Vec<String> = table
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let column_mapping: ColumnMapping = originals
        .iter()
        .map(|original| (original.clone(), normalize_column_name(original)))
        .collect();
    for (column, rename) in table.columns_mut().iter_mut().zip(column_mapping.iter()) {
        column.name.clone_from(&rename.normalized);
    }

    let merged_columns = merge_duplicate_columns(&mut table, &originals);
    if !merged_columns.is_empty() {
        info!(merged = ?merged_columns, "merged duplicate columns");
    }

    let deltas: Vec<ColumnDelta> = match options.parallelism {
        Parallelism::Columns => table
            .columns_mut()
            .par_iter_mut()
            .map(|column| clean_column(column, options))
            .collect(),
        Parallelism::Sequential => table
            .columns_mut()
            .iter_mut()
            .map(|column| clean_column(column, options))
            .collect(),
    };
    debug!(columns = deltas.len(), "column cleaning finished");

    let duplicate_rows_removed = if options.drop_duplicate_rows {
        remove_duplicate_rows(&mut table)
    } else {
        0
    };
    if duplicate_rows_removed > 0 {
        info!(duplicate_rows_removed, "removed duplicate rows");
    }

    let mut builder = ReportBuilder::new(column_mapping);
    for delta in deltas {
        builder.record_column(delta);
    }
    builder.merged_columns(merged_columns);
    builder.duplicate_rows_removed(duplicate_rows_removed);

    info!(
        rows = table.height(),
        columns = table.width(),
        duration_ms = start.elapsed().as_millis() as u64,
        "cleaning complete"
    );

    CleanOutcome {
        table,
        report: builder.build(),
    }
}
