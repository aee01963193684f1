use std::path::PathBuf;

use polars::prelude::DataFrame;
use tidy_model::{CleaningReport, ColumnKind};
use tidy_transform::CanonicalRole;

#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    /// `None` for a dry run.
    pub outputs: Option<CleanOutputs>,
    pub rows_in: usize,
    pub rows_out: usize,
    pub columns_in: usize,
    pub columns: Vec<ColumnSummary>,
    pub report: CleaningReport,
}

#[derive(Debug, Clone)]
pub struct CleanOutputs {
    pub csv: PathBuf,
    pub report_json: PathBuf,
    pub report_text: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnKind,
    pub missing: usize,
    /// Sum of this column's counts over every correction category.
    pub corrections: usize,
}

#[derive(Debug)]
pub struct InspectResult {
    pub input: PathBuf,
    pub rows: usize,
    pub roles: Vec<(CanonicalRole, Option<String>)>,
    pub preview: DataFrame,
}
