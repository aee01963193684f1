use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tidy_ingest::read_csv_table;
use tidy_model::{CleanCategory, CleaningOptions, CleaningReport, Parallelism, Table};
use tidy_report::{write_csv_table, write_json_report, write_text_report};
use tidy_transform::{
    CanonicalColumns, CanonicalRole, CleanOutcome, clean_table, clean_table_with_options,
    to_dataframe,
};

use crate::cli::{CleanArgs, InspectArgs};
use crate::types::{CleanOutputs, CleanResult, ColumnSummary, InspectResult};

const JSON_REPORT_NAME: &str = "clean_report.json";
const TEXT_REPORT_NAME: &str = "clean_report.txt";

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!("clean_file", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = read_csv_table(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let rows_in = table.height();
    let columns_in = table.width();

    let options = cleaning_options(args);
    let CleanOutcome { table, report } = clean_table_with_options(table, &options);
    let columns = column_summaries(&table, &report);

    let outputs = if args.dry_run {
        None
    } else {
        let outputs = output_paths(args);
        write_csv_table(&outputs.csv, &table)?;
        write_json_report(&outputs.report_json, &report)?;
        write_text_report(&outputs.report_text, &report)?;
        info!(
            output = %outputs.csv.display(),
            report_json = %outputs.report_json.display(),
            report_text = %outputs.report_text.display(),
            "outputs written"
        );
        Some(outputs)
    };

    info!(
        rows_in,
        rows_out = table.height(),
        columns_in,
        columns_out = table.width(),
        duration_ms = start.elapsed().as_millis(),
        "file cleaned"
    );
    Ok(CleanResult {
        input: args.input.clone(),
        outputs,
        rows_in,
        rows_out: table.height(),
        columns_in,
        columns,
        report,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectResult> {
    let span = info_span!("inspect", input = %args.input.display());
    let _guard = span.enter();

    let table = read_csv_table(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let CleanOutcome { table, .. } = clean_table(table);

    let canonical = CanonicalColumns::resolve(&table);
    let roles = CanonicalRole::ALL
        .iter()
        .map(|role| (*role, canonical.get(*role).map(str::to_string)))
        .collect();
    let frame = to_dataframe(&table).context("build typed frame")?;
    Ok(InspectResult {
        input: args.input.clone(),
        rows: table.height(),
        roles,
        preview: frame.head(Some(args.rows)),
    })
}

fn cleaning_options(args: &CleanArgs) -> CleaningOptions {
    let parallelism = if args.sequential {
        Parallelism::Sequential
    } else {
        Parallelism::Columns
    };
    CleaningOptions::new()
        .with_sample_size(args.sample_size)
        .with_parallelism(parallelism)
        .with_drop_duplicate_rows(!args.keep_duplicate_rows)
}

/// `<stem>_clean.csv` in the input's directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "output".into(), |stem| stem.to_string_lossy());
    input.with_file_name(format!("{stem}_clean.csv"))
}

fn output_paths(args: &CleanArgs) -> CleanOutputs {
    let csv = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    let dir = csv.parent().map(Path::to_path_buf).unwrap_or_default();
    CleanOutputs {
        report_json: args
            .report_json
            .clone()
            .unwrap_or_else(|| dir.join(JSON_REPORT_NAME)),
        report_text: args
            .report_text
            .clone()
            .unwrap_or_else(|| dir.join(TEXT_REPORT_NAME)),
        csv,
    }
}

fn column_summaries(table: &Table, report: &CleaningReport) -> Vec<ColumnSummary> {
    table
        .columns()
        .iter()
        .map(|column| ColumnSummary {
            name: column.name.clone(),
            kind: column.kind(),
            missing: column.missing_count(),
            corrections: CleanCategory::ALL
                .iter()
                .filter_map(|category| report.count(*category, &column.name))
                .sum(),
        })
        .collect()
}
