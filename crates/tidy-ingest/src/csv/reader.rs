//! CSV reading into raw-text tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tidy_model::{ModelError, Table};

use crate::error::{IngestError, Result};

/// Reads a CSV file into a raw-text [`Table`].
///
/// The first record is the header. Empty fields become missing cells, every
/// other field is kept verbatim (no trimming, no type coercion) so the
/// cleaning stages can see the original representation.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_csv_reader(file, path)
}

/// Reads CSV data from any reader. `source` is only used in error messages.
pub fn read_csv_reader<R: Read>(reader: R, source: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::from_csv(source.to_path_buf(), e))?
        .iter()
        .enumerate()
        .map(|(idx, header)| clean_header(idx, header))
        .collect();

    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: source.to_path_buf(),
        });
    }
    if headers.iter().all(|header| header.trim().is_empty()) {
        return Err(IngestError::NoHeaderDetected {
            path: source.to_path_buf(),
        });
    }

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::from_csv(source.to_path_buf(), e))?;
        let row = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    None
                } else {
                    Some(field.to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    tracing::debug!(
        source = %source.display(),
        columns = headers.len(),
        rows = rows.len(),
        "loaded csv"
    );

    Table::from_rows(&headers, rows).map_err(|err| match err {
        ModelError::RaggedRow {
            row,
            expected,
            found,
        } => IngestError::RaggedRow {
            path: source.to_path_buf(),
            // header is line 1
            line: row as u64 + 2,
            expected,
            found,
        },
        other => IngestError::CsvParse {
            path: source.to_path_buf(),
            line: 0,
            message: other.to_string(),
        },
    })
}

fn clean_header(idx: usize, raw: &str) -> String {
    if idx == 0 {
        raw.trim_start_matches('\u{feff}').to_string()
    } else {
        raw.to_string()
    }
}
