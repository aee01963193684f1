//! Data model for the CSV cleaning engine.
//!
//! - **cell**: `CellValue` (missing, text, number, timestamp)
//! - **table**: column-oriented `Table` of named `Column`s
//! - **report**: `CleaningReport` and its correction categories
//! - **options**: `CleaningOptions` for a cleaning run

pub mod cell;
pub mod error;
pub mod options;
pub mod report;
pub mod table;

pub use cell::{CellKey, CellValue, format_number};
pub use error::{ModelError, Result};
pub use options::{AcceptanceThresholds, CleaningOptions, Parallelism};
pub use report::{CleanCategory, CleaningReport, ColumnCounts, ColumnMapping, ColumnRename};
pub use table::{Column, ColumnKind, Table};
