//! Heuristic cleaning engine for dirty CSV exports.
//!
//! A raw-text [`Table`](tidy_model::Table) goes through one pass:
//!
//! 1. header normalization and duplicate-column merge
//! 2. per column: null placeholders, whitespace, keyword rules (email,
//!    phone, code, name, tag, status), date inference, numeric inference
//! 3. exact duplicate row removal
//! 4. report assembly
//!
//! ```
//! use tidy_model::{CleanCategory, Column, Table};
//! use tidy_transform::clean_table;
//!
//! let table = Table::new(vec![
//!     Column::from_raw("Unit Price", vec![Some("$2.50"), Some("N/A")]),
//! ])
//! .unwrap();
//! let outcome = clean_table(table);
//!
//! let price = outcome.table.column("unit_price").unwrap();
//! assert_eq!(price.values[0].as_number(), Some(2.5));
//! assert_eq!(outcome.report.count(CleanCategory::NullsNormalized, "unit_price"), Some(1));
//! ```

pub mod canonical;
pub mod column;
pub mod dedupe;
pub mod frame;
pub mod inference;
pub mod merge;
pub mod normalization;
pub mod pipeline;
pub mod report;

pub use canonical::{CanonicalColumns, CanonicalRole};
pub use column::{ColumnDelta, clean_column};
pub use dedupe::remove_duplicate_rows;
pub use frame::to_dataframe;
pub use merge::merge_duplicate_columns;
pub use pipeline::{CleanOutcome, clean_table, clean_table_with_options};
pub use report::ReportBuilder;
