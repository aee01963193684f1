//! Configuration options for a cleaning run.

use serde::{Deserialize, Serialize};

/// Acceptance thresholds for column-wide type coercion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcceptanceThresholds {
    /// Minimum converted fraction when the column name forces the type.
    pub forced: f64,
    /// Minimum converted fraction when the type was inferred from content.
    pub inferred: f64,
    /// Minimum fraction of sampled values that must look like the type
    /// before an unforced column is attempted at all.
    pub sample_hit_rate: f64,
}

impl Default for AcceptanceThresholds {
    fn default() -> Self {
        Self {
            forced: 0.3,
            inferred: 0.6,
            sample_hit_rate: 0.3,
        }
    }
}

impl AcceptanceThresholds {
    pub fn for_column(&self, forced: bool) -> f64 {
        if forced { self.forced } else { self.inferred }
    }
}

/// How the per-column transform chain is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Parallelism {
    /// One column after another on the calling thread.
    Sequential,
    /// Columns in parallel on the rayon pool.
    #[default]
    Columns,
}

/// Options controlling a cleaning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningOptions {
    /// Number of leading non-missing values inspected for content detection.
    pub sample_size: usize,

    pub thresholds: AcceptanceThresholds,

    pub parallelism: Parallelism,

    /// Remove exact duplicate rows after column cleaning.
    pub drop_duplicate_rows: bool,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            sample_size: 200,
            thresholds: AcceptanceThresholds::default(),
            parallelism: Parallelism::default(),
            drop_duplicate_rows: true,
        }
    }
}

impl CleaningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size.max(1);
        self
    }

    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    pub fn with_drop_duplicate_rows(mut self, enable: bool) -> Self {
        self.drop_duplicate_rows = enable;
        self
    }
}
