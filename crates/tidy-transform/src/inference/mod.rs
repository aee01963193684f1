//! Column-wide type inference.
//!
//! Date and numeric re-typing are two-phase: a full candidate column is
//! built first, then committed only if the fraction of converted cells
//! clears the acceptance threshold. A rejected candidate is dropped whole.

mod dates;
mod numbers;

pub use dates::{DATE_KEYWORDS, DateInference, infer_dates, is_forced_date};
pub use numbers::{
    FORCED_NUMERIC_KEYWORDS, NumericInference, TEXT_KEYWORDS, infer_numbers, is_forced_numeric,
};

use tidy_model::CellValue;

/// A fully converted column awaiting the acceptance decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub values: Vec<CellValue>,
    /// Cells that converted successfully.
    pub converted: usize,
    /// Non-missing cells that were attempted.
    pub attempted: usize,
}

impl Candidate {
    pub fn ratio(&self) -> f64 {
        if self.attempted == 0 {
            0.0
        } else {
            self.converted as f64 / self.attempted as f64
        }
    }

    pub fn is_accepted(&self, threshold: f64) -> bool {
        self.attempted > 0 && self.ratio() >= threshold
    }
}

/// Fraction of the sample matching `hit`. Zero for an empty sample.
pub(crate) fn hit_rate(sample: &[&str], hit: impl Fn(&str) -> bool) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    let hits = sample.iter().filter(|value| hit(value)).count();
    hits as f64 / sample.len() as f64
}
