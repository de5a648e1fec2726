// healthdq-core/src/domain/report.rs

use serde::Serialize;

use crate::domain::quality::{
    Advisory, ColumnSummary, DatasetSummary, RuleViolation, TypeCheckReport,
};

/// Everything one validation pass derives from a table. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub summary: DatasetSummary,
    /// Zero-based indices of the rows counted in `summary.duplicate_rows`.
    pub duplicate_row_indices: Vec<usize>,
    pub columns: Vec<ColumnSummary>,
    pub score: f64,
    pub type_checks: TypeCheckReport,
    pub violations: Vec<RuleViolation>,
    pub advisories: Vec<Advisory>,
}

impl QualityReport {
    pub fn all_rules_passed(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
