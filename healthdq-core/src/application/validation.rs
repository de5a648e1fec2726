// healthdq-core/src/application/validation.rs
//
// USE CASE: one validation pass. Every engine reads the same immutable snapshot;
// none of them depends on another's output.

use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::domain::quality::{
    RuleSet, TypeExpectations, check_types, collect_advisories, duplicate_row_indices,
    profile_columns, quality_score, summarize,
};
use crate::domain::report::QualityReport;
use crate::domain::table::Table;
use crate::error::HealthDqError;
use crate::infrastructure::config::ProjectConfig;
use crate::ports::TableSource;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationOptions {
    pub type_checks: TypeExpectations,
    pub rules: RuleSet,
}

impl ValidationOptions {
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self {
            type_checks: config.type_expectations(),
            rules: config.rule_set(),
        }
    }
}

#[instrument(skip_all, fields(rows = table.row_count(), columns = table.column_count()))]
pub fn run_validation(table: &Table, options: &ValidationOptions) -> QualityReport {
    let start = Instant::now();

    let report = QualityReport {
        summary: summarize(table),
        duplicate_row_indices: duplicate_row_indices(table),
        columns: profile_columns(table),
        score: quality_score(table),
        type_checks: check_types(table, &options.type_checks),
        violations: options.rules.evaluate(table),
        advisories: collect_advisories(table),
    };

    debug!(
        score = report.score,
        violations = report.violations.len(),
        "Validation pass finished in {:.2?}",
        start.elapsed()
    );
    report
}

/// Loads a fresh snapshot from `source` and validates it.
pub fn validate_source(
    source: &dyn TableSource,
    options: &ValidationOptions,
) -> Result<QualityReport, HealthDqError> {
    let table = source.load()?;
    info!(source = %source.describe(), rows = table.row_count(), "Validating table");
    Ok(run_validation(&table, options))
}
