// healthdq-core/src/domain/quality/rules.rs

use std::fmt;

use serde::Serialize;

use super::count_duplicated;
use crate::domain::parsing::{as_datetime, as_int_like};
use crate::domain::table::{CellValue, Table};

pub const AGE_COLUMN: &str = "age";
pub const ADMISSION_COLUMN: &str = "admission_date";
pub const DISCHARGE_COLUMN: &str = "discharge_date";
pub const DEFAULT_IDENTIFIER_COLUMN: &str = "patient_id";

pub const MIN_AGE: i64 = 0;
pub const MAX_AGE: i64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    AgeRange,
    AdmissionBeforeDischarge,
    DuplicateIdentifier,
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleId::AgeRange => f.write_str("age_range"),
            RuleId::AdmissionBeforeDischarge => f.write_str("admission_before_discharge"),
            RuleId::DuplicateIdentifier => f.write_str("duplicate_identifier"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleViolation {
    pub rule: RuleId,
    pub affected_rows: usize,
    pub message: String,
}

/// The fixed, ordered set of domain rules.
///
/// Only the name of the identifier column can vary; the rules themselves do not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    identifier_column: String,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(DEFAULT_IDENTIFIER_COLUMN)
    }
}

impl RuleSet {
    pub fn new(identifier_column: impl Into<String>) -> Self {
        Self {
            identifier_column: identifier_column.into(),
        }
    }

    pub fn identifier_column(&self) -> &str {
        &self.identifier_column
    }

    /// Evaluates every rule in order. A rule whose columns are absent is skipped; a
    /// rule contributes at most one violation. An empty result means all rules passed.
    pub fn evaluate(&self, table: &Table) -> Vec<RuleViolation> {
        [
            age_rule(table),
            admission_discharge_rule(table),
            duplicate_identifier_rule(table, &self.identifier_column),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

pub fn check_rules(table: &Table) -> Vec<RuleViolation> {
    RuleSet::default().evaluate(table)
}

/// Missing, non-numeric, or outside [0, 120] after truncation.
pub fn is_invalid_age(cell: &CellValue) -> bool {
    if cell.is_missing() {
        return true;
    }
    match as_int_like(cell) {
        Some(age) => !(MIN_AGE..=MAX_AGE).contains(&age),
        None => true,
    }
}

fn age_rule(table: &Table) -> Option<RuleViolation> {
    let ages = table.column(AGE_COLUMN)?;
    let count = ages.values().iter().filter(|v| is_invalid_age(v)).count();
    violation(
        RuleId::AgeRange,
        count,
        format!(
            "{}: {} rows with invalid or missing age (must be {}-{})",
            AGE_COLUMN, count, MIN_AGE, MAX_AGE
        ),
    )
}

// A row is flagged only when both dates parse and admission is strictly later.
// A missing or unparseable discharge date is a pending stay, not an error.
fn admission_discharge_rule(table: &Table) -> Option<RuleViolation> {
    let admissions = table.column(ADMISSION_COLUMN)?;
    let discharges = table.column(DISCHARGE_COLUMN)?;

    let count = admissions
        .values()
        .iter()
        .zip(discharges.values())
        .filter(|(a, d)| match (as_datetime(a), as_datetime(d)) {
            (Some(admitted), Some(discharged)) => admitted > discharged,
            _ => false,
        })
        .count();

    violation(
        RuleId::AdmissionBeforeDischarge,
        count,
        format!(
            "admission/discharge: {} rows where {} > {}",
            count, ADMISSION_COLUMN, DISCHARGE_COLUMN
        ),
    )
}

// Missing identifiers carry no value, so they never form a duplicate group.
fn duplicate_identifier_rule(table: &Table, identifier: &str) -> Option<RuleViolation> {
    let ids = table.column(identifier)?;
    let count = count_duplicated(
        ids.values()
            .iter()
            .filter(|v| !v.is_missing())
            .map(CellValue::key),
    );
    violation(
        RuleId::DuplicateIdentifier,
        count,
        format!("duplicate {}: {} rows", identifier, count),
    )
}

fn violation(rule: RuleId, affected_rows: usize, message: String) -> Option<RuleViolation> {
    (affected_rows > 0).then_some(RuleViolation {
        rule,
        affected_rows,
        message,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::table::Column;

    fn floats(values: &[f64]) -> Vec<CellValue> {
        values.iter().map(|&v| CellValue::float(v)).collect()
    }

    fn texts(values: &[Option<&str>]) -> Vec<CellValue> {
        values
            .iter()
            .map(|v| v.map_or(CellValue::Missing, CellValue::text))
            .collect()
    }

    #[test]
    fn test_age_rule_counts_missing_and_out_of_range() {
        let table = Table::new(vec![Column::new(
            "age",
            floats(&[25.0, 30.0, f64::NAN, 45.0, 150.0, 40.0]),
        )])
        .unwrap();
        let violations = check_rules(&table);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, RuleId::AgeRange);
        assert_eq!(violations[0].affected_rows, 2);
        assert_eq!(
            violations[0].message,
            "age: 2 rows with invalid or missing age (must be 0-120)"
        );
    }

    #[test]
    fn test_age_rule_rejects_non_numeric_and_negative() {
        let table = Table::new(vec![Column::new(
            "age",
            texts(&[Some("unknown"), Some("-3"), Some("120"), Some("0"), Some("120.9")]),
        )])
        .unwrap();
        let violations = check_rules(&table);
        assert_eq!(violations[0].affected_rows, 2);
    }

    #[test]
    fn test_duplicate_identifier_counts_whole_groups() {
        let ids = [1, 2, 3, 3, 4, 5].map(CellValue::Integer).to_vec();
        let table = Table::new(vec![Column::new("patient_id", ids)]).unwrap();
        let violations = check_rules(&table);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, RuleId::DuplicateIdentifier);
        assert_eq!(violations[0].affected_rows, 2);
        assert_eq!(violations[0].message, "duplicate patient_id: 2 rows");
    }

    #[test]
    fn test_missing_identifiers_are_not_duplicates() {
        let ids = vec![CellValue::Missing, CellValue::Missing, CellValue::Integer(1)];
        let table = Table::new(vec![Column::new("patient_id", ids)]).unwrap();
        assert!(check_rules(&table).is_empty());
    }

    #[test]
    fn test_custom_identifier_column() {
        let ids = texts(&[Some("A1"), Some("A1"), Some("B2")]);
        let table = Table::new(vec![Column::new("mrn", ids)]).unwrap();
        assert!(check_rules(&table).is_empty());
        let violations = RuleSet::new("mrn").evaluate(&table);
        assert_eq!(violations[0].message, "duplicate mrn: 2 rows");
    }

    #[test]
    fn test_admission_after_discharge() {
        let table = Table::new(vec![
            Column::new("admission_date", texts(&[Some("2023-01-15")])),
            Column::new("discharge_date", texts(&[Some("2023-01-12")])),
        ])
        .unwrap();
        let violations = check_rules(&table);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, RuleId::AdmissionBeforeDischarge);
        assert_eq!(violations[0].affected_rows, 1);
        assert_eq!(
            violations[0].message,
            "admission/discharge: 1 rows where admission_date > discharge_date"
        );
    }

    #[test]
    fn test_same_day_discharge_is_valid() {
        let table = Table::new(vec![
            Column::new("admission_date", texts(&[Some("2023-01-15")])),
            Column::new("discharge_date", texts(&[Some("2023-01-15")])),
        ])
        .unwrap();
        assert!(check_rules(&table).is_empty());
    }

    #[test]
    fn test_pending_discharge_is_not_flagged() {
        let table = Table::new(vec![
            Column::new(
                "admission_date",
                texts(&[Some("2023-01-15"), Some("2023-02-01"), Some("2023-03-01")]),
            ),
            Column::new("discharge_date", texts(&[None, None, Some("soon")])),
        ])
        .unwrap();
        assert!(check_rules(&table).is_empty());
    }

    #[test]
    fn test_unparseable_admission_is_not_flagged() {
        let table = Table::new(vec![
            Column::new("admission_date", texts(&[Some("last tuesday"), Some("??")])),
            Column::new("discharge_date", texts(&[Some("2023-01-12"), Some("2023-01-12")])),
        ])
        .unwrap();
        assert!(check_rules(&table).is_empty());
    }

    #[test]
    fn test_day_first_dashed_dates_are_compared() {
        let table = Table::new(vec![
            Column::new("admission_date", texts(&[Some("15-01-2023"), Some("20230110")])),
            Column::new("discharge_date", texts(&[Some("12-01-2023"), Some("20230111")])),
        ])
        .unwrap();
        let violations = check_rules(&table);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].affected_rows, 1);
    }

    #[test]
    fn test_rules_skip_absent_columns() {
        let table = Table::new(vec![
            Column::new("admission_date", texts(&[Some("2023-01-15")])),
            Column::new("gender", texts(&[Some("F")])),
        ])
        .unwrap();
        assert!(check_rules(&table).is_empty());
        assert!(check_rules(&Table::empty()).is_empty());
    }

    #[test]
    fn test_violations_follow_rule_order() {
        let table = Table::new(vec![
            Column::new("patient_id", [7, 7].map(CellValue::Integer).to_vec()),
            Column::new("discharge_date", texts(&[Some("2023-01-01"), Some("2023-01-01")])),
            Column::new("admission_date", texts(&[Some("2023-02-01"), None])),
            Column::new("age", floats(&[200.0, 20.0])),
        ])
        .unwrap();
        let rules: Vec<_> = check_rules(&table).into_iter().map(|v| v.rule).collect();
        assert_eq!(
            rules,
            vec![
                RuleId::AgeRange,
                RuleId::AdmissionBeforeDischarge,
                RuleId::DuplicateIdentifier
            ]
        );
    }

    #[test]
    fn test_duplicate_identifiers_invariant_to_reordering() {
        let a = Table::new(vec![Column::new(
            "patient_id",
            [1, 2, 1, 3, 2].map(CellValue::Integer).to_vec(),
        )])
        .unwrap();
        let b = Table::new(vec![Column::new(
            "patient_id",
            [2, 2, 3, 1, 1].map(CellValue::Integer).to_vec(),
        )])
        .unwrap();
        assert_eq!(check_rules(&a), check_rules(&b));
    }
}
