// healthdq-core/src/domain/quality/score.rs

use super::summary::summarize;
use crate::domain::table::Table;

/// Score of a table without cells; nothing is missing and nothing is duplicated.
pub const EMPTY_TABLE_SCORE: f64 = 100.0;

const MISSING_WEIGHT: f64 = 70.0;
const DUPLICATE_WEIGHT: f64 = 30.0;

/// Heuristic quality score in [0, 100], rounded to 2 decimals.
///
/// `100 - (missing_ratio * 70 + dup_ratio * 30)` where `missing_ratio` is the share of
/// missing cells and `dup_ratio` the share of rows belonging to a duplicate group.
pub fn quality_score(table: &Table) -> f64 {
    if table.cell_count() == 0 {
        return EMPTY_TABLE_SCORE;
    }

    let summary = summarize(table);
    let missing_ratio = summary.missing_values as f64 / table.cell_count() as f64;
    let dup_ratio = summary.duplicate_rows as f64 / summary.rows as f64;

    score_from_ratios(missing_ratio, dup_ratio)
}

pub fn score_from_ratios(missing_ratio: f64, dup_ratio: f64) -> f64 {
    let raw = 100.0 - (missing_ratio * MISSING_WEIGHT + dup_ratio * DUPLICATE_WEIGHT);
    round2(raw.max(0.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::table::{CellValue, Column};

    fn single_column(values: Vec<CellValue>) -> Table {
        Table::new(vec![Column::new("v", values)]).unwrap()
    }

    #[test]
    fn test_empty_table_score() {
        assert_eq!(quality_score(&Table::empty()), EMPTY_TABLE_SCORE);
        let rowless = Table::new(vec![Column::new("age", vec![])]).unwrap();
        assert_eq!(quality_score(&rowless), EMPTY_TABLE_SCORE);
    }

    #[test]
    fn test_clean_table_scores_100() {
        let t = single_column(vec![CellValue::Integer(1), CellValue::Integer(2)]);
        assert_eq!(quality_score(&t), 100.0);
    }

    #[test]
    fn test_score_is_rounded() {
        // 1 missing out of 3 cells, no duplicates: 100 - 70/3 = 76.666...
        let t = single_column(vec![
            CellValue::Integer(1),
            CellValue::Integer(2),
            CellValue::Missing,
        ]);
        assert_eq!(quality_score(&t), 76.67);
    }

    #[test]
    fn test_fully_degraded_table_clamps_at_zero() {
        let t = single_column(vec![CellValue::Missing, CellValue::Missing]);
        // missing_ratio 1.0, dup_ratio 1.0 -> 100 - 100 = 0
        assert_eq!(quality_score(&t), 0.0);
        assert_eq!(score_from_ratios(2.0, 1.0), 0.0);
    }

    #[test]
    fn test_score_non_increasing_with_missing() {
        let mut values: Vec<CellValue> = (0..10).map(CellValue::Integer).collect();
        let mut previous = quality_score(&single_column(values.clone()));
        for i in 0..10 {
            values[i] = CellValue::Missing;
            let current = quality_score(&single_column(values.clone()));
            assert!(current <= previous, "{current} > {previous}");
            assert!((0.0..=100.0).contains(&current));
            previous = current;
        }
    }

    #[test]
    fn test_score_non_increasing_with_duplicates() {
        let mut values: Vec<CellValue> = (0..10).map(CellValue::Integer).collect();
        let mut previous = quality_score(&single_column(values.clone()));
        for i in 1..10 {
            values[i] = CellValue::Integer(0);
            let current = quality_score(&single_column(values.clone()));
            assert!(current <= previous, "{current} > {previous}");
            previous = current;
        }
    }
}
