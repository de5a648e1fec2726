// healthdq-core/src/domain/quality/summary.rs

use serde::Serialize;

use std::collections::HashMap;

use super::count_duplicated;
use crate::domain::table::Table;

/// Whole-table counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub columns: usize,
    pub missing_values: usize,
    /// Rows identical to at least one other row, every member of a group included.
    pub duplicate_rows: usize,
}

pub fn summarize(table: &Table) -> DatasetSummary {
    DatasetSummary {
        rows: table.row_count(),
        columns: table.column_count(),
        missing_values: table.columns().iter().map(|c| c.missing_count()).sum(),
        duplicate_rows: duplicate_row_count(table),
    }
}

/// Missing cells compare equal to each other here: two rows that are both blank in
/// the same column are still duplicates.
pub fn duplicate_row_count(table: &Table) -> usize {
    if table.column_count() == 0 {
        return 0;
    }
    count_duplicated(table.row_keys())
}

/// Zero-based indices of every row that belongs to a duplicate group, ascending.
pub fn duplicate_row_indices(table: &Table) -> Vec<usize> {
    if table.column_count() == 0 {
        return Vec::new();
    }
    let keys = table.row_keys();
    let mut groups: HashMap<_, usize> = HashMap::new();
    for key in &keys {
        *groups.entry(key).or_default() += 1;
    }
    keys.iter()
        .enumerate()
        .filter(|(_, key)| groups.get(key).is_some_and(|&n| n > 1))
        .map(|(row, _)| row)
        .collect()
}
