// healthdq-core/src/domain/quality/profile.rs

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::table::{Column, ColumnType, Table};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub dtype: ColumnType,
    pub missing: usize,
    /// Percentage in [0, 100]; 0 for a table without rows.
    pub missing_pct: f64,
    pub non_missing: usize,
    /// Distinct non-missing values.
    pub unique_values: usize,
}

/// One summary per column, in column order.
pub fn profile_columns(table: &Table) -> Vec<ColumnSummary> {
    table.columns().iter().map(profile_column).collect()
}

fn profile_column(column: &Column) -> ColumnSummary {
    let rows = column.len();
    let missing = column.missing_count();
    let unique_values = column
        .values()
        .iter()
        .filter(|v| !v.is_missing())
        .map(|v| v.key())
        .collect::<HashSet<_>>()
        .len();

    ColumnSummary {
        column: column.name().to_string(),
        dtype: column.dtype(),
        missing,
        missing_pct: if rows == 0 {
            0.0
        } else {
            missing as f64 / rows as f64 * 100.0
        },
        non_missing: rows - missing,
        unique_values,
    }
}
