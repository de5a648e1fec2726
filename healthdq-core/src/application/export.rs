// healthdq-core/src/application/export.rs
//
// USE CASE: cleaned re-serializations of the loaded table. The input table is never
// modified; each transform returns a new one with the same header and column order.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::domain::error::DomainError;
use crate::domain::table::{CellValue, Table};
use crate::error::HealthDqError;
use crate::infrastructure::adapters::csv_table::write_table;
use crate::infrastructure::fs::write_atomically;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportMode {
    /// Keep the first row of every duplicate group. An empty subset compares whole rows.
    DropDuplicates { subset: Vec<String> },
    /// Replace every missing cell with a text placeholder.
    FillMissing { placeholder: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub rows_written: usize,
    pub rows_removed: usize,
    pub cells_filled: usize,
}

pub fn drop_duplicates(table: &Table, subset: &[String]) -> Result<Table, HealthDqError> {
    let key_columns: Vec<usize> = if subset.is_empty() {
        (0..table.column_count()).collect()
    } else {
        subset
            .iter()
            .map(|name| {
                table
                    .column_names()
                    .position(|c| c == name.as_str())
                    .ok_or_else(|| DomainError::ColumnNotFound(name.clone()))
            })
            .collect::<Result<_, _>>()?
    };

    let columns = table.columns();
    let mut seen = HashSet::new();
    let keep: Vec<usize> = (0..table.row_count())
        .filter(|&row| {
            let key: Vec<_> = key_columns
                .iter()
                .map(|&c| columns[c].values()[row].key())
                .collect();
            seen.insert(key)
        })
        .collect();

    Ok(table.select_rows(&keep))
}

pub fn fill_missing(table: &Table, placeholder: &str) -> Table {
    table.map_cells(|cell| match cell {
        CellValue::Missing => CellValue::text(placeholder),
        other => other.clone(),
    })
}

#[instrument(skip(table), fields(rows = table.row_count()))]
pub fn export_table(
    table: &Table,
    mode: &ExportMode,
    output: &Path,
) -> Result<ExportOutcome, HealthDqError> {
    let missing_before: usize = table.columns().iter().map(|c| c.missing_count()).sum();

    let transformed = match mode {
        ExportMode::DropDuplicates { subset } => drop_duplicates(table, subset)?,
        ExportMode::FillMissing { placeholder } => fill_missing(table, placeholder),
    };

    write_atomically(output, |w| write_table(&transformed, w))?;

    let missing_after: usize = transformed.columns().iter().map(|c| c.missing_count()).sum();
    let outcome = ExportOutcome {
        path: output.to_path_buf(),
        rows_written: transformed.row_count(),
        rows_removed: table.row_count() - transformed.row_count(),
        cells_filled: missing_before.saturating_sub(missing_after),
    };
    info!(
        path = %output.display(),
        rows = outcome.rows_written,
        removed = outcome.rows_removed,
        filled = outcome.cells_filled,
        "Export written"
    );
    Ok(outcome)
}
