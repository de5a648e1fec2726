// healthdq-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Column '{column}' has {found} rows, expected {expected}")]
    #[diagnostic(
        code(healthdq::domain::ragged_table),
        help("Every column of a table must hold the same number of rows.")
    )]
    RaggedTable {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("Duplicate column name: '{0}'")]
    #[diagnostic(
        code(healthdq::domain::duplicate_column),
        help("Rename one of the header fields so column names are unique.")
    )]
    DuplicateColumn(String),

    #[error("Column '{0}' not found in table")]
    #[diagnostic(code(healthdq::domain::column_not_found))]
    ColumnNotFound(String),
}
