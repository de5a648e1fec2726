// healthdq-core/src/domain/mod.rs

pub mod error;
pub mod parsing;
pub mod quality;
pub mod report;
pub mod table;

pub use error::DomainError;
pub use report::QualityReport;
pub use table::{CellValue, Column, ColumnType, Table};
