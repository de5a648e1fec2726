// healthdq-core/src/infrastructure/adapters/mod.rs

pub mod csv_table;
pub mod demo;

pub use csv_table::{CsvOptions, CsvTableLoader, DEFAULT_MISSING_MARKERS, write_table};
pub use demo::{DemoTable, demo_table};
