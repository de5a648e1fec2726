// healthdq-core/src/application/mod.rs

pub mod export;
pub mod validation;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use healthdq_core::application::{run_validation, export_table};`

pub use export::{ExportMode, ExportOutcome, drop_duplicates, export_table, fill_missing};
pub use validation::{ValidationOptions, run_validation, validate_source};
