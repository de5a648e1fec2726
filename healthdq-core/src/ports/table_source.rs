// healthdq-core/src/ports/table_source.rs

// What the engine needs from a loader: one rectangular table, with every cell
// already resolved to a typed value or the missing marker. How the bytes are read
// (CSV file, upload buffer, built-in fixture) is the adapter's business.

use crate::domain::table::Table;
use crate::error::HealthDqError;

pub trait TableSource {
    /// Produces a fresh snapshot. Each call is independent of the previous one.
    fn load(&self) -> Result<Table, HealthDqError>;

    /// Human-readable origin, used in logs and report headers.
    fn describe(&self) -> String;
}
