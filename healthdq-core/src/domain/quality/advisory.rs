// healthdq-core/src/domain/quality/advisory.rs
//
// Informational notes. Unlike rule violations they do not indicate bad data.

use serde::Serialize;

use crate::domain::table::Table;

pub const LAB_VALUE_COLUMN: &str = "lab_value";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub column: String,
    pub message: String,
}

pub fn collect_advisories(table: &Table) -> Vec<Advisory> {
    pending_lab_results(table).into_iter().collect()
}

// Missing lab values usually mean the test has not been run yet.
fn pending_lab_results(table: &Table) -> Option<Advisory> {
    let missing = table.column(LAB_VALUE_COLUMN)?.missing_count();
    (missing > 0).then(|| Advisory {
        column: LAB_VALUE_COLUMN.to_string(),
        message: format!(
            "{}: {} rows missing (may be tests not yet done)",
            LAB_VALUE_COLUMN, missing
        ),
    })
}
