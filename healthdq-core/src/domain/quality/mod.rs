// healthdq-core/src/domain/quality/mod.rs
//
// The validation engine. Every function here is a pure transform over an immutable
// `Table`: no errors, no state, no ordering dependency between checks.

pub mod advisory;
pub mod conformance;
pub mod profile;
pub mod rules;
pub mod score;
pub mod summary;

use std::collections::HashMap;
use std::hash::Hash;

pub use advisory::{Advisory, collect_advisories};
pub use conformance::{
    TypeCheckReport, TypeCheckResult, TypeCheckStatus, TypeExpectation, TypeExpectations,
    TypeTag, check_types,
};
pub use profile::{ColumnSummary, profile_columns};
pub use rules::{RuleId, RuleSet, RuleViolation, check_rules};
pub use score::{EMPTY_TABLE_SCORE, quality_score};
pub use summary::{DatasetSummary, duplicate_row_indices, summarize};

/// Number of items belonging to a group of two or more equal keys.
/// Every member of a duplicate group is counted, not only the extras.
pub(crate) fn count_duplicated<K, I>(keys: I) -> usize
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    let mut groups: HashMap<K, usize> = HashMap::new();
    for key in keys {
        *groups.entry(key).or_default() += 1;
    }
    groups.values().filter(|&&n| n > 1).sum()
}
