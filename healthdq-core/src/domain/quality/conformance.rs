// healthdq-core/src/domain/quality/conformance.rs

use std::fmt;

use serde::Serialize;

use crate::domain::parsing::{as_datetime, as_int_like, as_number};
use crate::domain::table::{CellValue, Table};

/// Closed set of types a column can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Int,
    Float,
    Date,
}

impl TypeTag {
    /// Case-insensitive; `None` for anything outside the closed set.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "int" => Some(TypeTag::Int),
            "float" => Some(TypeTag::Float),
            "date" => Some(TypeTag::Date),
            _ => None,
        }
    }

    /// Whether `cell` parses as this type. Missing cells always conform.
    pub fn accepts(&self, cell: &CellValue) -> bool {
        if cell.is_missing() {
            return true;
        }
        match self {
            TypeTag::Int => as_int_like(cell).is_some(),
            TypeTag::Float => as_number(cell).is_some(),
            TypeTag::Date => as_datetime(cell).is_some(),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Int => f.write_str("int"),
            TypeTag::Float => f.write_str("float"),
            TypeTag::Date => f.write_str("date"),
        }
    }
}

/// One requested check: a column name and the raw type tag the user asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeExpectation {
    pub column: String,
    pub expected: String,
}

/// Ordered column -> type tag mapping.
///
/// Inserting a column twice keeps its first position and the latest tag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TypeExpectations(Vec<TypeExpectation>);

impl TypeExpectations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, expected: impl Into<String>) {
        let column = column.into();
        let expected = expected.into();
        match self.0.iter_mut().find(|e| e.column == column) {
            Some(existing) => existing.expected = expected,
            None => self.0.push(TypeExpectation { column, expected }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeExpectation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<C: Into<String>, T: Into<String>> FromIterator<(C, T)> for TypeExpectations {
    fn from_iter<I: IntoIterator<Item = (C, T)>>(iter: I) -> Self {
        let mut expectations = TypeExpectations::new();
        expectations.extend(iter);
        expectations
    }
}

impl<C: Into<String>, T: Into<String>> Extend<(C, T)> for TypeExpectations {
    fn extend<I: IntoIterator<Item = (C, T)>>(&mut self, iter: I) {
        for (column, expected) in iter {
            self.insert(column, expected);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TypeCheckStatus {
    /// The column is not part of the table.
    MissingColumn,
    /// The requested type tag is outside the closed set.
    NoCheckApplied,
    Checked { tag: TypeTag, nonconforming: usize },
}

impl TypeCheckStatus {
    pub fn nonconforming(&self) -> Option<usize> {
        match self {
            TypeCheckStatus::Checked { nonconforming, .. } => Some(*nonconforming),
            _ => None,
        }
    }
}

impl fmt::Display for TypeCheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeCheckStatus::MissingColumn => f.write_str("Missing column"),
            TypeCheckStatus::NoCheckApplied => f.write_str("No check applied"),
            TypeCheckStatus::Checked {
                tag: TypeTag::Date,
                nonconforming,
            } => write!(f, "{} values not parseable as date", nonconforming),
            TypeCheckStatus::Checked { tag, nonconforming } => {
                write!(f, "{} values not {}-like", nonconforming, tag)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCheckResult {
    pub column: String,
    pub expected: String,
    #[serde(flatten)]
    pub status: TypeCheckStatus,
}

/// Results of a conformance pass, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TypeCheckReport(Vec<TypeCheckResult>);

impl TypeCheckReport {
    pub fn get(&self, column: &str) -> Option<&TypeCheckStatus> {
        self.0.iter().find(|r| r.column == column).map(|r| &r.status)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeCheckResult> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Counts, for every requested column, the non-missing values that fail to parse as
/// the expected type. A failing cell is counted; it never aborts the check.
pub fn check_types(table: &Table, expectations: &TypeExpectations) -> TypeCheckReport {
    let results = expectations
        .iter()
        .map(|expectation| TypeCheckResult {
            column: expectation.column.clone(),
            expected: expectation.expected.clone(),
            status: check_column(table, &expectation.column, &expectation.expected),
        })
        .collect();
    TypeCheckReport(results)
}

fn check_column(table: &Table, column: &str, expected: &str) -> TypeCheckStatus {
    let Some(column) = table.column(column) else {
        return TypeCheckStatus::MissingColumn;
    };
    let Some(tag) = TypeTag::parse(expected) else {
        return TypeCheckStatus::NoCheckApplied;
    };

    let nonconforming = column.values().iter().filter(|v| !tag.accepts(v)).count();
    TypeCheckStatus::Checked { tag, nonconforming }
}
