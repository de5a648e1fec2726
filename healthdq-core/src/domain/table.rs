// healthdq-core/src/domain/table.rs

use std::collections::HashSet;
use std::fmt;

use chrono::{NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};

use crate::domain::error::DomainError;

/// A single cell, resolved once by the loader.
///
/// `Missing` is an explicit marker: it is never confused with `0`, `""` or NaN.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Date(NaiveDateTime),
    Missing,
}

impl CellValue {
    /// Builds a float cell, mapping NaN onto the missing marker.
    pub fn float(value: f64) -> Self {
        if value.is_nan() {
            CellValue::Missing
        } else {
            CellValue::Float(value)
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Hashable identity of the cell, used for duplicate and distinct counting.
    pub fn key(&self) -> CellKey<'_> {
        match self {
            CellValue::Missing => CellKey::Missing,
            CellValue::Integer(i) => CellKey::Integer(*i),
            CellValue::Float(f) => float_key(*f),
            CellValue::Text(s) => CellKey::Text(s.as_str()),
            CellValue::Date(d) => CellKey::Date(*d),
        }
    }
}

// Integral floats share their key with the matching integer so 3 and 3.0 compare equal.
fn float_key(value: f64) -> CellKey<'static> {
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < I64_BOUND {
        CellKey::Integer(value as i64)
    } else if value.is_nan() {
        CellKey::Float(f64::NAN.to_bits())
    } else {
        CellKey::Float(value.to_bits())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Date(d) if d.time().num_seconds_from_midnight() == 0 => {
                write!(f, "{}", d.format("%Y-%m-%d"))
            }
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Missing => Ok(()),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Integer(i) => serializer.serialize_i64(*i),
            CellValue::Float(v) => serializer.serialize_f64(*v),
            CellValue::Missing => serializer.serialize_none(),
            other => serializer.collect_str(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKey<'a> {
    Missing,
    Integer(i64),
    Float(u64),
    Text(&'a str),
    Date(NaiveDateTime),
}

/// Logical type of a column, inferred from its non-missing cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Int,
    Float,
    Date,
    String,
    Mixed,
    /// No non-missing cell to infer from.
    Unknown,
}

impl ColumnType {
    pub fn infer(values: &[CellValue]) -> Self {
        let mut inferred = ColumnType::Unknown;
        for value in values {
            let current = match value {
                CellValue::Missing => continue,
                CellValue::Integer(_) => ColumnType::Int,
                CellValue::Float(_) => ColumnType::Float,
                CellValue::Text(_) => ColumnType::String,
                CellValue::Date(_) => ColumnType::Date,
            };
            inferred = match (inferred, current) {
                (ColumnType::Unknown, c) => c,
                (a, b) if a == b => a,
                (ColumnType::Int, ColumnType::Float) | (ColumnType::Float, ColumnType::Int) => {
                    ColumnType::Float
                }
                _ => return ColumnType::Mixed,
            };
        }
        inferred
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Int => "int",
            ColumnType::Float => "float",
            ColumnType::Date => "date",
            ColumnType::String => "string",
            ColumnType::Mixed => "mixed",
            ColumnType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<CellValue>,
}

impl Column {
    /// Raw `Float(NaN)` cells are folded into `Missing`.
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        let values = values
            .into_iter()
            .map(|v| match v {
                CellValue::Float(f) => CellValue::float(f),
                other => other,
            })
            .collect();
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn dtype(&self) -> ColumnType {
        ColumnType::infer(&self.values)
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }
}

/// Rectangular, immutable collection of named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Checks the table invariants: equal column lengths and unique names.
    pub fn new(columns: Vec<Column>) -> Result<Self, DomainError> {
        let rows = columns.first().map(Column::len).unwrap_or(0);

        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(DomainError::DuplicateColumn(column.name().to_string()));
            }
            if column.len() != rows {
                return Err(DomainError::RaggedTable {
                    column: column.name().to_string(),
                    expected: rows,
                    found: column.len(),
                });
            }
        }

        Ok(Self { columns, rows })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Cell-wise identity of every row, in row order.
    pub fn row_keys(&self) -> Vec<Vec<CellKey<'_>>> {
        (0..self.rows)
            .map(|row| self.columns.iter().map(|c| c.values[row].key()).collect())
            .collect()
    }

    /// Copies the given rows, in the given order, into a new table.
    pub fn select_rows(&self, rows: &[usize]) -> Table {
        let columns = self
            .columns
            .iter()
            .map(|c| {
                Column::new(
                    c.name(),
                    rows.iter().map(|&r| c.values[r].clone()).collect(),
                )
            })
            .collect();
        Table {
            columns,
            rows: rows.len(),
        }
    }

    /// Applies `f` to every cell, keeping the shape of the table.
    pub fn map_cells(&self, f: impl Fn(&CellValue) -> CellValue) -> Table {
        let columns = self
            .columns
            .iter()
            .map(|c| Column::new(c.name(), c.values.iter().map(&f).collect()))
            .collect();
        Table {
            columns,
            rows: self.rows,
        }
    }
}
