// healthdq-core/src/infrastructure/adapters/csv_table.rs
//
// Table Loader for CSV sources. Each field is resolved exactly once here: missing
// markers become `CellValue::Missing`, then every column gets one logical type.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::domain::parsing::parse_iso_datetime;
use crate::domain::table::{CellValue, Column, Table};
use crate::error::HealthDqError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::TableSource;

/// Field contents read as "no value", compared after trimming.
pub const DEFAULT_MISSING_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "NULL", "null", "None", "#N/A", "<NA>",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: u8,
    pub missing_markers: Vec<String>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            missing_markers: DEFAULT_MISSING_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl CsvOptions {
    pub fn with_missing_markers(mut self, markers: Vec<String>) -> Self {
        self.missing_markers = markers;
        self
    }

    fn is_missing(&self, field: &str) -> bool {
        let field = field.trim();
        self.missing_markers.iter().any(|m| m == field)
    }
}

#[derive(Debug, Clone)]
pub struct CsvTableLoader {
    path: PathBuf,
    options: CsvOptions,
}

impl CsvTableLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            options: CsvOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CsvOptions) -> Self {
        self.options = options;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses a CSV stream whose first record is the header row.
    pub fn read<R: Read>(reader: R, options: &CsvOptions) -> Result<Table, HealthDqError> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
        let mut fields: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];

        for record in rdr.records() {
            let record = record?;
            for (column, field) in fields.iter_mut().zip(record.iter()) {
                column.push((!options.is_missing(field)).then(|| field.to_string()));
            }
        }

        let columns = headers
            .into_iter()
            .zip(fields)
            .map(|(name, raw)| resolve_column(name, raw))
            .collect();

        Ok(Table::new(columns)?)
    }
}

impl TableSource for CsvTableLoader {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Table, HealthDqError> {
        let file = File::open(&self.path)?;
        let table = Self::read(file, &self.options)?;
        info!(
            rows = table.row_count(),
            columns = table.column_count(),
            "CSV loaded"
        );
        Ok(table)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// Column type inference, narrowest first: integers, numbers, ISO dates, text.
// A column without any value stays all-missing.
fn resolve_column(name: String, raw: Vec<Option<String>>) -> Column {
    let present = || raw.iter().flatten().map(|s| s.trim());

    let values: Vec<CellValue> = if present().all(|s| s.parse::<i64>().is_ok()) {
        raw.iter()
            .map(|f| match f.as_deref().map(str::trim).map(str::parse::<i64>) {
                Some(Ok(i)) => CellValue::Integer(i),
                _ => CellValue::Missing,
            })
            .collect()
    } else if present().all(|s| s.parse::<f64>().is_ok()) {
        raw.iter()
            .map(|f| match f.as_deref().map(str::trim).map(str::parse::<f64>) {
                Some(Ok(v)) => CellValue::float(v),
                _ => CellValue::Missing,
            })
            .collect()
    } else if present().all(|s| parse_iso_datetime(s).is_some()) {
        raw.iter()
            .map(|f| {
                f.as_deref()
                    .and_then(parse_iso_datetime)
                    .map_or(CellValue::Missing, CellValue::Date)
            })
            .collect()
    } else {
        raw.into_iter()
            .map(|f| f.map_or(CellValue::Missing, CellValue::Text))
            .collect()
    };

    let column = Column::new(name, values);
    debug!(column = column.name(), dtype = %column.dtype(), "Column resolved");
    column
}

/// Serializes a table as CSV: header row, then one record per row, same column order.
/// Missing cells are written as empty fields.
pub fn write_table<W: Write>(table: &Table, writer: W) -> Result<(), InfrastructureError> {
    let mut wtr = csv::Writer::from_writer(writer);
    if table.column_count() > 0 {
        wtr.write_record(table.column_names())?;
        for row in 0..table.row_count() {
            wtr.write_record(table.columns().iter().map(|c| c.values()[row].to_string()))?;
        }
    }
    wtr.flush()?;
    Ok(())
}
