// healthdq-core/src/infrastructure/adapters/demo.rs
//
// Built-in six-row admissions dataset. It trips every rule once so a first-time user
// sees what a report with violations looks like.

use chrono::NaiveDate;

use crate::domain::table::{CellValue, Column, Table};
use crate::error::HealthDqError;
use crate::ports::TableSource;

#[derive(Debug, Clone, Copy, Default)]
pub struct DemoTable;

impl TableSource for DemoTable {
    fn load(&self) -> Result<Table, HealthDqError> {
        demo_table()
    }

    fn describe(&self) -> String {
        "demo dataset".to_string()
    }
}

pub fn demo_table() -> Result<Table, HealthDqError> {
    let ids = [1, 2, 3, 3, 4, 5].map(CellValue::Integer).to_vec();
    let ages = [25.0, 30.0, f64::NAN, 45.0, 150.0, 40.0]
        .map(CellValue::float)
        .to_vec();
    let genders = [Some("F"), Some("M"), Some("F"), Some("F"), Some("M"), None]
        .map(|g| g.map_or(CellValue::Missing, CellValue::text))
        .to_vec();
    let admissions = [
        Some("2023-01-01"),
        Some("2023-02-02"),
        Some("2023-02-03"),
        Some("2023-01-15"),
        Some("2023-03-01"),
        Some("2023-03-05"),
    ];
    let discharges = [
        Some("2023-01-10"),
        Some("2023-02-01"),
        Some("2023-02-05"),
        Some("2023-01-12"),
        Some("2023-03-02"),
        None,
    ];
    let labs = [4.5, f64::NAN, 7.8, 5.2, 6.1, 8.0]
        .map(CellValue::float)
        .to_vec();

    let table = Table::new(vec![
        Column::new("patient_id", ids),
        Column::new("age", ages),
        Column::new("gender", genders),
        Column::new("admission_date", dates(&admissions)?),
        Column::new("discharge_date", dates(&discharges)?),
        Column::new("lab_value", labs),
    ])?;
    Ok(table)
}

fn dates(raw: &[Option<&str>]) -> Result<Vec<CellValue>, HealthDqError> {
    raw.iter()
        .map(|d| match d {
            None => Ok(CellValue::Missing),
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|day| day.and_hms_opt(0, 0, 0))
                .map(CellValue::Date)
                .ok_or_else(|| HealthDqError::InternalError(format!("bad demo date '{}'", s))),
        })
        .collect()
}
