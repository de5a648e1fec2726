// healthdq/src/render.rs
//
// Terminal rendering of a QualityReport.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use healthdq_core::domain::QualityReport;

fn grid(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Duplicate rows listed in the text report; the JSON output carries them all.
const DUPLICATE_PREVIEW: usize = 50;

pub fn render_report(origin: &str, report: &QualityReport) -> String {
    let mut out = format!("🩺 Data Quality Report: {}\n\n", origin);

    let mut summary = grid(vec!["Rows", "Columns", "Missing values", "Duplicate rows"]);
    summary.add_row(vec![
        report.summary.rows.to_string(),
        report.summary.columns.to_string(),
        report.summary.missing_values.to_string(),
        report.summary.duplicate_rows.to_string(),
    ]);
    out.push_str(&format!("{}\n\n", summary));
    out.push_str(&format!("📊 Quality score: {:.2} / 100\n\n", report.score));

    if !report.columns.is_empty() {
        let mut columns = grid(vec![
            "Column",
            "Type",
            "Missing",
            "Missing %",
            "Non-missing",
            "Unique",
        ]);
        for c in &report.columns {
            columns.add_row(vec![
                c.column.clone(),
                c.dtype.to_string(),
                c.missing.to_string(),
                format!("{:.1}", c.missing_pct),
                c.non_missing.to_string(),
                c.unique_values.to_string(),
            ]);
        }
        out.push_str(&format!("{}\n\n", columns));
    }

    if !report.duplicate_row_indices.is_empty() {
        let shown: Vec<String> = report
            .duplicate_row_indices
            .iter()
            .take(DUPLICATE_PREVIEW)
            .map(|row| row.to_string())
            .collect();
        let more = report.duplicate_row_indices.len().saturating_sub(shown.len());
        out.push_str(&format!("🔁 Duplicate rows: {}", shown.join(", ")));
        if more > 0 {
            out.push_str(&format!(" (+{} more)", more));
        }
        out.push_str("\n\n");
    }

    if !report.type_checks.is_empty() {
        let mut checks = grid(vec!["Column", "Expected", "Result"]);
        for r in report.type_checks.iter() {
            checks.add_row(vec![r.column.clone(), r.expected.clone(), r.status.to_string()]);
        }
        out.push_str(&format!("🔎 Type checks\n{}\n\n", checks));
    }

    out.push_str("📋 Rule checks\n");
    if report.all_rules_passed() {
        out.push_str("   ✅ All rules passed!\n");
    } else {
        for v in &report.violations {
            out.push_str(&format!("   ⚠️  {}\n", v.message));
        }
    }

    for a in &report.advisories {
        out.push_str(&format!("   ℹ️  {}\n", a.message));
    }

    out
}
