pub mod csv;

use crate::error::Result;
use plant_report_common::Report;
use std::path::Path;

pub fn export_report(report: &Report, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    csv::write_csv(&report.rows, output_path)?;

    tracing::debug!(
        path = %output_path.display(),
        rows = report.rows.len(),
        "CSVを書き出しました"
    );

    Ok(())
}
