//! コンソールサマリー
//!
//! 件数と上位入りアプリの一覧を標準出力向けに整形する。

use plant_report_common::types::display_optional;
use plant_report_common::{Dataset, Report};
use std::io::{self, Write};
use std::path::Path;

/// 読み込み直後の件数
pub fn write_load_counts<W: Write>(out: &mut W, dataset: &Dataset) -> io::Result<()> {
    writeln!(out, "Total plant apps found: {}", dataset.all_apps.len())?;
    writeln!(out, "Top 10 results: {}", dataset.top_results.len())?;
    Ok(())
}

/// CSV出力後のサマリー
pub fn write_summary<W: Write>(
    out: &mut W,
    report: &Report,
    output_path: &Path,
    limit: usize,
) -> io::Result<()> {
    writeln!(out, "\nCSV file created: {}", output_path.display())?;
    writeln!(out, "\nApps in top 10: {}", report.member_count())?;
    writeln!(out, "Apps not in top 10: {}", report.non_member_count())?;

    writeln!(out, "\n=== TOP 10 ALGORITHM RESULTS ===")?;
    for (i, row) in report.top_members(limit).enumerate() {
        writeln!(out, "{:2}. {}", i + 1, row.app_name)?;
        writeln!(
            out,
            "    Category: {} | Rating: {}",
            row.category,
            display_optional(row.rating.as_ref())
        )?;
        writeln!(out, "    Keywords: {}", row.matched_keywords)?;
        writeln!(out, "    One-liner: {}", row.one_liner)?;
        writeln!(out)?;
    }

    Ok(())
}
