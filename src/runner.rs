//! レポート生成の一連の流れ
//!
//! 読み込み → 件数表示 → 突き合わせ・並べ替え → CSV出力 → サマリー表示

use crate::config::Config;
use crate::error::Result;
use crate::{export, loader, summary};
use plant_report_common::Report;
use std::io::Write;

/// レポートを生成し、進捗とサマリーを `out` に書き出す
pub fn run_report<W: Write>(config: &Config, out: &mut W) -> Result<Report> {
    let dataset = loader::load_dataset(&config.input_path)?;
    summary::write_load_counts(out, &dataset)?;

    let report = Report::build(&dataset, config.preview_chars)?;
    for id in &report.duplicate_ids {
        tracing::warn!(id = %id, "上位結果に重複IDがあります（最初のエントリを採用）");
    }
    tracing::debug!(
        members = report.member_count(),
        non_members = report.non_member_count(),
        "突き合わせ完了"
    );

    export::export_report(&report, &config.output_path)?;
    summary::write_summary(out, &report, &config.output_path, config.summary_limit)?;

    Ok(report)
}
