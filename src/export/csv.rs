//! CSV出力
//!
//! ヘッダーは行が0件でも必ず出力する。改行はCRLF、引用は必要時のみ。

use crate::error::Result;
use plant_report_common::types::display_optional;
use plant_report_common::AnnotatedRow;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// 出力列（この順で書き出す）
pub const HEADERS: [&str; 10] = [
    "app_id",
    "app_name",
    "category",
    "rating",
    "one_liner",
    "in_top_10",
    "matched_keywords",
    "relevance_score",
    "match_reason",
    "description_preview",
];

#[derive(Serialize)]
struct CsvRow<'a> {
    app_id: &'a str,
    app_name: &'a str,
    category: &'a str,
    rating: String,
    one_liner: &'a str,
    in_top_10: &'static str,
    matched_keywords: &'a str,
    relevance_score: String,
    match_reason: &'a str,
    description_preview: &'a str,
}

impl<'a> From<&'a AnnotatedRow> for CsvRow<'a> {
    fn from(r: &'a AnnotatedRow) -> Self {
        Self {
            app_id: &r.app_id,
            app_name: &r.app_name,
            category: &r.category,
            rating: display_optional(r.rating.as_ref()),
            one_liner: &r.one_liner,
            in_top_10: r.membership_label(),
            matched_keywords: &r.matched_keywords,
            relevance_score: display_optional(r.relevance_score.as_ref()),
            match_reason: &r.match_reason,
            description_preview: &r.description_preview,
        }
    }
}

/// 任意のWriterへ書き出し
pub fn write_rows<W: Write>(rows: &[AnnotatedRow], writer: W) -> Result<()> {
    let mut wtr = ::csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(::csv::Terminator::CRLF)
        .quote_style(::csv::QuoteStyle::Necessary)
        .from_writer(writer);

    wtr.write_record(HEADERS)?;
    for row in rows {
        wtr.serialize(CsvRow::from(row))?;
    }
    wtr.flush()?;

    Ok(())
}

/// ファイルへ書き出し
pub fn write_csv(rows: &[AnnotatedRow], output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path)?;
    write_rows(rows, std::io::BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use plant_report_common::FieldValue;

    fn row(id: &str, in_top_10: bool) -> AnnotatedRow {
        AnnotatedRow {
            app_id: id.to_string(),
            app_name: format!("App {}", id),
            category: "Lifestyle".to_string(),
            rating: Some(FieldValue::from(4.5)),
            one_liner: "Water your plants".to_string(),
            in_top_10,
            matched_keywords: if in_top_10 { "water, care".to_string() } else { String::new() },
            relevance_score: in_top_10.then(|| FieldValue::from(0.9)),
            match_reason: if in_top_10 { "keyword".to_string() } else { String::new() },
            description_preview: "Short".to_string(),
        }
    }

    fn render(rows: &[AnnotatedRow]) -> String {
        let mut buf = Vec::new();
        write_rows(rows, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_written_for_empty_rows() {
        let out = render(&[]);
        assert_eq!(out, format!("{}\r\n", HEADERS.join(",")));
    }

    #[test]
    fn test_member_and_non_member_rows() {
        let out = render(&[row("1", true), row("2", false)]);
        let lines: Vec<&str> = out.split("\r\n").collect();

        assert_eq!(lines[1], "1,App 1,Lifestyle,4.5,Water your plants,YES,\"water, care\",0.9,keyword,Short");
        assert_eq!(lines[2], "2,App 2,Lifestyle,4.5,Water your plants,NO,,,,Short");
    }

    #[test]
    fn test_quotes_and_newlines_escaped() {
        let mut r = row("3", false);
        r.app_name = "Say \"hi\"".to_string();
        r.description_preview = "line1\nline2".to_string();
        let out = render(&[r]);

        assert!(out.contains("\"Say \"\"hi\"\"\""));
        assert!(out.contains("\"line1\nline2\""));
    }

    #[test]
    fn test_null_rating_written_empty() {
        let mut r = row("4", false);
        r.rating = None;
        let out = render(&[r]);
        assert!(out.contains("4,App 4,Lifestyle,,Water"));
    }
}
