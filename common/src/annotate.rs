//! 上位結果との突き合わせ・並べ替え
//!
//! 全アプリ一覧の各レコードに上位入り判定とキーワード情報を付与し、
//! 上位入り→評価降順に並べたレポート行を作る。

use crate::error::{Error, Result};
use crate::types::{AppRecord, Dataset, FieldValue, RankedMatch};
use std::cmp::Ordering;
use std::collections::HashMap;

/// 説明プレビューの既定文字数
pub const PREVIEW_CHARS: usize = 200;

/// 切り詰め時に付与する記号
pub const ELLIPSIS: &str = "...";

/// キーワード連結の区切り
pub const KEYWORD_SEPARATOR: &str = ", ";

/// レポート1行分
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedRow {
    pub app_id: String,
    pub app_name: String,
    pub category: String,
    /// 元の評価値（並べ替え用の補正は反映しない）
    pub rating: Option<FieldValue>,
    pub one_liner: String,
    pub in_top_10: bool,
    pub matched_keywords: String,
    pub relevance_score: Option<FieldValue>,
    pub match_reason: String,
    pub description_preview: String,
}

impl AnnotatedRow {
    /// 上位入りフラグの出力表記
    pub fn membership_label(&self) -> &'static str {
        if self.in_top_10 {
            "YES"
        } else {
            "NO"
        }
    }

    /// 並べ替えキー（null・0・空文字は0扱い）
    pub fn rating_sort_key(&self) -> Result<f64> {
        match &self.rating {
            None => Ok(0.0),
            Some(v) if v.is_falsy() => Ok(0.0),
            Some(v) => v.as_f64().ok_or_else(|| Error::InvalidRating {
                id: self.app_id.clone(),
                value: v.to_string(),
            }),
        }
    }
}

/// ID → 上位結果のインデックス
///
/// 同一IDが複数ある場合はドキュメント順で最初のものを採用する。
#[derive(Debug)]
pub struct TopResultIndex<'a> {
    entries: HashMap<String, &'a RankedMatch>,
    duplicates: Vec<String>,
}

impl<'a> TopResultIndex<'a> {
    pub fn build(top_results: &'a [RankedMatch]) -> Self {
        let mut entries = HashMap::with_capacity(top_results.len());
        let mut duplicates = Vec::new();

        for result in top_results {
            let key = result.id.as_key();
            if entries.contains_key(&key) {
                duplicates.push(key);
            } else {
                entries.insert(key, result);
            }
        }

        Self {
            entries,
            duplicates,
        }
    }

    pub fn get(&self, id: &str) -> Option<&'a RankedMatch> {
        self.entries.get(id).copied()
    }

    /// 2件目以降として無視されたID
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }
}

/// 説明文のプレビュー（文字数で切り詰め）
///
/// # Examples
/// ```
/// use plant_report_common::annotate::preview;
///
/// assert_eq!(preview("short", 200), "short");
/// assert_eq!(preview("abcdef", 3), "abc...");
/// ```
pub fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

/// 1件のアプリに上位結果情報を付与
pub fn annotate_app(app: &AppRecord, index: &TopResultIndex<'_>, preview_chars: usize) -> AnnotatedRow {
    let app_id = app.id.as_key();
    let matched = index.get(&app_id);

    AnnotatedRow {
        app_name: app.name.clone(),
        category: app.category.clone(),
        rating: app.rating.clone(),
        one_liner: app.one_liner.clone(),
        in_top_10: matched.is_some(),
        matched_keywords: matched
            .map(|m| m.matched_keywords.join(KEYWORD_SEPARATOR))
            .unwrap_or_default(),
        relevance_score: matched.and_then(|m| m.relevance_score.clone()),
        match_reason: matched.map(|m| m.match_reason.clone()).unwrap_or_default(),
        description_preview: preview(&app.description, preview_chars),
        app_id,
    }
}

/// 上位入り→評価降順に安定ソート
///
/// 評価が数値として解釈できない行があればエラー。
pub fn sort_rows(rows: Vec<AnnotatedRow>) -> Result<Vec<AnnotatedRow>> {
    let mut keyed = rows
        .into_iter()
        .map(|row| row.rating_sort_key().map(|key| (key, row)))
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by(|(key_a, a), (key_b, b)| {
        b.in_top_10
            .cmp(&a.in_top_10)
            .then_with(|| key_b.partial_cmp(key_a).unwrap_or(Ordering::Equal))
    });

    Ok(keyed.into_iter().map(|(_, row)| row).collect())
}

/// 突き合わせ済みレポート
#[derive(Debug, Clone)]
pub struct Report {
    /// 並べ替え済みの行
    pub rows: Vec<AnnotatedRow>,
    /// 上位結果内で重複していたID
    pub duplicate_ids: Vec<String>,
}

impl Report {
    /// 突き合わせ→並べ替えまで一括実行
    pub fn build(dataset: &Dataset, preview_chars: usize) -> Result<Self> {
        let index = TopResultIndex::build(&dataset.top_results);

        let rows = dataset
            .all_apps
            .iter()
            .map(|app| annotate_app(app, &index, preview_chars))
            .collect();

        Ok(Self {
            rows: sort_rows(rows)?,
            duplicate_ids: index.duplicates().to_vec(),
        })
    }

    pub fn member_count(&self) -> usize {
        self.rows.iter().filter(|r| r.in_top_10).count()
    }

    pub fn non_member_count(&self) -> usize {
        self.rows.len() - self.member_count()
    }

    /// 上位入り行を先頭から最大 `limit` 件
    pub fn top_members(&self, limit: usize) -> impl Iterator<Item = &AnnotatedRow> {
        self.rows.iter().filter(|r| r.in_top_10).take(limit)
    }
}
