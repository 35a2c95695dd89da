//! 入力ドキュメントパーサー
//!
//! 検索結果JSONから `all_plant_apps` と `top_10_results` を取り出し、
//! 各レコードを型付きで検証する

use crate::error::{Error, Result};
use crate::types::{AppRecord, Dataset, RankedMatch};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// 全アプリ一覧のキー
pub const ALL_APPS_KEY: &str = "all_plant_apps";

/// 上位検索結果のキー
pub const TOP_RESULTS_KEY: &str = "top_10_results";

/// 検索結果JSONをパース
///
/// # Arguments
/// * `json` - 入力ドキュメント文字列
///
/// # Returns
/// * `Ok(Dataset)` - 両コレクションの全レコードが有効
/// * `Err` - JSON不正、キー欠落、レコードのフィールド欠落
///
/// # Examples
/// ```
/// use plant_report_common::parse_dataset;
///
/// let json = r#"{"all_plant_apps": [], "top_10_results": []}"#;
/// let dataset = parse_dataset(json).unwrap();
/// assert!(dataset.all_apps.is_empty());
/// ```
pub fn parse_dataset(json: &str) -> Result<Dataset> {
    let doc: Value = serde_json::from_str(json)?;

    let all_apps: Vec<AppRecord> = parse_collection(&doc, ALL_APPS_KEY)?;
    let top_results: Vec<RankedMatch> = parse_collection(&doc, TOP_RESULTS_KEY)?;

    Ok(Dataset {
        all_apps,
        top_results,
    })
}

/// 指定キーの配列を1件ずつ型変換
fn parse_collection<T: DeserializeOwned>(doc: &Value, key: &str) -> Result<Vec<T>> {
    let items = doc
        .get(key)
        .ok_or_else(|| Error::MissingKey(key.to_string()))?
        .as_array()
        .ok_or_else(|| Error::InvalidCollection(key.to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            T::deserialize(item).map_err(|e| Error::InvalidRecord {
                collection: key.to_string(),
                index,
                message: e.to_string(),
            })
        })
        .collect()
}
