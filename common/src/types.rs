//! 入力データの型定義
//!
//! - AppRecord: `all_plant_apps` の1件
//! - RankedMatch: `top_10_results` の1件（キーワード・スコア付き）
//! - Dataset: 入力ドキュメント全体

use serde::{Deserialize, Deserializer};
use std::fmt;

/// アプリID（文字列・数値のどちらも可、比較は文字列化して行う）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Number(serde_json::Number),
    Text(String),
}

impl Identifier {
    /// 照合用の文字列キー
    pub fn as_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(n) => write!(f, "{}", n),
            Identifier::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier::Text(s.to_string())
    }
}

impl From<u64> for Identifier {
    fn from(n: u64) -> Self {
        Identifier::Number(n.into())
    }
}

/// 数値または文字列で渡される値（評価・関連度スコア）
///
/// 出力時はJSON上の表記をそのまま使う。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(serde_json::Number),
    Text(String),
}

impl FieldValue {
    /// 偽値（0、空文字）かどうか
    pub fn is_falsy(&self) -> bool {
        match self {
            FieldValue::Number(n) => n.as_f64().map(|v| v == 0.0).unwrap_or(false),
            FieldValue::Text(s) => s.is_empty(),
        }
    }

    /// 浮動小数点として解釈（前後の空白は無視）
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => n.as_f64(),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        serde_json::Number::from_f64(v)
            .map(FieldValue::Number)
            .unwrap_or_else(|| FieldValue::Text(v.to_string()))
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// null許容の値を文字列化（nullは空文字）
pub fn display_optional(value: Option<&FieldValue>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// キー必須・値はnull許容
fn required_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// nullをデフォルト値として扱う
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 全アプリ一覧の1件
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppRecord {
    pub id: Identifier,
    pub name: String,
    pub category: String,

    /// 評価（null可、キーは必須）
    #[serde(deserialize_with = "required_nullable")]
    pub rating: Option<FieldValue>,

    pub one_liner: String,
    pub description: String,
}

/// 上位検索結果の1件
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankedMatch {
    pub id: Identifier,

    /// キー省略時は空、nullは不正
    #[serde(default)]
    pub matched_keywords: Vec<String>,

    #[serde(default)]
    pub relevance_score: Option<FieldValue>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub match_reason: String,
}

/// 入力ドキュメント全体
#[derive(Debug, Clone)]
pub struct Dataset {
    pub all_apps: Vec<AppRecord>,
    pub top_results: Vec<RankedMatch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_key_number_and_text_match() {
        let a: Identifier = serde_json::from_str("42").unwrap();
        let b: Identifier = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(a.as_key(), "42");
        assert_eq!(a.as_key(), b.as_key());
        assert_ne!(a, b);
    }

    #[test]
    fn test_identifier_float_key() {
        let id: Identifier = serde_json::from_str("1.5").unwrap();
        assert_eq!(id.as_key(), "1.5");
    }

    #[test]
    fn test_field_value_display_keeps_json_form() {
        let v: FieldValue = serde_json::from_str("4.5").unwrap();
        assert_eq!(v.to_string(), "4.5");
        let v: FieldValue = serde_json::from_str("4").unwrap();
        assert_eq!(v.to_string(), "4");
        let v: FieldValue = serde_json::from_str("\"4.8\"").unwrap();
        assert_eq!(v.to_string(), "4.8");
    }

    #[test]
    fn test_field_value_falsy() {
        assert!(FieldValue::from(0.0).is_falsy());
        assert!(FieldValue::from("").is_falsy());
        assert!(!FieldValue::from("0").is_falsy());
        assert!(!FieldValue::from(3.2).is_falsy());
    }

    #[test]
    fn test_field_value_as_f64() {
        assert_eq!(FieldValue::from(" 4.25 ").as_f64(), Some(4.25));
        assert_eq!(FieldValue::from(3.5).as_f64(), Some(3.5));
        assert_eq!(FieldValue::from("n/a").as_f64(), None);
    }

    #[test]
    fn test_app_record_requires_rating_key() {
        let json = r#"{"id": 1, "name": "A", "category": "c", "one_liner": "o", "description": "d"}"#;
        let err = serde_json::from_str::<AppRecord>(json).unwrap_err();
        assert!(err.to_string().contains("rating"));
    }

    #[test]
    fn test_app_record_null_rating() {
        let json = r#"{"id": 1, "name": "A", "category": "c", "rating": null, "one_liner": "o", "description": "d"}"#;
        let app: AppRecord = serde_json::from_str(json).unwrap();
        assert!(app.rating.is_none());
    }

    #[test]
    fn test_ranked_match_optional_fields() {
        let m: RankedMatch = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert!(m.matched_keywords.is_empty());
        assert!(m.relevance_score.is_none());
        assert_eq!(m.match_reason, "");

        let m: RankedMatch =
            serde_json::from_str(r#"{"id": 3, "match_reason": null}"#).unwrap();
        assert_eq!(m.match_reason, "");
    }

    #[test]
    fn test_ranked_match_null_keywords_rejected() {
        let err = serde_json::from_str::<RankedMatch>(r#"{"id": 3, "matched_keywords": null}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid type: null"));
    }

    #[test]
    fn test_display_optional() {
        assert_eq!(display_optional(None), "");
        assert_eq!(display_optional(Some(&FieldValue::from(0.9))), "0.9");
    }
}
