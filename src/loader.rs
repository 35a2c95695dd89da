//! 検索結果JSONの読み込み

use crate::error::{ReportError, Result};
use plant_report_common::{parse_dataset, Dataset};
use std::path::Path;

/// 入力ファイルを読み込んでパース
///
/// ファイルはパース前に閉じる。失敗時は何も出力しない。
pub fn load_dataset(input_path: &Path) -> Result<Dataset> {
    if !input_path.is_file() {
        return Err(ReportError::FileNotFound(input_path.display().to_string()));
    }

    let content = std::fs::read_to_string(input_path)?;
    let dataset = parse_dataset(&content)?;

    tracing::debug!(
        path = %input_path.display(),
        all_apps = dataset.all_apps.len(),
        top_results = dataset.top_results.len(),
        "入力を読み込みました"
    );

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_dataset_not_found() {
        let err = load_dataset(Path::new("/nonexistent/plant_search_results.json")).unwrap_err();
        assert!(matches!(err, ReportError::FileNotFound(_)));
    }

    #[test]
    fn test_load_dataset_directory_is_not_found() {
        let dir = tempdir().expect("Failed to create temp dir");
        let err = load_dataset(dir.path()).unwrap_err();
        assert!(matches!(err, ReportError::FileNotFound(_)));
    }

    #[test]
    fn test_load_dataset_ok() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("input.json");
        std::fs::write(&path, r#"{"all_plant_apps": [], "top_10_results": []}"#).unwrap();

        let dataset = load_dataset(&path).unwrap();
        assert!(dataset.all_apps.is_empty());
        assert!(dataset.top_results.is_empty());
    }

    #[test]
    fn test_load_dataset_malformed() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("input.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(
            err,
            ReportError::Common(plant_report_common::Error::Json(_))
        ));
    }
}
