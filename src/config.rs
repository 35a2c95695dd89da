use crate::error::{ReportError, Result};
use plant_report_common::PREVIEW_CHARS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "plant_search_results.json";
pub const DEFAULT_OUTPUT: &str = "plant_apps_analysis.csv";
pub const DEFAULT_SUMMARY_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub summary_limit: usize,
    pub preview_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            summary_limit: DEFAULT_SUMMARY_LIMIT,
            preview_chars: PREVIEW_CHARS,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（存在しなければ既定値）
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&content).map_err(|e| {
            ReportError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReportError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("plant-report").join("config.json"))
    }

    fn validate(&self) -> Result<()> {
        if self.summary_limit == 0 {
            return Err(ReportError::Config("summary_limit は1以上を指定してください".into()));
        }
        Ok(())
    }

    /// CLI引数で上書き
    pub fn with_overrides(
        mut self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        top: Option<usize>,
    ) -> Result<Self> {
        if let Some(input) = input {
            self.input_path = input;
        }
        if let Some(output) = output {
            self.output_path = output;
        }
        if let Some(top) = top {
            if top == 0 {
                return Err(ReportError::InvalidArgument("--top は1以上を指定してください".into()));
            }
            self.summary_limit = top;
        }
        Ok(self)
    }
}
