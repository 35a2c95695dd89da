//! 植物アプリ検索結果のCSVレポート生成

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod runner;
pub mod summary;

pub use runner::run_report;
