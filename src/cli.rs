use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plant-report")]
#[command(about = "植物アプリ検索結果のCSVレポート生成ツール", long_about = None)]
pub struct Cli {
    /// 省略時は設定値でレポートを生成
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力（stderr）
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 検索結果JSONからCSVレポートを生成
    Report {
        /// 入力JSONファイル
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 出力CSVファイル
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// サマリーに表示する件数
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 既定の入力ファイルを設定
        #[arg(long)]
        set_input: Option<PathBuf>,

        /// 既定の出力ファイルを設定
        #[arg(long)]
        set_output: Option<PathBuf>,

        /// 既定のサマリー件数を設定
        #[arg(long)]
        set_top: Option<usize>,
    },
}
