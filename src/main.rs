use anyhow::Context;
use clap::Parser;
use plant_report::{cli, config, runner};
use cli::{Cli, Commands};
use config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load().context("設定の読み込みに失敗しました")?;

    match cli.command {
        None => run(&config)?,

        Some(Commands::Report { input, output, top }) => {
            let config = config.with_overrides(input, output, top)?;
            run(&config)?;
        }

        Some(Commands::Config { show, set_input, set_output, set_top }) => {
            let mut config = config;
            let mut changed = false;

            if let Some(input) = set_input {
                config.input_path = input;
                changed = true;
            }
            if let Some(output) = set_output {
                config.output_path = output;
                changed = true;
            }
            if let Some(top) = set_top {
                config.summary_limit = top;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  入力: {}", config.input_path.display());
                println!("  出力: {}", config.output_path.display());
                println!("  サマリー件数: {}", config.summary_limit);
                println!("  プレビュー文字数: {}", config.preview_chars);
            }
        }
    }

    Ok(())
}

fn run(config: &Config) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    runner::run_report(config, &mut out).with_context(|| {
        format!(
            "レポート生成に失敗しました: {} -> {}",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;

    Ok(())
}

/// stderrへログ出力（stdoutはレポート専用）
fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
