use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use workout_assess::{cli, client, config, error, report, runner};
use workout_assess_common::{format_size, ExerciseType, UploadSession, UploadStatus};
use cli::{Cli, Commands};
use client::HttpClient;
use config::Config;
use error::Result;

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} ({elapsed})") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Assess { video, exercise, json, output } => {
            let client_config = config.resolve(cli.endpoint.as_deref());
            if !json {
                println!("🏋️ workout-assess - フォーム評価\n");
            }
            if cli.verbose {
                eprintln!("[config] endpoint={}", client_config.endpoint);
            }

            let max_bytes = client_config.max_upload_bytes;
            let client = HttpClient::new(client_config, cli.verbose)?;
            let mut session: UploadSession<PathBuf> = UploadSession::new(max_bytes);

            let bar = (!json).then(|| spinner("評価中..."));
            let outcome = runner::assess_file(&mut session, &client, &video, exercise).await;
            if let Some(bar) = bar {
                bar.finish_and_clear();
            }

            if let Err(e) = outcome {
                if session.status() == UploadStatus::Failed {
                    eprintln!("❌ 評価に失敗しました");
                }
                return Err(e);
            }

            let Some(received) = session.result() else {
                return Ok(());
            };

            if let Some(path) = output {
                std::fs::write(&path, serde_json::to_string_pretty(&received.result)?)?;
                if !json {
                    println!("✔ 結果を保存: {}", path.display());
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&received.result)?);
            } else {
                if let Some(meta) = session.selection().map(|f| &f.meta) {
                    println!("✔ {} ({}, {})\n", meta.name, format_size(meta.size), meta.media_type);
                }
                println!("{}", report::render_report(&received.result, session.exercise()));
                println!("\n✅ 評価完了");
            }
        }

        Commands::Exercises => {
            println!("種目一覧:");
            for kind in ExerciseType::all() {
                println!("  {} {:<14} {}", kind.icon(), kind.as_str(), kind.label());
            }
        }

        Commands::Health => {
            let client = HttpClient::new(config.resolve(cli.endpoint.as_deref()), cli.verbose)?;

            let bar = spinner("接続確認中...");
            let status = client.health().await;
            bar.finish_and_clear();

            let status = status?;
            println!("✅ {} : {}", client.config().endpoint, status);
        }

        Commands::Config { set_endpoint, set_timeout, set_max_size_mb, show } => {
            let mut config = config;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ エンドポイントを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                println!("✔ タイムアウトを設定しました");
            }

            if let Some(megabytes) = set_max_size_mb {
                config.set_max_size_mb(megabytes)?;
                println!("✔ 最大サイズを設定しました");
            }

            if show {
                let resolved = config.resolve(cli.endpoint.as_deref());
                println!("設定:");
                println!("  ファイル: {}", Config::config_path()?.display());
                println!("  エンドポイント: {}", resolved.endpoint);
                println!("  タイムアウト: {}秒", resolved.timeout_seconds);
                println!("  最大サイズ: {}", format_size(resolved.max_upload_bytes));
            }
        }
    }

    Ok(())
}
