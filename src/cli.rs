use clap::{Parser, Subcommand};
use std::path::PathBuf;
use workout_assess_common::ExerciseType;

#[derive(Parser)]
#[command(name = "workout-assess")]
#[command(about = "Workout technique assessment client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 評価サービスのURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 動画を送信して評価結果を表示
    Assess {
        /// 動画ファイル (mp4/mov/webm/mkv)
        #[arg(required = true)]
        video: PathBuf,

        /// 種目 (pushup/pullup/squat/situp/jumping_jack)
        #[arg(short, long, default_value = "pushup")]
        exercise: ExerciseType,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 種目一覧を表示
    Exercises,

    /// 評価サービスの稼働確認
    Health,

    /// 設定の表示・変更
    Config {
        /// 評価サービスのURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 最大アップロードサイズ(MB)を設定
        #[arg(long)]
        set_max_size_mb: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assess() {
        let cli = Cli::try_parse_from([
            "workout-assess",
            "assess",
            "squat.mp4",
            "--exercise",
            "jumping_jack",
            "--json",
        ])
        .expect("パース失敗");

        match cli.command {
            Commands::Assess { video, exercise, json, output } => {
                assert_eq!(video, PathBuf::from("squat.mp4"));
                assert_eq!(exercise, ExerciseType::JumpingJack);
                assert!(json);
                assert!(output.is_none());
            }
            _ => panic!("assess として解析されない"),
        }
    }

    #[test]
    fn test_parse_unknown_exercise() {
        let result = Cli::try_parse_from(["workout-assess", "assess", "a.mp4", "-e", "burpee"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_endpoint() {
        let cli = Cli::try_parse_from(["workout-assess", "health", "--endpoint", "http://h:1"])
            .expect("パース失敗");
        assert_eq!(cli.endpoint.as_deref(), Some("http://h:1"));
    }
}
