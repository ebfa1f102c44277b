use crate::error::{AssessCliError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use workout_assess_common::ClientConfig;

pub const ENDPOINT_ENV: &str = "WORKOUT_ASSESS_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(flatten)]
    pub client: ClientConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AssessCliError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("workout-assess").join("config.json"))
    }

    /// 実際に使う接続設定（`--endpoint` > 環境変数 > 設定ファイル）
    pub fn resolve(&self, endpoint_flag: Option<&str>) -> ClientConfig {
        let env_endpoint = std::env::var(ENDPOINT_ENV).ok();
        self.resolve_with(endpoint_flag, env_endpoint.as_deref())
    }

    fn resolve_with(&self, endpoint_flag: Option<&str>, env_endpoint: Option<&str>) -> ClientConfig {
        let endpoint = endpoint_flag
            .or(env_endpoint)
            .map(str::trim)
            .filter(|e| !e.is_empty());

        match endpoint {
            Some(endpoint) => self.client.clone().with_endpoint(endpoint),
            None => self.client.clone(),
        }
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(AssessCliError::Config(format!(
                "エンドポイントは http:// または https:// で始めてください: {}",
                endpoint
            )));
        }
        self.client.endpoint = endpoint;
        self.save()
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(AssessCliError::Config("タイムアウトは1秒以上を指定してください".into()));
        }
        self.client.timeout_seconds = seconds;
        self.save()
    }

    pub fn set_max_size_mb(&mut self, megabytes: u64) -> Result<()> {
        if megabytes == 0 {
            return Err(AssessCliError::Config("最大サイズは1MB以上を指定してください".into()));
        }
        self.client.max_upload_bytes = megabytes
            .checked_mul(1024 * 1024)
            .ok_or_else(|| AssessCliError::Config(format!("最大サイズが大きすぎます: {}MB", megabytes)))?;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_uses_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).expect("読み込み失敗");
        assert_eq!(config.client, ClientConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.client.endpoint = "http://10.0.0.5:8000".to_string();
        config.client.timeout_seconds = 30;
        config.save_to(&path).expect("保存失敗");

        let content = std::fs::read_to_string(&path).expect("読み込み失敗");
        assert!(content.contains("\"endpoint\""));

        let loaded = Config::load_from(&path).expect("読み込み失敗");
        assert_eq!(loaded.client.endpoint, "http://10.0.0.5:8000");
        assert_eq!(loaded.client.timeout_seconds, 30);
    }

    #[test]
    fn test_set_max_size_rejects_out_of_range() {
        let mut config = Config::default();
        assert!(matches!(config.set_max_size_mb(0), Err(AssessCliError::Config(_))));
        assert!(matches!(
            config.set_max_size_mb(u64::MAX),
            Err(AssessCliError::Config(_))
        ));
        assert_eq!(config.client.max_upload_bytes, ClientConfig::default().max_upload_bytes);
    }

    #[test]
    fn test_resolve_precedence() {
        let config = Config::default();
        assert_eq!(
            config.resolve_with(Some("http://flag"), Some("http://env")).endpoint,
            "http://flag"
        );
        assert_eq!(config.resolve_with(None, Some("http://env")).endpoint, "http://env");
        assert_eq!(config.resolve_with(None, Some("  ")).endpoint, "http://localhost:8000");
        assert_eq!(config.resolve_with(None, None).endpoint, "http://localhost:8000");
    }
}
