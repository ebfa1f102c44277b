//! 接続先・送信制限の設定

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// 評価サービス接続設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// サービスのベースURL（例: http://localhost:8000）
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub max_upload_bytes: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ClientConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// `POST /assessment/` のURL
    pub fn assessment_url(&self) -> String {
        format!("{}/assessment/", self.base())
    }

    /// `GET /api/health` のURL
    pub fn health_url(&self) -> String {
        format!("{}/api/health", self.base())
    }

    fn base(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }
}
