//! 評価サービスHTTPクライアント（reqwest版）

use std::path::PathBuf;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use workout_assess_common::{
    parse_assessment_response, parse_health_response, status_error, AssessmentClient,
    AssessmentResult, ClientConfig, Error, ExerciseType, FileMeta,
};

use crate::error::Result;

pub struct HttpClient {
    http: reqwest::Client,
    config: ClientConfig,
    verbose: bool,
}

impl HttpClient {
    pub fn new(config: ClientConfig, verbose: bool) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { http, config, verbose })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET /api/health`
    pub async fn health(&self) -> workout_assess_common::Result<String> {
        let url = self.config.health_url();
        if self.verbose {
            eprintln!("[http] GET {}", url);
        }
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.request_error(e))?;
        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }
        parse_health_response(&body)
    }

    fn request_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout(self.config.timeout_seconds)
        } else {
            Error::Transport(e.to_string())
        }
    }
}

impl AssessmentClient<PathBuf> for HttpClient {
    async fn assess(
        &self,
        file: &PathBuf,
        meta: &FileMeta,
        exercise: ExerciseType,
    ) -> workout_assess_common::Result<AssessmentResult> {
        let bytes = tokio::fs::read(file)
            .await
            .map_err(|e| Error::Transport(format!("{}: {}", file.display(), e)))?;

        let part = Part::bytes(bytes)
            .file_name(meta.name.clone())
            .mime_str(&meta.media_type)
            .map_err(|e| Error::Transport(e.to_string()))?;
        let form = Form::new()
            .text("exercise_type", exercise.as_str())
            .part("file", part);

        let url = self.config.assessment_url();
        if self.verbose {
            eprintln!(
                "[http] POST {} exercise_type={} file={} ({} bytes, {})",
                url, exercise, meta.name, meta.size, meta.media_type
            );
        }

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.request_error(e))?;
        if self.verbose {
            eprintln!("[http] {} ({} bytes)", status, body.len());
        }

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &body));
        }
        parse_assessment_response(&body)
    }
}
