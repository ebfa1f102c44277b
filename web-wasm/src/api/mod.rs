pub mod assessment;

use workout_assess_common::ClientConfig;

/// ビルド時に `WORKOUT_ASSESS_ENDPOINT` が指定されていればそれを使う
pub fn client_config() -> ClientConfig {
    match option_env!("WORKOUT_ASSESS_ENDPOINT") {
        Some(endpoint) if !endpoint.trim().is_empty() => {
            ClientConfig::default().with_endpoint(endpoint.trim())
        }
        _ => ClientConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_urls() {
        let config = client_config();
        assert!(config.assessment_url().ends_with("/assessment/"));
        assert!(config.health_url().ends_with("/api/health"));
        assert!(config.max_upload_bytes > 0);
    }
}
