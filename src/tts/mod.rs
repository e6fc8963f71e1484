pub mod voice;

use reqwest::header::CONTENT_TYPE;

use crate::config::Config;
use crate::error::AppError;

pub use voice::{SynthesisRequest, SynthesisResponse, VoiceProfile};

const API_KEY_HEADER: &str = "key";
const LOGGED_BODY_LIMIT: usize = 512;

/// Client for the upstream synthesis API. Cheap to share: the inner
/// `reqwest::Client` pools connections and needs no locking.
pub struct TtsService {
    client: reqwest::Client,
    url: String,
    key: String,
    profile: VoiceProfile,
}

impl TtsService {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.upstream_url.clone(),
            key: config.upstream_key.clone(),
            profile: VoiceProfile::default(),
        })
    }

    pub async fn synthesize(&self, text: &str) -> Result<SynthesisResponse, AppError> {
        // 1. Build payload
        let payload = SynthesisRequest::new(text, &self.profile);
        let body = serde_json::to_vec(&payload)
            .map_err(|e| AppError::Internal(format!("Failed to encode payload: {}", e)))?;

        // 2. Send
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.key)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        tracing::debug!("Upstream replied {} ({} bytes)", status, bytes.len());

        // 3. Parse
        serde_json::from_slice::<SynthesisResponse>(&bytes).map_err(|e| {
            tracing::warn!(
                "Unexpected upstream response (status {}): {}",
                status,
                truncate_for_log(&bytes)
            );
            AppError::UpstreamParse(e)
        })
    }
}

fn truncate_for_log(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.char_indices().nth(LOGGED_BODY_LIMIT) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_body() {
        assert_eq!(truncate_for_log(b"not json"), "not json");
    }

    #[test]
    fn test_truncate_long_body() {
        let body = "x".repeat(LOGGED_BODY_LIMIT + 10);
        let logged = truncate_for_log(body.as_bytes());
        assert_eq!(logged.len(), LOGGED_BODY_LIMIT + 3);
        assert!(logged.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte() {
        let body = "你".repeat(LOGGED_BODY_LIMIT + 1);
        let logged = truncate_for_log(body.as_bytes());
        assert_eq!(logged.chars().count(), LOGGED_BODY_LIMIT + 3);
    }

    #[tokio::test]
    async fn test_invalid_url_is_transport_error() {
        let config = Config::from_lookup(|name| match name {
            "HOST_URL" => Some("not a url".to_string()),
            _ => None,
        })
        .unwrap();
        let service = TtsService::new(&config).unwrap();
        let err = service.synthesize("hello").await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamTransport(_)));
    }
}
