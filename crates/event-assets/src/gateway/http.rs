//! HTTP asset gateway
//!
//! Uploads image bytes to the configured asset endpoint as a multipart
//! form and returns the hosted URL. Failures surface as
//! `DomainError::UploadFailed`; the caller decides whether to persist.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use event_common::config::AssetGatewayConfig;
use event_core::error::DomainError;
use event_core::traits::{AssetGateway, RepoResult, UploadedAsset};

/// Response body of a successful upload.
///
/// The endpoint follows the Cloudinary convention of returning the
/// hosted asset under `secure_url`, with `url` as a plain-HTTP fallback.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    secure_url: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

impl UploadResponse {
    fn into_url(self) -> Option<String> {
        self.secure_url
            .or(self.url)
            .filter(|url| !url.is_empty())
    }
}

/// `AssetGateway` implementation backed by `reqwest`
pub struct HttpAssetGateway {
    client: reqwest::Client,
    upload_url: String,
    api_key: String,
}

impl HttpAssetGateway {
    /// Create a gateway from configuration.
    ///
    /// # Errors
    /// Returns `DomainError::InternalError` if the HTTP client cannot
    /// be constructed.
    pub fn new(config: &AssetGatewayConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::InternalError(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            client,
            upload_url: config.url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl AssetGateway for HttpAssetGateway {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn upload_image(&self, bytes: Vec<u8>) -> RepoResult<UploadedAsset> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name("image")
            .mime_str("application/octet-stream")
            .map_err(|e| DomainError::UploadFailed(e.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .text("api_key", self.api_key.clone())
            .part("file", part);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::UploadFailed(format!("upload request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UploadFailed(format!(
                "upload endpoint returned {status}"
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| DomainError::UploadFailed(format!("malformed upload response: {e}")))?;

        let url = body
            .into_url()
            .ok_or_else(|| DomainError::UploadFailed("upload response carried no URL".to_string()))?;

        Ok(UploadedAsset { url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AssetGatewayConfig {
        AssetGatewayConfig {
            url: "https://assets.example.com/upload".to_string(),
            api_key: "test-key".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_gateway_construction() {
        let gateway = HttpAssetGateway::new(&test_config()).unwrap();
        assert_eq!(gateway.upload_url, "https://assets.example.com/upload");
    }

    #[test]
    fn test_response_prefers_secure_url() {
        let body: UploadResponse = serde_json::from_str(
            r#"{"secure_url": "https://cdn/x.jpg", "url": "http://cdn/x.jpg"}"#,
        )
        .unwrap();
        assert_eq!(body.into_url().as_deref(), Some("https://cdn/x.jpg"));
    }

    #[test]
    fn test_response_falls_back_to_url() {
        let body: UploadResponse =
            serde_json::from_str(r#"{"url": "http://cdn/x.jpg"}"#).unwrap();
        assert_eq!(body.into_url().as_deref(), Some("http://cdn/x.jpg"));
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let body: UploadResponse = serde_json::from_str(r#"{"secure_url": ""}"#).unwrap();
        assert!(body.into_url().is_none());
    }

    #[test]
    fn test_missing_urls_rejected() {
        let body: UploadResponse = serde_json::from_str("{}").unwrap();
        assert!(body.into_url().is_none());
    }
}
