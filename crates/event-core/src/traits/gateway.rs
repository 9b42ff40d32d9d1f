//! Asset gateway port - external object storage for event images

use async_trait::async_trait;

use super::repositories::RepoResult;

/// Result of a successful image upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAsset {
    /// Durable URL of the stored asset
    pub url: String,
}

/// External object-storage service accepting a raw image buffer and
/// returning a durable URL
#[async_trait]
pub trait AssetGateway: Send + Sync {
    /// Upload an image buffer
    ///
    /// Fails with `DomainError::UploadFailed` if the gateway reports an
    /// error or returns no durable URL.
    async fn upload_image(&self, bytes: Vec<u8>) -> RepoResult<UploadedAsset>;
}
