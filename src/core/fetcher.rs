use crate::core::error::Error;
use crate::core::VideoMetadata;
use async_trait::async_trait;
use url::Url;

/// Resolves a video URL into its metadata and raw format list.
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch(&self, url: &Url) -> Result<VideoMetadata, Error>;
}
