use crate::core::error::Error;
use crate::core::DownloadSelector;
use async_trait::async_trait;
use std::path::Path;
use url::Url;

/// Performs the actual retrieval. One attempt per call, failures are final.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn download(&self, url: &Url, selector: &DownloadSelector, output_dir: &Path) -> Result<(), Error>;
}
