//! Drives the `yt-dlp` executable for both metadata extraction and downloading.
use crate::core::error::Error;
use crate::core::{Dispatcher, DownloadSelector, MetadataFetcher, VideoMetadata};
use async_trait::async_trait;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use tokio::process::Command;
use tracing::{debug, info, warn};
use url::Url;

/// Binary spawned when no explicit path is configured.
pub const YTDLP_BIN_NAME: &str = "yt-dlp";

pub const DEFAULT_OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

pub struct YtDlp {
    binary: PathBuf,
    output_template: String,
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new(YTDLP_BIN_NAME, DEFAULT_OUTPUT_TEMPLATE)
    }
}

impl YtDlp {
    pub fn new(binary: impl Into<PathBuf>, output_template: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            output_template: output_template.into(),
        }
    }

    pub fn metadata_args(url: &Url) -> Vec<OsString> {
        ["--dump-json", "--no-playlist", "--no-warnings", "--skip-download", url.as_str()]
            .into_iter()
            .map(OsString::from)
            .collect()
    }

    pub fn download_args(
        &self,
        url: &Url,
        selector: &DownloadSelector,
        output_dir: &Path,
    ) -> Vec<OsString> {
        vec![
            "--no-playlist".into(),
            "-f".into(),
            selector.to_string().into(),
            "-o".into(),
            output_dir.join(&self.output_template).into_os_string(),
            url.as_str().into(),
        ]
    }

    fn command(&self, args: Vec<OsString>) -> Command {
        debug!("Spawning {} {:?}", self.binary.display(), args);
        let mut cmd = Command::new(&self.binary);
        cmd.args(args).stdin(Stdio::null()).kill_on_drop(true);
        cmd
    }

    /// A missing binary is reported as such, anything else as a failure of `stage`.
    fn spawn_failure(&self, err: io::Error, stage: fn(String) -> Error) -> Error {
        if err.kind() == io::ErrorKind::NotFound {
            Error::ToolNotFound(self.binary.display().to_string())
        } else {
            stage(format!("could not run {}: {}", self.binary.display(), err))
        }
    }
}

/// Last non-empty stderr line, which is where yt-dlp puts its `ERROR:` message.
fn failure_reason(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("yt-dlp exited with {}", output.status))
}

#[async_trait]
impl MetadataFetcher for YtDlp {
    fn name(&self) -> &'static str {
        YTDLP_BIN_NAME
    }

    async fn fetch(&self, url: &Url) -> Result<VideoMetadata, Error> {
        let output = self
            .command(Self::metadata_args(url))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| self.spawn_failure(e, Error::Fetch))?;

        if !output.status.success() {
            let reason = failure_reason(&output);
            warn!("Metadata extraction failed: {}", reason);
            return Err(Error::Fetch(reason));
        }

        let metadata: VideoMetadata = serde_json::from_slice(&output.stdout).map_err(|e| {
            Error::Fetch(format!("invalid JSON from {}: {}", self.binary.display(), e))
        })?;

        info!(
            "Fetched metadata for {} with {} formats",
            metadata.id.as_deref().unwrap_or(url.as_str()),
            metadata.formats.len()
        );
        Ok(metadata)
    }
}

#[async_trait]
impl Dispatcher for YtDlp {
    async fn download(
        &self,
        url: &Url,
        selector: &DownloadSelector,
        output_dir: &Path,
    ) -> Result<(), Error> {
        // stdout stays attached so yt-dlp's own progress output is visible;
        // `Command::output` would force it to a pipe
        let child = self
            .command(self.download_args(url, selector, output_dir))
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_failure(e, Error::Download))?;
        let output = child.wait_with_output().await?;

        if !output.status.success() {
            let reason = failure_reason(&output);
            warn!("Download with selector {} failed: {}", selector, reason);
            return Err(Error::Download(reason));
        }

        info!("Downloaded {} into {}", url, output_dir.display());
        Ok(())
    }
}
