use crate::config::Config;
use crate::core::error::Error;
use crate::core::formats::reduce_formats;
use crate::core::report::Reporter;
use crate::core::selector::{confirm, select_format, DownloadSelector};
use crate::core::{Dispatcher, MetadataFetcher};
use crate::utils::{prepare_output_dir, OutputDir};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use url::Url;

/// How a run ended when nothing fatal happened.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Cancelled,
    NoFormats,
    Downloaded { output_dir: PathBuf },
    DownloadFailed { reason: String },
}

/// One pass through the fetch, confirm, select and download dialogue.
pub struct Session<'a> {
    fetcher: &'a dyn MetadataFetcher,
    dispatcher: &'a dyn Dispatcher,
    config: &'a Config,
    format_id: Option<String>,
}

impl<'a> Session<'a> {
    pub fn new(fetcher: &'a dyn MetadataFetcher, dispatcher: &'a dyn Dispatcher, config: &'a Config) -> Self {
        Self {
            fetcher,
            dispatcher,
            config,
            format_id: None,
        }
    }

    /// Skip the menu and download this exact format id.
    pub fn with_format_id(mut self, format_id: Option<String>) -> Self {
        self.format_id = format_id;
        self
    }

    /// Fetch failures are returned as errors; every other ending is an [`Outcome`].
    pub async fn run<R: BufRead, W: Write>(
        &self,
        url: &Url,
        input: &mut R,
        reporter: &mut Reporter<W>,
    ) -> Result<Outcome, Error> {
        reporter.processing(url.as_str())?;
        debug!("Fetching metadata with {}", self.fetcher.name());
        let metadata = self.fetcher.fetch(url).await?;
        reporter.video_info(&metadata)?;

        if !confirm(input, reporter)? {
            reporter.cancelled()?;
            return Ok(Outcome::Cancelled);
        }

        let selector = match &self.format_id {
            Some(id) => DownloadSelector::FormatId(id.clone()),
            None => {
                let options = reduce_formats(&metadata.formats);
                debug!("Reduced {} raw formats to {} options", metadata.formats.len(), options.len());
                if options.is_empty() {
                    reporter.no_formats()?;
                    return Ok(Outcome::NoFormats);
                }

                reporter.format_menu(&options)?;
                match select_format(input, reporter, &options, self.config.best_ceiling)? {
                    Some(selector) => selector,
                    None => {
                        reporter.cancelled()?;
                        return Ok(Outcome::Cancelled);
                    }
                }
            }
        };

        let prepared = prepare_output_dir(&self.config.output_dir);
        match &prepared {
            OutputDir::Created(dir) => reporter.dir_created(dir)?,
            OutputDir::Fallback { requested, reason } => reporter.dir_fallback(requested, reason)?,
            OutputDir::Existing(_) => {}
        }
        let output_dir = prepared.path().to_path_buf();

        reporter.downloading(&selector.to_string())?;
        info!("Downloading {} with selector {}", url, selector);
        match self.dispatcher.download(url, &selector, &output_dir).await {
            Ok(()) => {
                reporter.success(&output_dir)?;
                Ok(Outcome::Downloaded { output_dir })
            }
            Err(err) => {
                let reason = match err {
                    Error::Download(reason) => reason,
                    other => other.to_string(),
                };
                reporter.failure(&reason)?;
                Ok(Outcome::DownloadFailed { reason })
            }
        }
    }
}
