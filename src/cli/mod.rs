use crate::config::Config;
use crate::core::error::Error;
use crate::core::{Outcome, Reporter, Session};
use crate::ytdlp::YtDlp;
use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;
use url::Url;

#[derive(Parser)]
#[command(name = "vidgrab")]
#[command(about = "Fetch a video's details, pick a resolution and download it with yt-dlp")]
#[command(version)]
pub struct Cli {
    /// URL of the video to download
    #[arg(value_name = "URL")]
    pub url: String,

    /// Download directory [default: <videos>/YT Videos]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output filename template, relative to the download directory
    #[arg(short = 't', long)]
    pub output_template: Option<String>,

    /// Download this exact format id instead of choosing from the menu
    #[arg(short, long)]
    pub format: Option<String>,

    /// Height ceiling used by the `best` choice
    #[arg(long, value_name = "HEIGHT")]
    pub max_height: Option<u32>,

    /// yt-dlp executable to drive
    #[arg(long = "yt-dlp", value_name = "PATH")]
    pub ytdlp: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn target_url(&self) -> Result<Url, Error> {
        Url::parse(self.url.trim()).map_err(|e| Error::Usage(format!("Invalid URL {:?}: {}", self.url, e)))
    }

    /// Defaults overridden by whatever was given on the command line.
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(template) = &self.output_template {
            config.output_template = template.clone();
        }
        if let Some(height) = self.max_height {
            config.best_ceiling = height;
        }
        if let Some(ytdlp) = &self.ytdlp {
            config.ytdlp_bin = ytdlp.clone();
        }
        config
    }

    pub async fn run(&self) -> Result<Outcome> {
        let url = self.target_url()?;
        let config = self.config();
        info!("Download directory: {}", config.output_dir.display());

        let ytdlp = YtDlp::new(&config.ytdlp_bin, &config.output_template);
        let session = Session::new(&ytdlp, &ytdlp, &config).with_format_id(self.format.clone());

        let mut input = io::stdin().lock();
        let mut reporter = Reporter::new(io::stdout());
        let outcome = session.run(&url, &mut input, &mut reporter).await?;

        Ok(outcome)
    }
}
