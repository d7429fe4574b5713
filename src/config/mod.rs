use crate::core::selector::DEFAULT_BEST_CEILING;
use crate::utils::default_output_dir;
use crate::ytdlp::{DEFAULT_OUTPUT_TEMPLATE, YTDLP_BIN_NAME};
use std::path::PathBuf;

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
    /// Height ceiling for the `best` choice.
    pub best_ceiling: u32,
    pub ytdlp_bin: PathBuf,
    pub output_template: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            best_ceiling: DEFAULT_BEST_CEILING,
            ytdlp_bin: PathBuf::from(YTDLP_BIN_NAME),
            output_template: DEFAULT_OUTPUT_TEMPLATE.to_string(),
        }
    }
}
