pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
pub mod ytdlp;

pub use core::{reduce_formats, DownloadSelector, Outcome, RawFormat, ResolutionOption, Session, VideoMetadata};
pub use ytdlp::YtDlp;
