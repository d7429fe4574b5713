pub mod downloader;
pub mod error;
pub mod fetcher;
pub mod formats;
pub mod metadata;
pub mod report;
pub mod selector;
pub mod session;

pub use downloader::Dispatcher;
pub use error::{Error, SelectionError};
pub use fetcher::MetadataFetcher;
pub use formats::{reduce_formats, ResolutionOption};
pub use metadata::{RawFormat, VideoMetadata};
pub use report::Reporter;
pub use selector::DownloadSelector;
pub use session::{Outcome, Session};
