use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}\nUsage: vidgrab [OPTIONS] <URL>")]
    Usage(String),

    #[error("Failed to extract video info: {0}")]
    Fetch(String),

    #[error("No suitable formats found")]
    NoFormats,

    #[error("Download failed: {0}")]
    Download(String),

    /// The extraction tool binary is missing, at either stage.
    #[error("{0} could not be started, is it installed and reachable?")]
    ToolNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for errors that end the run.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Usage(_) => 2,
            _ => 1,
        }
    }
}

/// Rejected menu input. Handled by re-prompting, never returned from a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Invalid input. Please enter a number (1-{max}) or 'best'")]
    NotANumber { max: usize },

    #[error("Invalid choice. Please enter 1-{max} or 'best'")]
    OutOfRange { max: usize },
}
