use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Folder name used under the platform's video directory.
pub const DOWNLOAD_DIR_NAME: &str = "YT Videos";

/// `<videos>/YT Videos`, falling back to the home directory, then to a relative path.
pub fn default_output_dir() -> PathBuf {
    dirs::video_dir()
        .or_else(dirs::home_dir)
        .map(|base| base.join(DOWNLOAD_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(DOWNLOAD_DIR_NAME))
}

#[derive(Debug)]
pub enum OutputDir {
    Existing(PathBuf),
    Created(PathBuf),
    /// Creation failed, downloads go to the current directory instead.
    Fallback { requested: PathBuf, reason: io::Error },
}

impl OutputDir {
    /// Directory the download should actually be written to.
    pub fn path(&self) -> &Path {
        match self {
            OutputDir::Existing(path) | OutputDir::Created(path) => path,
            OutputDir::Fallback { .. } => Path::new("."),
        }
    }
}

pub fn prepare_output_dir(dir: &Path) -> OutputDir {
    if dir.is_dir() {
        return OutputDir::Existing(dir.to_path_buf());
    }

    match fs::create_dir_all(dir) {
        Ok(()) => OutputDir::Created(dir.to_path_buf()),
        Err(reason) => OutputDir::Fallback {
            requested: dir.to_path_buf(),
            reason,
        },
    }
}

/// `m:ss`, fractional seconds dropped.
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
