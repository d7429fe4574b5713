use crate::core::error::{Error, SelectionError};
use crate::core::{ResolutionOption, VideoMetadata};
use crate::utils::{format_duration, group_thousands};
use std::io::{self, Write};
use std::path::Path;

const RULE_WIDTH: usize = 60;

/// Console side of the dialogue. Every stage writes its status through here.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn processing(&mut self, url: &str) -> io::Result<()> {
        writeln!(self.out, "Processing URL: {}", url)?;
        writeln!(self.out, "Fetching video information...")
    }

    pub fn video_info(&mut self, metadata: &VideoMetadata) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out)?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "VIDEO INFORMATION")?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "Title: {}", metadata.title())?;
        writeln!(self.out, "Uploader: {}", metadata.uploader())?;
        writeln!(self.out, "Duration: {}", format_duration(metadata.duration.unwrap_or(0.0)))?;
        writeln!(self.out, "View Count: {}", group_thousands(metadata.view_count.unwrap_or(0)))?;
        writeln!(self.out, "{}", rule)
    }

    pub fn confirm_prompt(&mut self) -> io::Result<()> {
        write!(self.out, "\nDo you want to download this video? (y/n): ")?;
        self.out.flush()
    }

    pub fn cancelled(&mut self) -> io::Result<()> {
        writeln!(self.out, "Download cancelled.")
    }

    pub fn format_menu(&mut self, options: &[ResolutionOption]) -> io::Result<()> {
        writeln!(self.out, "\nAvailable formats:")?;
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.out, "{}", menu_line(i + 1, option))?;
        }
        Ok(())
    }

    pub fn no_formats(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}.", Error::NoFormats)
    }

    pub fn choice_prompt(&mut self, count: usize) -> io::Result<()> {
        write!(self.out, "\nChoose format (1-{}) or 'best' for highest quality: ", count)?;
        self.out.flush()
    }

    pub fn rejected(&mut self, rejection: &SelectionError) -> io::Result<()> {
        writeln!(self.out, "{}", rejection)
    }

    pub fn dir_created(&mut self, dir: &Path) -> io::Result<()> {
        writeln!(self.out, "Created download directory: {}", dir.display())
    }

    pub fn dir_fallback(&mut self, dir: &Path, reason: &io::Error) -> io::Result<()> {
        writeln!(self.out, "Warning: Could not create directory {}: {}", dir.display(), reason)?;
        writeln!(self.out, "Downloading to current directory instead.")
    }

    pub fn downloading(&mut self, selector: &str) -> io::Result<()> {
        writeln!(self.out, "\nDownloading video ({})...", selector)?;
        writeln!(self.out, "Please wait, this may take a while...")?;
        self.out.flush()
    }

    pub fn success(&mut self, dir: &Path) -> io::Result<()> {
        writeln!(self.out, "\n✓ Download completed successfully!")?;
        writeln!(self.out, "File saved to: {}", dir.display())
    }

    pub fn failure(&mut self, reason: &str) -> io::Result<()> {
        writeln!(self.out, "\n✗ Download failed!")?;
        writeln!(self.out, "{}", reason)
    }
}

/// `index. label (ext) - size` with `Unknown size` for formats of unknown size.
pub fn menu_line(index: usize, option: &ResolutionOption) -> String {
    let size = if option.size_known() {
        format!("{:.1} MB", option.size_megabytes)
    } else {
        "Unknown size".to_string()
    };
    format!("{}. {} ({}) - {}", index, option.label, option.ext, size)
}
