use crate::core::error::{Error, SelectionError};
use crate::core::formats::ResolutionOption;
use crate::core::report::Reporter;
use std::fmt;
use std::io::{BufRead, Write};
use tracing::debug;

/// Height ceiling used when the user asks for `best`.
pub const DEFAULT_BEST_CEILING: u32 = 1080;

/// Directive handed to the download tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadSelector {
    /// A literal format id, passed through untouched.
    FormatId(String),
    /// Best available format at or below the given height.
    MaxHeight(u32),
}

impl fmt::Display for DownloadSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadSelector::FormatId(id) => write!(f, "{}", id),
            DownloadSelector::MaxHeight(height) => write!(f, "best[height<={}]", height),
        }
    }
}

/// Interpret one line of menu input.
pub fn parse_choice(
    input: &str,
    options: &[ResolutionOption],
    best_ceiling: u32,
) -> Result<DownloadSelector, SelectionError> {
    let choice = input.trim().to_lowercase();
    let max = options.len();

    if choice == "best" {
        return Ok(DownloadSelector::MaxHeight(best_ceiling));
    }

    let index: i64 = choice.parse().map_err(|_| SelectionError::NotANumber { max })?;
    if index < 1 || index as usize > max {
        return Err(SelectionError::OutOfRange { max });
    }

    Ok(DownloadSelector::MaxHeight(options[index as usize - 1].height))
}

/// Read one line, `None` once the input is exhausted.
fn read_answer<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Ask whether to go ahead. Only `y` proceeds; closed input counts as a no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, reporter: &mut Reporter<W>) -> Result<bool, Error> {
    reporter.confirm_prompt()?;
    let answer = read_answer(input)?;
    Ok(matches!(answer, Some(a) if a.trim().eq_ignore_ascii_case("y")))
}

/// Prompt until the input names a menu entry or `best`.
///
/// There is no retry cap. Returns `None` only when the input closes before a valid
/// choice was made.
pub fn select_format<R: BufRead, W: Write>(
    input: &mut R,
    reporter: &mut Reporter<W>,
    options: &[ResolutionOption],
    best_ceiling: u32,
) -> Result<Option<DownloadSelector>, Error> {
    loop {
        reporter.choice_prompt(options.len())?;
        let Some(answer) = read_answer(input)? else {
            return Ok(None);
        };

        match parse_choice(&answer, options, best_ceiling) {
            Ok(selector) => {
                debug!("Resolved selector {} from input {:?}", selector, answer.trim());
                return Ok(Some(selector));
            }
            Err(rejection) => reporter.rejected(&rejection)?,
        }
    }
}
