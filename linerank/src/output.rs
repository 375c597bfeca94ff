//! Rendering of search results

use crate::error::{Error, Result};
use crate::search::SearchResult;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One matching line per output line (default)
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::InvalidOption(format!("Unknown output format: {}", s))),
        }
    }
}

/// Render results in the given format.
///
/// With `show_scores`, text output prefixes each line with its line number
/// and score. JSON output always carries both.
pub fn render(results: &[SearchResult<'_>], format: OutputFormat, show_scores: bool) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Text => Ok(results
            .iter()
            .map(|r| {
                if show_scores {
                    format!("{}: [{:.4}] {}", r.line_number, r.score, r.text)
                } else {
                    r.text.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
