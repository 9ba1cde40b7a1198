//! Plain-text loading
//!
//! Turns a text file into the raw paragraph strings the segmenter consumes:
//! the leading header lines are skipped, consecutive non-blank lines are
//! joined with single spaces, and blank lines separate paragraphs.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Lines dropped before the first paragraph (licence banner, title page).
    pub header_lines: usize,
    /// Maximum number of paragraphs kept; 0 keeps them all.
    pub paragraph_limit: usize,
}

impl LoadOptions {
    /// Header length of the Project Gutenberg edition of *Du côté de chez Swann*.
    pub const GUTENBERG_HEADER_LINES: usize = 56;
    pub const DEFAULT_PARAGRAPH_LIMIT: usize = 20;

    /// Keep every line and every paragraph.
    pub fn unlimited() -> Self {
        LoadOptions {
            header_lines: 0,
            paragraph_limit: 0,
        }
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            header_lines: Self::GUTENBERG_HEADER_LINES,
            paragraph_limit: Self::DEFAULT_PARAGRAPH_LIMIT,
        }
    }
}

/// Split `text` into paragraphs.
pub fn paragraphs_from_text(text: &str, options: &LoadOptions) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines().skip(options.header_lines) {
        let line = line.trim();
        if !line.is_empty() {
            current.push(line);
        } else if !current.is_empty() {
            paragraphs.push(current.join(" "));
            current.clear();
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    if options.paragraph_limit > 0 {
        paragraphs.truncate(options.paragraph_limit);
    }
    paragraphs
}

/// Read `path` as UTF-8 and split it with [`paragraphs_from_text`].
pub fn load_paragraphs(path: &Path, options: &LoadOptions) -> Result<Vec<String>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let paragraphs = paragraphs_from_text(&text, options);
    debug!(
        path = %path.display(),
        paragraphs = paragraphs.len(),
        header_lines = options.header_lines,
        "loaded text"
    );
    Ok(paragraphs)
}
