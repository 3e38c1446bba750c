//! Slide content: loaded once at startup, never changed afterwards.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::SlideConfig;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Failed to read slide '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub body: String,
}

impl Slide {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Read a text file. The first non-empty line becomes the title, or the
    /// file stem when the file is blank. A markdown heading marker (`#`
    /// followed by whitespace) is stripped from the title.
    pub fn from_file(path: &Path) -> Result<Self, DeckError> {
        let content = fs::read_to_string(path).map_err(|e| DeckError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_text(&content, path))
    }

    fn from_text(content: &str, path: &Path) -> Self {
        let mut lines = content.lines().skip_while(|line| line.trim().is_empty());
        match lines.next() {
            Some(first) => {
                let title = heading_text(first.trim()).to_string();
                let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();
                Self { title, body }
            }
            None => {
                let title = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Self {
                    title,
                    body: String::new(),
                }
            }
        }
    }
}

/// Text of a markdown ATX heading line, or the line unchanged when it is not
/// one (`#1 priority` keeps its hash).
fn heading_text(line: &str) -> &str {
    let text = line.trim_start_matches('#');
    if text.len() == line.len() {
        return line;
    }
    if text.is_empty() || text.starts_with(char::is_whitespace) {
        text.trim()
    } else {
        line
    }
}

impl From<&SlideConfig> for Slide {
    fn from(config: &SlideConfig) -> Self {
        Self::new(config.title.clone(), config.body.clone())
    }
}

/// Slides from files given on the command line, or from the config when no
/// files were given. Order is preserved.
pub fn load_deck(paths: &[PathBuf], configured: &[SlideConfig]) -> Result<Vec<Slide>, DeckError> {
    if paths.is_empty() {
        return Ok(configured.iter().map(Slide::from).collect());
    }
    paths.iter().map(|path| Slide::from_file(path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_heading_becomes_title() {
        let slide = Slide::from_text("\n# Welcome\n\nFirst line\nSecond line\n", Path::new("a.md"));
        assert_eq!(slide.title, "Welcome");
        assert_eq!(slide.body, "First line\nSecond line");
    }

    #[test]
    fn hash_without_space_is_plain_text() {
        let slide = Slide::from_text("#1 priority\nship it\n", Path::new("a.txt"));
        assert_eq!(slide.title, "#1 priority");
        assert_eq!(slide.body, "ship it");

        let slide = Slide::from_text("## Agenda\n", Path::new("b.md"));
        assert_eq!(slide.title, "Agenda");
    }

    #[test]
    fn blank_file_uses_stem() {
        let slide = Slide::from_text("  \n", Path::new("/tmp/intro.txt"));
        assert_eq!(slide, Slide::new("intro", ""));
    }
}
