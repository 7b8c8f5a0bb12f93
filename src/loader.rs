//! Reads a tutorial from disk and hands it over as HTML.
//!
//! Markdown is rendered with the GitHub flavoured extensions and with raw HTML
//! passed through untouched, otherwise the annotation comments would be lost
//! before the extractor ever sees them.

use std::fs;
use std::path::Path;

use comrak::{markdown_to_html, ComrakOptions};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Markdown,
    Html,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("md") => Ok(InputFormat::Markdown),
            Some("html") => Ok(InputFormat::Html),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Load `path` and return its content as HTML bytes.
///
/// The extension is checked before the file is touched, so an unsupported
/// input never costs a read.
pub fn load(path: &Path) -> Result<Vec<u8>> {
    let format = InputFormat::from_path(path)?;
    log::debug!("loading {:?} as {:?}", path, format);

    match format {
        InputFormat::Markdown => {
            let markdown = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
            Ok(render_markdown(&markdown))
        }
        InputFormat::Html => fs::read(path).map_err(|e| Error::io(path, e)),
    }
}

pub fn render_markdown(markdown: &str) -> Vec<u8> {
    markdown_to_html(markdown, &gfm_options()).into_bytes()
}

fn gfm_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.render.unsafe_ = true;
    options
}
