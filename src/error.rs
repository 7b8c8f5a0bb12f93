use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while turning a tutorial into a script.
#[derive(Debug, Error)]
pub enum Error {
    #[error("file format not supported for {0:?}, use either a .md or a .html file")]
    UnsupportedFormat(PathBuf),

    #[error("i/o error on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse document: {0}")]
    Parse(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
