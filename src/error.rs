//! Error type shared by the tree printer and the scanner

use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while walking the filesystem or writing a report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A read or write against a known path failed.
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to an output sink failed.
    #[error("error writing output: {0}")]
    Write(#[source] io::Error),

    /// The recursive scan walker failed to read an entry.
    #[error(transparent)]
    Walk(#[from] ignore::Error),

    /// The configured marker did not compile into a pattern.
    #[error("invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    /// Attach a path to an I/O error.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Extension for tagging `io::Result` values with the path being accessed.
pub(crate) trait IoResultExt<T> {
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| Error::io(path, e))
    }
}
