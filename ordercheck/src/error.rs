//! Fatal input errors.
//!
//! Only problems with the inputs themselves abort a run: a base path that
//! is not a directory, an unreadable file, a pattern that does not
//! compile, or a stats file without the expected header. Everything the
//! analysis *finds* in well-formed inputs is a
//! [`Finding`](crate::Finding), never an error.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("{}: no {} column in header", .path.display(), .column)]
    MissingColumn { path: PathBuf, column: String },

    #[error("{}: line {} has no parseable {} value", .path.display(), .line, .column)]
    MalformedValue {
        path: PathBuf,
        line: usize,
        column: String,
    },
}
