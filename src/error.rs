//! Crate-level error type and `Result` alias.
//!
//! The read/write asymmetry of the batch loop is encoded as named
//! variants: `Load` is the only failure the batch recovers from (the
//! input is skipped and the loop continues), everything else is fatal
//! for the run.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot load file {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML parse error: {0}")]
    Parse(#[from] crate::io::ParseError),

    #[error("patch error: {0}")]
    Patch(#[from] crate::core::patch::PatchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
