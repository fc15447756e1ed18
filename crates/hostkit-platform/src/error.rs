use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{operation} is not supported on this platform")]
    Unsupported { operation: &'static str },

    #[error("failed to launch {path}: {source}")]
    Launch { path: PathBuf, source: io::Error },

    #[error("command failed: {cmd}, source: {source}")]
    CommandFailed { cmd: String, source: io::Error },
}
