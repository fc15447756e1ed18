use std::io;
use std::path::PathBuf;

use zip::result::ZipError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not open ZIP file '{path}': {source}")]
    Open { path: PathBuf, source: ZipError },

    #[error("destination '{path}' is not an existing directory")]
    MissingDestination { path: PathBuf },

    #[error("failed to read metadata of entry #{index}: {source}")]
    Entry { index: usize, source: ZipError },

    #[error("entry '{name}' escapes the destination directory")]
    UnsafePath { name: String },

    #[error("failed to open entry '{name}': {source}")]
    EntryStream { name: String, source: ZipError },

    #[error("could not create file '{path}': {source}")]
    CreateFile { path: PathBuf, source: io::Error },

    #[error("failed to extract '{path}': {source}")]
    ExtractionFailed { path: PathBuf, source: io::Error },
}

impl Error {
    /// Non-zero status code for callers that report extraction as an integer.
    pub fn code(&self) -> i32 {
        match self {
            Error::Open { .. } => 1,
            Error::MissingDestination { .. } => 2,
            Error::Entry { .. } => 3,
            Error::UnsafePath { .. } => 4,
            Error::EntryStream { .. } => 5,
            Error::CreateFile { .. } => 6,
            Error::ExtractionFailed { .. } => 7,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
