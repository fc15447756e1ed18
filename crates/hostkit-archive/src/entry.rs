use std::fs::File;
use std::path::Path;

use zip::ZipArchive;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    /// Directory entries are stored with a trailing separator.
    pub fn from_name(name: &str) -> Self {
        if name.ends_with('/') || name.ends_with('\\') {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }
}

/// Metadata of one stored entry, in archive order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub kind: EntryKind,
    /// Uncompressed size in bytes.
    pub size: u64,
}

pub(crate) fn open_archive(zip_path: &Path) -> Result<ZipArchive<File>> {
    let archive = File::open(zip_path)
        .map_err(zip::result::ZipError::Io)
        .and_then(ZipArchive::new);

    archive.map_err(|source| {
        tracing::warn!(path = %zip_path.display(), error = %source, "could not open ZIP file");
        Error::Open {
            path: zip_path.to_path_buf(),
            source,
        }
    })
}

/// Reads the central directory without extracting anything.
pub fn list_archive(zip_path: impl AsRef<Path>) -> Result<Vec<ArchiveEntry>> {
    let mut archive = open_archive(zip_path.as_ref())?;

    (0..archive.len())
        .map(|index| {
            let entry = archive
                .by_index_raw(index)
                .map_err(|source| Error::Entry { index, source })?;
            Ok(ArchiveEntry {
                name: entry.name().to_owned(),
                kind: EntryKind::from_name(entry.name()),
                size: entry.size(),
            })
        })
        .collect()
}
