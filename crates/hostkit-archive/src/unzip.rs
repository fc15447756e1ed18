use std::fs::{self, File};
use std::io::{Read, Seek, Write};
use std::path::{Component, Path, PathBuf};

use hostkit_fs::{create_directory, is_directory};
use zip::ZipArchive;

use crate::entry::{EntryKind, open_archive};
use crate::error::{Error, Result};
use crate::options::UnzipOptions;

/// Name of the sentinel created and removed to bump a directory's mtime.
const TOUCH_SENTINEL: &str = ".tmp";

/// Extracts every entry of `zip_path` into `dir`, which must already exist.
///
/// Entries are processed in archive order. The first failing entry aborts
/// the whole extraction; files written before it are left in place. The
/// archive is closed on every return path.
pub fn unzip_to_folder(zip_path: impl AsRef<Path>, dir: impl AsRef<Path>) -> Result<()> {
    unzip_to_folder_with(zip_path, dir, UnzipOptions::default())
}

pub fn unzip_to_folder_with(
    zip_path: impl AsRef<Path>,
    dir: impl AsRef<Path>,
    options: UnzipOptions,
) -> Result<()> {
    let dir = dir.as_ref();
    let mut archive = open_archive(zip_path.as_ref())?;

    if !is_directory(dir) {
        return Err(Error::MissingDestination {
            path: dir.to_path_buf(),
        });
    }

    let mut buffer = vec![0u8; options.get_buffer_size()];
    for index in 0..archive.len() {
        let (name, relative) = entry_metadata(&mut archive, index)?;

        match EntryKind::from_name(&name) {
            EntryKind::Directory => {
                let path = create_below(dir, &relative);
                if options.get_touch_directories() {
                    touch_directory(&path);
                }
            }
            EntryKind::File => {
                extract_file(&mut archive, index, &name, dir, &relative, &mut buffer)?;
            }
        }
    }

    Ok(())
}

/// Stored name and its destination-relative path. Names that are absolute
/// or climb out with `..` are rejected.
fn entry_metadata<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    index: usize,
) -> Result<(String, PathBuf)> {
    let entry = archive.by_index_raw(index).map_err(|source| {
        tracing::warn!(index, error = %source, "failed to read ZIP entry metadata");
        Error::Entry { index, source }
    })?;

    let name = entry.name().to_owned();
    match entry.enclosed_name().map(|p| p.to_path_buf()) {
        Some(relative) => Ok((name, relative)),
        None => {
            tracing::warn!(entry = %name, "refusing entry outside the destination");
            Err(Error::UnsafePath { name })
        }
    }
}

/// Creates `dir/relative` one level at a time without touching anything
/// above `dir`. Returns the full path.
fn create_below(dir: &Path, relative: &Path) -> PathBuf {
    let mut path = dir.to_path_buf();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            path.push(part);
            create_directory(&path);
        }
    }
    path
}

fn touch_directory(path: &Path) {
    let sentinel = path.join(TOUCH_SENTINEL);
    match File::create(&sentinel) {
        Ok(file) => {
            drop(file);
            let _ = fs::remove_file(&sentinel);
        }
        Err(e) => tracing::debug!(path = %path.display(), error = %e, "could not touch directory"),
    }
}

fn extract_file<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    index: usize,
    name: &str,
    dir: &Path,
    relative: &Path,
    buffer: &mut [u8],
) -> Result<()> {
    let mut entry = archive.by_index(index).map_err(|source| {
        tracing::warn!(entry = name, error = %source, "failed to open ZIP entry");
        Error::EntryStream {
            name: name.to_owned(),
            source,
        }
    })?;

    // Archives without explicit directory entries still extract.
    if let Some(parent) = relative.parent() {
        create_below(dir, parent);
    }

    let path = dir.join(relative);
    let mut out = File::create(&path).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "could not create file");
        Error::CreateFile {
            path: path.clone(),
            source,
        }
    })?;

    loop {
        let n = entry.read(buffer).map_err(|source| Error::ExtractionFailed {
            path: path.clone(),
            source,
        })?;
        if n == 0 {
            break;
        }
        out.write_all(&buffer[..n])
            .map_err(|source| Error::ExtractionFailed {
                path: path.clone(),
                source,
            })?;
    }

    Ok(())
}
