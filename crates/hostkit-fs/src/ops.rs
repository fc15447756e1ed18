//! Fire-and-forget file and directory mutation.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::CopyOptions;
use crate::prefix::separator_prefixes;

/// Moves `src` to `dest`, replacing `dest` if it exists.
///
/// Some platforms refuse to rename over an existing file, so `dest` is removed
/// first. The two steps are not atomic; a crash in between can leave neither
/// file in place.
pub fn move_file(src: impl AsRef<Path>, dest: impl AsRef<Path>) {
    let (src, dest) = (src.as_ref(), dest.as_ref());
    let _ = fs::remove_file(dest);
    if let Err(e) = fs::rename(src, dest) {
        tracing::debug!(src = %src.display(), dest = %dest.display(), error = %e, "move failed");
    }
}

/// Copies `src` to `dest` in fixed-size chunks.
///
/// If `src` cannot be opened `dest` is never created. A failed write stops the
/// copy and leaves the partial output behind.
pub fn copy_file(src: impl AsRef<Path>, dest: impl AsRef<Path>) {
    copy_file_with(src, dest, CopyOptions::default())
}

pub fn copy_file_with(src: impl AsRef<Path>, dest: impl AsRef<Path>, options: CopyOptions) {
    let (src, dest) = (src.as_ref(), dest.as_ref());
    let Ok(mut source) = File::open(src) else {
        return;
    };
    let Ok(mut target) = File::create(dest) else {
        return;
    };

    if let Err(e) = stream(&mut source, &mut target, options.get_buffer_size()) {
        tracing::debug!(src = %src.display(), dest = %dest.display(), error = %e, "copy stopped early");
    }
}

fn stream(source: &mut impl Read, target: &mut impl Write, buffer_size: usize) -> io::Result<u64> {
    let mut buffer = vec![0u8; buffer_size];
    let mut total = 0u64;
    loop {
        let n = source.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        target.write_all(&buffer[..n])?;
        total += n as u64;
    }
    Ok(total)
}

/// Creates a single directory level. The parent must exist; an existing
/// directory is not an error.
pub fn create_directory(path: impl AsRef<Path>) {
    let path = path.as_ref();
    if let Err(e) = dir_builder().create(path) {
        if e.kind() != io::ErrorKind::AlreadyExists {
            tracing::trace!(path = %path.display(), error = %e, "create_directory failed");
        }
    }
}

#[cfg(unix)]
fn dir_builder() -> fs::DirBuilder {
    use std::os::unix::fs::DirBuilderExt;

    let mut builder = fs::DirBuilder::new();
    builder.mode(0o755);
    builder
}

#[cfg(not(unix))]
fn dir_builder() -> fs::DirBuilder { fs::DirBuilder::new() }

/// Creates `path` and every ancestor named by a `/` or `\` in it.
pub fn create_directories(path: impl AsRef<Path>) {
    let path = path.as_ref();
    for prefix in separator_prefixes(path) {
        create_directory(prefix);
    }
    create_directory(path);
}

/// Removes one empty directory.
pub fn remove_directory(path: impl AsRef<Path>) {
    let path = path.as_ref();
    if let Err(e) = fs::remove_dir(path) {
        tracing::trace!(path = %path.display(), error = %e, "remove_directory failed");
    }
}

/// Removes `path`, then each ancestor named by a separator, deepest first.
/// Ancestors that are not empty are left alone.
pub fn remove_directories(path: impl AsRef<Path>) {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return;
    }
    remove_directory(path);
    for prefix in separator_prefixes(path).into_iter().rev() {
        remove_directory(prefix);
    }
}
