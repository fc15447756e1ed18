use std::path::{Path, PathBuf};

fn is_separator(byte: u8) -> bool { byte == b'/' || byte == b'\\' }

/// Every proper prefix of `path` that ends right before a `/` or `\`,
/// shortest first. A separator at index 0 is skipped so the root is never
/// yielded.
#[cfg(unix)]
pub(crate) fn separator_prefixes(path: &Path) -> Vec<PathBuf> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let bytes = path.as_os_str().as_bytes();
    split_points(bytes)
        .map(|end| PathBuf::from(OsStr::from_bytes(&bytes[..end])))
        .collect()
}

/// Non-Unicode paths are split on their lossy rendering.
#[cfg(not(unix))]
pub(crate) fn separator_prefixes(path: &Path) -> Vec<PathBuf> {
    let text = path.to_string_lossy();
    split_points(text.as_bytes())
        .map(|end| PathBuf::from(&text[..end]))
        .collect()
}

fn split_points(bytes: &[u8]) -> impl Iterator<Item = usize> + '_ {
    bytes
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, b)| is_separator(**b))
        .map(|(end, _)| end)
}
