//! Directory enumeration and path predicates.

use std::fs;
use std::path::{Path, PathBuf};

/// Lists the immediate children of `path` as full paths, sorted.
///
/// A directory that cannot be opened yields an empty list.
pub fn list_entries(path: impl AsRef<Path>) -> Vec<PathBuf> {
    let path = path.as_ref();
    let Ok(read_dir) = fs::read_dir(path) else {
        tracing::trace!(path = %path.display(), "directory not readable");
        return Vec::new();
    };

    let mut entries: Vec<PathBuf> = read_dir
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.file_name()),
            Err(e) => {
                tracing::trace!(path = %path.display(), error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|name| name != "." && name != "..")
        .map(|name| path.join(name))
        .collect();

    entries.sort();
    entries
}

/// Breadth-first listing down to `max_depth` levels below `path`.
///
/// Depth 0 is [`list_entries`]. Subdirectory contents are appended after
/// everything found at the current level. Symlink cycles are bounded only by
/// the depth.
pub fn list_entries_recursive(path: impl AsRef<Path>, max_depth: usize) -> Vec<PathBuf> {
    let mut entries = list_entries(path);
    if max_depth == 0 {
        return entries;
    }

    // The vec grows while we walk it; only the entries present now are expanded.
    let limit = entries.len();
    for i in 0..limit {
        if is_directory(&entries[i]) {
            let nested = list_entries_recursive(&entries[i], max_depth - 1);
            entries.extend(nested);
        }
    }
    entries
}

/// Whether `path` names a regular file. Any stat failure answers `false`.
pub fn is_file(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Whether `path` names a directory. Any stat failure answers `false`.
pub fn is_directory(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::tempdir;

    #[test]
    fn test_list_entries_sorted() {
        let dir = tempdir().unwrap();
        for name in ["c", "a", "b"] {
            fs::write(dir.path().join(name), name).unwrap();
        }

        let entries = list_entries(dir.path());
        assert_eq!(
            entries,
            vec![dir.path().join("a"), dir.path().join("b"), dir.path().join("c")]
        );
    }

    #[test]
    fn test_list_entries_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(list_entries(&missing).is_empty());
        assert!(!is_file(&missing));
        assert!(!is_directory(&missing));
    }

    #[test]
    fn test_list_entries_on_file_is_empty() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "data").unwrap();
        assert!(list_entries(&file).is_empty());
    }

    #[test]
    fn test_recursive_depth_zero_matches_flat() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/inner.txt"), "x").unwrap();
        fs::write(dir.path().join("top.txt"), "x").unwrap();

        assert_eq!(list_entries_recursive(dir.path(), 0), list_entries(dir.path()));
    }

    #[test]
    fn test_recursive_appends_after_current_level() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/deep")).unwrap();
        fs::write(dir.path().join("a/one.txt"), "1").unwrap();
        fs::write(dir.path().join("a/deep/two.txt"), "2").unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();

        let entries = list_entries_recursive(dir.path(), 1);
        assert_eq!(
            entries,
            vec![
                dir.path().join("a"),
                dir.path().join("b.txt"),
                dir.path().join("a").join("deep"),
                dir.path().join("a").join("one.txt"),
            ]
        );

        let deeper = list_entries_recursive(dir.path(), 2);
        assert_eq!(deeper.len(), 5);
        assert_eq!(deeper[4], dir.path().join("a").join("deep").join("two.txt"));
    }

    #[test]
    fn test_recursive_is_monotonic_in_depth() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("x/y/z")).unwrap();
        fs::write(dir.path().join("x/y/z/leaf"), "").unwrap();

        let mut previous = BTreeSet::new();
        for depth in 0..5 {
            let current: BTreeSet<_> = list_entries_recursive(dir.path(), depth)
                .into_iter()
                .collect();
            assert!(previous.is_subset(&current));
            previous = current;
        }
        assert_eq!(previous.len(), 4);
    }

    #[test]
    fn test_predicates() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, "").unwrap();

        assert!(is_file(&file));
        assert!(!is_directory(&file));
        assert!(is_directory(dir.path()));
        assert!(!is_file(dir.path()));
    }
}
