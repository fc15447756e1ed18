//! Best-effort filesystem primitives.
//!
//! Everything in this crate is fire-and-forget: predicates answer `false`
//! instead of failing, and mutations return `()` whether or not the OS call
//! succeeded. Callers that need to confirm an effect check afterwards with
//! [`is_file`] or [`is_directory`].
//!
//! Every handle opened here (`ReadDir`, `File`) is owned by the call that
//! opened it and closed on drop, on every return path.

pub use dir::{is_directory, is_file, list_entries, list_entries_recursive};
pub use ops::{
    copy_file, copy_file_with, create_directories, create_directory, move_file,
    remove_directories, remove_directory,
};

mod dir;
mod ops;
mod prefix;

/// Default chunk size for streaming copies.
pub const DEFAULT_BUFFER_SIZE: usize = 1 << 15;

#[derive(Clone, Copy, Debug)]
pub struct CopyOptions {
    buffer_size: usize,
}

impl Default for CopyOptions {
    fn default() -> Self { Self::new() }
}

impl CopyOptions {
    pub fn new() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Chunk size used for each read/write round. Zero is bumped to one byte.
    pub fn buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    pub fn get_buffer_size(&self) -> usize { self.buffer_size }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_options_default() {
        assert_eq!(CopyOptions::default().get_buffer_size(), DEFAULT_BUFFER_SIZE);
    }

    #[test]
    fn test_copy_options_zero_buffer() {
        assert_eq!(CopyOptions::new().buffer_size(0).get_buffer_size(), 1);
    }
}
