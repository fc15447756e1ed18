//! Streaming ZIP extraction into an existing directory.
//!
//! # Architecture
//!
//! - `entry.rs` - opening archives and reading entry metadata
//! - `unzip.rs` - extraction loop
//! - `options.rs` - extraction knobs
//!
//! The archive handle and every per-entry stream and output file are owned
//! by the call that opened them and released on drop, including on the
//! early returns of a failed extraction.

pub use entry::{ArchiveEntry, EntryKind, list_archive};
pub use error::{Error, Result};
pub use options::{DEFAULT_BUFFER_SIZE, UnzipOptions};
pub use unzip::{unzip_to_folder, unzip_to_folder_with};

mod entry;
mod error;
mod options;
mod unzip;
