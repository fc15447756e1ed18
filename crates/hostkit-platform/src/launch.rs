//! Handing URLs, folders and executables to the OS shell.
//!
//! These calls block until the OS hands off (or, on Unix, until the opener
//! exits); run them off latency-sensitive threads. Inputs are passed to the
//! shell without validation or escaping, so only pass trusted values.

use std::path::Path;

use crate::error::Result;
use crate::{Backend, Native};

/// Opens `url` with the default handler. Also works for files and folders.
pub fn open_browser(url: &str) { Native::open_browser(url) }

/// Shows `path` in Explorer, Finder or the desktop file manager.
pub fn open_folder(path: impl AsRef<Path>) { Native::open_folder(path.as_ref()) }

/// Starts an executable that outlives the current process and is never waited
/// on. Fails with [`crate::Error::Unsupported`] where the platform has no
/// documented way to do this.
pub fn run_process_detached(path: impl AsRef<Path>) -> Result<()> {
    Native::run_process_detached(path.as_ref())
}
