//! Process, thread, clock and launch primitives behind a single interface.
//!
//! # Architecture
//!
//! - [`Backend`] - the operations whose implementation differs per OS
//! - `sys/` - one stateless backend per platform family
//! - [`Native`] - the backend selected for this build
//!
//! The free functions in this crate always go through [`Native`]; nothing
//! outside `sys/` branches on the platform.

pub use clock::{Stopwatch, nanoseconds_monotonic};
pub use command::Command;
pub use error::{Error, Result};
pub use launch::{open_browser, open_folder, run_process_detached};
pub use os::{Os, logical_core_count, long_os_version, os_kind};
pub use trace::{Frame, MAX_FRAMES, TraceOptions, capture_frames, stack_trace, stack_trace_with};

pub mod clock;
pub mod command;
mod error;
pub mod launch;
pub mod os;
pub mod sys;
pub mod trace;

use std::path::Path;

/// Platform-dependent operations. Implementations carry no state.
pub trait Backend {
    /// Labels the calling thread for debuggers. Never fails observably.
    fn set_thread_name(name: &str);

    /// Human-readable OS description; the format is not meant to be parsed.
    fn operating_system_info() -> String;

    fn nanoseconds_monotonic() -> i64;

    fn open_browser(url: &str);

    fn open_folder(path: &Path);

    fn run_process_detached(path: &Path) -> Result<()>;
}

#[cfg(unix)]
pub type Native = sys::unix::Unix;

#[cfg(windows)]
pub type Native = sys::windows::Windows;

/// Names the calling thread where the platform supports it.
pub fn set_thread_name(name: &str) { Native::set_thread_name(name) }

/// e.g. `Linux 6.8.0 #1 SMP ... x86_64` or `Windows 10.0`.
pub fn operating_system_info() -> String { Native::operating_system_info() }
