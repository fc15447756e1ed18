//! Per-OS backends. Exactly one is compiled in as [`crate::Native`].

#[cfg(unix)]
pub mod unix;
#[cfg(windows)]
pub mod windows;
