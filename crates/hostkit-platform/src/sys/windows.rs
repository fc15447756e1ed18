use std::ffi::OsStr;
use std::os::windows::prelude::OsStrExt;
use std::path::Path;

use once_cell::sync::Lazy;
use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Performance::{QueryPerformanceCounter, QueryPerformanceFrequency};
use windows::Win32::System::SystemInformation::{GetVersionExW, OSVERSIONINFOW};
use windows::Win32::System::Threading::{GetCurrentThread, SetThreadDescription};
use windows::Win32::UI::Shell::{
    SEE_MASK_NOCLOSEPROCESS, SHELLEXECUTEINFOW, ShellExecuteExW, ShellExecuteW,
};
use windows::Win32::UI::WindowsAndMessaging::{SW_SHOW, SW_SHOWDEFAULT};
use windows::core::PCWSTR;

use crate::Backend;
use crate::clock::fallback_nanoseconds;
use crate::error::{Error, Result};

/// Native Windows backend.
#[derive(Debug, Clone, Copy)]
pub struct Windows;

fn wide(s: impl AsRef<OsStr>) -> Vec<u16> {
    s.as_ref().encode_wide().chain(std::iter::once(0)).collect()
}

static PERFORMANCE_FREQUENCY: Lazy<i64> = Lazy::new(|| {
    let mut frequency = 0i64;
    match unsafe { QueryPerformanceFrequency(&mut frequency) } {
        Ok(()) => frequency,
        Err(_) => 0,
    }
});

/// Closes a process handle returned by `ShellExecuteExW` without waiting on it.
struct ProcessHandle(HANDLE);

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        if !self.0.is_invalid() {
            let _ = unsafe { CloseHandle(self.0) };
        }
    }
}

impl Backend for Windows {
    fn set_thread_name(name: &str) {
        let name = wide(name);
        let result =
            unsafe { SetThreadDescription(GetCurrentThread(), PCWSTR::from_raw(name.as_ptr())) };
        if let Err(e) = result {
            tracing::debug!(error = %e, "failed to set thread description");
        }
    }

    fn operating_system_info() -> String {
        let mut info = OSVERSIONINFOW {
            dwOSVersionInfoSize: std::mem::size_of::<OSVERSIONINFOW>() as u32,
            ..Default::default()
        };
        match unsafe { GetVersionExW(&mut info) } {
            Ok(()) => format!("Windows {}.{}", info.dwMajorVersion, info.dwMinorVersion),
            Err(e) => {
                tracing::debug!(error = %e, "GetVersionExW failed");
                "Windows".to_owned()
            }
        }
    }

    fn nanoseconds_monotonic() -> i64 {
        let frequency = *PERFORMANCE_FREQUENCY;
        let mut counter = 0i64;
        if frequency <= 0 || unsafe { QueryPerformanceCounter(&mut counter) }.is_err() {
            return fallback_nanoseconds();
        }
        // Scale in 128 bits; the frequency need not divide 10^9.
        (i128::from(counter) * 1_000_000_000 / i128::from(frequency)) as i64
    }

    fn open_browser(url: &str) { shell_execute("open", OsStr::new(url)) }

    fn open_folder(path: &Path) { shell_execute("explore", path.as_os_str()) }

    fn run_process_detached(path: &Path) -> Result<()> {
        let verb = wide("runas");
        let file = wide(path);
        let mut info = SHELLEXECUTEINFOW {
            cbSize: std::mem::size_of::<SHELLEXECUTEINFOW>() as u32,
            fMask: SEE_MASK_NOCLOSEPROCESS,
            lpVerb: PCWSTR::from_raw(verb.as_ptr()),
            lpFile: PCWSTR::from_raw(file.as_ptr()),
            nShow: SW_SHOW.0,
            ..Default::default()
        };

        unsafe { ShellExecuteExW(&mut info) }.map_err(|e| Error::Launch {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        // Released immediately; the child keeps running on its own.
        drop(ProcessHandle(info.hProcess));
        Ok(())
    }
}

fn shell_execute(verb: &str, target: &OsStr) {
    let verb = wide(verb);
    let target_w = wide(target);
    let instance = unsafe {
        ShellExecuteW(
            None,
            PCWSTR::from_raw(verb.as_ptr()),
            PCWSTR::from_raw(target_w.as_ptr()),
            PCWSTR::null(),
            PCWSTR::null(),
            SW_SHOWDEFAULT,
        )
    };
    // Values at or below 32 are error codes.
    if instance.0 as isize <= 32 {
        tracing::debug!(arg = %target.to_string_lossy(), code = instance.0 as isize, "ShellExecuteW failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_is_nul_terminated() {
        assert_eq!(wide("ab"), vec![b'a' as u16, b'b' as u16, 0]);
    }

    #[test]
    fn test_operating_system_info_prefix() {
        assert!(Windows::operating_system_info().starts_with("Windows"));
    }

    #[test]
    fn test_performance_frequency_positive() {
        assert!(*PERFORMANCE_FREQUENCY > 0);
    }

    #[test]
    fn test_set_thread_name() {
        Windows::set_thread_name("hostkit-worker");
    }
}
