use std::path::Path;

use nix::sys::utsname::uname;
use nix::time::{ClockId, clock_gettime};

use crate::Backend;
use crate::clock::fallback_nanoseconds;
use crate::command::Command;
use crate::error::{Error, Result};

/// POSIX backend (Linux, macOS, BSDs).
#[derive(Debug, Clone, Copy)]
pub struct Unix;

#[cfg(any(target_os = "linux", target_os = "android"))]
const MONOTONIC: ClockId = ClockId::CLOCK_MONOTONIC_RAW;
#[cfg(not(any(target_os = "linux", target_os = "android")))]
const MONOTONIC: ClockId = ClockId::CLOCK_MONOTONIC;

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(not(target_os = "macos"))]
const OPENER: &str = "xdg-open";

impl Backend for Unix {
    fn set_thread_name(name: &str) {
        #[cfg(any(target_os = "linux", target_os = "android"))]
        {
            // The kernel truncates to 15 bytes; interior NULs cannot be expressed.
            let Ok(name) = std::ffi::CString::new(name) else {
                return;
            };
            if let Err(e) = nix::sys::prctl::set_name(&name) {
                tracing::debug!(error = %e, "failed to set thread name");
            }
        }
        #[cfg(not(any(target_os = "linux", target_os = "android")))]
        let _ = name;
    }

    fn operating_system_info() -> String {
        match uname() {
            Ok(u) => format!(
                "{} {} {} {}",
                u.sysname().to_string_lossy(),
                u.release().to_string_lossy(),
                u.version().to_string_lossy(),
                u.machine().to_string_lossy(),
            ),
            Err(e) => {
                tracing::debug!(error = %e, "uname failed");
                crate::os::long_os_version().unwrap_or_else(|| std::env::consts::OS.to_owned())
            }
        }
    }

    fn nanoseconds_monotonic() -> i64 {
        match clock_gettime(MONOTONIC) {
            Ok(ts) => (ts.tv_sec() as i64) * 1_000_000_000 + ts.tv_nsec() as i64,
            Err(_) => fallback_nanoseconds(),
        }
    }

    fn open_browser(url: &str) { shell_open(url) }

    fn open_folder(path: &Path) { shell_open(&path.to_string_lossy()) }

    fn run_process_detached(_path: &Path) -> Result<()> {
        Err(Error::Unsupported {
            operation: "run_process_detached",
        })
    }
}

/// The shell line handed to `sh -c`. `target` is quoted but not escaped.
fn open_script(target: &str) -> String { format!("{OPENER} \"{target}\"") }

fn shell_open(target: &str) {
    match Command::shell(open_script(target)).status() {
        Ok(status) if !status.success() => {
            tracing::debug!(arg = target, %status, "opener exited unsuccessfully");
        }
        Ok(_) => {}
        Err(e) => tracing::debug!(arg = target, error = %e, "opener could not be started"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_script_quotes_target() {
        let script = open_script("https://example.com/a b");
        assert!(script.starts_with(OPENER));
        assert!(script.ends_with("\"https://example.com/a b\""));
    }

    #[test]
    fn test_operating_system_info_has_four_fields() {
        let info = Unix::operating_system_info();
        assert!(info.split(' ').count() >= 4);
        #[cfg(target_os = "linux")]
        assert!(info.starts_with("Linux"));
    }

    #[test]
    fn test_run_process_detached_unsupported() {
        let err = Unix::run_process_detached(Path::new("/bin/true")).unwrap_err();
        assert!(matches!(err, Error::Unsupported { operation: "run_process_detached" }));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_set_thread_name_visible_in_procfs() {
        std::thread::spawn(|| {
            Unix::set_thread_name("hostkit-worker-long-name");
            let comm = std::fs::read_to_string("/proc/thread-self/comm").unwrap();
            assert_eq!(comm.trim_end(), "hostkit-worker-");
        })
        .join()
        .unwrap();
    }

    #[test]
    fn test_set_thread_name_with_nul_is_noop() {
        Unix::set_thread_name("bad\0name");
    }
}
