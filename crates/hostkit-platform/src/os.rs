//! Operating system and CPU facts.

use once_cell::sync::Lazy;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Operating system families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Windows,
    Macos,
    Linux,
    Unknown,
}

impl Os {
    fn from_target(name: &str) -> Self {
        match name {
            "windows" => Os::Windows,
            "macos" => Os::Macos,
            "linux" | "android" => Os::Linux,
            _ => Os::Unknown,
        }
    }
}

static SYSTEM_INFO: Lazy<SystemInfo> = Lazy::new(SystemInfo::load);

struct SystemInfo {
    logical_cores: usize,
    long_version:  Option<String>,
}

impl SystemInfo {
    fn load() -> Self {
        let sys =
            System::new_with_specifics(RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing()));

        // sysinfo reports no CPUs on targets it does not support.
        let logical_cores = match sys.cpus().len() {
            0 => std::thread::available_parallelism().map_or(0, |n| n.get()),
            n => n,
        };

        Self {
            logical_cores,
            long_version:  System::long_os_version(),
        }
    }
}

/// The operating system this build targets.
pub fn os_kind() -> Os { Os::from_target(std::env::consts::OS) }

/// Number of hardware threads visible to the scheduler.
///
/// Zero means the count could not be determined; never divide by it.
pub fn logical_core_count() -> usize { SYSTEM_INFO.logical_cores }

/// Marketing name and version, e.g. `Linux (Ubuntu 24.04)`, when known.
pub fn long_os_version() -> Option<String> { SYSTEM_INFO.long_version.clone() }
