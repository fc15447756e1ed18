use std::process::ExitCode;

use hostkit::platform::{long_os_version, os_kind};
use hostkit::{logical_core_count, nanoseconds_monotonic, operating_system_info};

#[derive(Debug, clap::Args)]
pub struct Info {}

impl Info {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        println!("os:       {:?}", os_kind());
        println!("system:   {}", operating_system_info());
        if let Some(version) = long_os_version() {
            println!("version:  {version}");
        }
        match logical_core_count() {
            0 => println!("cores:    unknown"),
            n => println!("cores:    {n}"),
        }
        println!("clock_ns: {}", nanoseconds_monotonic());
        Ok(ExitCode::SUCCESS)
    }
}
