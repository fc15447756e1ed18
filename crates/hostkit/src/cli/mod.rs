use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod info;
mod ls;
mod open;
mod trace;
mod unzip;

#[derive(Debug, Parser)]
#[command(name = "hostkit", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(name = "ls", alias = "list", about = "List a directory, optionally recursing")]
    Ls(ls::Ls),
    #[command(name = "unzip", about = "Extract a ZIP archive into an existing directory")]
    Unzip(unzip::Unzip),
    #[command(name = "info", alias = "i", about = "Show OS, CPU and clock information")]
    Info(info::Info),
    #[command(name = "trace", about = "Print the current stack trace")]
    Trace(trace::Trace),
    #[command(name = "open", about = "Open a URL or folder with the desktop handler")]
    Open(open::Open),
}

impl App {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        tracing::debug!(command = ?self.cmd, "dispatching");
        match self.cmd {
            Commands::Ls(cmd) => cmd.run(),
            Commands::Unzip(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Trace(cmd) => cmd.run(),
            Commands::Open(cmd) => cmd.run(),
        }
    }
}
