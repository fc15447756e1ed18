use std::path::PathBuf;
use std::process::ExitCode;

use hostkit::{is_directory, list_entries_recursive};

#[derive(Debug, clap::Args)]
pub struct Ls {
    pub path: PathBuf,
    /// Levels of subdirectories to expand; 0 lists only `path`.
    #[arg(short, long, default_value_t = 0)]
    pub depth: usize,
}

impl Ls {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        if !is_directory(&self.path) {
            anyhow::bail!("not a directory: {}", self.path.display());
        }

        for entry in list_entries_recursive(&self.path, self.depth) {
            let marker = if is_directory(&entry) { "/" } else { "" };
            println!("{}{marker}", entry.display());
        }
        Ok(ExitCode::SUCCESS)
    }
}
