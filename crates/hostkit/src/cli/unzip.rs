use std::path::PathBuf;
use std::process::ExitCode;

use hostkit::archive::{UnzipOptions, unzip_to_folder_with};

#[derive(Debug, clap::Args)]
pub struct Unzip {
    pub archive: PathBuf,
    /// Existing directory to extract into.
    pub dest: PathBuf,
    /// Skip refreshing directory modification times.
    #[arg(long)]
    pub no_touch: bool,
}

impl Unzip {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        let options = UnzipOptions::new().touch_directories(!self.no_touch);
        match unzip_to_folder_with(&self.archive, &self.dest, options) {
            Ok(()) => Ok(ExitCode::SUCCESS),
            Err(e) => {
                eprintln!("error: {e}");
                Ok(ExitCode::from(u8::try_from(e.code()).unwrap_or(1)))
            }
        }
    }
}
