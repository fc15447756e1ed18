use std::process::ExitCode;

use hostkit::{open_browser, open_folder};

#[derive(Debug, clap::Args)]
pub struct Open {
    /// URL, file or folder. Passed to the shell unescaped.
    pub target: String,
    /// Reveal in the file manager instead of opening with the default handler.
    #[arg(long)]
    pub folder: bool,
}

impl Open {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        if self.folder {
            open_folder(&self.target);
        } else {
            open_browser(&self.target);
        }
        Ok(ExitCode::SUCCESS)
    }
}
