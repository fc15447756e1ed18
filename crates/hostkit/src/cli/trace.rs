use std::process::ExitCode;

use hostkit::platform::{MAX_FRAMES, TraceOptions, stack_trace_with};

#[derive(Debug, clap::Args)]
pub struct Trace {
    #[arg(long, default_value_t = MAX_FRAMES)]
    pub max_frames: usize,
}

impl Trace {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        print!("{}", stack_trace_with(TraceOptions::new().max_frames(self.max_frames)));
        Ok(ExitCode::SUCCESS)
    }
}
