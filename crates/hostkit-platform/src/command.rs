use crate::error::{Error, Result};
use std::process::{Command as StdCommand, ExitStatus};

/// Thin wrapper over [`std::process::Command`] that remembers what it runs,
/// so failures can name the script.
#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: String,
}

impl Command {
    /// Runs `script` through the system shell (`sh -c` or `cmd /C`).
    ///
    /// The script is passed verbatim. Anything interpolated into it must be
    /// trusted by the caller.
    pub fn shell(script: impl Into<String>) -> Self {
        let script = script.into();
        #[cfg(windows)]
        let (shell, flag) = ("cmd", "/C");
        #[cfg(not(windows))]
        let (shell, flag) = ("sh", "-c");

        let mut inner = StdCommand::new(shell);
        inner.args([flag, &script]);
        Self {
            inner,
            program: script,
        }
    }

    /// Runs to completion, inheriting stdio.
    pub fn status(&mut self) -> Result<ExitStatus> {
        self.inner.status().map_err(|e| Error::CommandFailed {
            cmd: self.program.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_command_shell_wraps_script() {
        let cmd = Command::shell("echo \"hi\"");
        assert_eq!(cmd.inner.get_program(), "sh");
        let args: Vec<_> = cmd.inner.get_args().collect();
        assert_eq!(args, vec!["-c", "echo \"hi\""]);
        assert_eq!(cmd.program, "echo \"hi\"");
    }

    #[cfg(unix)]
    #[test]
    fn test_command_shell_status() {
        assert!(Command::shell("true").status().unwrap().success());
        let status = Command::shell("exit 3").status().unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[cfg(windows)]
    #[test]
    fn test_command_shell_uses_cmd() {
        let cmd = Command::shell("echo hi");
        assert_eq!(cmd.inner.get_program(), "cmd");
        assert!(Command::shell("exit 0").status().unwrap().success());
    }
}
