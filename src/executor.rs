use std::path::PathBuf;
use std::process::Command;

use crate::error::{ReleaseError, Result};

/// Runs shell command lines to completion
pub trait CommandRunner {
    /// Run `command` and wait for it.
    ///
    /// # Returns
    /// * `Ok(())` if the command exits with code 0
    /// * `Err` if it cannot be spawned or exits with any other status
    fn run(&self, command: &str) -> Result<()>;
}

/// Executes command lines through the platform shell
///
/// Output is inherited, so the operator sees build and publish logs as they
/// happen.
pub struct ShellExecutor {
    workdir: PathBuf,
}

impl ShellExecutor {
    /// Create an executor running every command from `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        ShellExecutor {
            workdir: workdir.into(),
        }
    }

    fn shell(command: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }
}

impl CommandRunner for ShellExecutor {
    fn run(&self, command: &str) -> Result<()> {
        log::debug!("running `{}` in {}", command, self.workdir.display());

        let status = Self::shell(command)
            .current_dir(&self.workdir)
            .status()
            .map_err(|e| ReleaseError::command_failed(command, format!("could not start: {}", e)))?;

        if !status.success() {
            return Err(ReleaseError::command_failed(command, status));
        }

        Ok(())
    }
}
