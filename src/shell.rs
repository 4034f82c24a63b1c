//! Shell command execution
//!
//! Two modes, matching the two things the editor layer needs:
//! - synchronous with a timeout, for "is this binary installed" probes
//! - detached, for launching an editor the command does not supervise

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// How long a synchronous probe may run before it is killed
pub const EXECUTE_TIMEOUT: Duration = Duration::from_secs(3);

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Exit status of a synchronous command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecStatus {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ExecStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs commands on behalf of the editor layer.
///
/// A trait so tests can substitute a fake that records issued commands
/// instead of spawning processes.
pub trait ShellExecutor {
    /// Run a command synchronously and return its exit status.
    ///
    /// Returns `None` when the binary cannot be found, the process cannot
    /// be spawned, or it does not exit within `timeout`. Never errors.
    fn execute(&self, command: &str, timeout: Duration) -> Option<ExecStatus>;

    /// Spawn a command detached: the child is not waited on and outlives
    /// the caller. Errors only when the spawn itself fails.
    fn detached(&self, command: &str) -> Result<()>;
}

/// [`ShellExecutor`] backed by real processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl ShellExecutor for SystemShell {
    fn execute(&self, command: &str, timeout: Duration) -> Option<ExecStatus> {
        let (cmd, args) = split_command(command)?;

        // Resolve via PATH first so a missing binary is a cheap miss
        // instead of a spawn error.
        let resolved = which::which(cmd).ok()?;

        let mut child = Command::new(resolved)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .ok()?;

        let deadline = Instant::now() + timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => {
                    return Some(ExecStatus {
                        code: status.code(),
                    })
                }
                Ok(None) => {
                    if Instant::now() >= deadline {
                        tracing::debug!("Command {:?} timed out, killing", command);
                        let _ = child.kill();
                        let _ = child.wait();
                        return None;
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
                Err(e) => {
                    tracing::debug!("Wait failed for {:?}: {}", command, e);
                    return None;
                }
            }
        }
    }

    fn detached(&self, command: &str) -> Result<()> {
        let (cmd, args) =
            split_command(command).ok_or_else(|| Error::launch(command, "empty command"))?;

        // Spawn without waiting; the editor runs on after we exit.
        Command::new(cmd)
            .args(args)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| Error::launch(command, e.to_string()))?;

        Ok(())
    }
}

/// Split a command line into command and arguments
fn split_command(command: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = command.split_whitespace();
    let cmd = parts.next()?;
    Some((cmd, parts.collect()))
}
