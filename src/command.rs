//! Bounded-capture execution of external command lines.

use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use log::{info, trace};
use tokio::io::AsyncReadExt;
use tokio::process::Command;

use crate::config::MAX_CAPTURED_OUTPUT;
use crate::error::HarnessError;

/// Captured streams of a completed command.
///
/// Produced once per [`CommandRunner::execute`] call; not retained anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Everything the command wrote to standard output.
    pub stdout: String,
    /// Everything the command wrote to standard error.
    pub stderr: String,
}

/// Runs one external command line to completion.
///
/// Single logical attempt, no retry, no timeout; a hung command blocks the
/// calling future. Implementations must be shareable across tasks.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Executes `command` and captures both output streams.
    ///
    /// Each stream is capped at [`MAX_CAPTURED_OUTPUT`] bytes; going past
    /// the cap is an error, never a silent truncation. When `debug` is set,
    /// the captured streams are echoed verbatim to the log after a
    /// successful run — the returned value is the same either way.
    ///
    /// Fails with [`HarnessError::Launch`] when the command cannot be
    /// started, [`HarnessError::CommandFailed`] on a non-zero exit (carrying
    /// the partial output) and [`HarnessError::BufferOverflow`] when a
    /// stream exceeds the cap.
    ///
    /// [`MAX_CAPTURED_OUTPUT`]: crate::config::MAX_CAPTURED_OUTPUT
    async fn execute(&self, command: &str, debug: bool) -> Result<CommandOutput, HarnessError>;
}

/// Production runner handing the command line to `sh -c`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shell;

#[async_trait]
impl CommandRunner for Shell {
    async fn execute(&self, command: &str, debug: bool) -> Result<CommandOutput, HarnessError> {
        if log::log_enabled!(log::Level::Trace) {
            trace!("Executing '{}'", command);
        }

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| HarnessError::Launch {
                command: command.to_owned(),
                source,
            })?;

        let (Some(mut out_pipe), Some(mut err_pipe)) = (child.stdout.take(), child.stderr.take())
        else {
            // both were configured as piped right above
            let _ = child.kill().await;
            return Err(HarnessError::Launch {
                command: command.to_owned(),
                source: io::Error::new(io::ErrorKind::BrokenPipe, "child stdio not captured"),
            });
        };

        // Drain both pipes cooperatively in this task. Stopping the reads on
        // the first overflow and killing the child keeps a chatty process
        // from blocking forever on a full pipe.
        let mut out_buf = Vec::new();
        let mut err_buf = Vec::new();
        let mut out_chunk = [0u8; 8192];
        let mut err_chunk = [0u8; 8192];
        let mut out_open = true;
        let mut err_open = true;
        let mut overflow: Option<&'static str> = None;
        let mut io_failure: Option<io::Error> = None;

        while (out_open || err_open) && overflow.is_none() && io_failure.is_none() {
            tokio::select! {
                read = out_pipe.read(&mut out_chunk), if out_open => match read {
                    Ok(0) => out_open = false,
                    Ok(n) => {
                        out_buf.extend_from_slice(&out_chunk[..n]);
                        if out_buf.len() > MAX_CAPTURED_OUTPUT {
                            overflow = Some("stdout");
                        }
                    }
                    Err(e) => io_failure = Some(e),
                },
                read = err_pipe.read(&mut err_chunk), if err_open => match read {
                    Ok(0) => err_open = false,
                    Ok(n) => {
                        err_buf.extend_from_slice(&err_chunk[..n]);
                        if err_buf.len() > MAX_CAPTURED_OUTPUT {
                            overflow = Some("stderr");
                        }
                    }
                    Err(e) => io_failure = Some(e),
                },
            }
        }

        if let Some(stream) = overflow {
            let _ = child.kill().await;
            return Err(HarnessError::BufferOverflow {
                command: command.to_owned(),
                stream,
                limit: MAX_CAPTURED_OUTPUT,
            });
        }

        if let Some(source) = io_failure {
            let _ = child.kill().await;
            return Err(HarnessError::Launch {
                command: command.to_owned(),
                source,
            });
        }

        let status = child.wait().await.map_err(|source| HarnessError::Launch {
            command: command.to_owned(),
            source,
        })?;

        let output = CommandOutput {
            stdout: String::from_utf8_lossy(&out_buf).into_owned(),
            stderr: String::from_utf8_lossy(&err_buf).into_owned(),
        };

        if !status.success() {
            return Err(HarnessError::CommandFailed {
                command: command.to_owned(),
                status,
                stdout: output.stdout,
                stderr: output.stderr,
            });
        }

        if debug {
            info!("stdout: {}", output.stdout);
            info!("stderr: {}", output.stderr);
        }

        if log::log_enabled!(log::Level::Trace) {
            trace!("Command '{}' completed", command);
        }

        Ok(output)
    }
}
