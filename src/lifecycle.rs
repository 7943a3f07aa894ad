//! Startup and forced shutdown of the external node / wallet pair.

use std::sync::Arc;

use log::{debug, error, info, trace};

use crate::command::{CommandOutput, CommandRunner, Shell};
use crate::config::{BOOTSTRAP_SCRIPT, NODE_PROCESS, PKILL_BIN, PKILL_NO_MATCH, WALLET_PROCESS};
use crate::error::HarnessError;

/// Controls the external chain node / wallet daemon pair.
///
/// One-shot start and stop, nothing more: no supervision, no restart, no
/// locking. The processes are shared mutable state of the whole machine, so
/// callers must drive lifecycle operations sequentially.
pub struct NodeStack {
    runner: Arc<dyn CommandRunner>,
}

impl NodeStack {
    /// Stack driven through the real shell.
    pub fn new() -> Self {
        Self {
            runner: Arc::new(Shell),
        }
    }

    /// Stack driven through a caller-supplied runner.
    pub fn with_runner(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Brings up the node and wallet via the bootstrap script.
    ///
    /// The script owns daemonization; this call returns once it exits. Any
    /// runner failure propagates unchanged after a log line.
    pub async fn startup(&self) -> Result<CommandOutput, HarnessError> {
        if log::log_enabled!(log::Level::Trace) {
            trace!("Enter startup()");
        }

        let output = match self.runner.execute(BOOTSTRAP_SCRIPT, false).await {
            Ok(output) => output,
            Err(err) => {
                error!("Bootstrap script failed: {}", err);
                return Err(err);
            }
        };

        if log::log_enabled!(log::Level::Trace) {
            trace!("Exit startup()");
        }
        Ok(output)
    }

    /// Force-terminates the node, then the wallet daemon, by process name.
    ///
    /// A target that is not running is not an error; the kills stay
    /// sequential and the node always goes first. Returns the output of the
    /// last termination. Runner failures other than "no such process" are
    /// logged and re-raised.
    pub async fn shutdown(&self) -> Result<CommandOutput, HarnessError> {
        info!("Shutting down blockchain and wallet.");
        self.kill_by_name(NODE_PROCESS).await?;
        self.kill_by_name(WALLET_PROCESS).await
    }

    async fn kill_by_name(&self, process: &str) -> Result<CommandOutput, HarnessError> {
        let command = format!("{} -9 {}", PKILL_BIN, process);
        match self.runner.execute(&command, false).await {
            Ok(output) => Ok(output),
            // pkill reports "no process matched" through its exit status
            Err(HarnessError::CommandFailed { status, .. })
                if status.code() == Some(PKILL_NO_MATCH) =>
            {
                debug!("No '{}' process to kill", process);
                Ok(CommandOutput::default())
            }
            Err(err) => {
                error!("Failed to terminate '{}': {}", process, err);
                Err(err)
            }
        }
    }
}

impl Default for NodeStack {
    fn default() -> Self {
        Self::new()
    }
}
