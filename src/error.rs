use std::io;
use std::process::ExitStatus;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure kinds surfaced by the harness.
///
/// Every public operation either succeeds or returns one of these; there is
/// no retry and no partial success. Diagnostics captured along the way
/// (partial output, response bodies) travel inside the variant.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A required string argument was empty. Raised before any I/O.
    #[error("Parameter '{name}' must not be empty")]
    EmptyArgument {
        /// Name of the offending parameter.
        name: &'static str,
    },

    /// The child process could not be spawned, or its output could not be
    /// collected.
    #[error("Failed to launch command '{command}': {source}")]
    Launch {
        /// The command line that was attempted.
        command: String,
        /// Underlying OS error.
        source: io::Error,
    },

    /// The child process completed with a non-zero exit status.
    #[error("Command '{command}' failed: {status}")]
    CommandFailed {
        /// The command line that ran.
        command: String,
        /// Raw exit status, including signal terminations.
        status: ExitStatus,
        /// Standard output captured before exit.
        stdout: String,
        /// Standard error captured before exit.
        stderr: String,
    },

    /// A captured stream grew past [`MAX_CAPTURED_OUTPUT`]; the child was
    /// killed rather than its output silently truncated.
    ///
    /// [`MAX_CAPTURED_OUTPUT`]: crate::config::MAX_CAPTURED_OUTPUT
    #[error("Captured {stream} of command '{command}' exceeded {limit} bytes")]
    BufferOverflow {
        /// The command line that ran.
        command: String,
        /// Which stream overflowed, `"stdout"` or `"stderr"`.
        stream: &'static str,
        /// The cap that was exceeded, in bytes.
        limit: usize,
    },

    /// The chain node answered with a non-success HTTP status.
    #[error("Network response was not ok.")]
    NonOkResponse {
        /// HTTP status returned by the node.
        status: StatusCode,
        /// Response body text, read for diagnostics.
        body: String,
    },

    /// Transport-level HTTP failure talking to the chain node.
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),
}
