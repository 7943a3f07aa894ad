//! Scripted command runner for tests.
//!
//! Always available (this is a test harness), so downstream crates can spy
//! on command invocations without spawning real processes.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::command::{CommandOutput, CommandRunner};
use crate::error::HarnessError;

/// [`CommandRunner`] double that records calls and replays queued results.
///
/// Queued results are handed out in FIFO order; once the queue is empty,
/// further calls succeed with empty output. Every call is recorded whether
/// scripted or not, so a test can assert ordering or prove that no command
/// ran at all.
#[derive(Default)]
pub struct MockRunner {
    scripted: Mutex<VecDeque<Result<CommandOutput, HarnessError>>>,
    calls: Mutex<Vec<(String, bool)>>,
}

impl MockRunner {
    /// Fresh runner with no scripted results and an empty call log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the result for an upcoming `execute` call.
    pub fn push_result(&self, result: Result<CommandOutput, HarnessError>) {
        self.scripted
            .lock()
            .expect("mock script queue poisoned")
            .push_back(result);
    }

    /// Queues a successful run producing `stdout` and nothing on stderr.
    pub fn push_stdout(&self, stdout: &str) {
        self.push_result(Ok(CommandOutput {
            stdout: stdout.to_owned(),
            stderr: String::new(),
        }));
    }

    /// Command lines seen so far, in call order.
    pub fn commands(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .iter()
            .map(|(command, _)| command.clone())
            .collect()
    }

    /// Full call log, command line plus debug flag.
    pub fn calls(&self) -> Vec<(String, bool)> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn execute(&self, command: &str, debug: bool) -> Result<CommandOutput, HarnessError> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push((command.to_owned(), debug));
        match self
            .scripted
            .lock()
            .expect("mock script queue poisoned")
            .pop_front()
        {
            Some(result) => result,
            None => Ok(CommandOutput::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_results_in_order_then_defaults() {
        let runner = MockRunner::new();
        runner.push_stdout("first");
        runner.push_result(Err(HarnessError::EmptyArgument { name: "x" }));

        let first = runner.execute("a", false).await.unwrap();
        assert_eq!(first.stdout, "first");
        assert!(runner.execute("b", true).await.is_err());
        // queue drained, further calls succeed empty
        let third = runner.execute("c", false).await.unwrap();
        assert_eq!(third, CommandOutput::default());

        assert_eq!(runner.commands(), vec!["a", "b", "c"]);
        assert_eq!(
            runner.calls(),
            vec![
                (String::from("a"), false),
                (String::from("b"), true),
                (String::from("c"), false),
            ]
        );
    }
}
