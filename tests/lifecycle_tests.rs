//! NodeStack lifecycle semantics, driven through the scripted runner.

use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;
use std::sync::Arc;

use devnet_harness::{CommandOutput, HarnessError, MockRunner, NodeStack};

fn failed(command: &str, code: i32, stderr: &str) -> HarnessError {
    HarnessError::CommandFailed {
        command: command.to_owned(),
        status: ExitStatus::from_raw(code << 8),
        stdout: String::new(),
        stderr: stderr.to_owned(),
    }
}

#[tokio::test]
async fn startup_runs_the_bootstrap_script_quietly() {
    let runner = Arc::new(MockRunner::new());
    runner.push_stdout("nodeos up, keosd up");
    let stack = NodeStack::with_runner(runner.clone());

    let output = stack.startup().await.unwrap();
    assert_eq!(output.stdout, "nodeos up, keosd up");

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "tests/startupNodeos.py");
    assert!(!calls[0].1, "bootstrap runs with the debug echo off");
}

#[tokio::test]
async fn startup_propagates_bootstrap_failures_unchanged() {
    let runner = Arc::new(MockRunner::new());
    runner.push_result(Err(failed(
        "tests/startupNodeos.py",
        2,
        "port 8889 already in use",
    )));
    let stack = NodeStack::with_runner(runner);

    let err = stack.startup().await.unwrap_err();
    match err {
        HarnessError::CommandFailed { status, stderr, .. } => {
            assert_eq!(status.code(), Some(2));
            assert_eq!(stderr, "port 8889 already in use");
        }
        other => panic!("expected CommandFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn shutdown_kills_node_then_wallet() {
    let runner = Arc::new(MockRunner::new());
    let stack = NodeStack::with_runner(runner.clone());

    stack.shutdown().await.unwrap();

    let calls = runner.calls();
    assert_eq!(
        runner.commands(),
        vec!["/usr/bin/pkill -9 nodeos", "/usr/bin/pkill -9 keosd"]
    );
    assert!(calls.iter().all(|(_, debug)| !debug));
}

#[tokio::test]
async fn shutdown_tolerates_absent_processes() {
    // pkill exits 1 when nothing matched the name
    let runner = Arc::new(MockRunner::new());
    runner.push_result(Err(failed("/usr/bin/pkill -9 nodeos", 1, "")));
    runner.push_result(Err(failed("/usr/bin/pkill -9 keosd", 1, "")));
    let stack = NodeStack::with_runner(runner.clone());

    let output = stack.shutdown().await.unwrap();
    assert_eq!(output, CommandOutput::default());
    assert_eq!(runner.commands().len(), 2, "both kills must still be issued");
}

#[tokio::test]
async fn shutdown_still_reaches_the_wallet_when_the_node_is_gone() {
    let runner = Arc::new(MockRunner::new());
    runner.push_result(Err(failed("/usr/bin/pkill -9 nodeos", 1, "")));
    runner.push_stdout("keosd terminated");
    let stack = NodeStack::with_runner(runner.clone());

    let output = stack.shutdown().await.unwrap();
    assert_eq!(output.stdout, "keosd terminated");
}

#[tokio::test]
async fn shutdown_reraises_unexpected_kill_failures() {
    // pkill exit 3 is a fatal internal error, not "no match"
    let runner = Arc::new(MockRunner::new());
    runner.push_result(Err(failed("/usr/bin/pkill -9 nodeos", 3, "pkill: fatal")));
    let stack = NodeStack::with_runner(runner.clone());

    let err = stack.shutdown().await.unwrap_err();
    match err {
        HarnessError::CommandFailed { status, .. } => assert_eq!(status.code(), Some(3)),
        other => panic!("expected CommandFailed, got {:?}", other),
    }
    // the node kill failed hard, so the wallet kill never ran
    assert_eq!(runner.commands(), vec!["/usr/bin/pkill -9 nodeos"]);
}

#[tokio::test]
#[ignore] // needs /usr/bin/pkill and permission to signal; run explicitly
async fn shutdown_is_a_no_op_on_a_machine_without_the_daemons() {
    let stack = NodeStack::new();
    stack
        .shutdown()
        .await
        .expect("absent nodeos/keosd must not fail shutdown");
}
