//! Shell runner against real child processes.

use anyhow::Result;
use devnet_harness::config::MAX_CAPTURED_OUTPUT;
use devnet_harness::{CommandRunner, HarnessError, Shell};

#[tokio::test]
async fn captures_stdout() -> Result<()> {
    let output = Shell.execute("echo hello", false).await?;
    assert!(output.stdout.contains("hello"));
    assert!(output.stderr.is_empty());
    Ok(())
}

#[tokio::test]
async fn separates_the_streams() -> Result<()> {
    let output = Shell.execute("echo out; echo err 1>&2", false).await?;
    assert_eq!(output.stdout.trim(), "out");
    assert_eq!(output.stderr.trim(), "err");
    Ok(())
}

#[tokio::test]
async fn debug_echo_does_not_change_the_result() -> Result<()> {
    let quiet = Shell.execute("echo parity; echo noise 1>&2", false).await?;
    let echoed = Shell.execute("echo parity; echo noise 1>&2", true).await?;
    assert_eq!(quiet, echoed);
    Ok(())
}

#[tokio::test]
async fn non_zero_exit_carries_status_and_partial_output() {
    let err = Shell
        .execute("echo boom; exit 3", false)
        .await
        .expect_err("exit 3 must fail");
    match err {
        HarnessError::CommandFailed {
            command,
            status,
            stdout,
            ..
        } => {
            assert_eq!(command, "echo boom; exit 3");
            assert_eq!(status.code(), Some(3));
            assert!(stdout.contains("boom"), "partial output lost: {:?}", stdout);
        }
        other => panic!("expected CommandFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_binary_fails_through_the_exit_status() {
    // the shell itself reports 127 for an unknown command
    let err = Shell
        .execute("definitely-not-a-real-binary-2b8c1", false)
        .await
        .expect_err("unknown command must fail");
    match err {
        HarnessError::CommandFailed { status, .. } => assert_eq!(status.code(), Some(127)),
        other => panic!("expected CommandFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn output_at_the_cap_is_returned_whole() -> Result<()> {
    let command = format!("head -c {} /dev/zero", MAX_CAPTURED_OUTPUT);
    let output = Shell.execute(&command, false).await?;
    assert_eq!(output.stdout.len(), MAX_CAPTURED_OUTPUT);
    Ok(())
}

#[tokio::test]
async fn stdout_overflow_is_an_error_not_a_truncation() {
    let command = format!("head -c {} /dev/zero", MAX_CAPTURED_OUTPUT + 1);
    let err = Shell
        .execute(&command, false)
        .await
        .expect_err("past the cap must fail");
    match err {
        HarnessError::BufferOverflow { stream, limit, .. } => {
            assert_eq!(stream, "stdout");
            assert_eq!(limit, MAX_CAPTURED_OUTPUT);
        }
        other => panic!("expected BufferOverflow, got {:?}", other),
    }
}

#[tokio::test]
async fn stderr_overflow_names_the_right_stream() {
    let command = format!("head -c {} /dev/zero 1>&2", MAX_CAPTURED_OUTPUT + 1);
    let err = Shell
        .execute(&command, false)
        .await
        .expect_err("past the cap must fail");
    match err {
        HarnessError::BufferOverflow { stream, .. } => assert_eq!(stream, "stderr"),
        other => panic!("expected BufferOverflow, got {:?}", other),
    }
}
