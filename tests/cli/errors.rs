//! Tests for configuration and argument errors.

use crate::support::*;

#[test]
fn test_invalid_api_url_is_rejected() {
    let t = Test::with_member();

    let output = t.pull("ftp://vault.example.com", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid api url");
    assert_stdout_contains(&output, "check --api-url");
    assert!(!t.exists(".env"));
}

#[test]
fn test_malformed_config_file_is_rejected() {
    let t = Test::with_member();
    t.write(".envpull.toml", "[remote\nurl = ");

    let output = t.cmd().arg("pull").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid config");
    assert_stdout_contains(&output, "fix or remove .envpull.toml");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();
    let output = t.cmd().arg("push").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_completions_mention_binary() {
    let t = Test::new();
    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "envpull");
}
