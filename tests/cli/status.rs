//! Tests for `envpull status`.

use crate::support::*;

#[test]
fn test_status_without_project() {
    let t = Test::new();

    let output = t.status(&[]);
    assert_success(&output);
    assert_stdout_contains(&output, "missing .env.project");
    assert_stdout_contains(&output, "abort: no project");
    assert!(!t.exists(".gitignore"), "status must not write files");
}

#[test]
fn test_status_new_machine() {
    let t = Test::with_project();

    let output = t.status(&["staging"]);
    assert_success(&output);
    assert_stdout_contains(&output, PROJECT_UID);
    assert_stdout_contains(&output, "not authenticated");
    assert_stdout_contains(&output, ".env.staging (not yet pulled)");
    assert_stdout_contains(&output, "authenticate, then pull");
    assert_stdout_contains(&output, "envpull pull staging");
}

#[test]
fn test_status_returning_machine_redacts_member() {
    let t = Test::with_member();
    t.write(".env", "A=1\n");

    let output = t.status(&[]);
    assert_success(&output);
    assert_stdout_contains(&output, "me_5f1e2d…");
    assert!(!stdout(&output).contains(MEMBER_UID));
    assert!(!stdout(&output).contains("not yet pulled"));
    assert_stdout_contains(&output, "https://vault.dotenv.org");
}

#[test]
fn test_status_empty_member() {
    let t = Test::with_project();
    t.write(".env.me", "DOTENV_ME=\n");

    let output = t.status(&[]);
    assert_success(&output);
    assert_stdout_contains(&output, "empty .env.me");
    assert_stdout_contains(&output, "abort: empty member");
}
