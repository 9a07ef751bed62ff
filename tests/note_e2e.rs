//! End-to-end runs of the daybook binary against a throwaway data dir.

use assert_cmd::Command;
use predicates::prelude::*;

fn daybook(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env("DAYBOOK_DATA_DIR", data_dir);
    cmd
}

#[test]
fn test_note_saves_and_results_lists_it() {
    let temp_dir = tempfile::tempdir().unwrap();

    daybook(temp_dir.path())
        .args(["note", "coffee", "with", "Ana"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Page saved: coffee with Ana"));

    daybook(temp_dir.path())
        .arg("results")
        .assert()
        .success()
        .stdout(predicates::str::contains("coffee with Ana"))
        .stdout(predicates::str::contains("No pack report"));
}

#[test]
fn test_note_alias_works() {
    let temp_dir = tempfile::tempdir().unwrap();

    daybook(temp_dir.path())
        .args(["n", "quick capture"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Page saved: quick capture"));
}

#[test]
fn test_note_requires_text() {
    let temp_dir = tempfile::tempdir().unwrap();

    daybook(temp_dir.path()).arg("note").assert().failure();
}

#[test]
fn test_results_on_an_empty_day() {
    let temp_dir = tempfile::tempdir().unwrap();

    daybook(temp_dir.path())
        .arg("results")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Nothing in the daybook for today yet",
        ))
        .stdout(predicates::str::contains("No pack report").not());
}

#[test]
fn test_config_set_show_and_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    daybook(temp_dir.path())
        .args(["config", "chars-per-line", "30"])
        .assert()
        .success()
        .stdout(predicates::str::contains("chars-per-line set to 30"));

    daybook(temp_dir.path())
        .args(["config", "chars-per-line"])
        .assert()
        .success()
        .stdout(predicates::str::contains("30"));

    daybook(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicates::str::contains("chars-per-line = 30"))
        .stdout(predicates::str::contains("webhook-url = unset"));
}

#[test]
fn test_config_rejects_a_bad_webhook_url() {
    let temp_dir = tempfile::tempdir().unwrap();

    daybook(temp_dir.path())
        .args(["config", "webhook-url", "ftp://nope"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "webhook-url must start with http:// or https://",
        ));
}

#[test]
fn test_open_refuses_to_run_without_a_terminal() {
    let temp_dir = tempfile::tempdir().unwrap();

    // Bare invocation defaults to opening the notebook; with stdout captured
    // there is no terminal to draw on.
    daybook(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("interactive terminal"));
}
