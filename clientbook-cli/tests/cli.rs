use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

/// A command isolated from the user's config and environment, persisting
/// into `state`.
fn clientbook(state: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("clientbook");
    cmd.env("XDG_CONFIG_HOME", state.path().join("xdg"))
        .env_remove("RUST_LOG")
        .env_remove("CLIENTBOOK_STATE_DIR")
        .env_remove("CLIENTBOOK_RECORDS")
        .env_remove("CLIENTBOOK_NO_STORAGE")
        .arg("--state-dir")
        .arg(state.path().join("prefs"));
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8_lossy(&output).into_owned()
}

fn first_column(table: &str) -> Vec<String> {
    table
        .lines()
        .skip(3)
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

#[test]
fn help_lists_commands() {
    let state = tempdir().expect("tempdir");

    clientbook(&state)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("sort"))
        .stdout(predicate::str::contains("--no-storage"));
}

#[test]
fn list_defaults_to_newest_first() {
    let state = tempdir().expect("tempdir");

    let table = stdout_of(clientbook(&state).arg("list"));

    assert!(table.starts_with("Clients: 6 | Filter: All | Sort (1)"));
    assert_eq!(
        first_column(&table),
        ["cli_5", "cli_3", "cli_1", "cli_2", "cli_6", "cli_4"]
    );
    assert!(table.contains("Jan 15, 2023"));
}

#[test]
fn list_filters_by_client_type() {
    let state = tempdir().expect("tempdir");

    let table = stdout_of(clientbook(&state).args(["list", "--filter", "company"]));

    assert_eq!(first_column(&table), ["cli_2", "cli_6", "cli_4"]);
}

#[test]
fn sort_edits_persist_between_runs() {
    let state = tempdir().expect("tempdir");

    clientbook(&state)
        .args(["sort", "field", "1", "name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Client Name | Z - A"));
    clientbook(&state)
        .args(["sort", "direction", "1", "asc"])
        .assert()
        .success();

    let table = stdout_of(clientbook(&state).arg("list"));
    assert_eq!(
        first_column(&table),
        ["cli_1", "cli_2", "cli_3", "cli_4", "cli_5", "cli_6"]
    );
    assert!(state.path().join("prefs/clientSortCriteria.json").exists());
}

#[test]
fn no_storage_keeps_nothing() {
    let state = tempdir().expect("tempdir");

    clientbook(&state)
        .args(["--no-storage", "sort", "add"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sort (2)"));

    clientbook(&state)
        .args(["sort", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sort (1)"));
    assert!(!state.path().join("prefs").exists());
}

#[test]
fn reorder_and_clear() {
    let state = tempdir().expect("tempdir");
    clientbook(&state).args(["sort", "add"]).assert().success();

    clientbook(&state)
        .args(["sort", "reorder", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Client Name | A - Z"))
        .stdout(predicate::str::contains("2. Created At | Newest to Oldest"));

    clientbook(&state)
        .args(["sort", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sort (1)"))
        .stdout(predicate::str::contains("1. Created At | Newest to Oldest"));
}

#[test]
fn out_of_range_reorder_fails() {
    let state = tempdir().expect("tempdir");

    clientbook(&state)
        .args(["sort", "reorder", "1", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of bounds"));
}

#[test]
fn unknown_criterion_is_reported() {
    let state = tempdir().expect("tempdir");

    clientbook(&state)
        .args(["sort", "remove", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no sort criterion matches"));
}

#[test]
fn unknown_field_is_rejected_by_parser() {
    let state = tempdir().expect("tempdir");

    clientbook(&state)
        .args(["sort", "field", "1", "rating"])
        .assert()
        .failure();
}

#[test]
fn removing_every_criterion_shows_source_order() {
    let state = tempdir().expect("tempdir");
    clientbook(&state)
        .args(["sort", "remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source order"));

    let table = stdout_of(clientbook(&state).arg("list"));

    assert!(table.contains("Sort (0)"));
    assert_eq!(
        first_column(&table),
        ["cli_1", "cli_2", "cli_3", "cli_4", "cli_5", "cli_6"]
    );
}

#[test]
fn records_file_is_browsed() {
    let state = tempdir().expect("tempdir");
    let records = state.path().join("clients.json");
    write_records(&records);

    let table = stdout_of(
        clientbook(&state)
            .arg("--records")
            .arg(&records)
            .args(["list"]),
    );

    assert_eq!(first_column(&table), ["a", "b"]);
    assert!(table.contains("Invalid Date"));
}

#[test]
fn empty_filter_result_shows_message() {
    let state = tempdir().expect("tempdir");
    let records = state.path().join("clients.json");
    write_records(&records);

    clientbook(&state)
        .arg("--records")
        .arg(&records)
        .args(["list", "--filter", "company"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No clients match the current criteria.",
        ));
}

fn write_records(path: &Path) {
    std::fs::write(
        path,
        r#"[
            {"id":"b","name":"Bob","clientType":"Individual","email":"b@example.com",
             "createdAt":"garbage","updatedAt":"2023-01-01","status":"Pending"},
            {"id":"a","name":"Ann","clientType":"Individual","email":"a@example.com",
             "createdAt":"2023-02-01T08:00:00Z","updatedAt":"2023-02-01","status":"Active"}
        ]"#,
    )
    .unwrap();
}
