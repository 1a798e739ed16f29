mod common;
use common::cli::{TkWorkspace, run_tk};

#[test]
fn test_backup_taken_before_change_and_restored() {
    let workspace = TkWorkspace::new();

    let first = run_tk(&workspace, ["add", "https://example.com/1", "One"], "add_one");
    assert!(first.status.success(), "add failed: {}", first.stderr);
    // Nothing existed to back up yet
    assert!(workspace.backup_names().is_empty());

    let second = run_tk(&workspace, ["add", "https://example.com/2", "Two"], "add_two");
    assert!(second.status.success(), "add failed: {}", second.stderr);
    let names = workspace.backup_names();
    assert_eq!(names.len(), 1);

    let listed = run_tk(&workspace, ["backups", "--json"], "backups");
    assert!(listed.status.success(), "backups failed: {}", listed.stderr);
    let listed = listed.json();
    assert_eq!(listed[0]["name"], names[0].as_str());
    assert!(listed[0]["timestamp"].is_string());

    let restore = run_tk(&workspace, ["restore", names[0].as_str()], "restore");
    assert!(restore.status.success(), "restore failed: {}", restore.stderr);

    let doc = workspace.read_tickets();
    let tickets = doc["tickets"].as_array().expect("array");
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0]["title"], "One");
}

#[test]
fn test_explicit_backup_without_tickets_file() {
    let workspace = TkWorkspace::new();
    let out = run_tk(&workspace, ["backup"], "backup");
    assert!(out.status.success(), "backup failed: {}", out.stderr);
    assert!(out.stdout.contains("Nothing to back up"));
    assert!(workspace.backup_names().is_empty());
}

#[test]
fn test_explicit_backup_copies_tickets_file() {
    let workspace = TkWorkspace::new();
    let add = run_tk(&workspace, ["add", "https://example.com/1", "One"], "add");
    assert!(add.status.success(), "add failed: {}", add.stderr);

    let out = run_tk(&workspace, ["backup", "--json"], "backup");
    assert!(out.status.success(), "backup failed: {}", out.stderr);
    let name = out.json()["backup"].as_str().expect("name").to_string();

    let backup = std::fs::read(workspace.data_dir().join(&name)).expect("read backup");
    let primary = std::fs::read(workspace.tickets_file()).expect("read primary");
    assert_eq!(backup, primary);
}

#[test]
fn test_restore_unknown_backup_fails() {
    let workspace = TkWorkspace::new();
    let out = run_tk(
        &workspace,
        ["restore", "tickets_backup_2020-01-01_00-00-00.json"],
        "restore",
    );
    assert!(!out.status.success());
    assert!(out.stderr.contains("backup file not found"), "stderr: {}", out.stderr);
}

#[test]
fn test_restore_corrupted_backup_leaves_primary() {
    let workspace = TkWorkspace::new();
    let add = run_tk(&workspace, ["add", "https://example.com/1", "One"], "add");
    assert!(add.status.success(), "add failed: {}", add.stderr);
    let before = std::fs::read(workspace.tickets_file()).expect("read primary");

    let bad = "tickets_backup_2020-01-01_00-00-00.json";
    std::fs::write(workspace.data_dir().join(bad), "not json").expect("write");

    let out = run_tk(&workspace, ["restore", bad], "restore");
    assert!(!out.status.success());
    assert!(out.stderr.contains("corrupted"), "stderr: {}", out.stderr);
    assert_eq!(std::fs::read(workspace.tickets_file()).expect("read"), before);
}

#[test]
fn test_restore_rejects_path_names() {
    let workspace = TkWorkspace::new();
    let add = run_tk(&workspace, ["add", "https://example.com/1", "One"], "add");
    assert!(add.status.success(), "add failed: {}", add.stderr);
    let stray = workspace.write_file("stray.json", r#"{"tickets":[],"next_id":1}"#);
    let before = std::fs::read(workspace.tickets_file()).expect("read primary");

    let out = run_tk(&workspace, ["restore", "../stray.json"], "restore");
    assert!(!out.status.success());
    assert!(out.stderr.contains("invalid backup file name"), "stderr: {}", out.stderr);
    assert!(stray.exists());
    assert_eq!(std::fs::read(workspace.tickets_file()).expect("read"), before);
}

#[test]
fn test_validation_errors_are_readable() {
    let workspace = TkWorkspace::new();
    let out = run_tk(&workspace, ["add", " ", " "], "add_blank");
    assert!(!out.status.success());
    assert!(
        out.stderr.contains("url: cannot be empty; title: cannot be empty"),
        "stderr: {}",
        out.stderr
    );
    assert!(!out.stderr.contains("ValidationError {"));
}
