mod common;
use std::ffi::OsStr;

use common::cli::{TkWorkspace, run_tk};

const MIXED: &str = "https://example.com/1 - First Ticket
https://example.com/2 - Second Ticket
https://example.com/3 - Third Ticket
https://example.com/1 - Duplicate First Ticket
invalid line without dash
 - Empty URL
https://example.com/4 - 
";

#[test]
fn test_import_mixed_file() {
    let workspace = TkWorkspace::new();
    let file = workspace.write_file("import.txt", MIXED);

    let out = run_tk(&workspace, [OsStr::new("import"), file.as_os_str()], "import");
    assert!(out.status.success(), "import failed: {}", out.stderr);
    assert!(
        out.stdout
            .contains("Imported 3 ticket(s), 1 duplicate(s) skipped, 3 error(s)"),
        "stdout: {}",
        out.stdout
    );
    assert!(out.stdout.contains("line 5: invalid format"));

    let doc = workspace.read_tickets();
    let titles: Vec<&str> = doc["tickets"]
        .as_array()
        .expect("array")
        .iter()
        .map(|t| t["title"].as_str().expect("title"))
        .collect();
    assert_eq!(titles, ["First Ticket", "Second Ticket", "Third Ticket"]);
    assert_eq!(doc["next_id"], 4);
}

#[test]
fn test_import_json_summary() {
    let workspace = TkWorkspace::new();
    let file = workspace.write_file("import.txt", "https://example.com/9 - Nine\nbad\n");

    let out = run_tk(
        &workspace,
        [OsStr::new("import"), file.as_os_str(), OsStr::new("--json")],
        "import_json",
    );
    assert!(out.status.success(), "import failed: {}", out.stderr);
    let summary = out.json();
    assert_eq!(summary["added"], 1);
    assert_eq!(summary["errors"], 1);
    assert_eq!(summary["saved"], true);
    assert_eq!(summary["error_lines"][0], "line 2: invalid format");
}

#[test]
fn test_import_nothing_new_does_not_write() {
    let workspace = TkWorkspace::new();
    let file = workspace.write_file("import.txt", "just noise\n\n");

    let out = run_tk(&workspace, [OsStr::new("import"), file.as_os_str()], "import");
    assert!(out.status.success(), "import failed: {}", out.stderr);
    assert!(!workspace.tickets_file().exists());
}

#[test]
fn test_import_missing_file_fails() {
    let workspace = TkWorkspace::new();
    let out = run_tk(&workspace, ["import", "/nonexistent/tickets.txt"], "import");
    assert!(!out.status.success());
    assert!(out.stderr.contains("tickets.txt"), "stderr: {}", out.stderr);
}
