use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway home directory for running `tk`.
pub struct TkWorkspace {
    _temp: TempDir,
    pub root: PathBuf,
}

impl TkWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(".gotickets")
    }

    pub fn tickets_file(&self) -> PathBuf {
        self.data_dir().join("tickets.json")
    }

    /// Names of backup files currently on disk, sorted.
    pub fn backup_names(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.data_dir()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with("tickets_backup_") && n.ends_with(".json"))
            .collect();
        names.sort();
        names
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, contents).expect("write file");
        path
    }

    pub fn read_tickets(&self) -> serde_json::Value {
        let text = fs::read_to_string(self.tickets_file()).expect("read tickets file");
        serde_json::from_str(&text).expect("parse tickets file")
    }
}

pub struct TkOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl TkOutput {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {}", self.stdout))
    }
}

/// Run `tk` with the workspace as its home directory.
pub fn run_tk<I, S>(workspace: &TkWorkspace, args: I, label: &str) -> TkOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_tk_in(&workspace.root, args, label)
}

/// `tk` command preconfigured for the workspace, for `assert()` chains.
pub fn tk_cmd(workspace: &TkWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("tk").expect("tk binary");
    cmd.env("GOTICKETS_HOME", &workspace.root).env_remove("RUST_LOG");
    cmd
}

pub fn run_tk_in<I, S>(home: &Path, args: I, label: &str) -> TkOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::cargo_bin("tk")
        .expect("tk binary")
        .args(args)
        .env("GOTICKETS_HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run tk: {e}"));

    TkOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
