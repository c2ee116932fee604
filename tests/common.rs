#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use tempfile::TempDir;

pub fn tip() -> Command {
    cargo_bin_cmd!("tip")
}

/// Create a temp dir holding an isolated record file for one test.
/// The TempDir must be kept alive for the duration of the test.
pub fn setup_record_file(name: &str) -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(format!("{}.tip", name));
    (dir, path.to_string_lossy().to_string())
}

/// Seed a record file with raw lines, one per record.
pub fn write_log(path: &str, lines: &[&str]) {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).expect("seed record file");
}

pub fn read_log(path: &str) -> String {
    fs::read_to_string(path).expect("read record file")
}
