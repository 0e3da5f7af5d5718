//! Shared test helpers.

#![allow(dead_code, unused_imports)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Temp directory holding the given files (with a small BPMN body) and directories.
pub fn workspace(files: &[&str], dirs: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for dir in dirs {
        fs::create_dir_all(temp_dir.path().join(dir)).unwrap();
    }
    for file in files {
        fs::write(temp_dir.path().join(file), "<definitions />").unwrap();
    }
    temp_dir
}

/// Create a temporary config file with the given content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn flags(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
