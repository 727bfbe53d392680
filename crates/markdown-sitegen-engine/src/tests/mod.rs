//! Shared helpers for filesystem tests.

use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("create temp dir")
}

/// Writes `content` to `relative` under `dir`, creating parent directories.
pub fn create_test_file(dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(&path, content).expect("write test file");
    path
}

pub const TEST_TEMPLATE: &str =
    "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";
