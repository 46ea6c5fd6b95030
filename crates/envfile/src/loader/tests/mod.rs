//! Tests for the merge loader.
//!
//! Responsibilities:
//! - Test precedence (first-wins and override) across sources and against
//!   pre-existing variables.
//! - Test missing-source tolerance and the require-files policy.
//! - Test `${NAME}` expansion through the destination stores.
//! - Test the ambient toggle layer.
//!
//! Invariants:
//! - Tests that touch the process environment, the current directory, or
//!   the ambient toggles hold the global test lock.
//! - On-disk fixtures live in per-test temporary directories.

use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::TempDir;


pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write a fixture file inside `dir` and return its path.
pub fn fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}
