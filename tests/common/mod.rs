//! Common test utilities for botcfg integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree to scan
pub struct TestTree {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the tree root
    pub path: PathBuf,
}

impl TestTree {
    /// Create a new, empty tree
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the tree, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write a minimal valid bot config named `name`
    #[allow(dead_code)]
    pub fn write_bot(&self, path: &str, name: &str) -> PathBuf {
        self.write_file(path, &format!("[Locations]\nname = {name}\npython_file = bot.py\n"))
    }

    /// Copy the fixture bot folder into the tree
    #[allow(dead_code)]
    pub fn copy_fixture_bots(&self, target: &str) -> PathBuf {
        let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("common")
            .join("fixtures")
            .join("bots");

        let target_path = self.path.join(target);
        copy_dir_recursive(&fixture_path, &target_path).expect("Failed to copy fixture bots");
        target_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursively copy a directory
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    if !dst.exists() {
        std::fs::create_dir_all(dst)?;
    }

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}
