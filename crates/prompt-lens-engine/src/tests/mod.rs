//! Shared helpers for unit tests across the crate.

use crate::models::Category;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_prompts_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn test_category() -> Category {
    Category::new("test", "Test", "Test prompts", "Test Prompts")
}

/// Writes `content` to `name` inside the category folder, creating the folder.
pub fn create_test_file(
    dir: &TempDir,
    category: &Category,
    name: &str,
    content: &str,
) -> PathBuf {
    let folder = dir.path().join(&category.folder);
    std::fs::create_dir_all(&folder).expect("Failed to create category folder");
    let file_path = folder.join(name);
    std::fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}
