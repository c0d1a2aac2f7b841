use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary docs directory for file tests
pub fn create_test_docs_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a markdown page (and any parent folders) inside the docs directory
pub fn create_test_page(docs_dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let file_path = docs_dir.path().join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
