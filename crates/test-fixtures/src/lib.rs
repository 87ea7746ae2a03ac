//! Test fixture loader for predicate golden datasets.
//!
//! Fixtures live under `test-fixtures/golden/` at the workspace root and are
//! deserialized into whatever shape the calling test declares.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the fixtures folder.
fn fixtures_root() -> PathBuf {
    // Walk up from whichever crate is running until the golden tree is found.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").is_dir() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/golden from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Relative path (from the fixtures root) of every pipeline scenario.
pub fn pipeline_scenarios() -> Vec<String> {
    list_fixtures("golden/pipeline")
        .into_iter()
        .filter_map(|path| {
            path.file_name()
                .map(|name| format!("golden/pipeline/{}", name.to_string_lossy()))
        })
        .collect()
}
