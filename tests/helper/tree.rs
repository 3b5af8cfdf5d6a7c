//! Documentation tree fixtures

use std::path::Path;

use tempfile::TempDir;

/// Create a fake remote documentation branch with the given version directories
pub fn create_remote_tree(versions: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for version in versions {
        let path = dir.path().join(version);
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("index.html"), format!("docs {version}")).unwrap();
    }
    std::fs::create_dir(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("index.md"), "# API documentation\n").unwrap();
    dir
}

/// Create generated documentation as Doxygen would leave it
pub fn create_content_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>new</html>").unwrap();
    std::fs::create_dir_all(dir.path().join("search")).unwrap();
    std::fs::write(dir.path().join("search/search.js"), "// search").unwrap();
    dir
}

/// Version column of a rendered index, header excluded
pub fn listed_versions(index: &str) -> Vec<String> {
    index
        .lines()
        .skip(2)
        .filter_map(|line| line.split('|').nth(1))
        .map(|cell| cell.trim().to_string())
        .collect()
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}
