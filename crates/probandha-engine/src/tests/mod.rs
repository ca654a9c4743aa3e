use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary posts directory
pub fn create_test_posts_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a post document inside the posts directory, creating parent folders as needed
pub fn create_test_file(posts_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = posts_dir.path().join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Minimal bilingual post document in the backend's JSON shape
pub fn post_json(slug: &str, en: &str, bn: &str) -> String {
    serde_json::json!({
        "slug": slug,
        "title": { "en": format!("{slug} (en)"), "bn": format!("{slug} (bn)") },
        "content": { "en": en, "bn": bn },
    })
    .to_string()
}
