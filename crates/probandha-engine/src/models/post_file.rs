use relative_path::{RelativePath, RelativePathBuf};

/// A post document on disk, with a path relative to the posts root.
#[derive(Debug, Clone, PartialEq)]
pub struct PostFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl PostFile {
    pub const EXTENSION: &'static str = "json";

    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
        }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File stem, used as the list label until the post is loaded.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    fn extract_display_name(path: &RelativePath) -> String {
        path.file_stem().unwrap_or("Untitled").to_string()
    }
}

impl From<RelativePathBuf> for PostFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for PostFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
