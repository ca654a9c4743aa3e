use crate::models::{BlogPost, PostFile};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid post document {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid posts directory: {0}")]
    InvalidPostsDir(String),
}

/// Read a post document and deserialize it
pub fn read_post(relative_path: &RelativePath, posts_root: &Path) -> Result<BlogPost, IoError> {
    let absolute_path = relative_path.to_path(posts_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let raw = fs::read_to_string(&absolute_path).map_err(IoError::Io)?;
    serde_json::from_str(&raw).map_err(|source| IoError::Parse {
        path: absolute_path,
        source,
    })
}

/// Scan for post documents (`*.json`, recursively) in the posts directory
pub fn scan_posts(posts_root: &Path) -> Result<Vec<PostFile>, IoError> {
    validate_posts_dir(posts_root)?;

    let pattern = format!(
        "{}/**/*.{}",
        glob::Pattern::escape(&posts_root.to_string_lossy()),
        PostFile::EXTENSION
    );
    let paths = glob::glob(&pattern)
        .map_err(|e| IoError::InvalidPostsDir(format!("bad scan pattern: {e}")))?;

    let mut files = Vec::new();
    for entry in paths {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                log::warn!("skipping unreadable entry under {}: {e}", posts_root.display());
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        let Ok(relative) = path.strip_prefix(posts_root) else {
            continue;
        };
        match RelativePathBuf::from_path(relative) {
            Ok(relative) => files.push(PostFile::new(relative)),
            Err(e) => log::warn!("skipping {}: {e}", path.display()),
        }
    }
    files.sort_by(|a, b| a.relative_path().as_str().cmp(b.relative_path().as_str()));
    Ok(files)
}

pub fn validate_posts_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidPostsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
