//! Output directory layout
//!
//! One run owns a root folder with two artifact subfolders:
//! `<root>/raw` for fetched HTML and `<root>/text` for extracted plain
//! text, plus the downloaded seed list and the final report at the root.

use crate::url::artifact_stem;
use std::path::{Path, PathBuf};

/// Deterministic path layout under one output root
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    raw_dir: PathBuf,
    text_dir: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let raw_dir = root.join("raw");
        let text_dir = root.join("text");
        Self {
            root,
            raw_dir,
            text_dir,
        }
    }

    /// Creates the root, raw, and text directories
    ///
    /// Invoked once before the engine starts; existing directories are
    /// left in place so reruns overwrite artifacts rather than failing.
    pub fn init(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::create_dir_all(&self.raw_dir)?;
        std::fs::create_dir_all(&self.text_dir)?;
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path for the fetched HTML of a fragment
    pub fn raw_path(&self, fragment: &str) -> PathBuf {
        self.raw_dir.join(format!("{}.html", artifact_stem(fragment)))
    }

    /// Path for the extracted lowercase text of a fragment
    pub fn text_path(&self, fragment: &str) -> PathBuf {
        self.text_dir.join(format!("{}.txt", artifact_stem(fragment)))
    }

    /// Where a remote input list is copied to before parsing
    pub fn seed_list_path(&self) -> PathBuf {
        self.root.join("urls.txt")
    }

    /// Where the final flat-text report is written
    pub fn report_path(&self) -> PathBuf {
        self.root.join("results.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_directories() {
        let dir = tempdir().unwrap();
        let workspace = Workspace::new(dir.path().join("out"));
        workspace.init().unwrap();

        assert!(dir.path().join("out").is_dir());
        assert!(dir.path().join("out/raw").is_dir());
        assert!(dir.path().join("out/text").is_dir());
    }

    #[test]
    fn test_init_is_idempotent() {
        let dir = tempdir().unwrap();
        let workspace = Workspace::new(dir.path().join("out"));
        workspace.init().unwrap();
        workspace.init().unwrap();
    }

    #[test]
    fn test_artifact_paths() {
        let workspace = Workspace::new("/out");
        assert_eq!(
            workspace.raw_path("walmart.com"),
            PathBuf::from("/out/raw/walmart.com.html")
        );
        assert_eq!(
            workspace.text_path("walmart.com"),
            PathBuf::from("/out/text/walmart.com.txt")
        );
    }

    #[test]
    fn test_artifact_paths_sanitized() {
        let workspace = Workspace::new("/out");
        assert_eq!(
            workspace.raw_path("127.0.0.1:8080/page"),
            PathBuf::from("/out/raw/127.0.0.1_8080_page.html")
        );
    }

    #[test]
    fn test_fixed_root_files() {
        let workspace = Workspace::new("/out");
        assert_eq!(workspace.seed_list_path(), PathBuf::from("/out/urls.txt"));
        assert_eq!(workspace.report_path(), PathBuf::from("/out/results.txt"));
    }
}
