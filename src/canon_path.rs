
use std::fmt::{Debug, Display};
use std::path::{Path, PathBuf};

use anyhow::Result;
use path_absolutize::*;

/// An absolute path, made so lexically against the current directory.
/// Symlinks are not resolved and the path need not exist.
pub struct CanonPath (PathBuf);
impl CanonPath {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> { Ok(Self((path.as_ref().absolutize()?).into_owned())) }
    pub fn path(&self) -> &Path { &self.0 }
    pub fn join<P: AsRef<Path>>(&self, p: P) -> PathBuf { self.0.join(p) }
    pub fn exists(&self) -> bool { self.0.exists() }
}

impl AsRef<Path> for CanonPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Debug for CanonPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Display for CanonPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod canon_path_tests {
    use std::path::PathBuf;

    use super::CanonPath;

    #[test]
    fn relative_path_is_made_absolute() {
        let current_dir = std::env::current_dir().unwrap();
        let path = CanonPath::new("some_project").unwrap();
        assert!(path.path().is_absolute());
        assert_eq!(path.path(), current_dir.join("some_project"));
    }

    #[test]
    fn parent_components_are_removed() {
        let path = CanonPath::new("/projects/addon/script/../libs").unwrap();
        assert_eq!(path.path(), PathBuf::from("/projects/addon/libs"));
    }

    #[test]
    fn missing_path_is_fine() {
        let path = CanonPath::new("/definitely/not/here").unwrap();
        assert!(!path.exists());
        assert_eq!(path.join("bin"), PathBuf::from("/definitely/not/here/bin"));
    }
}
