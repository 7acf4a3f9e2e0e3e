//! Local filesystem adapter using std::fs.

use std::fs::{self, DirBuilder};
use std::io;
use std::path::Path;

use crudy_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{CrudyError, CrudyResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_empty_dir(&self, path: &Path) -> CrudyResult<bool> {
        if !path.is_dir() {
            return Ok(false);
        }
        let mut entries = fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;
        Ok(entries.next().is_none())
    }

    fn create_dir_all(&self, path: &Path) -> CrudyResult<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder
            .create(path)
            .map_err(|e| ApplicationError::directory_create_failed(path, e).into())
    }

    fn write_file(&self, path: &Path, content: &str) -> CrudyResult<()> {
        fs::write(path, content).map_err(|e| ApplicationError::file_write_failed(path, e).into())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CrudyError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_and_non_empty_directories() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        assert!(fs.is_empty_dir(temp.path()).unwrap());

        std::fs::write(temp.path().join("notes.txt"), "x").unwrap();
        assert!(!fs.is_empty_dir(temp.path()).unwrap());
    }

    #[test]
    fn regular_file_is_not_an_empty_dir() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file");
        std::fs::write(&file, "x").unwrap();
        assert!(!LocalFilesystem::new().is_empty_dir(&file).unwrap());
    }

    #[test]
    fn creates_nested_directories() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b/c");
        let fs = LocalFilesystem::new();
        fs.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
        // already present is fine
        fs.create_dir_all(&nested).unwrap();
    }

    #[test]
    fn write_into_missing_parent_reports_path() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("missing/main.go");
        let err = LocalFilesystem::new()
            .write_file(&target, "package main")
            .unwrap_err();
        assert!(matches!(
            err,
            CrudyError::Application(ApplicationError::FileWriteFailed { ref path, .. }) if *path == target
        ));
    }

    #[test]
    fn create_under_a_file_fails() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("blocker");
        std::fs::write(&file, "x").unwrap();
        let err = LocalFilesystem::new()
            .create_dir_all(&file.join("app"))
            .unwrap_err();
        assert!(matches!(
            err,
            CrudyError::Application(ApplicationError::DirectoryCreateFailed { .. })
        ));
    }
}
