//! Filesystem utilities.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))
}

/// Write a string to a file, replacing any previous content.
///
/// Parent directories are not created: a write into a missing directory is
/// an error the caller must surface.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .with_context(|| format!("failed to write file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_string_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.txt");

        write_string(&path, "first").unwrap();
        write_string(&path, "second").unwrap();

        assert_eq!(read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_string_fails_on_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("out.txt");

        let err = write_string(&path, "content").unwrap_err();
        assert!(err.to_string().contains("failed to write file"));
    }
}
