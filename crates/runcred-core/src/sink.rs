//! Owner-only secret file creation
//!
//! Secret content handed to external tools as a file (service-account
//! JSON, CA certs, backend config blobs) goes through here. Files are
//! created with owner-read/write permissions atomically at creation time;
//! there is no window where the file exists with a broader mode.

use crate::{CoreError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Create a uniquely named file in `dir` holding `content`, readable and
/// writable by the owner only, and return its host-side path.
///
/// The file persists after return; cleanup is the caller's responsibility
/// (normally the private data directory's lifecycle). The directory must
/// already exist and be writable.
pub fn write_secret_file(dir: &Path, content: &str) -> Result<PathBuf> {
    let io_err = |source| CoreError::SecretWrite {
        dir: dir.to_path_buf(),
        source,
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix("tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o600));
    }

    let mut file = builder.tempfile_in(dir).map_err(io_err)?;
    file.write_all(content.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)?;

    let (_file, path) = file.keep().map_err(|e| io_err(e.error))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_secret_file(dir.path(), "s3cret").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "s3cret");
    }

    #[test]
    fn test_unique_paths_same_content() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_secret_file(dir.path(), "same").unwrap();
        let b = write_secret_file(dir.path(), "same").unwrap();
        assert_ne!(a, b);
        assert_eq!(
            std::fs::read(&a).unwrap(),
            std::fs::read(&b).unwrap()
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_owner_only_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = write_secret_file(dir.path(), "PEM...").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600, "mode was {:o}", mode);
    }

    #[cfg(unix)]
    #[test]
    fn test_empty_content_still_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = write_secret_file(dir.path(), "").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("env");
        let err = write_secret_file(&missing, "x").unwrap_err();
        match err {
            CoreError::SecretWrite { dir, .. } => assert_eq!(dir, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
