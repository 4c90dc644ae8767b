//! Host-to-container path translation for staged secret files
//!
//! The same secret directory is addressed by two path namespaces: the host
//! path used to create a file, and the path the launched job sees inside
//! its execution environment. Environment variables that reference a file
//! must carry the latter.

use crate::{CoreError, Result};
use std::path::{Path, PathBuf};

/// Maps a host path rooted under the run's private data directory to the
/// equivalent path inside the execution environment.
pub trait PathTranslator: Send + Sync {
    fn to_container_path(&self, host_path: &Path, private_data_dir: &Path) -> Result<PathBuf>;
}

/// Identity mapping, for host-side runs without containerization
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl PathTranslator for IdentityTranslator {
    fn to_container_path(&self, host_path: &Path, _private_data_dir: &Path) -> Result<PathBuf> {
        Ok(host_path.to_path_buf())
    }
}

/// Re-roots host paths under the private data directory onto the mount
/// point the execution environment sees.
#[derive(Debug, Clone)]
pub struct ContainerTranslator {
    container_root: PathBuf,
}

impl ContainerTranslator {
    /// Mount point used by the default execution environment image
    pub const DEFAULT_CONTAINER_ROOT: &'static str = "/runner";

    pub fn new(container_root: impl Into<PathBuf>) -> Self {
        Self {
            container_root: container_root.into(),
        }
    }
}

impl Default for ContainerTranslator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CONTAINER_ROOT)
    }
}

impl PathTranslator for ContainerTranslator {
    fn to_container_path(&self, host_path: &Path, private_data_dir: &Path) -> Result<PathBuf> {
        let relative = host_path
            .strip_prefix(private_data_dir)
            .map_err(|_| CoreError::Translation {
                path: host_path.to_path_buf(),
                private_data_dir: private_data_dir.to_path_buf(),
            })?;
        Ok(self.container_root.join(relative))
    }
}
