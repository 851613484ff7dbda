//! Filesystem infrastructure — implements `PathProbe` and `TempLogStore`, and
//! locates the directory the bundled archives ship in.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::application::ports::{PathProbe, TempLog, TempLogStore};

/// Prefix of the temporary playbook log file.
pub const LOG_FILE_PREFIX: &str = "ansible-output";

/// Production filesystem implementation of the filesystem ports.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl PathProbe for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl TempLogStore for LocalFs {
    type Log = NamedTempFile;

    fn create(&self) -> Result<NamedTempFile> {
        tempfile::Builder::new()
            .prefix(LOG_FILE_PREFIX)
            .tempfile()
            .context("creating file in the temporary directory")
    }
}

impl TempLog for NamedTempFile {
    fn path(&self) -> &Path {
        NamedTempFile::path(self)
    }

    fn remove(self) -> Result<()> {
        let path = self.path().to_path_buf();
        self.close()
            .with_context(|| format!("removing {}", path.display()))
    }
}

/// Directory containing the running executable.
///
/// # Errors
///
/// Returns an error if the executable path cannot be determined.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot determine executable path")?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow::anyhow!("executable path {} has no parent", exe.display()))
}
