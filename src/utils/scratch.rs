//! Scratch directory shared by the thumbnail fetcher and the mail dispatcher

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub(crate) struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Regular files currently in the directory, sorted by name.
    /// A missing or unreadable directory is reported as empty.
    pub(crate) fn files(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(&self.path) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        files.sort();
        files
    }

    /// Write `bytes` under the final path component of `name`, creating the
    /// directory on first use.
    pub(crate) fn write(&self, name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let file_name = Path::new(name).file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unusable file name {name:?}"),
            )
        })?;
        fs::create_dir_all(&self.path)?;
        let target = self.path.join(file_name);
        fs::write(&target, bytes)?;
        Ok(target)
    }

    /// Remove every file in the directory; returns how many were removed.
    pub(crate) fn purge(&self) -> usize {
        let mut removed = 0;
        for file in self.files() {
            match fs::remove_file(&file) {
                Ok(()) => removed += 1,
                Err(e) => tracing::warn!("Could not remove {}: {}", file.display(), e),
            }
        }
        removed
    }

    /// Log leftovers from an earlier run that never reached the purge step.
    /// Returns how many files were found.
    pub(crate) fn warn_if_residual(&self) -> usize {
        let leftovers = self.files().len();
        if leftovers > 0 {
            tracing::warn!(
                "Scratch dir {} already holds {} file(s) from a previous run",
                self.path.display(),
                leftovers
            );
        }
        leftovers
    }
}
