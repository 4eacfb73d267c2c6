//! Candidate script discovery in a single directory level

use crate::fs::FileSystem;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Suffixes collected by default, in output order
pub const DEFAULT_EXTENSIONS: &[&str] = &[".sh", ".ps1"];

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Failed to list directory {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },
}

pub struct ScriptPathCollector<'a, F: FileSystem> {
    fs: &'a F,
}

impl<'a, F: FileSystem> ScriptPathCollector<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Regular files directly under `basedir` whose name ends in one of
    /// `extensions`.
    ///
    /// Results are grouped by extension in the order given and sorted by file
    /// name inside each group. A directory with no matches yields an empty list.
    pub fn collect(&self, basedir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>, CollectError> {
        if !self.fs.exists(basedir) {
            return Err(CollectError::PathNotFound(basedir.to_path_buf()));
        }
        if !self.fs.is_dir(basedir) {
            return Err(CollectError::NotADirectory(basedir.to_path_buf()));
        }

        let mut entries = self
            .fs
            .read_dir(basedir)
            .map_err(|e| CollectError::ReadFailed {
                path: basedir.to_path_buf(),
                message: format!("{:#}", e),
            })?;
        entries.retain(|e| e.is_file());
        entries.sort_by(|a, b| a.file_name().cmp(b.file_name()));

        let mut paths = Vec::new();
        for ext in extensions {
            let before = paths.len();
            paths.extend(
                entries
                    .iter()
                    .filter(|e| has_suffix(e.file_name(), ext))
                    .map(|e| e.path().to_path_buf()),
            );
            debug!("Found {} {} file(s) in {}", paths.len() - before, ext, basedir.display());
        }

        Ok(paths)
    }
}

/// `name` ends in `suffix` and has something before it
fn has_suffix(name: &str, suffix: &str) -> bool {
    name.len() > suffix.len() && name.ends_with(suffix)
}
