//! Per-script record extraction

use crate::fs::FileSystem;
use crate::heuristics::{detect_script_type, InstallMethod, ScriptClassifier, ScriptType};
use crate::transform::{ContentProcessor, ScriptBody};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_NAME_SEPARATOR: char = '-';

/// Normalized metadata and cleaned body for one installer script
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptRecord {
    pub app_name: String,
    pub install_method: InstallMethod,
    pub script_type: ScriptType,
    pub script: ScriptBody,
    pub source: PathBuf,
}

/// Application name from a file stem: everything after the first hyphen, or
/// the whole stem when there is none. `install-foo-bar.sh` yields `foo-bar`.
pub fn app_name_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    match stem.split_once(APP_NAME_SEPARATOR) {
        Some((_, name)) => name.to_string(),
        None => stem,
    }
}

pub struct ScriptDataExtractor<'a, F: FileSystem> {
    fs: &'a F,
    processor: ContentProcessor,
}

impl<'a, F: FileSystem> ScriptDataExtractor<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self::with_processor(fs, ContentProcessor::default())
    }

    pub fn with_processor(fs: &'a F, processor: ContentProcessor) -> Self {
        Self { fs, processor }
    }

    /// Read `path` once and build its record. The classifier sees the raw
    /// content, before any boilerplate is stripped.
    pub fn extract<C>(&self, path: &Path, classifier: &C) -> Result<ScriptRecord>
    where
        C: ScriptClassifier + ?Sized,
    {
        let content = self.fs.read_to_string(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let record = ScriptRecord {
            app_name: app_name_from_path(path),
            install_method: classifier.classify(&file_name, &content),
            script_type: detect_script_type(path),
            script: self.processor.process(&content),
            source: path.to_path_buf(),
        };

        debug!(
            app = %record.app_name,
            method = %record.install_method,
            script_type = %record.script_type,
            "Extracted {}",
            path.display()
        );

        Ok(record)
    }
}
