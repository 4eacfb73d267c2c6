//! End-to-end run: collect, extract, aggregate, write

use crate::collector::{ScriptPathCollector, DEFAULT_EXTENSIONS};
use crate::config::ScriptpackConfig;
use crate::extract::ScriptDataExtractor;
use crate::fs::FileSystem;
use crate::heuristics::{InstallMethodClassifier, ScriptClassifier};
use crate::manifest::{DuplicatePolicy, Manifest, ManifestBuilder};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub manifest: Manifest,
    pub warnings: Vec<String>,
    pub processed_count: usize,
    /// Absolute path of the written manifest
    pub output_path: PathBuf,
}

pub struct ScriptProcessor<F: FileSystem> {
    fs: F,
    output_path: PathBuf,
    duplicate_policy: DuplicatePolicy,
    classifier: Box<dyn ScriptClassifier + Send + Sync>,
}

impl<F: FileSystem> ScriptProcessor<F> {
    pub fn new(fs: F, output_path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            output_path: output_path.into(),
            duplicate_policy: DuplicatePolicy::default(),
            classifier: Box::new(InstallMethodClassifier::new()),
        }
    }

    pub fn from_config(fs: F, config: &ScriptpackConfig) -> Self {
        Self::new(fs, config.output_path.clone())
            .with_duplicate_policy(config.duplicate_policy)
            .with_classifier(InstallMethodClassifier::with_filename_rules(
                config.filename_rules,
            ))
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn with_classifier(mut self, classifier: impl ScriptClassifier + Send + Sync + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Process every `.sh`/`.ps1` script directly under `basedir` and write
    /// the manifest.
    ///
    /// Any read failure aborts the run before the manifest is written.
    pub fn run(&self, basedir: &Path) -> Result<ProcessOutcome> {
        info!("Collecting scripts from {}", basedir.display());
        let paths = ScriptPathCollector::new(&self.fs).collect(basedir, DEFAULT_EXTENSIONS)?;
        debug!("{} candidate script(s)", paths.len());

        let extractor = ScriptDataExtractor::new(&self.fs);
        let mut builder = ManifestBuilder::new(self.duplicate_policy);
        for path in &paths {
            let record = extractor
                .extract(path, self.classifier.as_ref())
                .with_context(|| format!("Failed to process script {}", path.display()))?;
            builder.add(record);
        }

        let outcome = builder.finish();
        let yaml = outcome.manifest.to_yaml()?;
        self.fs.write(&self.output_path, &yaml)?;
        let output_path = self.fs.canonicalize(&self.output_path)?;

        info!(
            "Wrote {} app(s) from {} script(s) to {}",
            outcome.manifest.apps.len(),
            outcome.processed_count,
            output_path.display()
        );

        Ok(ProcessOutcome {
            manifest: outcome.manifest,
            warnings: outcome.warnings,
            processed_count: outcome.processed_count,
            output_path,
        })
    }
}
