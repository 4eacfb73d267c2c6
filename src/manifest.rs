//! Manifest document and the aggregation of script records into it

use crate::extract::ScriptRecord;
use crate::heuristics::{InstallMethod, ScriptType};
use crate::transform::ScriptBody;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// What to do with a script whose application name is already present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the first script, record a warning, skip the rest
    #[default]
    Skip,
    /// Append every script as another install method of the same app
    Merge,
}

impl DuplicatePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicatePolicy::Skip => "skip",
            DuplicatePolicy::Merge => "merge",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DuplicatePolicy {
    type Err = crate::config::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skip" => Ok(DuplicatePolicy::Skip),
            "merge" => Ok(DuplicatePolicy::Merge),
            _ => Err(crate::config::ConfigError::InvalidDuplicatePolicy(
                s.to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallMethodEntry {
    #[serde(rename = "type")]
    pub method: InstallMethod,
    pub script_type: ScriptType,
    pub script: ScriptBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
    pub name: String,
    pub install_methods: Vec<InstallMethodEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub apps: Vec<AppEntry>,
}

impl Manifest {
    pub fn app(&self, name: &str) -> Option<&AppEntry> {
        self.apps.iter().find(|a| a.name == name)
    }

    /// Render the manifest; script bodies with line breaks become literal
    /// block scalars.
    pub fn to_yaml(&self) -> Result<String> {
        crate::emit::manifest_to_yaml(self)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse manifest YAML")
    }
}

/// Result of feeding every record through a [`ManifestBuilder`]
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub manifest: Manifest,
    pub warnings: Vec<String>,
    pub processed_count: usize,
}

/// Accumulates records into app entries keyed by name, in first-seen order
#[derive(Debug)]
pub struct ManifestBuilder {
    policy: DuplicatePolicy,
    apps: Vec<AppEntry>,
    index: HashMap<String, usize>,
    warnings: Vec<String>,
    processed_count: usize,
}

impl ManifestBuilder {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            apps: Vec::new(),
            index: HashMap::new(),
            warnings: Vec::new(),
            processed_count: 0,
        }
    }

    /// Add one record. Returns `false` when the record was skipped as a
    /// duplicate.
    pub fn add(&mut self, record: ScriptRecord) -> bool {
        let entry = InstallMethodEntry {
            method: record.install_method,
            script_type: record.script_type,
            script: record.script,
        };

        match self.index.get(&record.app_name) {
            Some(&idx) => match self.policy {
                DuplicatePolicy::Skip => {
                    warn!(
                        app = %record.app_name,
                        "Skipping duplicate script {}",
                        record.source.display()
                    );
                    self.warnings.push(format!(
                        "Warning: Duplicate app name found - {}\nSkipping script: {}",
                        record.app_name,
                        record.source.display()
                    ));
                    return false;
                }
                DuplicatePolicy::Merge => {
                    self.apps[idx].install_methods.push(entry);
                }
            },
            None => {
                self.index.insert(record.app_name.clone(), self.apps.len());
                self.apps.push(AppEntry {
                    name: record.app_name,
                    install_methods: vec![entry],
                });
            }
        }

        self.processed_count += 1;
        true
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn processed_count(&self) -> usize {
        self.processed_count
    }

    pub fn finish(self) -> BuildOutcome {
        BuildOutcome {
            manifest: Manifest { apps: self.apps },
            warnings: self.warnings,
            processed_count: self.processed_count,
        }
    }
}
