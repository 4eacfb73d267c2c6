//! scriptpack - aggregate installer scripts into a YAML manifest
//!
//! Reads the per-application `.sh` and `.ps1` installer scripts directly
//! inside a directory and produces one manifest grouping them by application.
//!
//! # Pipeline
//!
//! - [`collector`]: lists candidate scripts (one directory level)
//! - [`heuristics`]: install-method classification and script-type detection
//! - [`transform`]: strips shebang and `set -e/-u/-x` lines
//! - [`extract`]: builds one [`ScriptRecord`] per script
//! - [`manifest`]: groups records by application under a [`DuplicatePolicy`]
//! - [`emit`]: writes the manifest with literal block script bodies
//! - [`processor`]: runs the whole pass and writes the manifest
//!
//! # Example
//!
//! ```no_run
//! use scriptpack::{DuplicatePolicy, RealFileSystem, ScriptProcessor};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let processor = ScriptProcessor::new(RealFileSystem::new(), "scripts.yaml")
//!     .with_duplicate_policy(DuplicatePolicy::Merge);
//! let outcome = processor.run(Path::new("installers"))?;
//! println!("{} app(s)", outcome.manifest.apps.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod emit;
pub mod extract;
pub mod fs;
pub mod heuristics;
pub mod manifest;
pub mod processor;
pub mod transform;
pub mod util;

pub use collector::{CollectError, ScriptPathCollector, DEFAULT_EXTENSIONS};
pub use config::{ConfigError, ScriptpackConfig};
pub use extract::{app_name_from_path, ScriptDataExtractor, ScriptRecord};
pub use fs::{FileSystem, RealFileSystem};
pub use heuristics::{
    detect_script_type, InstallMethod, InstallMethodClassifier, ScriptClassifier, ScriptType,
};
pub use manifest::{AppEntry, DuplicatePolicy, InstallMethodEntry, Manifest, ManifestBuilder};
pub use processor::{ProcessOutcome, ScriptProcessor};
pub use transform::{strip_set_commands, strip_shebang, ContentProcessor, ScriptBody};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
