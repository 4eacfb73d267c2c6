use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::manifest::DuplicatePolicy;

/// Aggregate installer scripts into a single YAML manifest
#[derive(Parser, Debug)]
#[command(
    name = "scriptpack",
    about = "Aggregate per-application installer scripts into a single YAML manifest",
    version,
    long_about = "scriptpack reads the .sh and .ps1 scripts directly inside a directory, \
                  infers each script's application name, install method and interpreter, \
                  strips shebang and `set -e/-u/-x` lines, and writes one manifest grouping \
                  the scripts by application.\n\n\
                  Examples:\n  \
                  scriptpack --basedir ./installers\n  \
                  scriptpack --basedir ./installers --on-duplicate merge\n  \
                  scriptpack --basedir ./installers -o apps.yaml"
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "DIR",
        help = "Base directory containing script files"
    )]
    pub basedir: PathBuf,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Manifest path [default: scripts.yaml, or SCRIPTPACK_OUTPUT]"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        value_enum,
        value_name = "POLICY",
        help = "How to handle scripts for an app that was already seen [default: skip, or SCRIPTPACK_ON_DUPLICATE]"
    )]
    pub on_duplicate: Option<DuplicatePolicyArg>,

    #[arg(
        long,
        help = "Classify by content only, ignoring filename rules such as 'on-linux'"
    )]
    pub no_filename_rules: bool,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicyArg {
    /// Keep the first script and warn about the rest
    Skip,
    /// Add every script as another install method
    Merge,
}

impl From<DuplicatePolicyArg> for DuplicatePolicy {
    fn from(arg: DuplicatePolicyArg) -> Self {
        match arg {
            DuplicatePolicyArg::Skip => DuplicatePolicy::Skip,
            DuplicatePolicyArg::Merge => DuplicatePolicy::Merge,
        }
    }
}
