use crate::cli::commands::CliArgs;
use crate::cli::output::format_summary;
use crate::config::ScriptpackConfig;
use crate::fs::{FileSystem, RealFileSystem};
use crate::processor::ScriptProcessor;

use tracing::{debug, error, info};

/// Runs one aggregation pass and returns the process exit code
pub fn handle_run(args: &CliArgs) -> i32 {
    let default_config = ScriptpackConfig::default();
    let config = ScriptpackConfig {
        output_path: args
            .output
            .clone()
            .unwrap_or(default_config.output_path),
        duplicate_policy: args
            .on_duplicate
            .map(Into::into)
            .unwrap_or(default_config.duplicate_policy),
        filename_rules: !args.no_filename_rules && default_config.filename_rules,
        log_level: args
            .log_level
            .as_ref()
            .map(|l| l.to_lowercase())
            .unwrap_or(default_config.log_level),
    };
    debug!("Effective configuration: {:?}", config.to_display_map());

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        eprintln!("\nPlease check your environment variables and command-line arguments.");
        return 1;
    }

    run_with(RealFileSystem::new(), args, &config)
}

fn run_with<F: FileSystem>(fs: F, args: &CliArgs, config: &ScriptpackConfig) -> i32 {
    info!(
        "Aggregating scripts (on duplicate: {}, filename rules: {})",
        config.duplicate_policy, config.filename_rules
    );

    let processor = ScriptProcessor::from_config(fs, config);
    match processor.run(&args.basedir) {
        Ok(outcome) => {
            println!("{}", format_summary(&outcome));
            0
        }
        Err(e) => {
            error!("{:#}", e);
            1
        }
    }
}
