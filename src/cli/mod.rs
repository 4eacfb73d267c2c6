pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, DuplicatePolicyArg};
pub use handlers::handle_run;
pub use output::format_summary;
