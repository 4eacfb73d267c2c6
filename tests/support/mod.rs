use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path to the scriptpack binary built for this test run
pub fn scriptpack_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_scriptpack"))
}

/// Command running in `workdir` with no `SCRIPTPACK_*` overrides from the
/// calling environment
pub fn scriptpack_in(workdir: &Path) -> Command {
    let mut cmd = Command::new(scriptpack_bin());
    cmd.current_dir(workdir)
        .env_remove("SCRIPTPACK_OUTPUT")
        .env_remove("SCRIPTPACK_ON_DUPLICATE")
        .env_remove("SCRIPTPACK_FILENAME_RULES")
        .env_remove("SCRIPTPACK_LOG_LEVEL")
        .env_remove("SCRIPTPACK_LOG_JSON")
        .env_remove("RUST_LOG");
    cmd
}

/// Run `scriptpack --basedir <basedir> [extra...]` from `workdir`
pub fn run_scriptpack(workdir: &Path, basedir: &Path, extra: &[&str]) -> Output {
    scriptpack_in(workdir)
        .arg("--basedir")
        .arg(basedir)
        .args(extra)
        .output()
        .expect("Failed to execute scriptpack")
}

/// Create `dir` and write each `(file name, content)` pair into it
#[allow(dead_code)]
pub fn write_scripts(dir: &Path, scripts: &[(&str, &str)]) {
    fs::create_dir_all(dir).expect("Failed to create script directory");
    for (name, content) in scripts {
        fs::write(dir.join(name), content).expect("Failed to write script");
    }
}
