//! Script interpreter detection by file extension

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptType {
    Bash,
    PowerShell,
}

impl ScriptType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptType::Bash => "bash",
            ScriptType::PowerShell => "powershell",
        }
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `.ps1` is PowerShell; `.sh` and anything unrecognised fall back to bash.
pub fn detect_script_type(path: &Path) -> ScriptType {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ps1") => ScriptType::PowerShell,
        _ => ScriptType::Bash,
    }
}
