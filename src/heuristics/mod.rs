// Heuristic classification of installer scripts
//
// Install methods are inferred from whole-word matches in script content
// (plus optional filename overrides); script types from the file extension.

pub mod install_method;
pub mod script_type;

pub use install_method::{InstallMethod, InstallMethodClassifier, ScriptClassifier};
pub use script_type::{detect_script_type, ScriptType};
