//! Install-method classification from file names and script content

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Package manager or technique a script uses to install software
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallMethod {
    Apt,
    Pip,
    Yum,
    Homebrew,
    Curl,
    /// Platform-agnostic script selected by file name
    Any,
    Other,
}

impl InstallMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallMethod::Apt => "apt",
            InstallMethod::Pip => "pip",
            InstallMethod::Yum => "yum",
            InstallMethod::Homebrew => "homebrew",
            InstallMethod::Curl => "curl",
            InstallMethod::Any => "any",
            InstallMethod::Other => "other",
        }
    }
}

impl fmt::Display for InstallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can bucket a script into an [`InstallMethod`].
///
/// Closures taking `(file_name, content)` implement this as well, which keeps
/// the extractor testable with fixed classifications.
pub trait ScriptClassifier {
    fn classify(&self, file_name: &str, content: &str) -> InstallMethod;
}

impl<F> ScriptClassifier for F
where
    F: Fn(&str, &str) -> InstallMethod,
{
    fn classify(&self, file_name: &str, content: &str) -> InstallMethod {
        self(file_name, content)
    }
}

/// Content rules in priority order; the first match wins.
const CONTENT_RULES: &[(&str, InstallMethod)] = &[
    (r"\bapt\b", InstallMethod::Apt),
    (r"\bpip3?\b", InstallMethod::Pip),
    (r"\byum\b", InstallMethod::Yum),
    (r"\bbrew\b", InstallMethod::Homebrew),
    (r"\bcurl\b", InstallMethod::Curl),
];

/// Filename rules, checked before any content is inspected.
const FILENAME_RULES: &[(&str, InstallMethod)] = &[(r"\bon-linux\b", InstallMethod::Any)];

struct Rule {
    pattern: Regex,
    method: InstallMethod,
}

fn compile_rules(rules: &[(&str, InstallMethod)]) -> Vec<Rule> {
    rules
        .iter()
        .filter_map(|(pattern, method)| match Regex::new(pattern) {
            Ok(pattern) => Some(Rule {
                pattern,
                method: *method,
            }),
            Err(e) => {
                warn!("Skipping invalid install-method pattern {}: {}", pattern, e);
                None
            }
        })
        .collect()
}

/// Regex-driven classifier: ordered whole-word content rules with optional
/// filename overrides.
pub struct InstallMethodClassifier {
    filename_rules: Vec<Rule>,
    content_rules: Vec<Rule>,
}

impl InstallMethodClassifier {
    /// Classifier with filename overrides enabled
    pub fn new() -> Self {
        Self::with_filename_rules(true)
    }

    /// Classifier that only inspects script content
    pub fn content_only() -> Self {
        Self::with_filename_rules(false)
    }

    pub fn with_filename_rules(enabled: bool) -> Self {
        let filename_rules = if enabled {
            compile_rules(FILENAME_RULES)
        } else {
            Vec::new()
        };

        Self {
            filename_rules,
            content_rules: compile_rules(CONTENT_RULES),
        }
    }

    pub fn filename_rules_enabled(&self) -> bool {
        !self.filename_rules.is_empty()
    }
}

impl Default for InstallMethodClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptClassifier for InstallMethodClassifier {
    fn classify(&self, file_name: &str, content: &str) -> InstallMethod {
        if let Some(rule) = self
            .filename_rules
            .iter()
            .find(|r| r.pattern.is_match(file_name))
        {
            debug!("{} matched filename rule {}", file_name, rule.pattern);
            return rule.method;
        }

        match self
            .content_rules
            .iter()
            .find(|r| r.pattern.is_match(content))
        {
            Some(rule) => {
                debug!("{} matched content rule {}", file_name, rule.pattern);
                rule.method
            }
            None => InstallMethod::Other,
        }
    }
}
