//! Script body cleanup
//!
//! Transforms are plain `fn(&str) -> String` functions chained by a
//! [`ContentProcessor`]. Every transform works line by line and is
//! idempotent. Line endings are normalized to `\n` first; after that the
//! lines that are not dropped are kept byte-for-byte.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single content transformation step
pub type Transform = fn(&str) -> String;

/// Cleaned script text.
///
/// [`Manifest::to_yaml`](crate::manifest::Manifest::to_yaml) writes a body
/// that contains a line break as a literal block scalar (`|`), choosing the
/// indentation and chomping indicators that reproduce it exactly. Bodies
/// holding characters a block scalar cannot carry (a lone `\r`, other control
/// characters) fall back to a double-quoted scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScriptBody(String);

impl ScriptBody {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the body is written as a literal block scalar
    pub fn is_block(&self) -> bool {
        crate::emit::fits_literal_block(&self.0)
    }
}

impl fmt::Display for ScriptBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ScriptBody {
    fn from(content: String) -> Self {
        Self(content)
    }
}

/// Turn `\r\n` line endings into `\n`. A lone `\r` is left alone.
pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_shebang(line: &str) -> bool {
    line.trim_start().starts_with("#!")
}

/// Drop the leading shebang together with the blank lines around it.
///
/// Only the leading run of blank and `#!` lines is considered; if that run
/// holds no shebang the text is returned untouched.
pub fn strip_shebang(content: &str) -> String {
    let mut lines = content.split_inclusive('\n').peekable();
    let mut saw_shebang = false;
    let mut skipped = 0;

    while let Some(line) = lines.peek() {
        if is_shebang(line) {
            saw_shebang = true;
        } else if !is_blank(line) {
            break;
        }
        skipped += line.len();
        lines.next();
    }

    if saw_shebang {
        content[skipped..].to_string()
    } else {
        content.to_string()
    }
}

/// `set -e`, `set -u`, `set -x` and their combinations (`set -eux`,
/// `set -e -x`). Anything else on the line, e.g. `-o pipefail`, keeps it.
fn is_set_command(line: &str) -> bool {
    let Some(rest) = line.trim().strip_prefix("set") else {
        return false;
    };
    if !rest.starts_with(char::is_whitespace) {
        return false;
    }

    let mut flags = rest.split_whitespace().peekable();
    flags.peek().is_some()
        && flags.all(|flag| {
            flag.strip_prefix('-').is_some_and(|letters| {
                !letters.is_empty() && letters.chars().all(|c| matches!(c, 'e' | 'u' | 'x'))
            })
        })
}

/// Drop every line that only toggles shell error/trace options.
pub fn strip_set_commands(content: &str) -> String {
    content
        .split_inclusive('\n')
        .filter(|line| !is_set_command(line))
        .collect()
}

/// Ordered chain of transforms applied to every script body
#[derive(Clone)]
pub struct ContentProcessor {
    transforms: Vec<Transform>,
}

impl ContentProcessor {
    pub fn new(transforms: Vec<Transform>) -> Self {
        Self { transforms }
    }

    /// Processor that leaves content untouched
    pub fn passthrough() -> Self {
        Self::new(Vec::new())
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transforms.push(transform);
        self
    }

    pub fn process(&self, content: &str) -> ScriptBody {
        let cleaned = self
            .transforms
            .iter()
            .fold(content.to_string(), |acc, transform| transform(&acc));
        ScriptBody(cleaned)
    }
}

impl Default for ContentProcessor {
    /// Strips `set -e/-u/-x` lines before the shebang so a shebang they were
    /// hiding is still removed as the leading line.
    fn default() -> Self {
        Self::new(vec![normalize_line_endings, strip_set_commands, strip_shebang])
    }
}

impl fmt::Debug for ContentProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentProcessor")
            .field("transforms", &self.transforms.len())
            .finish()
    }
}
