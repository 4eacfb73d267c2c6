//! Manifest YAML emission
//!
//! `serde_yaml` picks a scalar style on its own and falls back to escaped
//! double-quoted strings for bodies with tabs, trailing spaces, or carriage
//! returns. Script bodies therefore get written here as literal block
//! scalars; names and other short values still go through `serde_yaml` so its
//! quoting rules apply.
//!
//! Layout: mappings indented by 2, sequences by 4 with the dash offset by 2.
//!
//! ```text
//! apps:
//!   - name: foo
//!     install_methods:
//!       - type: apt
//!         script_type: bash
//!         script: |
//!           apt install foo
//! ```

use crate::manifest::Manifest;
use crate::transform::ScriptBody;
use anyhow::{Context, Result};
use std::fmt::Write;

const APP_INDENT: usize = 2;
const METHOD_INDENT: usize = 6;
/// Column of the keys inside an install-method entry
const METHOD_KEY_INDENT: usize = METHOD_INDENT + 2;
/// Block scalar content is indented this much past its key
const BLOCK_INDENT: usize = 2;

pub fn manifest_to_yaml(manifest: &Manifest) -> Result<String> {
    if manifest.apps.is_empty() {
        return Ok("apps: []\n".to_string());
    }

    let mut out = String::from("apps:\n");
    for app in &manifest.apps {
        push_line(&mut out, APP_INDENT, &format!("- name: {}", inline_scalar(&app.name)?));
        if app.install_methods.is_empty() {
            push_line(&mut out, APP_INDENT + 2, "install_methods: []");
            continue;
        }

        push_line(&mut out, APP_INDENT + 2, "install_methods:");
        for entry in &app.install_methods {
            push_line(&mut out, METHOD_INDENT, &format!("- type: {}", entry.method.as_str()));
            push_line(
                &mut out,
                METHOD_KEY_INDENT,
                &format!("script_type: {}", entry.script_type.as_str()),
            );
            push_indent(&mut out, METHOD_KEY_INDENT);
            out.push_str("script:");
            push_script(&mut out, &entry.script, METHOD_KEY_INDENT)?;
        }
    }

    Ok(out)
}

fn push_indent(out: &mut String, indent: usize) {
    out.extend(std::iter::repeat(' ').take(indent));
}

fn push_line(out: &mut String, indent: usize, line: &str) {
    push_indent(out, indent);
    out.push_str(line);
    out.push('\n');
}

/// Write the value of a `script:` key whose key sits at `key_indent`
fn push_script(out: &mut String, body: &ScriptBody, key_indent: usize) -> Result<()> {
    if body.is_block() {
        push_literal_block(out, body.as_str(), key_indent);
    } else {
        out.push(' ');
        out.push_str(&inline_scalar(body.as_str())?);
        out.push('\n');
    }
    Ok(())
}

/// Characters a block scalar can hold on a content line
fn is_block_char(c: char) -> bool {
    matches!(c,
        '\t'
        | '\u{20}'..='\u{7E}'
        | '\u{A0}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
        && !matches!(c, '\u{FEFF}' | '\u{2028}' | '\u{2029}')
}

/// A body goes out as `|` when it has a line break, is not only line breaks,
/// and every other character is printable on a content line.
pub(crate) fn fits_literal_block(body: &str) -> bool {
    body.contains('\n')
        && body.chars().any(|c| c != '\n')
        && body.chars().all(|c| c == '\n' || is_block_char(c))
}

/// Header (`|`, `|2`, `|-`, `|+`, ...) and content lines of a literal block
fn push_literal_block(out: &mut String, body: &str, key_indent: usize) {
    let content = body.trim_end_matches('\n');
    let chomp = match body.len() - content.len() {
        0 => "-",
        1 => "",
        _ => "+",
    };
    // Auto-detection would read leading whitespace or a leading empty line as
    // indentation.
    let needs_indicator = body.starts_with(|c: char| c == ' ' || c == '\t' || c == '\n');

    out.push_str(" |");
    if needs_indicator {
        let _ = write!(out, "{}", BLOCK_INDENT);
    }
    out.push_str(chomp);
    out.push('\n');

    for line in content.split('\n') {
        if !line.is_empty() {
            push_indent(out, key_indent + BLOCK_INDENT);
            out.push_str(line);
        }
        out.push('\n');
    }
    // keep chomping: the first trailing break ended the last line above
    for _ in 1..(body.len() - content.len()) {
        out.push('\n');
    }
}

/// Single-line scalar, quoted by `serde_yaml` where needed
fn inline_scalar(value: &str) -> Result<String> {
    if value.chars().any(|c| !is_block_char(c)) {
        return Ok(double_quoted(value));
    }

    let rendered = serde_yaml::to_string(value).context("Failed to serialize scalar to YAML")?;
    let rendered = rendered.strip_suffix('\n').unwrap_or(&rendered);
    if rendered.contains('\n') {
        return Ok(double_quoted(value));
    }
    Ok(rendered.to_string())
}

fn double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{85}' => out.push_str("\\N"),
            '\u{2028}' => out.push_str("\\L"),
            '\u{2029}' => out.push_str("\\P"),
            c if is_block_char(c) => out.push(c),
            c if (c as u32) <= 0xFF => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c if (c as u32) <= 0xFFFF => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => {
                let _ = write!(out, "\\U{:08X}", c as u32);
            }
        }
    }
    out.push('"');
    out
}
