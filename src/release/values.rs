// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! `image.tag` rewriting in Helm values files
//!
//! The rewrite is textual so comments and layout survive; YAML parsing is only
//! used to report the previous tag.

use crate::error::{OpenclawError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Replace every `tag:` line inside `image:` blocks with `tag: "<tag>"`
///
/// A block ends at the next non-empty line that starts without indentation.
pub fn rewrite_image_tag(text: &str, tag: &str) -> Result<String> {
    let mut out = Vec::new();
    let mut in_image = false;
    let mut changed = false;

    for line in text.lines() {
        let stripped = line.trim();
        if stripped.starts_with("image:") {
            in_image = true;
            out.push(line.to_string());
            continue;
        }
        if in_image && !stripped.is_empty() && !line.starts_with(' ') && !line.starts_with('\t') {
            in_image = false;
        }
        if in_image && stripped.starts_with("tag:") {
            let prefix = line.split("tag:").next().unwrap_or_default();
            out.push(format!("{}tag: \"{}\"", prefix, tag));
            changed = true;
            continue;
        }
        out.push(line.to_string());
    }

    if !changed {
        return Err(OpenclawError::ValuesFile(
            "Did not find image.tag to update in values file".to_string(),
        ));
    }

    let mut new_text = out.join("\n");
    if text.ends_with('\n') {
        new_text.push('\n');
    }
    Ok(new_text)
}

/// Current top-level `image.tag`, if the document parses
pub fn current_image_tag(text: &str) -> Option<String> {
    let doc: serde_yaml::Value = serde_yaml::from_str(text).ok()?;
    match doc.get("image")?.get("tag")? {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Rewrite the values file in place, or print the result on a dry run
///
/// Returns the previous top-level `image.tag` when it could be read.
pub fn update_values_file(
    path: &Path,
    tag: &str,
    dry_run: bool,
    out: &mut impl Write,
) -> Result<Option<String>> {
    if !path.exists() {
        return Err(OpenclawError::ValuesFile(format!(
            "values file not found: {}",
            path.display()
        )));
    }

    let text = fs::read_to_string(path)?;
    let previous = current_image_tag(&text);
    let new_text = rewrite_image_tag(&text, tag)?;

    if dry_run {
        out.write_all(new_text.as_bytes())?;
    } else {
        fs::write(path, new_text)?;
        debug!("Wrote {}", path.display());
    }

    Ok(previous)
}
