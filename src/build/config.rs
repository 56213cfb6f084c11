// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! `build-config.json`: source and target image settings read by the Makefile

use crate::constants::build::CONFIG_FILE;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BuildConfig {
    #[serde(default)]
    pub source: ImageRef,
    #[serde(default)]
    pub target: ImageRef,
    /// Keys written by other tools, kept on rewrite
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BuildConfig {
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Load the file; `None` when it does not exist
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Previously saved values for use as defaults; unreadable files count as empty
    pub fn load_saved(path: &Path) -> Self {
        match Self::load(path) {
            Ok(saved) => saved.unwrap_or_default(),
            Err(e) => {
                warn!("Ignoring saved configuration {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Pretty JSON with a trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        debug!("Wrote {}", path.display());
        Ok(())
    }

    /// Set the source image tag; false when it already matches
    pub fn set_source_tag(&mut self, tag: &str) -> bool {
        if self.source.tag.as_deref() == Some(tag) {
            return false;
        }
        self.source.tag = Some(tag.to_string());
        true
    }
}

/// Point the build config's source tag at `tag`
///
/// Returns false when the file is missing or already up to date.
pub fn update_build_config(
    path: &Path,
    tag: &str,
    dry_run: bool,
    out: &mut impl Write,
) -> Result<bool> {
    let Some(mut config) = BuildConfig::load(path)? else {
        return Ok(false);
    };
    if !config.set_source_tag(tag) {
        return Ok(false);
    }

    if dry_run {
        out.write_all(config.to_json()?.as_bytes())?;
    } else {
        config.save(path)?;
    }
    Ok(true)
}
