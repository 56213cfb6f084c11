// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command-line arguments for the three binaries

use crate::constants::{build, diag, release};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "openclaw-diag")]
#[command(version, about = "OpenClaw Helm/K8s diagnostic (StatefulSet).")]
pub struct DiagArgs {
    /// Namespace (default: current kube context namespace)
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// StatefulSet name
    #[arg(short, long, default_value = diag::DEFAULT_STATEFULSET)]
    pub statefulset: String,

    /// Decode and print candidate gateway token(s) from referenced Secrets (careful)
    #[arg(long)]
    pub print_token: bool,

    /// If >0, tail this many log lines from the main container
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub tail_logs: i64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
#[command(name = "update-openclaw-tag")]
#[command(version, about = "Update the OpenClaw image tag to the latest GitHub release")]
pub struct TagArgs {
    /// Path to values.yaml
    #[arg(long, default_value = release::DEFAULT_VALUES_PATH)]
    pub values: PathBuf,

    /// Also update the build configuration
    #[arg(long)]
    pub build_config: bool,

    /// Build configuration updated with --build-config
    #[arg(long, default_value = build::CONFIG_FILE)]
    pub build_config_path: PathBuf,

    /// Print changes only
    #[arg(long)]
    pub dry_run: bool,

    /// Release endpoint returning the latest release as JSON
    #[arg(long, default_value = release::LATEST_RELEASE_URL)]
    pub url: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
#[command(name = "configure-make")]
#[command(version, about = "Configure Makefile for OpenClaw Kube image build")]
pub struct ConfigureArgs {
    /// Read all values from environment variables (non-interactive)
    #[arg(long)]
    pub from_env: bool,

    /// Directory to write build-config.json
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Source image registry
    #[arg(long)]
    pub source_registry: Option<String>,

    /// Source image name
    #[arg(long)]
    pub source_image: Option<String>,

    /// Source image tag
    #[arg(long)]
    pub source_tag: Option<String>,

    /// Target image registry
    #[arg(long)]
    pub target_registry: Option<String>,

    /// Target image name
    #[arg(long)]
    pub target_image: Option<String>,

    /// Target image tag
    #[arg(long)]
    pub target_tag: Option<String>,
}
