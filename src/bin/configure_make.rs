// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use std::io;

use openclaw_kube::build::{collect_config, BuildConfig, Terminal};
use openclaw_kube::cli::ConfigureArgs;
use openclaw_kube::logging;

fn main() -> Result<()> {
    let args = ConfigureArgs::parse();
    logging::init(false);

    println!("=== OpenClaw Kube - Makefile Configuration ===");

    let path = BuildConfig::path_in(&args.output_dir);
    let saved = BuildConfig::load_saved(&path);
    let mut input = Terminal::new(args.from_env);
    let config = collect_config(&args, &saved, &mut input, &mut io::stdout())?;

    println!();
    config
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("  Saved:   {}", path.display());

    println!("\n=== Next Steps ===");
    println!("  make build   # Build the image");
    println!("  make push    # Build and push to registry");
    Ok(())
}
