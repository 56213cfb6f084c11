// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use std::io;

use openclaw_kube::build::update_build_config;
use openclaw_kube::cli::TagArgs;
use openclaw_kube::logging;
use openclaw_kube::release::{fetch_latest_tag, http_client, update_values_file};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = TagArgs::parse();
    logging::init(args.verbose);

    let client = http_client()?;
    let tag = fetch_latest_tag(&client, &args.url)
        .await
        .with_context(|| format!("Failed to fetch latest release from {}", args.url))?;
    println!("Latest tag: {}", tag);

    let mut stdout = io::stdout();
    let previous = update_values_file(&args.values, &tag, args.dry_run, &mut stdout)
        .with_context(|| format!("Failed to update {}", args.values.display()))?;
    if let Some(previous) = previous {
        println!("Previous tag: {}", previous);
    }
    println!("Updated: {}", args.values.display());

    if args.build_config {
        let path = &args.build_config_path;
        let updated = update_build_config(path, &tag, args.dry_run, &mut stdout)
            .with_context(|| format!("Failed to update {}", path.display()))?;
        if updated {
            println!("Updated: {}", path.display());
        } else {
            println!("Skipped: {} (missing or already up to date)", path.display());
        }
    }

    Ok(())
}
