// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

use openclaw_kube::cli::DiagArgs;
use openclaw_kube::config::Config;
use openclaw_kube::error::Result;
use openclaw_kube::{diag, kubernetes, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = DiagArgs::parse();
    logging::init(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(args: DiagArgs) -> Result<()> {
    // Resolve the cluster connection once; every stage reads it from the config
    let (context, client) = kubernetes::connect().await?;
    let config = Config::new(&args, context);
    info!(
        "Diagnosing StatefulSet {}/{} ({})",
        config.namespace, config.statefulset, config.context.mode
    );

    diag::run(&client, &config, &mut io::stdout()).await
}
