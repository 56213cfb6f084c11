// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The StatefulSet diagnostic: seven stages run strictly in order.

pub mod report;
pub mod scanner;
pub mod secrets;

pub use scanner::{is_token_name, scan_env, short_secret, CredentialCandidate};
pub use secrets::{DecodeReport, SecretDecoder};

use crate::config::Config;
use crate::error::{OpenclawError, Result};
use crate::kubernetes::{
    find_container, find_network_surface, get_workload, list_pods, pick_main_pod, tail_logs,
};
use kube::Client;
use std::io::Write;
use tracing::{error, info};

/// Run the diagnostic and write the report to `out`
///
/// Only workload lookup failures abort; secret, network and log lookups are soft.
pub async fn run(client: &Client, config: &Config, out: &mut impl Write) -> Result<()> {
    let namespace = config.namespace.as_str();
    let sts_name = config.statefulset.as_str();

    report::header(out, config)?;

    writeln!(out, "1) StatefulSet")?;
    let workload = get_workload(client, namespace, sts_name).await?;
    report::workload(out, &workload)?;

    writeln!(out, "2) Pods")?;
    let pods = list_pods(client, &workload).await?;
    let pod = pick_main_pod(&pods, &workload).ok_or_else(|| OpenclawError::NoPods {
        selector: workload.selector(),
    })?;
    info!("Inspecting pod {}/{}", namespace, pod.name);
    report::pods(out, &pods, pod)?;

    writeln!(out, "3) Container / Env / Token candidates")?;
    let container = find_container(pod)?;
    let candidates = scan_env(container);
    report::container(out, container, &candidates)?;

    if config.print_token {
        writeln!(out, "4) Secret decoding (requested)")?;
        let decoded = SecretDecoder::new(client, namespace)
            .decode_tokens(container)
            .await;
        report::decoded(out, &decoded)?;
    } else {
        writeln!(out, "4) Secret decoding")?;
        writeln!(
            out,
            "  (skipped; re-run with --print-token to decode token values from referenced Secrets)"
        )?;
        writeln!(out)?;
    }

    writeln!(out, "5) Service / Ingress")?;
    let surface = find_network_surface(client, namespace, sts_name).await;
    report::network(out, namespace, sts_name, &surface)?;

    writeln!(out, "6) Pod status summary")?;
    report::status(out, pod)?;

    writeln!(out, "7) Log tail")?;
    match config.tail_logs {
        Some(lines) => {
            match tail_logs(client, namespace, &pod.name, &container.name, lines).await {
                Ok(text) => writeln!(out, "{}", text.trim_end())?,
                Err(e) => error!(
                    "Failed to read logs of {}/{} [{}]: {}",
                    namespace, pod.name, container.name, e
                ),
            }
        }
        None => writeln!(out, "  (skipped; re-run with --tail-logs N to fetch logs)")?,
    }
    writeln!(out)?;

    report::footer(out)?;
    Ok(())
}
