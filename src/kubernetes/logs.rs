// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::Result;
use k8s_openapi::api::core::v1::Pod;
use kube::{api::LogParams, Api, Client};
use tracing::instrument;

/// Fetch the last `lines` timestamped log lines of a container
#[instrument(skip(client))]
pub async fn tail_logs(
    client: &Client,
    namespace: &str,
    pod: &str,
    container: &str,
    lines: i64,
) -> Result<String> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let params = LogParams {
        container: Some(container.to_string()),
        tail_lines: Some(lines),
        timestamps: true,
        ..Default::default()
    };

    Ok(pods.logs(pod, &params).await?)
}
