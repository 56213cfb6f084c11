// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster connection and namespace resolution

use crate::constants::diag::{DEFAULT_NAMESPACE, POD_NAMESPACE_ENV};
use crate::error::{OpenclawError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::env;
use std::fmt;
use tracing::{debug, info};

/// How the cluster credentials were obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigMode {
    InCluster,
    Kubeconfig,
}

impl fmt::Display for ConfigMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigMode::InCluster => f.write_str("incluster"),
            ConfigMode::Kubeconfig => f.write_str("kubeconfig"),
        }
    }
}

/// The resolved connection mode and its default namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterContext {
    pub mode: ConfigMode,
    pub namespace: String,
}

/// Connect to the cluster, preferring in-cluster credentials over the local kubeconfig
pub async fn connect() -> Result<(ClusterContext, Client)> {
    let (context, config) = match KConfig::incluster() {
        Ok(config) => {
            let namespace =
                incluster_namespace(env::var(POD_NAMESPACE_ENV).ok(), &config.default_namespace);
            info!("Using in-cluster configuration");
            (
                ClusterContext {
                    mode: ConfigMode::InCluster,
                    namespace,
                },
                config,
            )
        }
        Err(e) => {
            debug!("In-cluster configuration unavailable: {}", e);
            load_kubeconfig().await?
        }
    };

    let client = Client::try_from(config)
        .map_err(|e| OpenclawError::ClusterConfig(format!("Failed to create client: {}", e)))?;

    Ok((context, client))
}

/// Load the local kubeconfig and the active context's namespace
async fn load_kubeconfig() -> Result<(ClusterContext, KConfig)> {
    let kubeconfig = Kubeconfig::read()
        .map_err(|e| OpenclawError::ClusterConfig(format!("Failed to read kubeconfig: {}", e)))?;
    let namespace = active_namespace(&kubeconfig);

    let config = KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| OpenclawError::ClusterConfig(format!("Failed to load kubeconfig: {}", e)))?;

    info!("Using kubeconfig, context namespace {}", namespace);
    Ok((
        ClusterContext {
            mode: ConfigMode::Kubeconfig,
            namespace,
        },
        config,
    ))
}

/// `POD_NAMESPACE` when set and non-empty, else the service account namespace
pub fn incluster_namespace(pod_namespace: Option<String>, default_namespace: &str) -> String {
    pod_namespace
        .filter(|ns| !ns.is_empty())
        .unwrap_or_else(|| default_namespace.to_string())
}

/// Namespace of the kubeconfig's current context, `default` if unset
pub fn active_namespace(kubeconfig: &Kubeconfig) -> String {
    kubeconfig
        .current_context
        .as_deref()
        .and_then(|current| kubeconfig.contexts.iter().find(|c| c.name == current))
        .and_then(|named| named.context.as_ref())
        .and_then(|ctx| ctx.namespace.clone())
        .filter(|ns| !ns.is_empty())
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string())
}
