// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenclawError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load cluster configuration: {0}")]
    ClusterConfig(String),

    #[error("Could not find StatefulSet {namespace}/{name}: {reason}")]
    StatefulSetNotFound {
        namespace: String,
        name: String,
        reason: String,
    },

    #[error("StatefulSet {namespace}/{name} has an empty selector; refusing to list every pod in the namespace")]
    EmptySelector { namespace: String, name: String },

    #[error("Failed listing pods in {namespace}: {reason}")]
    PodList { namespace: String, reason: String },

    #[error("No pods found for this StatefulSet selector ({selector})")]
    NoPods { selector: String },

    #[error("No containers found on pod {0}")]
    NoContainers(String),

    #[error("Failed writing report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No tag_name in GitHub release response")]
    MissingReleaseTag,

    #[error("Values file error: {0}")]
    ValuesFile(String),

    #[error("{0} is required")]
    MissingValue(String),
}

impl OpenclawError {
    /// Process exit code for the diagnostic binary
    pub fn exit_code(&self) -> u8 {
        match self {
            OpenclawError::StatefulSetNotFound { .. }
            | OpenclawError::EmptySelector { .. }
            | OpenclawError::PodList { .. }
            | OpenclawError::NoPods { .. }
            | OpenclawError::NoContainers(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, OpenclawError>;

/// Render an API error as `<code> <reason>`, like the API status line
pub fn describe_kube_error(error: &kube::Error) -> String {
    match error {
        kube::Error::Api(resp) => format!("{} {}", resp.code, resp.reason),
        other => other.to_string(),
    }
}
