// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed views over the StatefulSet and Pod objects read from the API

use k8s_openapi::api::apps::v1::StatefulSet;
use k8s_openapi::api::core::v1::{Container, EnvFromSource, EnvVar, Pod};
use kube::ResourceExt;
use std::collections::BTreeMap;
use std::fmt;

/// A StatefulSet identity with the fields the diagnostic reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub namespace: String,
    pub name: String,
    pub desired_replicas: Option<i32>,
    pub ready_replicas: Option<i32>,
    pub selector_labels: BTreeMap<String, String>,
}

impl Workload {
    pub fn from_statefulset(namespace: &str, sts: &StatefulSet) -> Self {
        Workload {
            namespace: namespace.to_string(),
            name: sts.name_any(),
            desired_replicas: sts.spec.as_ref().and_then(|s| s.replicas),
            ready_replicas: sts.status.as_ref().and_then(|s| s.ready_replicas),
            selector_labels: sts
                .spec
                .as_ref()
                .and_then(|s| s.selector.match_labels.clone())
                .unwrap_or_default(),
        }
    }

    /// Label selector string, keys in sorted order
    pub fn selector(&self) -> String {
        self.selector_labels
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Name of the first ordinal pod
    pub fn ordinal_zero(&self) -> String {
        format!("{}-0", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodConditionSummary {
    pub condition_type: String,
    pub status: String,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodCandidate {
    pub name: String,
    pub phase: Option<String>,
    pub pod_ip: Option<String>,
    pub conditions: Vec<PodConditionSummary>,
    pub containers: Vec<ContainerRef>,
}

impl PodCandidate {
    pub fn is_running(&self) -> bool {
        self.phase.as_deref() == Some("Running")
    }
}

impl From<&Pod> for PodCandidate {
    fn from(pod: &Pod) -> Self {
        let status = pod.status.as_ref();
        PodCandidate {
            name: pod.name_any(),
            phase: status.and_then(|s| s.phase.clone()),
            pod_ip: status.and_then(|s| s.pod_ip.clone()),
            conditions: status
                .and_then(|s| s.conditions.as_ref())
                .map(|conditions| {
                    conditions
                        .iter()
                        .map(|c| PodConditionSummary {
                            condition_type: c.type_.clone(),
                            status: c.status.clone(),
                            reason: c.reason.clone(),
                        })
                        .collect()
                })
                .unwrap_or_default(),
            containers: pod
                .spec
                .as_ref()
                .map(|s| s.containers.iter().map(ContainerRef::from).collect())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRef {
    pub name: String,
    pub image: Option<String>,
    pub env: Vec<EnvVarRef>,
    pub env_from: Vec<EnvFromRef>,
}

impl From<&Container> for ContainerRef {
    fn from(container: &Container) -> Self {
        ContainerRef {
            name: container.name.clone(),
            image: container.image.clone(),
            env: container
                .env
                .iter()
                .flatten()
                .map(EnvVarRef::from)
                .collect(),
            env_from: container
                .env_from
                .iter()
                .flatten()
                .flat_map(EnvFromRef::from_source)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarRef {
    pub name: String,
    pub source: EnvSource,
}

/// Where an environment variable's value comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvSource {
    Literal(String),
    SecretKeyRef { secret_name: String, key: String },
    ConfigMapKeyRef { name: String, key: String },
    /// fieldRef, resourceFieldRef and other valueFrom kinds
    OtherRef,
    Unset,
}

impl From<&EnvVar> for EnvVarRef {
    fn from(env: &EnvVar) -> Self {
        let source = match (&env.value, &env.value_from) {
            (Some(value), _) => EnvSource::Literal(value.clone()),
            (None, Some(from)) => {
                if let Some(secret) = &from.secret_key_ref {
                    EnvSource::SecretKeyRef {
                        secret_name: secret.name.clone(),
                        key: secret.key.clone(),
                    }
                } else if let Some(cm) = &from.config_map_key_ref {
                    EnvSource::ConfigMapKeyRef {
                        name: cm.name.clone(),
                        key: cm.key.clone(),
                    }
                } else {
                    EnvSource::OtherRef
                }
            }
            (None, None) => EnvSource::Unset,
        };

        EnvVarRef {
            name: env.name.clone(),
            source,
        }
    }
}

/// An `envFrom` import of a whole Secret or ConfigMap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFromRef {
    Secret(String),
    ConfigMap(String),
}

impl EnvFromRef {
    /// A single envFrom entry may carry both references
    fn from_source(source: &EnvFromSource) -> Vec<EnvFromRef> {
        let mut refs = Vec::new();
        if let Some(secret) = &source.secret_ref {
            refs.push(EnvFromRef::Secret(secret.name.clone()));
        }
        if let Some(cm) = &source.config_map_ref {
            refs.push(EnvFromRef::ConfigMap(cm.name.clone()));
        }
        refs
    }
}

impl fmt::Display for EnvFromRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvFromRef::Secret(name) => write!(f, "secretRef: {}", name),
            EnvFromRef::ConfigMap(name) => write!(f, "configMapRef: {}", name),
        }
    }
}
