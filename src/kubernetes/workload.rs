// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! StatefulSet lookup and representative pod/container selection

use crate::constants::diag::PREFERRED_CONTAINER;
use crate::error::{describe_kube_error, OpenclawError, Result};
use crate::types::{ContainerRef, PodCandidate, Workload};
use k8s_openapi::api::apps::v1::StatefulSet;
use k8s_openapi::api::core::v1::Pod;
use kube::{api::ListParams, Api, Client};
use tracing::{debug, instrument};

/// Fetch the StatefulSet and derive its workload view
#[instrument(skip(client))]
pub async fn get_workload(client: &Client, namespace: &str, name: &str) -> Result<Workload> {
    let statefulsets: Api<StatefulSet> = Api::namespaced(client.clone(), namespace);

    let sts = statefulsets
        .get(name)
        .await
        .map_err(|e| OpenclawError::StatefulSetNotFound {
            namespace: namespace.to_string(),
            name: name.to_string(),
            reason: describe_kube_error(&e),
        })?;

    Ok(Workload::from_statefulset(namespace, &sts))
}

/// List the workload's pods by its selector
///
/// An empty selector is rejected rather than matching every pod in the namespace.
#[instrument(skip(client, workload), fields(workload = %workload.name))]
pub async fn list_pods(client: &Client, workload: &Workload) -> Result<Vec<PodCandidate>> {
    let selector = workload.selector();
    if selector.is_empty() {
        return Err(OpenclawError::EmptySelector {
            namespace: workload.namespace.clone(),
            name: workload.name.clone(),
        });
    }

    debug!("Listing pods with selector {}", selector);
    let pods: Api<Pod> = Api::namespaced(client.clone(), &workload.namespace);
    let pod_list = pods
        .list(&ListParams::default().labels(&selector))
        .await
        .map_err(|e| OpenclawError::PodList {
            namespace: workload.namespace.clone(),
            reason: describe_kube_error(&e),
        })?;

    let candidates: Vec<PodCandidate> = pod_list.items.iter().map(PodCandidate::from).collect();
    if candidates.is_empty() {
        return Err(OpenclawError::NoPods { selector });
    }

    Ok(candidates)
}

/// Prefer `<sts>-0`, then the first Running pod, then the first pod
pub fn pick_main_pod<'a>(
    pods: &'a [PodCandidate],
    workload: &Workload,
) -> Option<&'a PodCandidate> {
    let ordinal_zero = workload.ordinal_zero();

    pods.iter()
        .find(|p| p.name == ordinal_zero)
        .or_else(|| pods.iter().find(|p| p.is_running()))
        .or_else(|| pods.first())
}

/// Prefer the `gateway` container, else the first declared one
pub fn find_container(pod: &PodCandidate) -> Result<&ContainerRef> {
    pod.containers
        .iter()
        .find(|c| c.name == PREFERRED_CONTAINER)
        .or_else(|| pod.containers.first())
        .ok_or_else(|| OpenclawError::NoContainers(pod.name.clone()))
}
