// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Service and Ingress lookups for a workload

use crate::error::describe_kube_error;
use crate::types::{IngressSummary, NetworkSurface, ServiceSummary};
use k8s_openapi::api::core::v1::Service;
use k8s_openapi::api::networking::v1::Ingress;
use kube::{api::ListParams, Api, Client, ResourceExt};
use tracing::{debug, instrument, warn};

/// Look up the Service and Ingresses exposing `name`; lookup failures are not fatal
#[instrument(skip(client))]
pub async fn find_network_surface(client: &Client, namespace: &str, name: &str) -> NetworkSurface {
    NetworkSurface {
        service: find_service(client, namespace, name).await,
        ingresses: find_ingresses(client, namespace, name).await,
    }
}

async fn find_service(client: &Client, namespace: &str, name: &str) -> Option<ServiceSummary> {
    let services: Api<Service> = Api::namespaced(client.clone(), namespace);

    match services.get(name).await {
        Ok(svc) => Some(ServiceSummary::from(&svc)),
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!("Service {}/{} does not exist", namespace, name);
            None
        }
        Err(e) => {
            warn!(
                "Failed reading Service {}/{}: {}",
                namespace,
                name,
                describe_kube_error(&e)
            );
            None
        }
    }
}

async fn find_ingresses(client: &Client, namespace: &str, name_hint: &str) -> Vec<IngressSummary> {
    let ingresses: Api<Ingress> = Api::namespaced(client.clone(), namespace);

    match ingresses.list(&ListParams::default()).await {
        Ok(list) => list
            .items
            .iter()
            .filter(|ing| ing.name_any().contains(name_hint))
            .map(IngressSummary::from)
            .collect(),
        Err(e) => {
            warn!(
                "Failed listing Ingresses in {}: {}",
                namespace,
                describe_kube_error(&e)
            );
            Vec::new()
        }
    }
}
