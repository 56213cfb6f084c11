// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::api::core::v1::Service;
use k8s_openapi::api::networking::v1::Ingress;
use kube::ResourceExt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSummary {
    pub service_type: Option<String>,
    /// Rendered as `port/protocol`
    pub ports: Vec<String>,
    pub cluster_ip: Option<String>,
}

impl From<&Service> for ServiceSummary {
    fn from(svc: &Service) -> Self {
        let spec = svc.spec.as_ref();
        ServiceSummary {
            service_type: spec.and_then(|s| s.type_.clone()),
            ports: spec
                .and_then(|s| s.ports.as_ref())
                .map(|ports| {
                    ports
                        .iter()
                        .map(|p| format!("{}/{}", p.port, p.protocol.as_deref().unwrap_or("TCP")))
                        .collect()
                })
                .unwrap_or_default(),
            cluster_ip: spec.and_then(|s| s.cluster_ip.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngressSummary {
    pub name: String,
    pub hosts: Vec<String>,
}

impl From<&Ingress> for IngressSummary {
    fn from(ing: &Ingress) -> Self {
        IngressSummary {
            name: ing.name_any(),
            hosts: ing
                .spec
                .as_ref()
                .and_then(|s| s.rules.as_ref())
                .map(|rules| rules.iter().filter_map(|r| r.host.clone()).collect())
                .unwrap_or_default(),
        }
    }
}

/// Service and Ingresses exposing the workload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkSurface {
    pub service: Option<ServiceSummary>,
    pub ingresses: Vec<IngressSummary>,
}
