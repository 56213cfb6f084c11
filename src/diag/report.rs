// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Line-oriented rendering of each diagnostic stage

use crate::config::Config;
use crate::diag::scanner::CredentialCandidate;
use crate::diag::secrets::DecodeReport;
use crate::types::{ContainerRef, NetworkSurface, PodCandidate, Workload};
use std::io::{self, Write};

fn or_unknown(value: Option<&str>) -> &str {
    value.unwrap_or("?")
}

fn opt_count(value: Option<i32>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        format!("[{}]", items.join(", "))
    }
}

pub fn header(out: &mut impl Write, config: &Config) -> io::Result<()> {
    writeln!(out, "== OpenClaw Diagnostic ==")?;
    writeln!(out, "Config mode: {}", config.context.mode)?;
    writeln!(out, "Namespace:  {}", config.namespace)?;
    writeln!(out, "StatefulSet: {}", config.statefulset)?;
    writeln!(out)
}

pub fn workload(out: &mut impl Write, workload: &Workload) -> io::Result<()> {
    writeln!(out, "  ✓ Found StatefulSet {}/{}", workload.namespace, workload.name)?;
    writeln!(
        out,
        "  replicas: {} | ready: {}",
        opt_count(workload.desired_replicas),
        opt_count(workload.ready_replicas)
    )?;
    writeln!(out, "  selector labels:")?;
    if workload.selector_labels.is_empty() {
        writeln!(out, "    (none)")?;
    }
    for (k, v) in &workload.selector_labels {
        writeln!(out, "    {}: {}", k, v)?;
    }
    let selector = workload.selector();
    writeln!(
        out,
        "  selector string: {}",
        if selector.is_empty() { "(none)" } else { selector.as_str() }
    )?;
    writeln!(out)
}

pub fn pods(
    out: &mut impl Write,
    pods: &[PodCandidate],
    inspected: &PodCandidate,
) -> io::Result<()> {
    for p in pods {
        writeln!(
            out,
            "  - {:30} {:10} ip={}",
            p.name,
            or_unknown(p.phase.as_deref()),
            or_unknown(p.pod_ip.as_deref())
        )?;
    }
    writeln!(out, "  -> Inspecting pod: {}", inspected.name)?;
    writeln!(out)
}

pub fn container(
    out: &mut impl Write,
    container: &ContainerRef,
    candidates: &[CredentialCandidate],
) -> io::Result<()> {
    writeln!(out, "  container: {}", container.name)?;
    writeln!(out, "  image:     {}", or_unknown(container.image.as_deref()))?;

    if candidates.is_empty() {
        writeln!(out, "  (no token-related env vars matched pattern)")?;
    } else {
        writeln!(out, "  token-related env vars found:")?;
        for c in candidates {
            writeln!(out, "    - {}: {}", c.env_var_name, c.describe())?;
        }
    }

    if !container.env_from.is_empty() {
        writeln!(out, "  envFrom sources:")?;
        for source in &container.env_from {
            writeln!(out, "    - {}", source)?;
        }
    }
    writeln!(out)
}

pub fn decoded(out: &mut impl Write, report: &DecodeReport) -> io::Result<()> {
    if report.secret_ref_count == 0 {
        writeln!(out, "  (no secretKeyRef env vars found)")?;
    } else {
        writeln!(out, "  secretKeyRef env vars:")?;
        for r in &report.decoded_refs {
            writeln!(
                out,
                "    - {} from {}/{}: {}",
                r.env_name, r.secret_name, r.key, r.value
            )?;
        }
    }

    if report.has_env_from_secrets {
        writeln!(out, "  envFrom secretRefs (scanning for likely token keys):")?;
        for scan in &report.env_from {
            writeln!(out, "    - {}: keys={}", scan.secret_name, list_or_none(&scan.keys))?;
            if !scan.likely.is_empty() {
                writeln!(out, "      likely token keys: {}", list_or_none(&scan.likely))?;
            }
            for (key, value) in &scan.decoded {
                writeln!(out, "      {}/{}: {}", scan.secret_name, key, value)?;
            }
        }
    }

    if !report.decoded_any() {
        writeln!(
            out,
            "  (no token decoded; either none present or key naming didn't match)"
        )?;
    }
    writeln!(out)
}

pub fn network(
    out: &mut impl Write,
    namespace: &str,
    name: &str,
    surface: &NetworkSurface,
) -> io::Result<()> {
    match &surface.service {
        Some(svc) => {
            writeln!(
                out,
                "  ✓ Service {}/{}: type={} ports={}",
                namespace,
                name,
                or_unknown(svc.service_type.as_deref()),
                list_or_none(&svc.ports)
            )?;
            if let Some(ip) = &svc.cluster_ip {
                writeln!(out, "    clusterIP={}", ip)?;
            }
        }
        None => writeln!(out, "  (no Service named {}/{})", namespace, name)?,
    }

    if surface.ingresses.is_empty() {
        writeln!(out, "  (no matching Ingress found)")?;
    } else {
        writeln!(out, "  ✓ Ingresses matching '{}':", name)?;
        for ing in &surface.ingresses {
            writeln!(out, "    - {} hosts={}", ing.name, list_or_none(&ing.hosts))?;
        }
    }
    writeln!(out)
}

pub fn status(out: &mut impl Write, pod: &PodCandidate) -> io::Result<()> {
    writeln!(out, "  phase: {}", or_unknown(pod.phase.as_deref()))?;
    for c in &pod.conditions {
        writeln!(
            out,
            "  condition {:18} = {} (reason={})",
            c.condition_type,
            c.status,
            c.reason.as_deref().unwrap_or_default()
        )?;
    }
    writeln!(out)
}

pub fn footer(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== Done ==")?;
    writeln!(
        out,
        "Tip: If the dashboard says 'gateway token missing', re-run with --print-token and look for a token env/secret."
    )?;
    writeln!(
        out,
        "     If you're using NetworkPolicy with default-deny egress, ensure egress to the API server is allowed."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IngressSummary, PodConditionSummary, ServiceSummary};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_network_without_service_or_ingress() {
        let text = render(|out| network(out, "demo", "openclaw", &NetworkSurface::default()));

        assert!(text.contains("(no Service named demo/openclaw)"));
        assert!(text.contains("(no matching Ingress found)"));
    }

    #[test]
    fn test_network_with_service_and_ingress() {
        let surface = NetworkSurface {
            service: Some(ServiceSummary {
                service_type: Some("ClusterIP".to_string()),
                ports: vec!["18789/TCP".to_string()],
                cluster_ip: Some("10.96.0.12".to_string()),
            }),
            ingresses: vec![IngressSummary {
                name: "openclaw".to_string(),
                hosts: vec![],
            }],
        };

        let text = render(|out| network(out, "demo", "openclaw", &surface));

        assert!(text.contains("✓ Service demo/openclaw: type=ClusterIP ports=[18789/TCP]"));
        assert!(text.contains("clusterIP=10.96.0.12"));
        assert!(text.contains("- openclaw hosts=(none)"));
    }

    #[test]
    fn test_status_lists_conditions() {
        let pod = PodCandidate {
            name: "openclaw-0".to_string(),
            phase: Some("Pending".to_string()),
            pod_ip: None,
            conditions: vec![PodConditionSummary {
                condition_type: "PodScheduled".to_string(),
                status: "False".to_string(),
                reason: Some("Unschedulable".to_string()),
            }],
            containers: vec![],
        };

        let text = render(|out| status(out, &pod));

        assert!(text.contains("phase: Pending"));
        assert!(text.contains("condition PodScheduled       = False (reason=Unschedulable)"));
    }

    #[test]
    fn test_decoded_nothing() {
        let text = render(|out| decoded(out, &DecodeReport::default()));

        assert!(text.contains("(no secretKeyRef env vars found)"));
        assert!(text.contains("(no token decoded"));
    }
}
