// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed records derived from API objects.

pub mod network;
pub mod workload;

pub use network::{IngressSummary, NetworkSurface, ServiceSummary};
pub use workload::{
    ContainerRef, EnvFromRef, EnvSource, EnvVarRef, PodCandidate, PodConditionSummary, Workload,
};
