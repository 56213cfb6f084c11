// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes access: connection, workload lookup, network surface and logs.

pub mod client;
pub mod logs;
pub mod network;
pub mod workload;

pub use client::{connect, ClusterContext, ConfigMode};
pub use logs::tail_logs;
pub use network::find_network_surface;
pub use workload::{find_container, get_workload, list_pods, pick_main_pod};
