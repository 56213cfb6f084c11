// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Defaults for the diagnostic run
pub mod diag {
    /// StatefulSet inspected when none is given
    pub const DEFAULT_STATEFULSET: &str = "openclaw";
    /// Container preferred over the first declared one
    pub const PREFERRED_CONTAINER: &str = "gateway";
    /// Namespace used when neither the flag nor the context provides one
    pub const DEFAULT_NAMESPACE: &str = "default";
    /// Env var carrying the pod namespace when running in-cluster
    pub const POD_NAMESPACE_ENV: &str = "POD_NAMESPACE";
}

/// Env var / secret key names that likely hold the gateway credential
pub const TOKEN_NAME_PATTERN: &str = "(?i)(GATEWAY|OPENCLAW|CLAWDBOT).*(TOKEN|AUTH)";

/// GitHub release lookup
pub mod release {
    pub const LATEST_RELEASE_URL: &str =
        "https://api.github.com/repos/openclaw/openclaw/releases/latest";
    pub const USER_AGENT: &str = "openclaw-kube";
    pub const ACCEPT: &str = "application/vnd.github+json";
    pub const TIMEOUT_SECS: u64 = 15;
    pub const DEFAULT_VALUES_PATH: &str = "chart/values.yaml";
}

/// Makefile build configuration
pub mod build {
    pub const CONFIG_FILE: &str = "build-config.json";
    pub const DEFAULT_SOURCE_REGISTRY: &str = "ghcr.io";
    pub const DEFAULT_SOURCE_IMAGE: &str = "openclaw/openclaw";
    pub const DEFAULT_TARGET_IMAGE: &str = "openclaw-playwright";
    pub const DEFAULT_TAG: &str = "latest";
}
