// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Credential-name heuristics over container environment variables

use crate::constants::TOKEN_NAME_PATTERN;
use crate::types::{ContainerRef, EnvSource};
use regex::Regex;
use std::sync::LazyLock;

static TOKEN_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN_NAME_PATTERN).expect("token name pattern is valid"));

/// Whether an env var name or secret key looks like the gateway credential
pub fn is_token_name(name: &str) -> bool {
    TOKEN_NAME_RE.is_match(name)
}

/// Redacted preview: short values verbatim, longer ones as `abcd…wxyz (len=N)`
pub fn short_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 10 {
        return value.to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{} (len={})", head, tail, chars.len())
}

/// An env var whose name matched the credential pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialCandidate {
    pub env_var_name: String,
    pub source: EnvSource,
}

impl CredentialCandidate {
    /// Source descriptor shown in the report; literal values are redacted
    pub fn describe(&self) -> String {
        match &self.source {
            EnvSource::Literal(value) => format!("value: {}", short_secret(value)),
            EnvSource::SecretKeyRef { secret_name, key } => {
                format!("secretKeyRef: {}/{}", secret_name, key)
            }
            EnvSource::ConfigMapKeyRef { name, key } => {
                format!("configMapKeyRef: {}/{}", name, key)
            }
            EnvSource::OtherRef => "valueFrom: (unknown)".to_string(),
            EnvSource::Unset => "(empty)".to_string(),
        }
    }
}

/// Collect env vars whose names match the credential pattern, in declaration order
pub fn scan_env(container: &ContainerRef) -> Vec<CredentialCandidate> {
    container
        .env
        .iter()
        .filter(|env| is_token_name(&env.name))
        .map(|env| CredentialCandidate {
            env_var_name: env.name.clone(),
            source: env.source.clone(),
        })
        .collect()
}
