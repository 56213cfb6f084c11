// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Opt-in decoding of credential values from referenced Secrets

use crate::diag::scanner::is_token_name;
use crate::error::describe_kube_error;
use crate::types::{ContainerRef, EnvFromRef, EnvSource};
use k8s_openapi::api::core::v1::Secret;
use kube::{Api, Client};
use thiserror::Error;
use tracing::{debug, instrument, warn};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SecretKeyError {
    #[error("does not contain key '{key}' (has: {available})")]
    MissingKey { key: String, available: String },
}

/// Decode one key of a Secret: UTF-8 with lossy replacement, surrounding whitespace trimmed
///
/// The wire format is base64; `ByteString` holds the already-decoded bytes.
pub fn decode_secret_value(secret: &Secret, key: &str) -> Result<String, SecretKeyError> {
    let data = secret.data.as_ref();

    match data.and_then(|d| d.get(key)) {
        Some(bytes) => Ok(String::from_utf8_lossy(&bytes.0).trim().to_string()),
        None => Err(SecretKeyError::MissingKey {
            key: key.to_string(),
            available: secret_keys(secret).join(", "),
        }),
    }
}

/// Data keys of a Secret, sorted
pub fn secret_keys(secret: &Secret) -> Vec<String> {
    secret
        .data
        .as_ref()
        .map(|d| d.keys().cloned().collect())
        .unwrap_or_default()
}

/// A `secretKeyRef` env var: `(env name, secret name, key)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretKeyRefVar {
    pub env_name: String,
    pub secret_name: String,
    pub key: String,
}

/// All env vars sourced from a secretKeyRef, unfiltered
pub fn collect_secret_refs(container: &ContainerRef) -> Vec<SecretKeyRefVar> {
    container
        .env
        .iter()
        .filter_map(|env| match &env.source {
            EnvSource::SecretKeyRef { secret_name, key } => Some(SecretKeyRefVar {
                env_name: env.name.clone(),
                secret_name: secret_name.clone(),
                key: key.clone(),
            }),
            _ => None,
        })
        .collect()
}

/// A credential decoded from a secretKeyRef env var
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRef {
    pub env_name: String,
    pub secret_name: String,
    pub key: String,
    pub value: String,
}

/// Keys found in an envFrom Secret and the likely-token ones that decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFromScan {
    pub secret_name: String,
    pub keys: Vec<String>,
    pub likely: Vec<String>,
    /// `(key, value)`
    pub decoded: Vec<(String, String)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeReport {
    /// Number of secretKeyRef env vars, matching or not
    pub secret_ref_count: usize,
    pub decoded_refs: Vec<DecodedRef>,
    /// Only Secrets that could be read
    pub env_from: Vec<EnvFromScan>,
    /// Whether the container imports any Secret through envFrom
    pub has_env_from_secrets: bool,
}

impl DecodeReport {
    pub fn decoded_any(&self) -> bool {
        !self.decoded_refs.is_empty() || self.env_from.iter().any(|s| !s.decoded.is_empty())
    }
}

/// Reads Secrets of one namespace; every failure is logged and swallowed
pub struct SecretDecoder {
    secrets: Api<Secret>,
    namespace: String,
}

impl SecretDecoder {
    pub fn new(client: &Client, namespace: &str) -> Self {
        Self {
            secrets: Api::namespaced(client.clone(), namespace),
            namespace: namespace.to_string(),
        }
    }

    async fn read(&self, name: &str) -> Option<Secret> {
        match self.secrets.get(name).await {
            Ok(secret) => Some(secret),
            Err(e) => {
                warn!(
                    "Failed reading secret {}/{}: {}",
                    self.namespace,
                    name,
                    describe_kube_error(&e)
                );
                None
            }
        }
    }

    fn decode(&self, secret_name: &str, secret: &Secret, key: &str) -> Option<String> {
        match decode_secret_value(secret, key) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Secret {}/{} {}", self.namespace, secret_name, e);
                None
            }
        }
    }

    /// Decode token-like secretKeyRef env vars and token-like keys of envFrom Secrets
    #[instrument(
        skip(self, container),
        fields(namespace = %self.namespace, container = %container.name)
    )]
    pub async fn decode_tokens(&self, container: &ContainerRef) -> DecodeReport {
        let refs = collect_secret_refs(container);
        let mut report = DecodeReport {
            secret_ref_count: refs.len(),
            ..Default::default()
        };

        for r in refs {
            if !is_token_name(&r.env_name) && !is_token_name(&r.key) {
                debug!("Skipping {} from {}/{}", r.env_name, r.secret_name, r.key);
                continue;
            }
            let Some(secret) = self.read(&r.secret_name).await else {
                continue;
            };
            if let Some(value) = self.decode(&r.secret_name, &secret, &r.key) {
                report.decoded_refs.push(DecodedRef {
                    env_name: r.env_name,
                    secret_name: r.secret_name,
                    key: r.key,
                    value,
                });
            }
        }

        for env_from in &container.env_from {
            let EnvFromRef::Secret(secret_name) = env_from else {
                continue;
            };
            report.has_env_from_secrets = true;
            let Some(secret) = self.read(secret_name).await else {
                continue;
            };

            let keys = secret_keys(&secret);
            let likely: Vec<String> = keys.iter().filter(|k| is_token_name(k)).cloned().collect();
            let decoded = likely
                .iter()
                .filter_map(|k| {
                    self.decode(secret_name, &secret, k)
                        .map(|value| (k.clone(), value))
                })
                .collect();

            report.env_from.push(EnvFromScan {
                secret_name: secret_name.clone(),
                keys,
                likely,
                decoded,
            });
        }

        report
    }
}
