// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Latest-release lookup against the GitHub REST API

use crate::constants::release::{ACCEPT, TIMEOUT_SECS, USER_AGENT};
use crate::error::{OpenclawError, Result};
use reqwest::header;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Deserialize, Debug)]
struct Release {
    #[serde(default)]
    tag_name: Option<String>,
}

/// Extract `tag_name` from a release document
pub fn tag_from_release(body: &str) -> Result<String> {
    let release: Release = serde_json::from_str(body)?;
    release
        .tag_name
        .filter(|t| !t.is_empty())
        .ok_or(OpenclawError::MissingReleaseTag)
}

pub fn http_client() -> Result<reqwest::Client> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, header::HeaderValue::from_static(ACCEPT));

    Ok(reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()?)
}

/// Fetch the tag of the latest release published at `url`
#[instrument(skip(client))]
pub async fn fetch_latest_tag(client: &reqwest::Client, url: &str) -> Result<String> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    debug!("Release response: {} bytes", body.len());

    tag_from_release(&body)
}
