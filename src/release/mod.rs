// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Image tag bumps from the latest upstream release.

pub mod github;
pub mod values;

pub use github::{fetch_latest_tag, http_client};
pub use values::update_values_file;
