// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Makefile build configuration.

pub mod config;
pub mod configure;

pub use config::{update_build_config, BuildConfig, ImageRef};
pub use configure::{collect_config, Terminal};
