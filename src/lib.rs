// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod build;
pub mod cli;
pub mod config;
pub mod constants;
pub mod diag;
pub mod error;
pub mod kubernetes;
pub mod logging;
pub mod release;
pub mod types;

#[cfg(test)]
pub mod test_utils;
