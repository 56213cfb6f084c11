// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::cli::DiagArgs;
use crate::kubernetes::ClusterContext;

/// Diagnostic run configuration, fixed before the first API call
#[derive(Debug, Clone)]
pub struct Config {
    pub context: ClusterContext,
    /// Namespace all lookups are scoped to
    pub namespace: String,
    pub statefulset: String,
    pub print_token: bool,
    /// Log lines to tail; `None` skips the log fetch
    pub tail_logs: Option<i64>,
}

impl Config {
    /// Combine command-line flags with the resolved cluster context
    pub fn new(args: &DiagArgs, context: ClusterContext) -> Self {
        let namespace = args
            .namespace
            .clone()
            .unwrap_or_else(|| context.namespace.clone());

        Config {
            context,
            namespace,
            statefulset: args.statefulset.clone(),
            print_token: args.print_token,
            tail_logs: (args.tail_logs > 0).then_some(args.tail_logs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kubernetes::ConfigMode;
    use clap::Parser;

    fn make_context(namespace: &str) -> ClusterContext {
        ClusterContext {
            mode: ConfigMode::Kubeconfig,
            namespace: namespace.to_string(),
        }
    }

    #[test]
    fn test_namespace_from_context() {
        let args = DiagArgs::parse_from(["openclaw-diag"]);
        let config = Config::new(&args, make_context("jeffw"));
        assert_eq!(config.namespace, "jeffw");
        assert_eq!(config.statefulset, "openclaw");
    }

    #[test]
    fn test_namespace_flag_overrides_context() {
        let args = DiagArgs::parse_from(["openclaw-diag", "-n", "demo"]);
        let config = Config::new(&args, make_context("jeffw"));
        assert_eq!(config.namespace, "demo");
        assert_eq!(config.context.namespace, "jeffw");
    }

    #[test]
    fn test_non_positive_tail_disables_logs() {
        let args = DiagArgs::parse_from(["openclaw-diag", "--tail-logs", "-5"]);
        assert_eq!(Config::new(&args, make_context("a")).tail_logs, None);

        let args = DiagArgs::parse_from(["openclaw-diag", "--tail-logs", "20"]);
        assert_eq!(Config::new(&args, make_context("a")).tail_logs, Some(20));
    }
}
