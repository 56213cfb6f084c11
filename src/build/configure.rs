// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Interactive / environment-driven collection of the build configuration

use crate::build::config::{BuildConfig, ImageRef};
use crate::cli::ConfigureArgs;
use crate::constants::build::{
    DEFAULT_SOURCE_IMAGE, DEFAULT_SOURCE_REGISTRY, DEFAULT_TAG, DEFAULT_TARGET_IMAGE,
};
use crate::error::{OpenclawError, Result};
use std::env;
use std::io::{self, BufRead, IsTerminal, Write};

/// Where field values come from besides command-line flags
pub trait Input {
    fn env(&self, key: &str) -> Option<String>;
    /// Whether the user can be prompted
    fn interactive(&self) -> bool;
    /// Show `prompt` and read one line, without the newline
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Process environment and the terminal
pub struct Terminal {
    allow_prompt: bool,
}

impl Terminal {
    pub fn new(from_env: bool) -> Self {
        Self {
            allow_prompt: !from_env && io::stdin().is_terminal(),
        }
    }
}

impl Input for Terminal {
    fn env(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn interactive(&self) -> bool {
        self.allow_prompt
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// One configurable value
pub struct Field<'a> {
    pub env_var: &'a str,
    pub prompt: &'a str,
    pub required: bool,
    pub default: Option<String>,
}

/// Resolve a field: flag, then env var, then prompt, then default
pub fn resolve(
    flag: Option<&str>,
    field: Field<'_>,
    input: &mut impl Input,
    out: &mut impl Write,
) -> Result<Option<String>> {
    if let Some(value) = flag.filter(|v| !v.is_empty()) {
        return Ok(Some(value.to_string()));
    }

    if let Some(value) = input.env(field.env_var).filter(|v| !v.is_empty()) {
        writeln!(out, "  {}: {} (from {})", field.prompt, value, field.env_var)?;
        return Ok(Some(value));
    }

    let default = field.default.filter(|d| !d.is_empty());

    if input.interactive() {
        let answer = match &default {
            Some(default) => input.read_line(&format!("  {} [{}]: ", field.prompt, default))?,
            None => input.read_line(&format!("  {}: ", field.prompt))?,
        };
        if !answer.is_empty() {
            return Ok(Some(answer));
        }
        if default.is_none() && field.required {
            return Err(OpenclawError::MissingValue(field.prompt.to_string()));
        }
        return Ok(default);
    }

    if field.required && default.is_none() {
        return Err(OpenclawError::MissingValue(format!(
            "{} environment variable (non-interactive mode)",
            field.env_var
        )));
    }
    Ok(default)
}

/// Collect source and target image settings, using `saved` for defaults
pub fn collect_config(
    args: &ConfigureArgs,
    saved: &BuildConfig,
    input: &mut impl Input,
    out: &mut impl Write,
) -> Result<BuildConfig> {
    let saved_or = |value: &Option<String>, fallback: &str| {
        Some(value.clone().unwrap_or_else(|| fallback.to_string()))
    };

    writeln!(out, "\n=== Source (FROM) Image ===")?;
    let source = ImageRef {
        registry: resolve(
            args.source_registry.as_deref(),
            Field {
                env_var: "SOURCE_REGISTRY",
                prompt: "Registry (e.g., ghcr.io, docker.io)",
                required: true,
                default: saved_or(&saved.source.registry, DEFAULT_SOURCE_REGISTRY),
            },
            input,
            out,
        )?,
        image: resolve(
            args.source_image.as_deref(),
            Field {
                env_var: "SOURCE_IMAGE",
                prompt: "Image name (e.g., openclaw/openclaw)",
                required: true,
                default: saved_or(&saved.source.image, DEFAULT_SOURCE_IMAGE),
            },
            input,
            out,
        )?,
        tag: resolve(
            args.source_tag.as_deref(),
            Field {
                env_var: "SOURCE_TAG",
                prompt: "Tag",
                required: false,
                default: saved_or(&saved.source.tag, DEFAULT_TAG),
            },
            input,
            out,
        )?,
    };

    writeln!(out, "\n=== Target Image ===")?;
    let target = ImageRef {
        registry: resolve(
            args.target_registry.as_deref(),
            Field {
                env_var: "TARGET_REGISTRY",
                prompt: "Registry (e.g., ghcr.io/myorg, docker.io/myuser)",
                required: true,
                default: saved.target.registry.clone(),
            },
            input,
            out,
        )?,
        image: resolve(
            args.target_image.as_deref(),
            Field {
                env_var: "TARGET_IMAGE",
                prompt: "Image name",
                required: false,
                default: saved_or(&saved.target.image, DEFAULT_TARGET_IMAGE),
            },
            input,
            out,
        )?,
        tag: resolve(
            args.target_tag.as_deref(),
            Field {
                env_var: "TARGET_TAG",
                prompt: "Tag",
                required: false,
                default: saved_or(&saved.target.tag, DEFAULT_TAG),
            },
            input,
            out,
        )?,
    };

    Ok(BuildConfig {
        source,
        target,
        extra: saved.extra.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::{HashMap, VecDeque};

    struct FakeInput {
        env: HashMap<String, String>,
        interactive: bool,
        answers: VecDeque<String>,
        prompts: Vec<String>,
    }

    impl FakeInput {
        fn new(env: &[(&str, &str)], interactive: bool, answers: &[&str]) -> Self {
            Self {
                env: env
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                interactive,
                answers: answers.iter().map(|a| a.to_string()).collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl Input for FakeInput {
        fn env(&self, key: &str) -> Option<String> {
            self.env.get(key).cloned()
        }

        fn interactive(&self) -> bool {
            self.interactive
        }

        fn read_line(&mut self, prompt: &str) -> io::Result<String> {
            self.prompts.push(prompt.to_string());
            Ok(self.answers.pop_front().unwrap_or_default())
        }
    }

    fn field(required: bool, default: Option<&str>) -> Field<'static> {
        Field {
            env_var: "TARGET_REGISTRY",
            prompt: "Registry",
            required,
            default: default.map(str::to_string),
        }
    }

    #[test]
    fn test_resolve_flag_wins() {
        let mut input = FakeInput::new(&[("TARGET_REGISTRY", "from-env")], true, &["typed"]);
        let mut out = Vec::new();

        let value = resolve(Some("from-flag"), field(true, None), &mut input, &mut out).unwrap();

        assert_eq!(value.as_deref(), Some("from-flag"));
        assert!(input.prompts.is_empty());
    }

    #[test]
    fn test_resolve_env_before_prompt() {
        let mut input = FakeInput::new(&[("TARGET_REGISTRY", "ghcr.io/env")], true, &["typed"]);
        let mut out = Vec::new();

        let value = resolve(None, field(true, None), &mut input, &mut out).unwrap();

        assert_eq!(value.as_deref(), Some("ghcr.io/env"));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "  Registry: ghcr.io/env (from TARGET_REGISTRY)\n"
        );
    }

    #[test]
    fn test_resolve_prompt_empty_answer_takes_default() {
        let mut input = FakeInput::new(&[], true, &[""]);
        let mut out = Vec::new();

        let value = resolve(None, field(true, Some("ghcr.io")), &mut input, &mut out).unwrap();

        assert_eq!(value.as_deref(), Some("ghcr.io"));
        assert_eq!(input.prompts, vec!["  Registry [ghcr.io]: "]);
    }

    #[test]
    fn test_resolve_prompt_required_without_default() {
        let mut input = FakeInput::new(&[], true, &[""]);
        let mut out = Vec::new();

        let err = resolve(None, field(true, None), &mut input, &mut out).unwrap_err();

        assert!(matches!(err, OpenclawError::MissingValue(_)));
    }

    #[test]
    fn test_resolve_non_interactive() {
        let mut input = FakeInput::new(&[], false, &[]);
        let mut out = Vec::new();

        assert_eq!(
            resolve(None, field(false, Some("latest")), &mut input, &mut out).unwrap(),
            Some("latest".to_string())
        );
        assert_eq!(resolve(None, field(false, None), &mut input, &mut out).unwrap(), None);
        let err = resolve(None, field(true, None), &mut input, &mut out).unwrap_err();
        assert!(err.to_string().contains("TARGET_REGISTRY"));
    }

    #[test]
    fn test_resolve_empty_default_counts_as_missing() {
        let mut input = FakeInput::new(&[], false, &[]);
        let mut out = Vec::new();

        let err = resolve(None, field(true, Some("")), &mut input, &mut out).unwrap_err();
        assert!(matches!(err, OpenclawError::MissingValue(_)));
        assert_eq!(resolve(None, field(false, Some("")), &mut input, &mut out).unwrap(), None);

        let mut input = FakeInput::new(&[], true, &[""]);
        let err = resolve(None, field(true, Some("")), &mut input, &mut out).unwrap_err();
        assert!(matches!(err, OpenclawError::MissingValue(_)));
        assert_eq!(input.prompts, vec!["  Registry: "]);
    }

    #[test]
    fn test_collect_config_rejects_saved_empty_target_registry() {
        let args = ConfigureArgs::parse_from(["configure-make", "--from-env"]);
        let saved = BuildConfig {
            target: ImageRef {
                registry: Some(String::new()),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut input = FakeInput::new(&[("TARGET_IMAGE", "claw")], false, &[]);
        let mut out = Vec::new();

        let err = collect_config(&args, &saved, &mut input, &mut out).unwrap_err();

        assert!(matches!(err, OpenclawError::MissingValue(_)));
        assert!(err.to_string().contains("TARGET_REGISTRY"));
    }

    #[test]
    fn test_collect_config_from_env_with_saved_defaults() {
        let args =
            ConfigureArgs::parse_from(["configure-make", "--from-env", "--source-tag", "v2"]);
        let saved = BuildConfig {
            target: ImageRef {
                registry: Some("ghcr.io/saved".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut input = FakeInput::new(&[("TARGET_IMAGE", "claw")], false, &[]);
        let mut out = Vec::new();

        let config = collect_config(&args, &saved, &mut input, &mut out).unwrap();

        assert_eq!(
            config.source,
            ImageRef {
                registry: Some("ghcr.io".to_string()),
                image: Some("openclaw/openclaw".to_string()),
                tag: Some("v2".to_string()),
            }
        );
        assert_eq!(
            config.target,
            ImageRef {
                registry: Some("ghcr.io/saved".to_string()),
                image: Some("claw".to_string()),
                tag: Some("latest".to_string()),
            }
        );
    }

    #[test]
    fn test_collect_config_requires_target_registry() {
        let args = ConfigureArgs::parse_from(["configure-make", "--from-env"]);
        let mut input = FakeInput::new(&[], false, &[]);
        let mut out = Vec::new();

        let err = collect_config(&args, &BuildConfig::default(), &mut input, &mut out).unwrap_err();

        assert!(err.to_string().contains("TARGET_REGISTRY"));
    }
}
