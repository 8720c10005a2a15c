//! Endpoint configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level essaygrade configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EssaygradeConfig {
    /// Question id reported when a request does not carry one.
    #[serde(default = "default_question_id")]
    pub default_question_id: String,
    /// Maximum length of either answer in characters (0 = unlimited).
    #[serde(default = "default_max_answer_chars")]
    pub max_answer_chars: usize,
    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,
}

fn default_question_id() -> String {
    "unspecified".to_string()
}
fn default_max_answer_chars() -> usize {
    20_000
}

impl Default for EssaygradeConfig {
    fn default() -> Self {
        Self {
            default_question_id: default_question_id(),
            max_answer_chars: default_max_answer_chars(),
            pretty: false,
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `essaygrade.toml` in the current directory
/// 2. `~/.config/essaygrade/config.toml`
///
/// Environment variable overrides: `ESSAYGRADE_DEFAULT_QUESTION_ID`,
/// `ESSAYGRADE_MAX_ANSWER_CHARS`.
pub fn load_config() -> Result<EssaygradeConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<EssaygradeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("essaygrade.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => EssaygradeConfig::default(),
    };

    Ok(apply_overrides(config, |name| std::env::var(name).ok()))
}

/// Parse a TOML config string.
pub fn parse_config(content: &str) -> Result<EssaygradeConfig> {
    Ok(toml::from_str(content)?)
}

/// Apply environment overrides, looking variables up through `lookup`.
fn apply_overrides(
    mut config: EssaygradeConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> EssaygradeConfig {
    if let Some(id) = lookup("ESSAYGRADE_DEFAULT_QUESTION_ID") {
        config.default_question_id = id;
    }

    if let Some(raw) = lookup("ESSAYGRADE_MAX_ANSWER_CHARS") {
        match raw.trim().parse::<usize>() {
            Ok(limit) => config.max_answer_chars = limit,
            Err(_) => {
                tracing::warn!("ignoring ESSAYGRADE_MAX_ANSWER_CHARS={raw:?}: not an integer");
            }
        }
    }

    config
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("essaygrade"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn default_config() {
        let config = EssaygradeConfig::default();
        assert_eq!(config.default_question_id, "unspecified");
        assert_eq!(config.max_answer_chars, 20_000);
        assert!(!config.pretty);
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let config = parse_config("pretty = true\n").unwrap();
        assert!(config.pretty);
        assert_eq!(config.default_question_id, "unspecified");
        assert_eq!(config.max_answer_chars, 20_000);
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
default_question_id = "Tidak Spesifik"
max_answer_chars = 500
pretty = false
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.default_question_id, "Tidak Spesifik");
        assert_eq!(config.max_answer_chars, 500);
    }

    #[test]
    fn parse_rejects_wrong_types() {
        assert!(parse_config("max_answer_chars = \"lots\"").is_err());
    }

    #[test]
    fn env_overrides_apply() {
        let config = apply_overrides(EssaygradeConfig::default(), |name| match name {
            "ESSAYGRADE_DEFAULT_QUESTION_ID" => Some("Q-env".into()),
            "ESSAYGRADE_MAX_ANSWER_CHARS" => Some(" 42 ".into()),
            _ => None,
        });
        assert_eq!(config.default_question_id, "Q-env");
        assert_eq!(config.max_answer_chars, 42);
    }

    #[test]
    fn invalid_limit_override_is_ignored() {
        let config = apply_overrides(EssaygradeConfig::default(), |name| {
            (name == "ESSAYGRADE_MAX_ANSWER_CHARS").then(|| "many".to_string())
        });
        assert_eq!(config.max_answer_chars, 20_000);
        assert_eq!(apply_overrides(config.clone(), no_env), config);
    }

    #[test]
    fn load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "max_answer_chars = 0\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.max_answer_chars, 0);
    }

    #[test]
    fn load_from_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }
}
