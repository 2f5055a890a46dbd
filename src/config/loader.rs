// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, MIN_CHUNK_SIZE};
use crate::errors::ConfigError;
use crate::observability::messages::{config::ConfigLoaded, StructuredLog};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Optional settings for the command-line tool.
///
/// Every field has a default, so an empty file (or no file at all) is valid.
/// The file may be YAML (`.yaml`/`.yml`) or TOML (`.toml`).
///
/// # Example
/// ```yaml
/// log_filter: "sttr=debug"
/// streaming:
///   chunk_size: 8192
///   mode: preferred
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_filter: Option<String>,
    #[serde(default)]
    pub streaming: StreamingOptions,
}

/// When the stream driver takes the incremental path.
///
/// # Variants
/// * `Auto` - stream whenever the processor can stream
/// * `Preferred` - stream only when the processor also prefers streaming
/// * `Off` - always read the whole input and transform once
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StreamMode {
    #[default]
    Auto,
    Preferred,
    Off,
}

impl StreamMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamMode::Auto => "auto",
            StreamMode::Preferred => "preferred",
            StreamMode::Off => "off",
        }
    }
}

/// Stream driver overrides.
///
/// # Fields
/// * `chunk_size` - read granularity overriding every processor's own hint (optional)
/// * `mode` - strategy selection policy (defaults to `auto`)
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct StreamingOptions {
    pub chunk_size: Option<usize>,
    #[serde(default)]
    pub mode: StreamMode,
}

impl StreamingOptions {
    /// Chunk size to report when no override is configured.
    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE)
    }

    /// Reject chunk sizes outside `[MIN_CHUNK_SIZE, MAX_CHUNK_SIZE]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.chunk_size {
            Some(requested) if !(MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&requested) => {
                Err(ConfigError::InvalidChunkSize {
                    requested,
                    min: MIN_CHUNK_SIZE,
                    max: MAX_CHUNK_SIZE,
                })
            }
            _ => Ok(()),
        }
    }
}

/// Load a config from a YAML or TOML file, chosen by extension.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match extension.as_deref() {
        Some("yaml") | Some("yml") => {
            // serde_yaml rejects an empty document for a struct
            if content.trim().is_empty() {
                return Ok(Config::default());
            }
            Ok(serde_yaml::from_str(&content)?)
        }
        Some("toml") => Ok(toml::from_str(&content)?),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Load a config and check its bounds.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path.as_ref())?;
    cfg.streaming.validate()?;

    ConfigLoaded {
        path: path.as_ref(),
        chunk_size: cfg.streaming.effective_chunk_size(),
        mode: cfg.streaming.mode.as_str(),
    }
    .log();

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
log_filter: "sttr=debug"
streaming:
  chunk_size: 4096
  mode: preferred
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.log_filter.as_deref(), Some("sttr=debug"));
        assert_eq!(cfg.streaming.chunk_size, Some(4096));
        assert_eq!(cfg.streaming.mode, StreamMode::Preferred);
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let cfg: Config = serde_yaml::from_str("log_filter: info").unwrap();
        assert_eq!(cfg.streaming.mode, StreamMode::Auto);
        assert_eq!(cfg.streaming.chunk_size, None);
        assert_eq!(cfg.streaming.effective_chunk_size(), DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn test_chunk_size_bounds() {
        let zero = StreamingOptions {
            chunk_size: Some(0),
            mode: StreamMode::Auto,
        };
        assert!(matches!(
            zero.validate(),
            Err(ConfigError::InvalidChunkSize { requested: 0, .. })
        ));

        let huge = StreamingOptions {
            chunk_size: Some(MAX_CHUNK_SIZE + 1),
            mode: StreamMode::Auto,
        };
        assert!(huge.validate().is_err());

        let tiny = StreamingOptions {
            chunk_size: Some(MIN_CHUNK_SIZE),
            mode: StreamMode::Off,
        };
        assert!(tiny.validate().is_ok());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("streaming:\n  mode: sometimes\n");
        assert!(result.is_err());
    }
}
