// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for loading and validating the optional settings file.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Only `.yaml`, `.yml` and `.toml` files are understood.
    #[error("Unsupported config format for '{}': expected .yaml, .yml or .toml", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Chunk size {requested} is outside the allowed range {min}..={max}")]
    InvalidChunkSize {
        requested: usize,
        min: usize,
        max: usize,
    },
}
