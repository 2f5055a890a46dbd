// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for settings file loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A settings file was read and validated.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a std::path::Path,
    pub chunk_size: usize,
    pub mode: &'a str,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded config '{}': chunk_size={} bytes, stream mode={}",
            self.path.display(),
            self.chunk_size,
            self.mode
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            chunk_size = self.chunk_size,
            mode = self.mode,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("config", span_name = name, path = %self.path.display())
    }
}
