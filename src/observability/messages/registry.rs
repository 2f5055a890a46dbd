// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for registry construction and lookup.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// The built-in registry finished construction.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct RegistryBuilt {
    pub processor_count: usize,
    pub token_count: usize,
}

impl Display for RegistryBuilt {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registry built: {} processors, {} lookup tokens",
            self.processor_count, self.token_count
        )
    }
}

impl StructuredLog for RegistryBuilt {
    fn log(&self) {
        tracing::debug!(
            processor_count = self.processor_count,
            token_count = self.token_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "registry",
            span_name = name,
            processor_count = self.processor_count,
        )
    }
}

/// A lookup token matched no name or alias.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct ProcessorNotFound<'a> {
    pub token: &'a str,
}

impl Display for ProcessorNotFound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "No processor registered as '{}'", self.token)
    }
}

impl StructuredLog for ProcessorNotFound<'_> {
    fn log(&self) {
        tracing::warn!(token = self.token, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("registry_lookup", span_name = name, token = self.token)
    }
}
