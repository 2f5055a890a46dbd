// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::TransformError;
use crate::traits::flag::Flag;
use crate::traits::streaming::StreamingProcessor;

/// One self-contained, stateless transformation.
///
/// Implementations are zero-sized and registered once as `&'static dyn Processor`.
/// `transform` must be referentially transparent: the stream driver's buffered
/// fallback and the equivalence of the streaming path both depend on it.
pub trait Processor: Send + Sync {
    /// Canonical command name: lowercase, hyphen-delimited, globally unique.
    fn name(&self) -> &'static str;

    /// Additional lookup tokens.
    fn alias(&self) -> &'static [&'static str] {
        &[]
    }

    /// Declared parameter schema, in CLI registration order.
    fn flags(&self) -> Vec<Flag> {
        Vec::new()
    }

    /// Transform the whole input. Malformed input is an error, never a panic.
    fn transform(&self, input: &[u8], flags: &[Flag]) -> Result<Vec<u8>, TransformError>;

    fn title(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Text matched by the interactive picker's fuzzy filter.
    fn filter_value(&self) -> String {
        let mut value = format!("{} {}", self.title(), self.name());
        for alias in self.alias() {
            value.push(' ');
            value.push_str(alias);
        }
        value
    }

    /// Capability check for incremental processing; `None` means buffer everything.
    fn as_streaming(&self) -> Option<&dyn StreamingProcessor> {
        None
    }
}

impl std::fmt::Debug for dyn Processor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Processor")
            .field("name", &self.name())
            .field("streaming", &self.as_streaming().is_some())
            .finish()
    }
}
