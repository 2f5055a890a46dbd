// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for flag resolution.

use crate::observability::messages::StructuredLog;
use crate::traits::FlagType;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A supplied flag value had the wrong type and the declared default was used.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
///
/// # Example
/// ```
/// use sttr::observability::messages::flag::FlagTypeMismatch;
/// use sttr::traits::FlagType;
///
/// let msg = FlagTypeMismatch {
///     short: "r",
///     expected: FlagType::Bool,
///     found: FlagType::String,
/// };
///
/// assert!(msg.to_string().contains("expected bool"));
/// ```
pub struct FlagTypeMismatch<'a> {
    pub short: &'a str,
    pub expected: FlagType,
    pub found: FlagType,
}

impl Display for FlagTypeMismatch<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Flag '{}' ignored: expected {} value, found {}; using declared default",
            self.short, self.expected, self.found
        )
    }
}

impl StructuredLog for FlagTypeMismatch<'_> {
    fn log(&self) {
        tracing::warn!(
            short = self.short,
            expected = %self.expected,
            found = %self.found,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("flag", span_name = name, short = self.short)
    }
}
