// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it at its level with the fields attached.

use tracing::Span;

pub mod config;
pub mod flag;
pub mod registry;
pub mod stream;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
