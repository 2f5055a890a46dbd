// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for processor registration and lookup.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No processor is registered under the requested name or alias.
    #[error("Unknown processor: '{0}'")]
    NotFound(String),

    /// Two registrations claim the same name or alias token.
    #[error("Duplicate processor name or alias: '{0}'")]
    DuplicateToken(String),
}
