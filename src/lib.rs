// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod cli;        // subcommand generation from the registry
pub mod config;     // config + registry
pub mod engine;     // stream driver
pub mod errors;     // error handling
pub mod observability;
pub mod picker;     // interactive selection
pub mod processors; // built-in transformations
pub mod traits;     // unified abstractions
