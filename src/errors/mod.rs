// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod registry;
mod transform;

pub use config::ConfigError;
pub use registry::RegistryError;
pub use transform::{ProcessError, TransformError};
