// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod registry;

#[cfg(test)]
mod integration_tests;
pub mod consts;

pub use loader::{load_and_validate_config, load_config, Config, StreamMode, StreamingOptions};
pub use registry::{Registry, RegistryBuilder};
