// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod flag;
pub mod processor;
pub mod streaming;

pub use flag::{Flag, FlagType, FlagValue};
pub use processor::Processor;
pub use streaming::{StreamState, StreamingConfig, StreamingProcessor};
