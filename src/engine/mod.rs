// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod adapter;
pub mod driver;
pub mod utf8;

pub use adapter::buffered_transform;
pub use driver::{process_stream, transform_stream, Strategy, StreamDriver, StreamStats};
