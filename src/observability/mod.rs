// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! All diagnostic and operational log lines are defined as message structs with
//! a `Display` implementation, so the wording lives in one place and call sites
//! stay free of format strings.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::stream` - stream driver strategy selection and completion
//! * `messages::registry` - registry construction and lookup failures
//! * `messages::flag` - lenient flag resolution
//! * `messages::config` - settings file loading
//!
//! # Usage
//!
//! ```rust
//! use sttr::observability::messages::registry::ProcessorNotFound;
//! use sttr::observability::messages::StructuredLog;
//!
//! ProcessorNotFound { token: "sha-3" }.log();
//! ```

pub mod messages;
