// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the stream driver.
//!
//! This module contains message types for logging events related to:
//! * Strategy selection (incremental chunks, line by line, buffered)
//! * Completion with byte counts and duration
//! * Failures while reading, transforming or writing

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// The driver picked how it will run a processor.
///
/// # Log Level
/// `debug!` - Diagnostic detail
///
/// # Example
/// ```
/// use sttr::observability::messages::stream::StrategySelected;
///
/// let msg = StrategySelected {
///     processor: "sha256",
///     strategy: "chunked",
///     chunk_size: 65536,
/// };
///
/// assert!(msg.to_string().contains("sha256"));
/// ```
pub struct StrategySelected<'a> {
    pub processor: &'a str,
    pub strategy: &'a str,
    pub chunk_size: usize,
}

impl Display for StrategySelected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' running with {} strategy: chunk_size={} bytes",
            self.processor, self.strategy, self.chunk_size
        )
    }
}

impl StructuredLog for StrategySelected<'_> {
    fn log(&self) {
        tracing::debug!(
            processor = self.processor,
            strategy = self.strategy,
            chunk_size = self.chunk_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "stream",
            span_name = name,
            processor = self.processor,
            strategy = self.strategy,
            chunk_size = self.chunk_size,
        )
    }
}

/// The driver consumed the whole input and flushed the output.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct StreamCompleted<'a> {
    pub processor: &'a str,
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub duration: std::time::Duration,
}

impl Display for StreamCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' completed: input={} bytes, output={} bytes, duration={:?}",
            self.processor, self.bytes_read, self.bytes_written, self.duration
        )
    }
}

impl StructuredLog for StreamCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            processor = self.processor,
            bytes_read = self.bytes_read,
            bytes_written = self.bytes_written,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "stream_completed",
            span_name = name,
            processor = self.processor,
            bytes_read = self.bytes_read,
            bytes_written = self.bytes_written,
            duration = ?self.duration,
        )
    }
}

/// The driver aborted.
///
/// # Log Level
/// `debug!` - The binary prints the error itself
///
/// # Example
/// ```
/// use sttr::observability::messages::stream::StreamFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
/// let msg = StreamFailed {
///     processor: "upper",
///     bytes_written: 42,
///     error: &error,
/// };
///
/// assert!(msg.to_string().contains("pipe closed"));
/// ```
pub struct StreamFailed<'a> {
    pub processor: &'a str,
    pub bytes_written: u64,
    pub error: &'a dyn std::error::Error,
}

impl Display for StreamFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' failed after writing {} bytes: {}",
            self.processor, self.bytes_written, self.error
        )
    }
}

impl StructuredLog for StreamFailed<'_> {
    fn log(&self) {
        tracing::debug!(
            processor = self.processor,
            bytes_written = self.bytes_written,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "stream_failed",
            span_name = name,
            processor = self.processor,
            error = %self.error,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tracing::Level;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logged_at(level: Level, message: &dyn StructuredLog) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || message.log());
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_stream_failed_is_silent_at_default_level() {
        let error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let failed = StreamFailed {
            processor: "upper",
            bytes_written: 3,
            error: &error,
        };

        assert_eq!(logged_at(Level::WARN, &failed), "");
        assert!(logged_at(Level::DEBUG, &failed).contains("pipe closed"));
    }
}
