// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while running a processor over its input.
//!
//! `TransformError` is what a processor reports about the *content* it was
//! given. `ProcessError` wraps it together with the I/O failures the stream
//! driver can hit while reading the source or writing the sink.

use thiserror::Error;

/// The input cannot be interpreted by the processor.
///
/// Streaming and whole-buffer paths must report the same variant for the same
/// content, so variants carry no chunk offsets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The processor works on text and the input is not valid UTF-8.
    #[error("Invalid UTF-8 input")]
    InvalidUtf8,

    /// The input is structurally invalid for the processor (bad digits, bad padding, ...).
    #[error("Invalid input for '{processor}': {reason}")]
    InvalidInput {
        processor: &'static str,
        reason: String,
    },

    /// A structured-text processor parsed the input but could not render its output.
    #[error("Failed to serialize output of '{processor}': {reason}")]
    Serialization {
        processor: &'static str,
        reason: String,
    },
}

impl TransformError {
    pub fn invalid_input(processor: &'static str, reason: impl ToString) -> Self {
        TransformError::InvalidInput {
            processor,
            reason: reason.to_string(),
        }
    }

    pub fn serialization(processor: &'static str, reason: impl ToString) -> Self {
        TransformError::Serialization {
            processor,
            reason: reason.to_string(),
        }
    }
}

/// Failure of one driver invocation.
///
/// Bytes already written to the sink before the error stay there; callers treat
/// the call as incomplete.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_processor() {
        let err = TransformError::invalid_input("hex-decode", "odd number of digits");
        assert_eq!(
            err.to_string(),
            "Invalid input for 'hex-decode': odd number of digits"
        );
    }

    #[test]
    fn test_process_error_is_transparent_for_transform_errors() {
        let err: ProcessError = TransformError::InvalidUtf8.into();
        assert_eq!(err.to_string(), "Invalid UTF-8 input");
        assert!(matches!(err, ProcessError::Transform(TransformError::InvalidUtf8)));
    }

    #[test]
    fn test_process_error_wraps_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ProcessError = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
