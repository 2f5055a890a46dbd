// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Optional incremental-processing capability.
//!
//! A processor opts in by implementing [`StreamingProcessor`] and returning
//! `Some(self)` from [`Processor::as_streaming`]. The stream driver owns all
//! reading, chunking and writing; the processor only supplies a per-call
//! [`StreamState`] that turns input units into output bytes.
//!
//! Feeding every byte of an input through `feed` and then calling `finish` must
//! produce exactly what [`Processor::transform`] returns for the concatenated
//! input, whatever the unit boundaries were.

use crate::config::consts::DEFAULT_CHUNK_SIZE;
use crate::errors::TransformError;
use crate::traits::flag::Flag;
use crate::traits::processor::Processor;

/// Declarative hint telling the driver how to feed a streaming processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamingConfig {
    /// Read granularity in bytes for the chunked path.
    pub chunk_size: usize,
    /// Accumulate all output and write it once at end of input.
    pub buffer_output: bool,
    /// Feed one `\n`-terminated line per unit instead of fixed chunks.
    pub line_by_line: bool,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            buffer_output: false,
            line_by_line: false,
        }
    }
}

impl StreamingConfig {
    /// Config for processors that emit one aggregate result at the end.
    pub fn aggregate() -> Self {
        Self {
            buffer_output: true,
            ..Self::default()
        }
    }

    /// Aggregate config fed line by line.
    pub fn aggregate_lines() -> Self {
        Self {
            buffer_output: true,
            line_by_line: true,
            ..Self::default()
        }
    }
}

/// Per-invocation incremental state.
pub trait StreamState: Send {
    /// Consume one unit of input, appending any output that is already final.
    fn feed(&mut self, unit: &[u8], out: &mut Vec<u8>) -> Result<(), TransformError>;

    /// End of input; append the remaining output.
    fn finish(self: Box<Self>, out: &mut Vec<u8>) -> Result<(), TransformError>;
}

pub trait StreamingProcessor: Processor {
    /// Whether incremental processing is semantically valid at all.
    fn can_stream(&self) -> bool {
        true
    }

    /// Whether streaming is the efficient default (prefix-stable output).
    ///
    /// `false` for transforms that can be fed incrementally but only produce
    /// their result at end of input, like counters.
    fn prefer_stream(&self) -> bool {
        false
    }

    fn streaming_config(&self) -> StreamingConfig {
        StreamingConfig::default()
    }

    fn start_stream(&self, flags: &[Flag]) -> Box<dyn StreamState>;
}
