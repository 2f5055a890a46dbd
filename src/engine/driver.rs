// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Stream driver: the single entry point for running a processor over a
//! byte source and sink.
//!
//! # Strategy selection
//!
//! ```text
//! processor.as_streaming()
//!   None / can_stream() == false ──────────────► Buffered   (read all, transform, write once)
//!   Some(sp), streaming_config().line_by_line ─► LineByLine (one '\n'-terminated unit at a time)
//!   Some(sp) ──────────────────────────────────► Chunked    (fixed-size reads)
//! ```
//!
//! `StreamMode::Preferred` additionally requires `prefer_stream()`, and
//! `StreamMode::Off` forces the buffered path for everything.
//!
//! # Output flushing
//!
//! With `buffer_output` the incremental path accumulates output and writes it
//! once at end of input; otherwise output produced by each unit is written
//! before the next read, keeping memory bounded by the chunk size.
//!
//! Whatever the strategy, the bytes written equal `processor.transform(input)`.

use futures::StreamExt;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio_util::io::ReaderStream;
use tracing::Instrument;

use crate::config::consts::MIN_CHUNK_SIZE;
use crate::config::{StreamMode, StreamingOptions};
use crate::engine::adapter::run_buffered;
use crate::errors::ProcessError;
use crate::observability::messages::stream::{StrategySelected, StreamCompleted, StreamFailed};
use crate::observability::messages::StructuredLog;
use crate::traits::{Flag, Processor, StreamingProcessor};

/// How the driver ran (or will run) a processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Chunked,
    LineByLine,
    Buffered,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Chunked => "chunked",
            Strategy::LineByLine => "line_by_line",
            Strategy::Buffered => "buffered",
        }
    }
}

/// Outcome of one driver invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamStats {
    pub strategy: Strategy,
    pub bytes_read: u64,
    pub bytes_written: u64,
}

impl StreamStats {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            bytes_read: 0,
            bytes_written: 0,
        }
    }
}

/// Runs processors over async byte streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamDriver {
    chunk_size: Option<usize>,
    mode: StreamMode,
}

impl StreamDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_options(options: &StreamingOptions) -> Self {
        Self {
            chunk_size: options.chunk_size,
            mode: options.mode,
        }
    }

    /// Override every processor's chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size.max(MIN_CHUNK_SIZE));
        self
    }

    pub fn with_mode(mut self, mode: StreamMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn select_strategy(&self, processor: &dyn Processor) -> Strategy {
        match incremental(processor, self.mode) {
            Some(streaming) if streaming.streaming_config().line_by_line => Strategy::LineByLine,
            Some(_) => Strategy::Chunked,
            None => Strategy::Buffered,
        }
    }

    /// Run `processor` from `reader` to `writer`.
    pub async fn run<R, W>(
        &self,
        processor: &dyn Processor,
        reader: R,
        writer: W,
        flags: &[Flag],
    ) -> Result<StreamStats, ProcessError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let strategy = self.select_strategy(processor);
        let chunk_size = match incremental(processor, self.mode) {
            Some(streaming) => self.chunk_size.unwrap_or(streaming.streaming_config().chunk_size),
            None => 0,
        };

        let selected = StrategySelected {
            processor: processor.name(),
            strategy: strategy.as_str(),
            chunk_size,
        };
        selected.log();
        let span = selected.span("run");

        let started = Instant::now();
        let mut stats = StreamStats::new(strategy);

        let result = async {
            match incremental(processor, self.mode) {
                Some(streaming) => {
                    run_incremental(streaming, reader, writer, flags, self.chunk_size, &mut stats)
                        .await
                }
                None => run_buffered(processor, reader, writer, flags, &mut stats).await,
            }
        }
        .instrument(span)
        .await;

        match result {
            Ok(()) => {
                StreamCompleted {
                    processor: processor.name(),
                    bytes_read: stats.bytes_read,
                    bytes_written: stats.bytes_written,
                    duration: started.elapsed(),
                }
                .log();
                Ok(stats)
            }
            Err(error) => {
                StreamFailed {
                    processor: processor.name(),
                    bytes_written: stats.bytes_written,
                    error: &error,
                }
                .log();
                Err(error)
            }
        }
    }
}

/// The streaming capability to use under `mode`, if any.
fn incremental(processor: &dyn Processor, mode: StreamMode) -> Option<&dyn StreamingProcessor> {
    let streaming = processor.as_streaming()?;
    let usable = match mode {
        StreamMode::Off => false,
        StreamMode::Auto => streaming.can_stream(),
        StreamMode::Preferred => streaming.can_stream() && streaming.prefer_stream(),
    };
    usable.then_some(streaming)
}

/// Run with the default driver settings.
pub async fn process_stream<R, W>(
    processor: &dyn Processor,
    reader: R,
    writer: W,
    flags: &[Flag],
) -> Result<StreamStats, ProcessError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    StreamDriver::new().run(processor, reader, writer, flags).await
}

/// The incremental path on its own, bypassing strategy selection.
///
/// `chunk_size` overrides the processor's `StreamingConfig::chunk_size`.
pub async fn transform_stream<R, W>(
    processor: &dyn StreamingProcessor,
    reader: R,
    writer: W,
    flags: &[Flag],
    chunk_size: Option<usize>,
) -> Result<StreamStats, ProcessError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let strategy = if processor.streaming_config().line_by_line {
        Strategy::LineByLine
    } else {
        Strategy::Chunked
    };
    let mut stats = StreamStats::new(strategy);
    run_incremental(processor, reader, writer, flags, chunk_size, &mut stats).await?;
    Ok(stats)
}

async fn run_incremental<R, W>(
    processor: &dyn StreamingProcessor,
    reader: R,
    mut writer: W,
    flags: &[Flag],
    chunk_size: Option<usize>,
    stats: &mut StreamStats,
) -> Result<(), ProcessError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let config = processor.streaming_config();
    let chunk_size = chunk_size.unwrap_or(config.chunk_size).max(MIN_CHUNK_SIZE);
    let mut state = processor.start_stream(flags);
    let mut out = Vec::new();

    if config.line_by_line {
        let mut reader = BufReader::with_capacity(chunk_size, reader);
        let mut line = Vec::new();
        loop {
            line.clear();
            let read = reader.read_until(b'\n', &mut line).await?;
            if read == 0 {
                break;
            }
            stats.bytes_read += read as u64;
            state.feed(&line, &mut out)?;
            if !config.buffer_output {
                write_pending(&mut writer, &mut out, stats).await?;
            }
        }
    } else {
        let mut chunks = ReaderStream::with_capacity(reader, chunk_size);
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk?;
            stats.bytes_read += chunk.len() as u64;
            // ReaderStream may hand back more than it was sized for
            for unit in chunk.chunks(chunk_size) {
                state.feed(unit, &mut out)?;
                if !config.buffer_output {
                    write_pending(&mut writer, &mut out, stats).await?;
                }
            }
        }
    }

    state.finish(&mut out)?;
    write_pending(&mut writer, &mut out, stats).await?;
    writer.flush().await?;
    Ok(())
}

async fn write_pending<W>(
    writer: &mut W,
    out: &mut Vec<u8>,
    stats: &mut StreamStats,
) -> Result<(), ProcessError>
where
    W: AsyncWrite + Unpin,
{
    if !out.is_empty() {
        writer.write_all(&out[..]).await?;
        stats.bytes_written += out.len() as u64;
        out.clear();
    }
    Ok(())
}
