// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Whole-buffer fallback used for processors without streaming support.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::engine::driver::{StreamStats, Strategy};
use crate::errors::ProcessError;
use crate::traits::{Flag, Processor};

/// Read everything, call `transform` once, write the result once.
pub async fn buffered_transform<R, W>(
    processor: &dyn Processor,
    reader: R,
    writer: W,
    flags: &[Flag],
) -> Result<StreamStats, ProcessError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = StreamStats::new(Strategy::Buffered);
    run_buffered(processor, reader, writer, flags, &mut stats).await?;
    Ok(stats)
}

pub(crate) async fn run_buffered<R, W>(
    processor: &dyn Processor,
    mut reader: R,
    mut writer: W,
    flags: &[Flag],
    stats: &mut StreamStats,
) -> Result<(), ProcessError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut input = Vec::new();
    stats.bytes_read = reader.read_to_end(&mut input).await? as u64;

    let output = processor.transform(&input, flags)?;

    writer.write_all(&output).await?;
    writer.flush().await?;
    stats.bytes_written = output.len() as u64;
    Ok(())
}
