// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Incremental UTF-8 decoding for text processors fed in arbitrary chunks.
//!
//! A chunk boundary may split a multi-byte character. The decoder hands out the
//! longest complete prefix and keeps the dangling bytes for the next chunk, so
//! character-wise processors see the same characters as they would on the
//! whole input.

use crate::errors::TransformError;

#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `bytes` after any carried-over prefix, calling `emit` with the complete text.
    pub fn push<F>(&mut self, bytes: &[u8], mut emit: F) -> Result<(), TransformError>
    where
        F: FnMut(&str),
    {
        if self.pending.is_empty() {
            let keep = split_point(bytes)?;
            if keep > 0 {
                emit(as_str(&bytes[..keep])?);
            }
            self.pending.extend_from_slice(&bytes[keep..]);
            return Ok(());
        }

        self.pending.extend_from_slice(bytes);
        let keep = split_point(&self.pending)?;
        if keep > 0 {
            emit(as_str(&self.pending[..keep])?);
            self.pending.drain(..keep);
        }
        Ok(())
    }

    /// End of input; a dangling partial character is invalid.
    pub fn finish(self) -> Result<(), TransformError> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(TransformError::InvalidUtf8)
        }
    }
}

/// Length of the longest prefix ending on a character boundary.
fn split_point(bytes: &[u8]) -> Result<usize, TransformError> {
    match std::str::from_utf8(bytes) {
        Ok(_) => Ok(bytes.len()),
        // error_len() is None only when the input ends mid-character
        Err(e) if e.error_len().is_none() => Ok(e.valid_up_to()),
        Err(_) => Err(TransformError::InvalidUtf8),
    }
}

fn as_str(bytes: &[u8]) -> Result<&str, TransformError> {
    std::str::from_utf8(bytes).map_err(|_| TransformError::InvalidUtf8)
}

/// Whole-input counterpart used by `transform` implementations.
pub fn decode(input: &[u8]) -> Result<&str, TransformError> {
    as_str(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(chunks: &[&[u8]]) -> Result<String, TransformError> {
        let mut decoder = Utf8Decoder::new();
        let mut text = String::new();
        for chunk in chunks {
            decoder.push(chunk, |s| text.push_str(s))?;
        }
        decoder.finish()?;
        Ok(text)
    }

    #[test]
    fn test_split_multibyte_character() {
        let bytes = "héllo ✓".as_bytes();
        // 'é' is two bytes starting at 1, '✓' is three bytes at the end
        let text = collect(&[&bytes[..2], &bytes[2..9], &bytes[9..]]).unwrap();
        assert_eq!(text, "héllo ✓");
    }

    #[test]
    fn test_byte_at_a_time() {
        let input = "日本語テキスト";
        let chunks: Vec<&[u8]> = input.as_bytes().chunks(1).collect();
        assert_eq!(collect(&chunks).unwrap(), input);
    }

    #[test]
    fn test_invalid_sequence_rejected() {
        assert_eq!(collect(&[b"ab", b"\xff", b"cd"]), Err(TransformError::InvalidUtf8));
    }

    #[test]
    fn test_truncated_character_rejected_at_finish() {
        let bytes = "✓".as_bytes();
        assert_eq!(collect(&[&bytes[..2]]), Err(TransformError::InvalidUtf8));
    }
}
