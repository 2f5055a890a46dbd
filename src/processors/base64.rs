// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Base64 in the standard and URL-safe alphabets.
//!
//! Encoders stream: input is consumed in multiples of three bytes, which
//! encode to whole four-character groups with no padding, and the remainder is
//! carried to the next unit. Padding (unless `raw`) is only produced at the end.

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::engine::GeneralPurpose;
use base64::Engine;

use crate::errors::TransformError;
use crate::processors::trim_ascii;
use crate::traits::flag::resolve_bool;
use crate::traits::{Flag, Processor, StreamState, StreamingProcessor};

fn raw_flag() -> Flag {
    Flag::bool("raw", "r", "unpadded base64 encoding", false)
}

fn engine(url_safe: bool, raw: bool) -> &'static GeneralPurpose {
    match (url_safe, raw) {
        (false, false) => &STANDARD,
        (false, true) => &STANDARD_NO_PAD,
        (true, false) => &URL_SAFE,
        (true, true) => &URL_SAFE_NO_PAD,
    }
}

fn decode_with(
    processor: &'static str,
    engine: &GeneralPurpose,
    input: &[u8],
) -> Result<Vec<u8>, TransformError> {
    engine
        .decode(trim_ascii(input))
        .map_err(|e| TransformError::invalid_input(processor, e))
}

struct Base64Stream {
    engine: &'static GeneralPurpose,
    carry: Vec<u8>,
}

impl StreamState for Base64Stream {
    fn feed(&mut self, unit: &[u8], out: &mut Vec<u8>) -> Result<(), TransformError> {
        self.carry.extend_from_slice(unit);
        let whole = self.carry.len() / 3 * 3;
        if whole > 0 {
            out.extend_from_slice(self.engine.encode(&self.carry[..whole]).as_bytes());
            self.carry.drain(..whole);
        }
        Ok(())
    }

    fn finish(self: Box<Self>, out: &mut Vec<u8>) -> Result<(), TransformError> {
        out.extend_from_slice(self.engine.encode(&self.carry).as_bytes());
        Ok(())
    }
}

fn start_encoder(url_safe: bool, flags: &[Flag]) -> Box<dyn StreamState> {
    Box::new(Base64Stream {
        engine: engine(url_safe, resolve_bool(flags, &raw_flag())),
        carry: Vec::with_capacity(3),
    })
}

/// Encode to standard Base64.
pub struct Base64Encode;

impl Processor for Base64Encode {
    fn name(&self) -> &'static str {
        "base64-encode"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["b64-enc", "b64-encode"]
    }

    fn flags(&self) -> Vec<Flag> {
        vec![raw_flag()]
    }

    fn transform(&self, input: &[u8], flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let raw = resolve_bool(flags, &raw_flag());
        Ok(engine(false, raw).encode(input).into_bytes())
    }

    fn title(&self) -> &'static str {
        "Base64 Encoding"
    }

    fn description(&self) -> &'static str {
        "Encode your text to Base64"
    }

    fn as_streaming(&self) -> Option<&dyn StreamingProcessor> {
        Some(self)
    }
}

impl StreamingProcessor for Base64Encode {
    fn prefer_stream(&self) -> bool {
        true
    }

    fn start_stream(&self, flags: &[Flag]) -> Box<dyn StreamState> {
        start_encoder(false, flags)
    }
}

/// Decode standard Base64.
pub struct Base64Decode;

impl Processor for Base64Decode {
    fn name(&self) -> &'static str {
        "base64-decode"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["b64-dec", "b64-decode"]
    }

    fn flags(&self) -> Vec<Flag> {
        vec![raw_flag()]
    }

    fn transform(&self, input: &[u8], flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let raw = resolve_bool(flags, &raw_flag());
        decode_with(self.name(), engine(false, raw), input)
    }

    fn title(&self) -> &'static str {
        "Base64 Decode"
    }

    fn description(&self) -> &'static str {
        "Decode your base64 text"
    }
}

/// Encode to URL-safe Base64.
pub struct Base64UrlEncode;

impl Processor for Base64UrlEncode {
    fn name(&self) -> &'static str {
        "base64url-encode"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["b64url-enc", "b64url-encode"]
    }

    fn flags(&self) -> Vec<Flag> {
        vec![raw_flag()]
    }

    fn transform(&self, input: &[u8], flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let raw = resolve_bool(flags, &raw_flag());
        Ok(engine(true, raw).encode(input).into_bytes())
    }

    fn title(&self) -> &'static str {
        "Base64 URL Encoding"
    }

    fn description(&self) -> &'static str {
        "Encode your text to URL-safe Base64"
    }

    fn as_streaming(&self) -> Option<&dyn StreamingProcessor> {
        Some(self)
    }
}

impl StreamingProcessor for Base64UrlEncode {
    fn prefer_stream(&self) -> bool {
        true
    }

    fn start_stream(&self, flags: &[Flag]) -> Box<dyn StreamState> {
        start_encoder(true, flags)
    }
}

/// Decode URL-safe Base64.
pub struct Base64UrlDecode;

impl Processor for Base64UrlDecode {
    fn name(&self) -> &'static str {
        "base64url-decode"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["b64url-dec", "b64url-decode"]
    }

    fn flags(&self) -> Vec<Flag> {
        vec![raw_flag()]
    }

    fn transform(&self, input: &[u8], flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let raw = resolve_bool(flags, &raw_flag());
        decode_with(self.name(), engine(true, raw), input)
    }

    fn title(&self) -> &'static str {
        "Base64 URL Decode"
    }

    fn description(&self) -> &'static str {
        "Decode your URL-safe base64 text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FlagValue;

    fn raw() -> Vec<Flag> {
        vec![raw_flag().with_value(FlagValue::Bool(true))]
    }

    #[test]
    fn test_encode_with_and_without_padding() {
        assert_eq!(Base64Encode.transform(b"hello", &[]).unwrap(), b"aGVsbG8=");
        assert_eq!(Base64Encode.transform(b"hello", &raw()).unwrap(), b"aGVsbG8");
    }

    #[test]
    fn test_url_alphabet() {
        assert_eq!(Base64Encode.transform(&[0xfb, 0xff], &[]).unwrap(), b"+/8=");
        assert_eq!(Base64UrlEncode.transform(&[0xfb, 0xff], &[]).unwrap(), b"-_8=");
    }

    #[test]
    fn test_round_trip() {
        let data: Vec<u8> = (0..=255).collect();
        for flags in [Vec::new(), raw()] {
            let encoded = Base64Encode.transform(&data, &flags).unwrap();
            assert_eq!(Base64Decode.transform(&encoded, &flags).unwrap(), data);

            let encoded = Base64UrlEncode.transform(&data, &flags).unwrap();
            assert_eq!(Base64UrlDecode.transform(&encoded, &flags).unwrap(), data);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Base64Encode.transform(b"", &[]).unwrap(), b"");
        assert_eq!(Base64Decode.transform(b"", &[]).unwrap(), b"");
    }

    #[test]
    fn test_decode_ignores_surrounding_whitespace() {
        assert_eq!(Base64Decode.transform(b"aGVsbG8=\n", &[]).unwrap(), b"hello");
    }

    #[test]
    fn test_decode_rejects_malformed_input() {
        let err = Base64Decode.transform(b"not*base64", &[]).unwrap_err();
        assert!(matches!(err, TransformError::InvalidInput { processor: "base64-decode", .. }));
    }

    #[test]
    fn test_streamed_encoding_matches_whole() {
        let input = b"streaming base64 needs a carry";
        for size in 1..8 {
            let mut out = Vec::new();
            let mut state = Base64Encode.start_stream(&[]);
            for unit in input.chunks(size) {
                state.feed(unit, &mut out).unwrap();
            }
            state.finish(&mut out).unwrap();
            assert_eq!(out, Base64Encode.transform(input, &[]).unwrap(), "chunk size {}", size);
        }
    }
}
