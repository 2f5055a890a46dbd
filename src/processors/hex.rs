// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::TransformError;
use crate::processors::trim_ascii;
use crate::traits::{Flag, Processor, StreamState, StreamingProcessor};

/// Encode bytes as lowercase hexadecimal.
pub struct HexEncode;

struct HexStream;

impl StreamState for HexStream {
    fn feed(&mut self, unit: &[u8], out: &mut Vec<u8>) -> Result<(), TransformError> {
        out.extend_from_slice(hex::encode(unit).as_bytes());
        Ok(())
    }

    fn finish(self: Box<Self>, _out: &mut Vec<u8>) -> Result<(), TransformError> {
        Ok(())
    }
}

impl Processor for HexEncode {
    fn name(&self) -> &'static str {
        "hex-encode"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["hex-enc"]
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        Ok(hex::encode(input).into_bytes())
    }

    fn title(&self) -> &'static str {
        "Hex Encode"
    }

    fn description(&self) -> &'static str {
        "Encode your text Hex"
    }

    fn as_streaming(&self) -> Option<&dyn StreamingProcessor> {
        Some(self)
    }
}

impl StreamingProcessor for HexEncode {
    fn prefer_stream(&self) -> bool {
        true
    }

    fn start_stream(&self, _flags: &[Flag]) -> Box<dyn StreamState> {
        Box::new(HexStream)
    }
}

/// Decode hexadecimal (either case) to bytes.
pub struct HexDecode;

impl Processor for HexDecode {
    fn name(&self) -> &'static str {
        "hex-decode"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["hex-dec"]
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        hex::decode(trim_ascii(input)).map_err(|e| TransformError::invalid_input(self.name(), e))
    }

    fn title(&self) -> &'static str {
        "Hex Decode"
    }

    fn description(&self) -> &'static str {
        "Convert Hexadecimal to String"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let data = b"\x00\x01hello\xff";
        let encoded = HexEncode.transform(data, &[]).unwrap();
        assert_eq!(encoded, b"000168656c6c6fff");
        assert_eq!(HexDecode.transform(&encoded, &[]).unwrap(), data);
    }

    #[test]
    fn test_decode_accepts_uppercase() {
        assert_eq!(HexDecode.transform(b"48454C4C4F", &[]).unwrap(), b"HELLO");
    }

    #[test]
    fn test_decode_rejects_invalid_digits() {
        assert!(HexDecode.transform(b"zz", &[]).is_err());
        assert!(HexDecode.transform(b"abc", &[]).is_err());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(HexEncode.transform(b"", &[]).unwrap(), b"");
        assert_eq!(HexDecode.transform(b"", &[]).unwrap(), b"");
    }
}
