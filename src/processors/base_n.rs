// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Base32 (RFC 4648, padded) and the big-integer encodings Base58 and Base62.
//!
//! Base58 and Base62 treat the input as one big-endian number. Leading zero
//! bytes carry no numeric value, so each is written as the alphabet's zero
//! digit (`1` for Base58, `0` for Base62) and restored on decode.

use data_encoding::BASE32;
use num_bigint::BigUint;

use crate::errors::TransformError;
use crate::processors::trim_ascii;
use crate::traits::{Flag, Processor};

const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

fn encode_radix(input: &[u8], alphabet: &[u8]) -> Vec<u8> {
    let zeros = input.iter().take_while(|&&b| b == 0).count();
    let mut out = vec![alphabet[0]; zeros];

    let rest = &input[zeros..];
    if !rest.is_empty() {
        let number = BigUint::from_bytes_be(rest);
        out.extend(
            number
                .to_radix_be(alphabet.len() as u32)
                .into_iter()
                .map(|digit| alphabet[digit as usize]),
        );
    }
    out
}

fn decode_radix(
    processor: &'static str,
    input: &[u8],
    alphabet: &[u8],
) -> Result<Vec<u8>, TransformError> {
    let input = trim_ascii(input);
    let zeros = input.iter().take_while(|&&c| c == alphabet[0]).count();
    let mut out = vec![0u8; zeros];

    let digits = input[zeros..]
        .iter()
        .map(|&c| {
            alphabet
                .iter()
                .position(|&a| a == c)
                .map(|position| position as u8)
                .ok_or_else(|| {
                    TransformError::invalid_input(
                        processor,
                        format!("invalid character {:?}", c as char),
                    )
                })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    if !digits.is_empty() {
        let number = BigUint::from_radix_be(&digits, alphabet.len() as u32)
            .ok_or_else(|| TransformError::invalid_input(processor, "digit out of range"))?;
        out.extend(number.to_bytes_be());
    }
    Ok(out)
}

/// Encode to Base32 with padding.
pub struct Base32Encode;

impl Processor for Base32Encode {
    fn name(&self) -> &'static str {
        "base32-encode"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["b32-enc", "b32-encode"]
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        Ok(BASE32.encode(input).into_bytes())
    }

    fn title(&self) -> &'static str {
        "Base32 Encoding"
    }

    fn description(&self) -> &'static str {
        "Encode your text to Base32"
    }
}

/// Decode padded Base32.
pub struct Base32Decode;

impl Processor for Base32Decode {
    fn name(&self) -> &'static str {
        "base32-decode"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["b32-dec", "b32-decode"]
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        BASE32
            .decode(trim_ascii(input))
            .map_err(|e| TransformError::invalid_input(self.name(), e))
    }

    fn title(&self) -> &'static str {
        "Base32 Decode"
    }

    fn description(&self) -> &'static str {
        "Decode your base32 text"
    }
}

/// Encode to Base58 (Bitcoin alphabet).
pub struct Base58Encode;

impl Processor for Base58Encode {
    fn name(&self) -> &'static str {
        "base58-encode"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["b58-enc", "b58-encode"]
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        Ok(encode_radix(input, BASE58_ALPHABET))
    }

    fn title(&self) -> &'static str {
        "Base58 Encoding"
    }

    fn description(&self) -> &'static str {
        "Encode your text to Base58"
    }
}

/// Decode Base58 (Bitcoin alphabet).
pub struct Base58Decode;

impl Processor for Base58Decode {
    fn name(&self) -> &'static str {
        "base58-decode"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["b58-dec", "b58-decode"]
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        decode_radix(self.name(), input, BASE58_ALPHABET)
    }

    fn title(&self) -> &'static str {
        "Base58 Decode"
    }

    fn description(&self) -> &'static str {
        "Decode your base58 text"
    }
}

/// Encode to Base62 (`0-9A-Za-z`).
pub struct Base62Encode;

impl Processor for Base62Encode {
    fn name(&self) -> &'static str {
        "base62-encode"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["b62-enc", "b62-encode"]
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        Ok(encode_radix(input, BASE62_ALPHABET))
    }

    fn title(&self) -> &'static str {
        "Base62 Encoding"
    }

    fn description(&self) -> &'static str {
        "Encode your text to Base62"
    }
}

/// Decode Base62 (`0-9A-Za-z`).
pub struct Base62Decode;

impl Processor for Base62Decode {
    fn name(&self) -> &'static str {
        "base62-decode"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["b62-dec", "b62-decode"]
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        decode_radix(self.name(), input, BASE62_ALPHABET)
    }

    fn title(&self) -> &'static str {
        "Base62 Decode"
    }

    fn description(&self) -> &'static str {
        "Decode your base62 text"
    }
}
