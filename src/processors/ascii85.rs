// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ascii85 with the Adobe alphabet (`!` through `u`), without `<~ ~>` delimiters.
//!
//! Every four input bytes become five characters; a group of four zero bytes
//! is written as `z`. A final partial group of `n` bytes is zero-padded and
//! written as its first `n + 1` characters.

use crate::errors::TransformError;
use crate::traits::{Flag, Processor};

const OFFSET: u8 = b'!';
const ZERO_GROUP: u8 = b'z';

fn encode(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() / 4 * 5 + 5);
    for group in input.chunks(4) {
        let mut word = [0u8; 4];
        word[..group.len()].copy_from_slice(group);
        let mut value = u32::from_be_bytes(word);

        if group.len() == 4 && value == 0 {
            out.push(ZERO_GROUP);
            continue;
        }

        let mut digits = [0u8; 5];
        for digit in digits.iter_mut().rev() {
            *digit = (value % 85) as u8 + OFFSET;
            value /= 85;
        }
        out.extend_from_slice(&digits[..group.len() + 1]);
    }
    out
}

fn decode(processor: &'static str, input: &[u8]) -> Result<Vec<u8>, TransformError> {
    let mut out = Vec::with_capacity(input.len() / 5 * 4 + 4);
    let mut group = [0u8; 5];
    let mut filled = 0;

    for &c in input.iter().filter(|c| !c.is_ascii_whitespace()) {
        match c {
            ZERO_GROUP if filled == 0 => out.extend_from_slice(&[0; 4]),
            ZERO_GROUP => {
                return Err(TransformError::invalid_input(
                    processor,
                    "'z' inside a group",
                ))
            }
            b'!'..=b'u' => {
                group[filled] = c - OFFSET;
                filled += 1;
                if filled == 5 {
                    out.extend_from_slice(&decode_group(processor, &group)?);
                    filled = 0;
                }
            }
            _ => {
                return Err(TransformError::invalid_input(
                    processor,
                    format!("invalid character {:?}", c as char),
                ))
            }
        }
    }

    match filled {
        0 => {}
        1 => {
            return Err(TransformError::invalid_input(
                processor,
                "truncated final group",
            ))
        }
        n => {
            // pad with the highest digit so the kept bytes round correctly
            group[n..].fill(b'u' - OFFSET);
            out.extend_from_slice(&decode_group(processor, &group)?[..n - 1]);
        }
    }
    Ok(out)
}

fn decode_group(processor: &'static str, group: &[u8; 5]) -> Result<[u8; 4], TransformError> {
    let value = group
        .iter()
        .try_fold(0u32, |acc, &digit| {
            acc.checked_mul(85)?.checked_add(u32::from(digit))
        })
        .ok_or_else(|| TransformError::invalid_input(processor, "group value overflows 32 bits"))?;
    Ok(value.to_be_bytes())
}

/// Encode to Ascii85.
pub struct Ascii85Encode;

impl Processor for Ascii85Encode {
    fn name(&self) -> &'static str {
        "ascii85-encode"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["ascii85", "base85-encode", "b85-encode"]
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        Ok(encode(input))
    }

    fn title(&self) -> &'static str {
        "Ascii85 / Base85 Encoding"
    }

    fn description(&self) -> &'static str {
        "Encode your text to Ascii85 (Base85)"
    }
}

/// Decode Ascii85, ignoring whitespace.
pub struct Ascii85Decode;

impl Processor for Ascii85Decode {
    fn name(&self) -> &'static str {
        "ascii85-decode"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["base85-decode", "b85-decode"]
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        decode(self.name(), input)
    }

    fn title(&self) -> &'static str {
        "Ascii85 / Base85 Decoding"
    }

    fn description(&self) -> &'static str {
        "Decode your Ascii85 (Base85) text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        assert_eq!(Ascii85Encode.transform(b"Man ", &[]).unwrap(), b"9jqo^");
        assert_eq!(Ascii85Encode.transform(b"Man", &[]).unwrap(), b"9jqo");
        assert_eq!(Ascii85Decode.transform(b"9jqo^", &[]).unwrap(), b"Man ");
        assert_eq!(Ascii85Decode.transform(b"9jqo", &[]).unwrap(), b"Man");
    }

    #[test]
    fn test_zero_group_shorthand() {
        assert_eq!(Ascii85Encode.transform(&[0, 0, 0, 0], &[]).unwrap(), b"z");
        // a partial zero group is spelled out
        assert_eq!(Ascii85Encode.transform(&[0, 0], &[]).unwrap(), b"!!!");
        assert_eq!(Ascii85Decode.transform(b"zz", &[]).unwrap(), vec![0u8; 8]);
    }

    #[test]
    fn test_round_trip() {
        let samples: [&[u8]; 5] = [
            b"",
            b"a",
            b"hello world",
            &[0, 0, 0, 0, 1, 0, 0, 0, 0],
            &[0xff, 0xff, 0xff, 0xff, 0xff],
        ];
        for sample in samples {
            let encoded = Ascii85Encode.transform(sample, &[]).unwrap();
            assert_eq!(Ascii85Decode.transform(&encoded, &[]).unwrap(), sample);
        }
    }

    #[test]
    fn test_decode_skips_whitespace() {
        assert_eq!(Ascii85Decode.transform(b" 9jq\no^\n", &[]).unwrap(), b"Man ");
    }

    #[test]
    fn test_decode_errors() {
        for bad in [&b"9jqo^9"[..], b"9j~o^", b"9jzo^", b"uuuuu"] {
            let err = Ascii85Decode.transform(bad, &[]).unwrap_err();
            assert!(
                matches!(err, TransformError::InvalidInput { processor: "ascii85-decode", .. }),
                "{:?}",
                bad
            );
        }
    }
}
