// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::MAX_PAD_WIDTH;
use crate::engine::utf8::decode;
use crate::errors::TransformError;
use crate::traits::flag::{resolve_str, resolve_uint};
use crate::traits::{Flag, Processor};

/// Left-pad an integer with zeros.
///
/// The digits are padded to `number-of-zeros` width after any sign, then the
/// optional prefix is prepended: `-42` with width 5 and prefix `0x` becomes
/// `0x-00042`. Digits already at or beyond the width are left as they are.
/// Widths above [`MAX_PAD_WIDTH`] are rejected.
pub struct ZeroPad;

impl ZeroPad {
    fn width_flag() -> Flag {
        Flag::uint("number-of-zeros", "n", "Number of zeros to be padded", 5)
    }

    fn prefix_flag() -> Flag {
        Flag::string("prefix", "p", "The prefix to be added", "")
    }
}

impl Processor for ZeroPad {
    fn name(&self) -> &'static str {
        "zero-pad"
    }

    fn flags(&self) -> Vec<Flag> {
        vec![Self::width_flag(), Self::prefix_flag()]
    }

    fn transform(&self, input: &[u8], flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let text = decode(input)?.trim();
        let (sign, digits) = match text.strip_prefix(['-', '+']) {
            Some(rest) => (&text[..1], rest),
            None => ("", text),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TransformError::invalid_input(
                self.name(),
                format!("{:?} is not an integer", text),
            ));
        }

        let width = resolve_uint(flags, &Self::width_flag());
        if width > MAX_PAD_WIDTH {
            return Err(TransformError::invalid_input(
                self.name(),
                format!("width {} exceeds the maximum of {}", width, MAX_PAD_WIDTH),
            ));
        }
        let width = width as usize;
        let prefix = resolve_str(flags, &Self::prefix_flag());
        let zeros = width.saturating_sub(digits.len());

        let mut out = String::with_capacity(prefix.len() + sign.len() + zeros + digits.len());
        out.push_str(&prefix);
        out.push_str(sign);
        out.extend(std::iter::repeat('0').take(zeros));
        out.push_str(digits);
        Ok(out.into_bytes())
    }

    fn title(&self) -> &'static str {
        "Zero Pad"
    }

    fn description(&self) -> &'static str {
        "Pad a number with zeros"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FlagValue;

    fn pad(input: &str, flags: &[Flag]) -> Result<String, TransformError> {
        ZeroPad
            .transform(input.as_bytes(), flags)
            .map(|out| String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_default_width() {
        assert_eq!(pad("42", &[]).unwrap(), "00042");
        assert_eq!(pad(" 42\n", &[]).unwrap(), "00042");
        assert_eq!(pad("1234567", &[]).unwrap(), "1234567");
    }

    #[test]
    fn test_sign_and_prefix() {
        let flags = vec![
            ZeroPad::width_flag().with_value(FlagValue::Uint(3)),
            ZeroPad::prefix_flag().with_value(FlagValue::Str("0x".into())),
        ];
        assert_eq!(pad("-7", &flags).unwrap(), "0x-007");
        assert_eq!(pad("+7", &flags).unwrap(), "0x+007");
    }

    #[test]
    fn test_rejects_oversized_width() {
        for width in [MAX_PAD_WIDTH + 1, 1_000_000_000_000, u64::MAX] {
            let flags = vec![ZeroPad::width_flag().with_value(FlagValue::Uint(width))];
            assert!(
                matches!(pad("7", &flags), Err(TransformError::InvalidInput { .. })),
                "{}",
                width
            );
        }

        let widest = vec![ZeroPad::width_flag().with_value(FlagValue::Uint(MAX_PAD_WIDTH))];
        assert_eq!(pad("-7", &widest).unwrap().len(), MAX_PAD_WIDTH as usize + 1);
    }

    #[test]
    fn test_rejects_non_numbers() {
        for bad in ["", "-", "4.2", "abc", "1 2"] {
            assert!(
                matches!(pad(bad, &[]), Err(TransformError::InvalidInput { .. })),
                "{:?}",
                bad
            );
        }
    }
}
