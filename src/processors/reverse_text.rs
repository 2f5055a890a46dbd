// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::utf8::decode;
use crate::errors::TransformError;
use crate::traits::{Flag, Processor};

/// Reverse Text processor - reverses the input string character by character
pub struct Reverse;

impl Processor for Reverse {
    fn name(&self) -> &'static str {
        "reverse"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["reverse-text"]
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let reversed: String = decode(input)?.chars().rev().collect();
        Ok(reversed.into_bytes())
    }

    fn title(&self) -> &'static str {
        "Reverse text"
    }

    fn description(&self) -> &'static str {
        "Reverse Text ( txeT esreveR )"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_text() {
        assert_eq!(Reverse.transform(b"hello", &[]).unwrap(), b"olleh");
    }

    #[test]
    fn test_reverse_keeps_multibyte_characters_intact() {
        let reversed = Reverse.transform("añb✓".as_bytes(), &[]).unwrap();
        assert_eq!(String::from_utf8(reversed).unwrap(), "✓bña");
    }
}
