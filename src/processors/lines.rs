// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Line reordering.
//!
//! These need every line before emitting anything, so none of them stream.
//! Lines are split on `\n` and compared as bytes. A trailing newline ends the
//! last line rather than starting an empty one, and is kept in the output.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

use crate::errors::TransformError;
use crate::traits::flag::resolve_uint;
use crate::traits::{Flag, Processor};

struct Lines<'a> {
    lines: Vec<&'a [u8]>,
    trailing_newline: bool,
}

impl<'a> Lines<'a> {
    fn split(input: &'a [u8]) -> Self {
        if input.is_empty() {
            return Self {
                lines: Vec::new(),
                trailing_newline: false,
            };
        }
        let trailing_newline = input.ends_with(b"\n");
        let body = if trailing_newline {
            &input[..input.len() - 1]
        } else {
            input
        };
        Self {
            lines: body.split(|&b| b == b'\n').collect(),
            trailing_newline,
        }
    }

    fn join(self) -> Vec<u8> {
        let mut out = self.lines.join(&b'\n');
        if self.trailing_newline {
            out.push(b'\n');
        }
        out
    }
}

/// Sort lines in byte order.
pub struct SortLines;

impl Processor for SortLines {
    fn name(&self) -> &'static str {
        "sort-lines"
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let mut lines = Lines::split(input);
        lines.lines.sort_unstable();
        Ok(lines.join())
    }

    fn title(&self) -> &'static str {
        "Sort lines"
    }

    fn description(&self) -> &'static str {
        "Sort lines alphabetically"
    }
}

/// Drop repeated lines, keeping first occurrences in order.
pub struct UniqueLines;

impl Processor for UniqueLines {
    fn name(&self) -> &'static str {
        "unique-lines"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["uniq"]
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let mut lines = Lines::split(input);
        let mut seen = HashSet::new();
        lines.lines.retain(|line| seen.insert(*line));
        Ok(lines.join())
    }

    fn title(&self) -> &'static str {
        "Get Unique Lines"
    }

    fn description(&self) -> &'static str {
        "Get unique lines from list"
    }
}

/// Reverse line order.
pub struct ReverseLines;

impl Processor for ReverseLines {
    fn name(&self) -> &'static str {
        "reverse-lines"
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let mut lines = Lines::split(input);
        lines.lines.reverse();
        Ok(lines.join())
    }

    fn title(&self) -> &'static str {
        "Reverse lines"
    }

    fn description(&self) -> &'static str {
        "Reverse the order of lines"
    }
}

/// Shuffle lines in random order.
///
/// The generator is created per call: from the `seed` flag when it is non-zero,
/// otherwise from operating-system entropy.
pub struct ShuffleLines;

impl ShuffleLines {
    fn seed_flag() -> Flag {
        Flag::uint("seed", "s", "Seed for a reproducible order (0 = random)", 0)
    }

    /// Shuffle with a caller-supplied generator.
    pub fn shuffle_with<R: Rng + ?Sized>(input: &[u8], rng: &mut R) -> Vec<u8> {
        let mut lines = Lines::split(input);
        lines.lines.shuffle(rng);
        lines.join()
    }
}

impl Processor for ShuffleLines {
    fn name(&self) -> &'static str {
        "shuffle-lines"
    }

    fn flags(&self) -> Vec<Flag> {
        vec![Self::seed_flag()]
    }

    fn transform(&self, input: &[u8], flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let seed = resolve_uint(flags, &Self::seed_flag());
        let mut rng = if seed == 0 {
            StdRng::from_entropy()
        } else {
            StdRng::seed_from_u64(seed)
        };
        Ok(Self::shuffle_with(input, &mut rng))
    }

    fn title(&self) -> &'static str {
        "Shuffle lines"
    }

    fn description(&self) -> &'static str {
        "Shuffle lines randomly"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FlagValue;

    fn run(processor: &dyn Processor, input: &str) -> String {
        String::from_utf8(processor.transform(input.as_bytes(), &[]).unwrap()).unwrap()
    }

    #[test]
    fn test_sort_lines_keeps_trailing_newline() {
        assert_eq!(run(&SortLines, "pear\napple\nfig\n"), "apple\nfig\npear\n");
        assert_eq!(run(&SortLines, "b\na"), "a\nb");
        assert_eq!(run(&SortLines, ""), "");
        assert_eq!(run(&SortLines, "\n"), "\n");
    }

    #[test]
    fn test_unique_lines_keeps_first_occurrence() {
        assert_eq!(run(&UniqueLines, "b\na\nb\nc\na\n"), "b\na\nc\n");
    }

    #[test]
    fn test_reverse_lines() {
        assert_eq!(run(&ReverseLines, "1\n2\n3"), "3\n2\n1");
        assert_eq!(run(&ReverseLines, "1\n2\n3\n"), "3\n2\n1\n");
    }

    #[test]
    fn test_lines_work_on_raw_bytes() {
        let sorted = SortLines.transform(b"\xff\n\x01\n", &[]).unwrap();
        assert_eq!(sorted, b"\x01\n\xff\n");
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let input = "one\ntwo\nthree\nfour\nfive\n";
        let shuffled = run(&ShuffleLines, input);

        let mut expected: Vec<&str> = input.lines().collect();
        let mut actual: Vec<&str> = shuffled.lines().collect();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
        assert!(shuffled.ends_with('\n'));
    }

    #[test]
    fn test_shuffle_is_reproducible_with_seed() {
        let input = b"a\nb\nc\nd\ne\nf\ng\nh";
        let seeded = vec![ShuffleLines::seed_flag().with_value(FlagValue::Uint(42))];

        let first = ShuffleLines.transform(input, &seeded).unwrap();
        let second = ShuffleLines.transform(input, &seeded).unwrap();
        assert_eq!(first, second);

        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(first, ShuffleLines::shuffle_with(input, &mut rng));
    }
}
