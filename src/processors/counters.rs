// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Counting processors.
//!
//! Each produces a single decimal number, so they stream with buffered output:
//! the input is consumed incrementally in constant memory and the count is
//! written once at end of input.

use crate::engine::utf8::{decode, Utf8Decoder};
use crate::errors::TransformError;
use crate::traits::{Flag, Processor, StreamState, StreamingConfig, StreamingProcessor};

fn render(count: u64) -> Vec<u8> {
    count.to_string().into_bytes()
}

/// Count lines: every `\n` ends a line, and a final unterminated line counts too.
pub struct CountLines;

#[derive(Default)]
struct LineCountStream {
    newlines: u64,
    last: Option<u8>,
}

impl StreamState for LineCountStream {
    fn feed(&mut self, unit: &[u8], _out: &mut Vec<u8>) -> Result<(), TransformError> {
        self.newlines += unit.iter().filter(|&&b| b == b'\n').count() as u64;
        if let Some(&last) = unit.last() {
            self.last = Some(last);
        }
        Ok(())
    }

    fn finish(self: Box<Self>, out: &mut Vec<u8>) -> Result<(), TransformError> {
        let unterminated = matches!(self.last, Some(b) if b != b'\n');
        out.extend(render(self.newlines + unterminated as u64));
        Ok(())
    }
}

impl Processor for CountLines {
    fn name(&self) -> &'static str {
        "count-lines"
    }

    fn transform(&self, input: &[u8], flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let mut out = Vec::new();
        let mut state = self.start_stream(flags);
        state.feed(input, &mut out)?;
        state.finish(&mut out)?;
        Ok(out)
    }

    fn title(&self) -> &'static str {
        "Count number of lines"
    }

    fn description(&self) -> &'static str {
        "Count the number of lines in your text"
    }

    fn as_streaming(&self) -> Option<&dyn StreamingProcessor> {
        Some(self)
    }
}

impl StreamingProcessor for CountLines {
    fn streaming_config(&self) -> StreamingConfig {
        StreamingConfig::aggregate_lines()
    }

    fn start_stream(&self, _flags: &[Flag]) -> Box<dyn StreamState> {
        Box::new(LineCountStream::default())
    }
}

/// Count whitespace-separated words.
pub struct CountWords;

#[derive(Default)]
struct WordCountStream {
    decoder: Utf8Decoder,
    words: u64,
    in_word: bool,
}

impl StreamState for WordCountStream {
    fn feed(&mut self, unit: &[u8], _out: &mut Vec<u8>) -> Result<(), TransformError> {
        let words = &mut self.words;
        let in_word = &mut self.in_word;
        self.decoder.push(unit, |text| {
            for c in text.chars() {
                if c.is_whitespace() {
                    *in_word = false;
                } else if !*in_word {
                    *in_word = true;
                    *words += 1;
                }
            }
        })
    }

    fn finish(self: Box<Self>, out: &mut Vec<u8>) -> Result<(), TransformError> {
        self.decoder.finish()?;
        out.extend(render(self.words));
        Ok(())
    }
}

impl Processor for CountWords {
    fn name(&self) -> &'static str {
        "count-words"
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        Ok(render(decode(input)?.split_whitespace().count() as u64))
    }

    fn title(&self) -> &'static str {
        "Count number of words"
    }

    fn description(&self) -> &'static str {
        "Count the number of words in your text"
    }

    fn as_streaming(&self) -> Option<&dyn StreamingProcessor> {
        Some(self)
    }
}

impl StreamingProcessor for CountWords {
    fn streaming_config(&self) -> StreamingConfig {
        StreamingConfig::aggregate()
    }

    fn start_stream(&self, _flags: &[Flag]) -> Box<dyn StreamState> {
        Box::new(WordCountStream::default())
    }
}

/// Count Unicode scalar values.
pub struct CountChars;

#[derive(Default)]
struct CharCountStream {
    decoder: Utf8Decoder,
    chars: u64,
}

impl StreamState for CharCountStream {
    fn feed(&mut self, unit: &[u8], _out: &mut Vec<u8>) -> Result<(), TransformError> {
        let chars = &mut self.chars;
        self.decoder
            .push(unit, |text| *chars += text.chars().count() as u64)
    }

    fn finish(self: Box<Self>, out: &mut Vec<u8>) -> Result<(), TransformError> {
        self.decoder.finish()?;
        out.extend(render(self.chars));
        Ok(())
    }
}

impl Processor for CountChars {
    fn name(&self) -> &'static str {
        "count-chars"
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        Ok(render(decode(input)?.chars().count() as u64))
    }

    fn title(&self) -> &'static str {
        "Count number of characters"
    }

    fn description(&self) -> &'static str {
        "Find the length of your text (including spaces)"
    }

    fn as_streaming(&self) -> Option<&dyn StreamingProcessor> {
        Some(self)
    }
}

impl StreamingProcessor for CountChars {
    fn streaming_config(&self) -> StreamingConfig {
        StreamingConfig::aggregate()
    }

    fn start_stream(&self, _flags: &[Flag]) -> Box<dyn StreamState> {
        Box::new(CharCountStream::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(processor: &dyn Processor, input: &str) -> String {
        String::from_utf8(processor.transform(input.as_bytes(), &[]).unwrap()).unwrap()
    }

    #[test]
    fn test_count_lines_boundaries() {
        assert_eq!(count(&CountLines, ""), "0");
        assert_eq!(count(&CountLines, "\n"), "1");
        assert_eq!(count(&CountLines, "one"), "1");
        assert_eq!(count(&CountLines, "one\ntwo"), "2");
        assert_eq!(count(&CountLines, "one\ntwo\n"), "2");
        assert_eq!(count(&CountLines, "\n\n\n"), "3");
    }

    #[test]
    fn test_count_lines_accepts_binary() {
        assert_eq!(CountLines.transform(b"\xff\n\xfe", &[]).unwrap(), b"2");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count(&CountWords, ""), "0");
        assert_eq!(count(&CountWords, "hello world test"), "3");
        assert_eq!(count(&CountWords, "  spaced \t out\n\nwords  "), "3");
    }

    #[test]
    fn test_count_chars() {
        assert_eq!(count(&CountChars, ""), "0");
        assert_eq!(count(&CountChars, "hello world"), "11");
        assert_eq!(count(&CountChars, "héllo ✓"), "7");
    }

    #[test]
    fn test_word_count_across_chunk_boundary() {
        let mut out = Vec::new();
        let mut state = CountWords.start_stream(&[]);
        for unit in [&b"hel"[..], b"lo wo", b"rld ", b" x"] {
            state.feed(unit, &mut out).unwrap();
        }
        state.finish(&mut out).unwrap();
        assert_eq!(out, b"3");
    }

    #[test]
    fn test_counters_are_idempotent() {
        let input = "a b\nc d e\n";
        for processor in [&CountLines as &dyn Processor, &CountWords, &CountChars] {
            assert_eq!(count(processor, input), count(processor, input));
        }
    }
}
