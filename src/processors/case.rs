// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Case conversions.
//!
//! `upper`, `lower` and `rot13` map each character independently, so they
//! stream: the output for a prefix never changes as more input arrives.
//! Lowercasing is done per character (no contextual final-sigma rule) for the
//! same reason. The word-based conversions need whole words and buffer.

use crate::engine::utf8::{decode, Utf8Decoder};
use crate::errors::TransformError;
use crate::traits::{Flag, Processor, StreamState, StreamingProcessor};

type CharMap = fn(&str) -> String;

fn to_upper(text: &str) -> String {
    text.chars().flat_map(char::to_uppercase).collect()
}

fn to_lower(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

fn to_rot13(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'a'..='z' => (((c as u8 - b'a') + 13) % 26 + b'a') as char,
            'A'..='Z' => (((c as u8 - b'A') + 13) % 26 + b'A') as char,
            _ => c,
        })
        .collect()
}

/// Streaming state shared by the character-wise conversions.
struct CharMapStream {
    decoder: Utf8Decoder,
    map: CharMap,
}

impl CharMapStream {
    fn boxed(map: CharMap) -> Box<dyn StreamState> {
        Box::new(Self {
            decoder: Utf8Decoder::new(),
            map,
        })
    }
}

impl StreamState for CharMapStream {
    fn feed(&mut self, unit: &[u8], out: &mut Vec<u8>) -> Result<(), TransformError> {
        let map = self.map;
        self.decoder
            .push(unit, |text| out.extend_from_slice(map(text).as_bytes()))
    }

    fn finish(self: Box<Self>, _out: &mut Vec<u8>) -> Result<(), TransformError> {
        self.decoder.finish()
    }
}

fn map_whole(input: &[u8], map: CharMap) -> Result<Vec<u8>, TransformError> {
    Ok(map(decode(input)?).into_bytes())
}

/// Convert text to upper case.
pub struct Upper;

impl Processor for Upper {
    fn name(&self) -> &'static str {
        "upper"
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        map_whole(input, to_upper)
    }

    fn title(&self) -> &'static str {
        "To Upper case"
    }

    fn description(&self) -> &'static str {
        "Transform your text to UPPER CASE"
    }

    fn as_streaming(&self) -> Option<&dyn StreamingProcessor> {
        Some(self)
    }
}

impl StreamingProcessor for Upper {
    fn prefer_stream(&self) -> bool {
        true
    }

    fn start_stream(&self, _flags: &[Flag]) -> Box<dyn StreamState> {
        CharMapStream::boxed(to_upper)
    }
}

/// Convert text to lower case.
pub struct Lower;

impl Processor for Lower {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        map_whole(input, to_lower)
    }

    fn title(&self) -> &'static str {
        "To Lower case"
    }

    fn description(&self) -> &'static str {
        "Transform your text to lower case"
    }

    fn as_streaming(&self) -> Option<&dyn StreamingProcessor> {
        Some(self)
    }
}

impl StreamingProcessor for Lower {
    fn prefer_stream(&self) -> bool {
        true
    }

    fn start_stream(&self, _flags: &[Flag]) -> Box<dyn StreamState> {
        CharMapStream::boxed(to_lower)
    }
}

/// Rotate ASCII letters by 13 places.
pub struct Rot13;

impl Processor for Rot13 {
    fn name(&self) -> &'static str {
        "rot13"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["rot13-encode", "rot13-decode"]
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        map_whole(input, to_rot13)
    }

    fn title(&self) -> &'static str {
        "ROT13 Letter Substitution"
    }

    fn description(&self) -> &'static str {
        "Cipher/Decipher your text with ROT13 letter substitution"
    }

    fn as_streaming(&self) -> Option<&dyn StreamingProcessor> {
        Some(self)
    }
}

impl StreamingProcessor for Rot13 {
    fn prefer_stream(&self) -> bool {
        true
    }

    fn start_stream(&self, _flags: &[Flag]) -> Box<dyn StreamState> {
        CharMapStream::boxed(to_rot13)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

/// Words split on non-alphanumerics and on lower→upper / acronym boundaries.
///
/// `"parseHTTPResponse v2"` → `["parse", "HTTP", "Response", "v2"]`
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current: Vec<char> = Vec::new();

    for c in text.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(current.drain(..).collect());
            }
            continue;
        }

        if let Some(&prev) = current.last() {
            if c.is_uppercase() && (prev.is_lowercase() || prev.is_numeric()) {
                words.push(current.drain(..).collect());
            } else if c.is_lowercase() && prev.is_uppercase() && current.len() > 1 {
                // "HTTPResponse": the last capital starts the next word
                let start = current.len() - 1;
                let acronym: String = current.drain(..start).collect();
                words.push(acronym);
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.into_iter().collect());
    }
    words
}

fn join_lower(text: &str, separator: &str) -> String {
    split_words(text)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

fn is_small_word(word: &str) -> bool {
    matches!(
        word,
        "a" | "an" | "the" | "and" | "or" | "but" | "in" | "on" | "at" | "to" | "for" | "of"
            | "with" | "by"
    )
}

/// Title case: every word capitalized except short connecting words.
///
/// Whitespace between words is kept as it was, so line structure survives.
pub struct Title;

impl Processor for Title {
    fn name(&self) -> &'static str {
        "title"
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let mut rest = decode(input)?;
        let mut titled = String::with_capacity(rest.len());
        let mut first = true;

        while !rest.is_empty() {
            let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
            let (word, after) = rest.split_at(word_end);
            if !word.is_empty() {
                let lower_word = word.to_lowercase();
                // Always capitalize first word, otherwise check if it's a small word
                if first || !is_small_word(&lower_word) {
                    titled.push_str(&capitalize(word));
                } else {
                    titled.push_str(&lower_word);
                }
                first = false;
            }

            let gap_end = after
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(after.len());
            let (gap, next) = after.split_at(gap_end);
            titled.push_str(gap);
            rest = next;
        }
        Ok(titled.into_bytes())
    }

    fn title(&self) -> &'static str {
        "To Title Case"
    }

    fn description(&self) -> &'static str {
        "Convert your text to Title Case"
    }
}

/// `snake_case`
pub struct Snake;

impl Processor for Snake {
    fn name(&self) -> &'static str {
        "snake"
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        Ok(join_lower(decode(input)?, "_").into_bytes())
    }

    fn title(&self) -> &'static str {
        "To Snake case"
    }

    fn description(&self) -> &'static str {
        "Transform your text to snake_case"
    }
}

/// `kebab-case`
pub struct Kebab;

impl Processor for Kebab {
    fn name(&self) -> &'static str {
        "kebab"
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        Ok(join_lower(decode(input)?, "-").into_bytes())
    }

    fn title(&self) -> &'static str {
        "To Kebab case"
    }

    fn description(&self) -> &'static str {
        "Transform your text to kebab-case"
    }
}

/// `camelCase`
pub struct Camel;

impl Processor for Camel {
    fn name(&self) -> &'static str {
        "camel"
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let camel: String = split_words(decode(input)?)
            .iter()
            .enumerate()
            .map(|(i, word)| if i == 0 { word.to_lowercase() } else { capitalize(word) })
            .collect();
        Ok(camel.into_bytes())
    }

    fn title(&self) -> &'static str {
        "To Camel case"
    }

    fn description(&self) -> &'static str {
        "Transform your text to camelCase"
    }
}

/// `PascalCase`
pub struct Pascal;

impl Processor for Pascal {
    fn name(&self) -> &'static str {
        "pascal"
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let pascal: String = split_words(decode(input)?)
            .iter()
            .map(|word| capitalize(word))
            .collect();
        Ok(pascal.into_bytes())
    }

    fn title(&self) -> &'static str {
        "To Pascal case"
    }

    fn description(&self) -> &'static str {
        "Transform your text to PascalCase"
    }
}

/// URL slug: lowercase ASCII alphanumerics joined by hyphens.
pub struct Slug;

impl Processor for Slug {
    fn name(&self) -> &'static str {
        "slug"
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let slug = decode(input)?
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|part| !part.is_empty())
            .map(|part| part.to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join("-");
        Ok(slug.into_bytes())
    }

    fn title(&self) -> &'static str {
        "To Slug case"
    }

    fn description(&self) -> &'static str {
        "Transform your text to slug-case"
    }
}
