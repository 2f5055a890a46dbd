// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Interactive processor picker.
//!
//! Reads a filter query, lists the processors whose `filter_value` contains the
//! query as a case-insensitive subsequence, takes a selection by number or
//! name, then reads multiline input until two consecutive empty lines and
//! prints the transformed result. Flags are not prompted for; every processor
//! runs with its declared defaults.

use std::io::{self, BufRead, Write};

use crate::config::Registry;
use crate::errors::ProcessError;
use crate::traits::Processor;

/// Whether every character of `query` appears in `candidate`, in order.
pub fn fuzzy_match(query: &str, candidate: &str) -> bool {
    let mut haystack = candidate.chars().flat_map(char::to_lowercase);
    query
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace())
        .all(|needle| haystack.any(|c| c == needle))
}

/// Processors matching `query`, in registry order.
pub fn filter(registry: &Registry, query: &str) -> Vec<&'static dyn Processor> {
    registry
        .iter()
        .filter(|processor| fuzzy_match(query, &processor.filter_value()))
        .collect()
}

/// Resolve an answer as a 1-based position in `candidates`, or a name or alias.
pub fn select(candidates: &[&'static dyn Processor], answer: &str) -> Option<&'static dyn Processor> {
    let answer = answer.trim();
    if let Ok(position) = answer.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|index| candidates.get(index))
            .copied();
    }
    candidates
        .iter()
        .copied()
        .find(|processor| processor.name() == answer || processor.alias().contains(&answer))
}

/// Read lines until two consecutive empty lines (or end of input).
///
/// The terminating empty lines are not part of the result; a single empty line
/// inside the text is kept.
pub fn read_multiline<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim_end_matches(['\n', '\r']);
        if text.is_empty() && lines.last().is_some_and(|last| last.is_empty()) {
            lines.pop();
            break;
        }
        lines.push(text.to_string());
    }
    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    Ok(lines.join("\n"))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

/// Run one picker session over `input` and `output`.
pub fn run<R: BufRead, W: Write>(
    registry: &Registry,
    input: &mut R,
    output: &mut W,
) -> Result<(), ProcessError> {
    let query = prompt(input, output, "Filter processors: ")?;
    let candidates = filter(registry, &query);
    if candidates.is_empty() {
        writeln!(output, "No processor matches {:?}", query)?;
        return Ok(());
    }

    for (position, processor) in candidates.iter().enumerate() {
        writeln!(output, "{:>3}. {:<20} {}", position + 1, processor.name(), processor.title())?;
    }

    let answer = prompt(input, output, "Select by number or name: ")?;
    let Some(processor) = select(&candidates, &answer) else {
        writeln!(output, "No processor selected")?;
        return Ok(());
    };

    writeln!(output, "Enter text for {} (finish with two empty lines):", processor.name())?;
    let text = read_multiline(input)?;
    let result = processor.transform(text.as_bytes(), &[])?;

    output.write_all(&result)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
