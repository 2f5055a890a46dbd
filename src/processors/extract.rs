// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pull email or IP addresses out of free text, one match per separator.

use regex::Regex;
use std::net::Ipv6Addr;
use std::sync::OnceLock;

use crate::engine::utf8::decode;
use crate::errors::TransformError;
use crate::traits::flag::resolve_str;
use crate::traits::{Flag, Processor};

const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}";
const IPV4_PATTERN: &str =
    r"\b(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\.){3}(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\b";
// candidates only; each is confirmed by the std parser
const IPV6_CANDIDATE_PATTERN: &str = r"[0-9A-Fa-f]*:[0-9A-Fa-f:.]*:[0-9A-Fa-f.]*";

fn compiled(
    processor: &'static str,
    cell: &'static OnceLock<Result<Regex, regex::Error>>,
    pattern: &str,
) -> Result<&'static Regex, TransformError> {
    cell.get_or_init(|| Regex::new(pattern))
        .as_ref()
        .map_err(|e| TransformError::invalid_input(processor, e))
}

fn separator_flag() -> Flag {
    Flag::string("separator", "s", "Separator to split multiple matches", "\n")
}

fn join(matches: Vec<&str>, flags: &[Flag]) -> Vec<u8> {
    matches.join(&resolve_str(flags, &separator_flag())).into_bytes()
}

/// Extract email addresses.
pub struct ExtractEmails;

impl Processor for ExtractEmails {
    fn name(&self) -> &'static str {
        "extract-emails"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["find-emails", "find-email", "extract-email"]
    }

    fn flags(&self) -> Vec<Flag> {
        vec![separator_flag()]
    }

    fn transform(&self, input: &[u8], flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        static EMAIL: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
        let text = decode(input)?;
        let regex = compiled(self.name(), &EMAIL, EMAIL_PATTERN)?;
        Ok(join(regex.find_iter(text).map(|m| m.as_str()).collect(), flags))
    }

    fn title(&self) -> &'static str {
        "Extract Emails"
    }

    fn description(&self) -> &'static str {
        "Extract emails from given text"
    }
}

/// Extract IPv4 and IPv6 addresses, in order of appearance.
pub struct ExtractIp;

impl Processor for ExtractIp {
    fn name(&self) -> &'static str {
        "extract-ip"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["find-ips", "find-ip", "extract-ips"]
    }

    fn flags(&self) -> Vec<Flag> {
        vec![separator_flag()]
    }

    fn transform(&self, input: &[u8], flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        static IPV4: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
        static IPV6: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
        let text = decode(input)?;

        // a sentence-ending dot is not part of the address
        let mut found: Vec<(usize, &str)> = compiled(self.name(), &IPV6, IPV6_CANDIDATE_PATTERN)?
            .find_iter(text)
            .map(|m| (m.start(), m.as_str().trim_end_matches('.')))
            .filter(|(_, candidate)| candidate.parse::<Ipv6Addr>().is_ok())
            .collect();
        let ipv6_spans: Vec<(usize, usize)> = found
            .iter()
            .map(|(start, ip)| (*start, start + ip.len()))
            .collect();

        // IPv4-mapped IPv6 addresses were already taken whole
        found.extend(
            compiled(self.name(), &IPV4, IPV4_PATTERN)?
                .find_iter(text)
                .filter(|m| {
                    !ipv6_spans
                        .iter()
                        .any(|(start, end)| m.start() >= *start && m.end() <= *end)
                })
                .map(|m| (m.start(), m.as_str())),
        );
        found.sort_by_key(|(start, _)| *start);

        Ok(join(found.into_iter().map(|(_, ip)| ip).collect(), flags))
    }

    fn title(&self) -> &'static str {
        "Extract IPs"
    }

    fn description(&self) -> &'static str {
        "Extract IPv4 and IPv6 from your text"
    }
}
