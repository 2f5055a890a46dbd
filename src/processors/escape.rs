// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::utf8::decode;
use crate::errors::TransformError;
use crate::traits::flag::resolve_bool;
use crate::traits::{Flag, Processor};

/// Backslash-escape quote characters.
///
/// With neither flag set both quote kinds are escaped.
pub struct EscapeQuotes;

impl EscapeQuotes {
    fn double_quote_flag() -> Flag {
        Flag::bool("double-quote", "d", "Escape double quote", false)
    }

    fn single_quote_flag() -> Flag {
        Flag::bool("single-quote", "s", "Escape single quote", false)
    }
}

impl Processor for EscapeQuotes {
    fn name(&self) -> &'static str {
        "escape-quotes"
    }

    fn alias(&self) -> &'static [&'static str] {
        &["esc-quotes", "escape-quote"]
    }

    fn flags(&self) -> Vec<Flag> {
        vec![Self::double_quote_flag(), Self::single_quote_flag()]
    }

    fn transform(&self, input: &[u8], flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        let text = decode(input)?;
        let mut double = resolve_bool(flags, &Self::double_quote_flag());
        let mut single = resolve_bool(flags, &Self::single_quote_flag());
        if !double && !single {
            double = true;
            single = true;
        }

        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if (c == '"' && double) || (c == '\'' && single) {
                out.push('\\');
            }
            out.push(c);
        }
        Ok(out.into_bytes())
    }

    fn title(&self) -> &'static str {
        "Escape Quotes"
    }

    fn description(&self) -> &'static str {
        "Escape single and double quotes from your text"
    }
}
