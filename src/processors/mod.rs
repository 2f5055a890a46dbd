// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in processors.
//!
//! Every processor is a zero-sized unit struct; [`BUILTIN_PROCESSORS`] is the
//! closed, ordered set the registry is built from. Order here is the order of
//! `list` output and of CLI subcommands.

mod ascii85;
mod base64;
mod base_n;
mod case;
mod counters;
mod escape;
mod extract;
mod hashes;
mod hex;
mod json;
mod lines;
mod reverse_text;
mod zero_pad;

pub use ascii85::{Ascii85Decode, Ascii85Encode};
pub use self::base64::{Base64Decode, Base64Encode, Base64UrlDecode, Base64UrlEncode};
pub use base_n::{Base32Decode, Base32Encode, Base58Decode, Base58Encode, Base62Decode, Base62Encode};
pub use case::{Camel, Kebab, Lower, Pascal, Rot13, Slug, Snake, Title, Upper};
pub use counters::{CountChars, CountLines, CountWords};
pub use escape::EscapeQuotes;
pub use extract::{ExtractEmails, ExtractIp};
pub use hashes::{Crc32Sum, Md5Sum, Sha1Sum, Sha224Sum, Sha256Sum, Sha384Sum, Sha512Sum};
pub use self::hex::{HexDecode, HexEncode};
pub use json::{Json, JsonToYaml, YamlToJson};
pub use lines::{ReverseLines, ShuffleLines, SortLines, UniqueLines};
pub use reverse_text::Reverse;
pub use zero_pad::ZeroPad;

use crate::traits::Processor;

pub const BUILTIN_PROCESSORS: &[&'static dyn Processor] = &[
    // text
    &Upper,
    &Lower,
    &Title,
    &Snake,
    &Kebab,
    &Camel,
    &Pascal,
    &Slug,
    &Rot13,
    &Reverse,
    &EscapeQuotes,
    &ZeroPad,
    &ExtractEmails,
    &ExtractIp,
    // lines
    &SortLines,
    &UniqueLines,
    &ReverseLines,
    &ShuffleLines,
    &CountLines,
    &CountWords,
    &CountChars,
    // encodings
    &Base32Encode,
    &Base32Decode,
    &Base58Encode,
    &Base58Decode,
    &Base62Encode,
    &Base62Decode,
    &Base64Encode,
    &Base64Decode,
    &Base64UrlEncode,
    &Base64UrlDecode,
    &HexEncode,
    &HexDecode,
    &Ascii85Encode,
    &Ascii85Decode,
    // hashes
    &Md5Sum,
    &Sha1Sum,
    &Sha224Sum,
    &Sha256Sum,
    &Sha384Sum,
    &Sha512Sum,
    &Crc32Sum,
    // formats
    &Json,
    &JsonToYaml,
    &YamlToJson,
];

/// Strip leading and trailing ASCII whitespace; decoders accept a trailing newline.
pub(crate) fn trim_ascii(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |last| last + 1);
    &bytes[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_ascii() {
        assert_eq!(trim_ascii(b"  ab c\n"), b"ab c");
        assert_eq!(trim_ascii(b" \t\n"), b"");
        assert_eq!(trim_ascii(b""), b"");
        assert_eq!(trim_ascii(b"x"), b"x");
    }
}
