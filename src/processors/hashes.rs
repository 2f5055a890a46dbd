// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message digests and checksums, rendered as lowercase hex.
//!
//! Every hash is incremental by nature, so all of them stream. Output is only
//! known at end of input, which the driver handles by flushing once.

use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::errors::TransformError;
use crate::traits::{Flag, Processor, StreamState, StreamingProcessor};

struct DigestStream<D> {
    hasher: D,
}

impl<D: Digest + Send> StreamState for DigestStream<D> {
    fn feed(&mut self, unit: &[u8], _out: &mut Vec<u8>) -> Result<(), TransformError> {
        self.hasher.update(unit);
        Ok(())
    }

    fn finish(self: Box<Self>, out: &mut Vec<u8>) -> Result<(), TransformError> {
        out.extend_from_slice(hex::encode(self.hasher.finalize()).as_bytes());
        Ok(())
    }
}

macro_rules! digest_processor {
    ($processor:ident, $hasher:ty, $name:literal, $title:literal, $description:literal) => {
        pub struct $processor;

        impl Processor for $processor {
            fn name(&self) -> &'static str {
                $name
            }

            fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
                Ok(hex::encode(<$hasher>::digest(input)).into_bytes())
            }

            fn title(&self) -> &'static str {
                $title
            }

            fn description(&self) -> &'static str {
                $description
            }

            fn as_streaming(&self) -> Option<&dyn StreamingProcessor> {
                Some(self)
            }
        }

        impl StreamingProcessor for $processor {
            fn prefer_stream(&self) -> bool {
                true
            }

            fn start_stream(&self, _flags: &[Flag]) -> Box<dyn StreamState> {
                Box::new(DigestStream {
                    hasher: <$hasher>::new(),
                })
            }
        }
    };
}

digest_processor!(Sha1Sum, Sha1, "sha1", "SHA1 Sum", "Get the SHA1 checksum of your text");
digest_processor!(Sha224Sum, Sha224, "sha224", "SHA224 Sum", "Get the SHA224 checksum of your text");
digest_processor!(Sha256Sum, Sha256, "sha256", "SHA256 Sum", "Get the SHA256 checksum of your text");
digest_processor!(Sha384Sum, Sha384, "sha384", "SHA384 Sum", "Get the SHA384 checksum of your text");
digest_processor!(Sha512Sum, Sha512, "sha512", "SHA512 Sum", "Get the SHA512 checksum of your text");

/// MD5 digest.
pub struct Md5Sum;

struct Md5Stream {
    context: md5::Context,
}

impl StreamState for Md5Stream {
    fn feed(&mut self, unit: &[u8], _out: &mut Vec<u8>) -> Result<(), TransformError> {
        self.context.consume(unit);
        Ok(())
    }

    fn finish(self: Box<Self>, out: &mut Vec<u8>) -> Result<(), TransformError> {
        out.extend_from_slice(format!("{:x}", self.context.compute()).as_bytes());
        Ok(())
    }
}

impl Processor for Md5Sum {
    fn name(&self) -> &'static str {
        "md5"
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        Ok(format!("{:x}", md5::compute(input)).into_bytes())
    }

    fn title(&self) -> &'static str {
        "MD5 Sum"
    }

    fn description(&self) -> &'static str {
        "Get the MD5 checksum of your text"
    }

    fn as_streaming(&self) -> Option<&dyn StreamingProcessor> {
        Some(self)
    }
}

impl StreamingProcessor for Md5Sum {
    fn prefer_stream(&self) -> bool {
        true
    }

    fn start_stream(&self, _flags: &[Flag]) -> Box<dyn StreamState> {
        Box::new(Md5Stream {
            context: md5::Context::new(),
        })
    }
}

/// CRC-32 (IEEE) as eight hex digits.
pub struct Crc32Sum;

struct Crc32Stream {
    hasher: crc32fast::Hasher,
}

impl StreamState for Crc32Stream {
    fn feed(&mut self, unit: &[u8], _out: &mut Vec<u8>) -> Result<(), TransformError> {
        self.hasher.update(unit);
        Ok(())
    }

    fn finish(self: Box<Self>, out: &mut Vec<u8>) -> Result<(), TransformError> {
        out.extend_from_slice(format!("{:08x}", self.hasher.finalize()).as_bytes());
        Ok(())
    }
}

impl Processor for Crc32Sum {
    fn name(&self) -> &'static str {
        "crc32"
    }

    fn transform(&self, input: &[u8], _flags: &[Flag]) -> Result<Vec<u8>, TransformError> {
        Ok(format!("{:08x}", crc32fast::hash(input)).into_bytes())
    }

    fn title(&self) -> &'static str {
        "CRC32 Checksum"
    }

    fn description(&self) -> &'static str {
        "Get the CRC32 checksum of your text"
    }

    fn as_streaming(&self) -> Option<&dyn StreamingProcessor> {
        Some(self)
    }
}

impl StreamingProcessor for Crc32Sum {
    fn prefer_stream(&self) -> bool {
        true
    }

    fn start_stream(&self, _flags: &[Flag]) -> Box<dyn StreamState> {
        Box::new(Crc32Stream {
            hasher: crc32fast::Hasher::new(),
        })
    }
}
