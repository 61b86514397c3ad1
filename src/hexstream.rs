//! Canonical byte-sequence representation of a frame.
//!
//! A [`HexStream`] owns the frame bytes. Its textual form is the space-separated
//! lowercase token list (`de ad be ef`), which is what the extractor slices and what
//! [`Display`](std::fmt::Display) renders.

use crate::error::{FrameError, Result};
use crate::parser::parse_stream;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HexStream {
    bytes: Vec<u8>,
}

impl HexStream {
    /// Wrap raw binary frame bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        HexStream { bytes: bytes.into() }
    }

    /// Parse hex text. Tokens may be separated by whitespace, `:` or `-`, or packed.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(HexStream { bytes: parse_stream(text)? })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Two-digit lowercase tokens, one per byte.
    pub fn to_tokens(&self) -> Vec<String> {
        self.bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    pub fn to_binary(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Separator-free hex digits (`deadbeef`).
    pub fn to_compact_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Sub-stream covering `range`; fails instead of truncating.
    pub fn slice(&self, range: Range<usize>) -> Result<HexStream> {
        self.bytes
            .get(range.clone())
            .map(|b| HexStream { bytes: b.to_vec() })
            .ok_or_else(|| {
                FrameError::RangeError(format!(
                    "byte range {}..{} outside stream of {} bytes",
                    range.start,
                    range.end,
                    self.len()
                ))
            })
    }

    /// New stream with `other` appended.
    pub fn concat(&self, other: &[u8]) -> HexStream {
        let mut bytes = Vec::with_capacity(self.len() + other.len());
        bytes.extend_from_slice(&self.bytes);
        bytes.extend_from_slice(other);
        HexStream { bytes }
    }
}

/// Join per-byte tokens with a single space, or with nothing when `compress` is set.
pub(crate) fn join_tokens(bytes: &[u8], compress: bool) -> String {
    if compress {
        return hex::encode(bytes);
    }
    bytes.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" ")
}

impl fmt::Display for HexStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_tokens(&self.bytes, false))
    }
}

impl FromStr for HexStream {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self> {
        HexStream::parse(s)
    }
}

impl From<Vec<u8>> for HexStream {
    fn from(bytes: Vec<u8>) -> Self {
        HexStream { bytes }
    }
}

impl From<&[u8]> for HexStream {
    fn from(bytes: &[u8]) -> Self {
        HexStream::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for HexStream {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
