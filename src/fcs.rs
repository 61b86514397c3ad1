//! Frame check sequence (FCS) generation and verification.
//!
//! The FCS is the IEEE CRC-32 (the zlib/Ethernet polynomial) over the frame bytes,
//! rendered as hex, zero padded, then byte swapped because 802.11 transmits it least
//! significant byte first.

use crate::endian::swap_digits;
use crate::error::{FrameError, Result};
use crate::extract::{extract, ExtractionRequest, OutputShape};
use crate::hexstream::HexStream;
use std::ops::Range;
use tracing::trace;

/// Length of the FCS trailer in bytes.
pub const FCS_LEN: usize = 4;

/// Largest accepted `min_digits`.
pub const MAX_FCS_DIGITS: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChecksumRequest {
    /// Byte range to checksum; the whole frame when `None`.
    pub range: Option<Range<usize>>,
    /// Minimum number of hex digits, left padded with zeros.
    pub min_digits: usize,
    pub output: OutputShape,
}

impl ChecksumRequest {
    /// The wire form of a trailer: 8 digits, raw bytes.
    pub fn trailer() -> Self {
        ChecksumRequest {
            range: None,
            min_digits: FCS_LEN * 2,
            output: OutputShape::Binary,
        }
    }

    pub fn range(mut self, range: Range<usize>) -> Self {
        self.range = Some(range);
        self
    }

    pub fn min_digits(mut self, min_digits: usize) -> Self {
        self.min_digits = min_digits;
        self
    }

    pub fn output(mut self, output: OutputShape) -> Self {
        self.output = output;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checksum {
    Hex(String),
    Binary(Vec<u8>),
}

impl Checksum {
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            Checksum::Hex(s) => Some(s),
            Checksum::Binary(_) => None,
        }
    }

    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Checksum::Binary(b) => Some(b),
            Checksum::Hex(_) => None,
        }
    }
}

/// CRC-32 of `bytes`.
pub fn crc32(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

/// Compute the FCS of `frame` (or of `req.range` within it).
pub fn compute_fcs(frame: &HexStream, req: &ChecksumRequest) -> Result<Checksum> {
    let bytes = match &req.range {
        Some(r) => {
            if r.start > r.end || r.end > frame.len() {
                return Err(FrameError::RangeError(format!(
                    "checksum range {}..{} outside frame of {} bytes",
                    r.start,
                    r.end,
                    frame.len()
                )));
            }
            &frame.as_bytes()[r.clone()]
        }
        None => frame.as_bytes(),
    };
    if req.min_digits > MAX_FCS_DIGITS {
        return Err(FrameError::RangeError(format!(
            "min_digits {} exceeds {}",
            req.min_digits, MAX_FCS_DIGITS
        )));
    }
    let crc = crc32(bytes);
    let natural = format!("{:x}", crc);
    let mut width = req.min_digits.max(natural.len());
    width += width % 2;
    let digits = "0".repeat(width - natural.len()) + &natural;
    let swapped = swap_digits(&digits)?;
    trace!(len = bytes.len(), crc, fcs = %swapped, "fcs");
    match req.output {
        OutputShape::Hex => Ok(Checksum::Hex(swapped)),
        OutputShape::Binary => hex::decode(&swapped)
            .map(Checksum::Binary)
            .map_err(|e| FrameError::MalformedInput(format!("fcs {:?}: {}", swapped, e))),
    }
}

/// `frame` with its 4-byte FCS trailer appended.
pub fn append_fcs(frame: &HexStream) -> Result<HexStream> {
    match compute_fcs(frame, &ChecksumRequest::trailer())? {
        Checksum::Binary(trailer) => Ok(frame.concat(&trailer)),
        Checksum::Hex(s) => Ok(frame.concat(&HexStream::parse(&s)?.to_binary())),
    }
}

/// Check the last four bytes of `frame` against the FCS of everything before them.
pub fn verify_fcs(frame: &HexStream) -> Result<bool> {
    if frame.len() <= FCS_LEN {
        return Err(FrameError::RangeError(format!(
            "frame of {} bytes has no body before its FCS",
            frame.len()
        )));
    }
    let trailer = extract(frame, &ExtractionRequest::last(FCS_LEN).output(OutputShape::Binary))?;
    let body = extract(
        frame,
        &ExtractionRequest::last(FCS_LEN).chop(true).output(OutputShape::Binary),
    )?;
    let body = HexStream::from(body.into_bytes()?);
    let expected = compute_fcs(&body, &ChecksumRequest::trailer())?;
    Ok(expected.as_binary() == trailer.as_binary())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> HexStream {
        HexStream::parse("de ad be ef 01 02").expect("parse")
    }

    #[test]
    fn crc32_reference() {
        assert_eq!(crc32(b"123456789"), 0xcbf4_3926);
        assert_eq!(crc32(&[0xde, 0xad, 0xbe, 0xef, 0x01, 0x02]), 0xb947_7982);
    }

    #[test]
    fn fcs_hex_is_byte_swapped() {
        let req = ChecksumRequest::default().min_digits(8);
        let got = compute_fcs(&frame(), &req).expect("fcs");
        assert_eq!(got, Checksum::Hex("827947b9".to_string()));
    }

    #[test]
    fn fcs_binary_matches_le_crc() {
        let got = compute_fcs(&frame(), &ChecksumRequest::trailer()).expect("fcs");
        assert_eq!(got.as_binary(), Some(&0xb947_7982u32.to_le_bytes()[..]));
    }

    #[test]
    fn padding_to_min_and_even_digits() {
        // crc32(be ef) = 0x0b2a6e20 renders as 7 digits without padding.
        let beef = HexStream::from_bytes(vec![0xbe, 0xef]);
        let unpadded = compute_fcs(&beef, &ChecksumRequest::default()).expect("fcs");
        assert_eq!(unpadded.as_hex(), Some("206e2a0b"));

        let wide = compute_fcs(&frame(), &ChecksumRequest::default().min_digits(10)).expect("fcs");
        assert_eq!(wide.as_hex(), Some("827947b900"));
    }

    #[test]
    fn oversized_padding_is_an_error() {
        let short = HexStream::from_bytes(vec![1, 2, 3]);
        let req = ChecksumRequest::default().min_digits(70_000);
        assert!(matches!(compute_fcs(&short, &req), Err(FrameError::RangeError(_))));

        let widest = compute_fcs(&short, &ChecksumRequest::default().min_digits(MAX_FCS_DIGITS)).expect("fcs");
        let digits = widest.as_hex().expect("hex");
        assert_eq!(digits.len(), MAX_FCS_DIGITS);
        assert!(digits.ends_with("00"));
    }

    #[test]
    fn range_selects_bytes() {
        let req = ChecksumRequest::default().range(2..4).min_digits(8);
        let ranged = compute_fcs(&frame(), &req).expect("fcs");
        let direct = compute_fcs(&HexStream::from_bytes(vec![0xbe, 0xef]), &ChecksumRequest::default().min_digits(8))
            .expect("fcs");
        assert_eq!(ranged, direct);

        let bad = ChecksumRequest::default().range(4..9);
        assert!(matches!(compute_fcs(&frame(), &bad), Err(FrameError::RangeError(_))));
    }

    #[test]
    fn append_then_verify() {
        let with_fcs = append_fcs(&frame()).expect("append");
        assert_eq!(with_fcs.to_string(), "de ad be ef 01 02 82 79 47 b9");
        assert!(verify_fcs(&with_fcs).expect("verify"));

        let mut corrupt = with_fcs.to_binary();
        corrupt[0] ^= 0x01;
        assert!(!verify_fcs(&HexStream::from(corrupt)).expect("verify"));
    }

    #[test]
    fn verify_needs_a_body() {
        let short = HexStream::from_bytes(vec![0, 0, 0, 0]);
        assert!(matches!(verify_fcs(&short), Err(FrameError::RangeError(_))));
    }
}
