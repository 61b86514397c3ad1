//! Byte-order reversal over integers and hex strings.
//!
//! 802.11 carries its FCS least-significant byte first, so a CRC rendered the natural
//! (big-endian) way has to be swapped before it goes on the wire. The swap works on
//! whole bytes: `aabbcc` becomes `ccbbaa` and the digits inside a byte keep their order.
//!
//! The input shape is decided once, when the [`EndianValue`] is built, and the swap
//! always returns the same shape it was given.

use crate::error::{FrameError, Result};
use crate::parser::{parse_value_text, ValueText};
use byteorder::{BigEndian, ByteOrder};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EndianValue {
    /// An integer and the number of bytes it spans (1..=8). The width is what keeps
    /// leading zero bytes alive across a swap: `0x1200` over two bytes swaps to `0x0012`.
    Integer { value: u64, bytes: u8 },
    /// Hex digits with their prefix (`0x` or `0X`).
    Prefixed { prefix: String, digits: String },
    /// Bare hex digits.
    Bare(String),
}

impl EndianValue {
    /// Classify text as a prefixed or bare hex value.
    pub fn detect(text: &str) -> Result<Self> {
        Ok(match parse_value_text(text)? {
            ValueText::Prefixed { prefix, digits } => EndianValue::Prefixed {
                prefix: prefix.to_string(),
                digits: digits.to_string(),
            },
            ValueText::Bare(digits) => EndianValue::Bare(digits.to_string()),
        })
    }

    pub fn prefixed(digits: impl Into<String>) -> Self {
        EndianValue::Prefixed { prefix: "0x".to_string(), digits: digits.into() }
    }

    /// Integer spanning the fewest whole bytes that hold it (`0` spans one byte).
    pub fn integer(value: u64) -> Self {
        let bytes = 8 - (value.leading_zeros() / 8).min(7) as u8;
        EndianValue::Integer { value, bytes }
    }

    /// Integer spanning exactly `bytes` bytes. Fails if the width is not 1..=8 or the
    /// value does not fit in it.
    pub fn integer_with_width(value: u64, bytes: u8) -> Result<Self> {
        int_bytes(value, bytes)?;
        Ok(EndianValue::Integer { value, bytes })
    }

    /// Hex digits without prefix; integers render as exactly two digits per byte of width.
    pub fn digits(&self) -> Result<String> {
        match self {
            EndianValue::Integer { value, bytes } => Ok(hex::encode(int_bytes(*value, *bytes)?)),
            EndianValue::Prefixed { digits, .. } => Ok(digits.clone()),
            EndianValue::Bare(digits) => Ok(digits.clone()),
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            EndianValue::Integer { value, .. } => Some(*value),
            _ => None,
        }
    }
}

impl From<u64> for EndianValue {
    fn from(v: u64) -> Self {
        EndianValue::integer(v)
    }
}

impl std::fmt::Display for EndianValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndianValue::Integer { value, .. } => write!(f, "{}", value),
            EndianValue::Prefixed { prefix, digits } => write!(f, "{}{}", prefix, digits),
            EndianValue::Bare(digits) => f.write_str(digits),
        }
    }
}

/// The low `width` big-endian bytes of `v`.
fn int_bytes(v: u64, width: u8) -> Result<Vec<u8>> {
    if !(1..=8).contains(&width) {
        return Err(FrameError::RangeError(format!("integer width {} not in 1..=8 bytes", width)));
    }
    let mut buf = [0u8; 8];
    BigEndian::write_u64(&mut buf, v);
    let skip = 8 - width as usize;
    if buf[..skip].iter().any(|b| *b != 0) {
        return Err(FrameError::RangeError(format!("{:#x} does not fit in {} bytes", v, width)));
    }
    Ok(buf[skip..].to_vec())
}

/// Reverse the order of 2-digit groups in `digits`.
pub fn swap_digits(digits: &str) -> Result<String> {
    if digits.is_empty() {
        return Err(FrameError::MalformedInput("no hex digits to swap".to_string()));
    }
    if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(FrameError::MalformedInput(format!("non-hex digits in {:?}", digits)));
    }
    if digits.len() % 2 != 0 {
        return Err(FrameError::MalformedInput(format!(
            "odd digit count ({}) in {:?}",
            digits.len(),
            digits
        )));
    }
    let groups: Vec<&str> = (0..digits.len())
        .step_by(2)
        .rev()
        .map(|i| &digits[i..i + 2])
        .collect();
    Ok(groups.concat())
}

/// Reverse the byte order of `value`, keeping its shape.
pub fn swap(value: &EndianValue) -> Result<EndianValue> {
    match value {
        EndianValue::Integer { value, bytes } => {
            let mut swapped = int_bytes(*value, *bytes)?;
            swapped.reverse();
            let mut buf = [0u8; 8];
            buf[8 - swapped.len()..].copy_from_slice(&swapped);
            Ok(EndianValue::Integer { value: BigEndian::read_u64(&buf), bytes: *bytes })
        }
        EndianValue::Prefixed { prefix, digits } => Ok(EndianValue::Prefixed {
            prefix: prefix.clone(),
            digits: swap_digits(digits)?,
        }),
        EndianValue::Bare(digits) => Ok(EndianValue::Bare(swap_digits(digits)?)),
    }
}

/// Detect the shape of `text` and swap it.
pub fn swap_text(text: &str) -> Result<String> {
    Ok(swap(&EndianValue::detect(text)?)?.to_string())
}
