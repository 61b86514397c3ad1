//! # packet-essentials: byte-level helpers for 802.11 frames
//!
//! Primitives used by frame-crafting and frame-analysis tools that handle frames as
//! hex byte sequences:
//!
//! - **[`HexStream`]**: canonical byte sequence with a space-separated hex text form.
//! - **[`extract()`]**: take the first or last `qty` bytes, or chop them off and keep the
//!   rest; output as spaced hex, packed hex, or raw bytes.
//! - **[`swap`]**: byte-order reversal over an integer, a `0x`-prefixed string or bare
//!   hex digits, returning the same shape.
//! - **[`compute_fcs`]**: CRC-32 frame check sequence, padded and byte swapped the way
//!   802.11 puts it on the wire. [`append_fcs`] / [`verify_fcs`] handle the trailer.
//! - **[`FrameOptions`]**: address matching (single and paired) and the EAPOL
//!   key-information role table.
//!
//! ## Example
//!
//! ```
//! use packet_essentials::{compute_fcs, extract, ChecksumRequest, ExtractionRequest, HexStream};
//!
//! let frame = HexStream::parse("de ad be ef 01 02").unwrap();
//! let head = extract(&frame, &ExtractionRequest::first(2)).unwrap();
//! assert_eq!(head.as_hex(), Some("de ad"));
//! let rest = extract(&frame, &ExtractionRequest::first(2).chop(true)).unwrap();
//! assert_eq!(rest.as_hex(), Some("be ef 01 02"));
//!
//! let fcs = compute_fcs(&frame, &ChecksumRequest::default().min_digits(8)).unwrap();
//! assert_eq!(fcs.as_hex(), Some("827947b9"));
//! ```
//!
//! Everything here is synchronous and side-effect free apart from `tracing` events; the
//! library never installs a subscriber.

pub mod address;
pub mod endian;
pub mod error;
pub mod extract;
pub mod fcs;
pub mod hexstream;
pub mod options;
pub mod parser;

pub use address::{matches, pair_matches, AddressSet, Addressed, MacAddr};
pub use endian::{swap, swap_digits, swap_text, EndianValue};
pub use error::{FrameError, Result};
pub use extract::{byte_rip, extract, Extracted, ExtractionRequest, Order, OutputShape};
pub use fcs::{append_fcs, compute_fcs, crc32, verify_fcs, Checksum, ChecksumRequest, FCS_LEN, MAX_FCS_DIGITS};
pub use hexstream::HexStream;
pub use options::{FrameOptions, KeyRoleTable};
