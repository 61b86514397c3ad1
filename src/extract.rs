//! Windowed byte extraction over a [`HexStream`].
//!
//! A request selects the first or last `qty` bytes. With `chop` set the
//! complement is returned instead, i.e. the stream with those bytes removed. The
//! result is either hex text (space separated, or packed when `compress` is set)
//! or raw bytes.
//!
//! | order | chop  | returned bytes      |
//! |-------|-------|---------------------|
//! | First | false | `[0, qty)`          |
//! | First | true  | `[qty, L)`          |
//! | Last  | false | `[L - qty, L)`      |
//! | Last  | true  | `[0, L - qty)`      |

use crate::error::{FrameError, Result};
use crate::hexstream::{join_tokens, HexStream};
use tracing::trace;

/// Which end of the stream the window is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    First,
    Last,
}

/// Shape of the extracted bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputShape {
    #[default]
    Hex,
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionRequest {
    pub chop: bool,
    pub compress: bool,
    pub order: Order,
    pub output: OutputShape,
    pub qty: usize,
}

impl Default for ExtractionRequest {
    fn default() -> Self {
        ExtractionRequest {
            chop: false,
            compress: false,
            order: Order::First,
            output: OutputShape::Hex,
            qty: 1,
        }
    }
}

impl ExtractionRequest {
    pub fn first(qty: usize) -> Self {
        ExtractionRequest { qty, ..Default::default() }
    }

    pub fn last(qty: usize) -> Self {
        ExtractionRequest { qty, order: Order::Last, ..Default::default() }
    }

    pub fn chop(mut self, chop: bool) -> Self {
        self.chop = chop;
        self
    }

    pub fn compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn output(mut self, output: OutputShape) -> Self {
        self.output = output;
        self
    }

    /// Byte range of the stream this request returns for a stream of `len` bytes.
    pub fn selected_range(&self, len: usize) -> Result<std::ops::Range<usize>> {
        if self.qty == 0 {
            return Err(FrameError::RangeError("qty must be at least 1".to_string()));
        }
        if self.qty > len {
            return Err(FrameError::RangeError(format!(
                "qty {} exceeds stream of {} bytes",
                self.qty, len
            )));
        }
        Ok(match (self.order, self.chop) {
            (Order::First, false) => 0..self.qty,
            (Order::First, true) => self.qty..len,
            (Order::Last, false) => len - self.qty..len,
            (Order::Last, true) => 0..len - self.qty,
        })
    }
}

/// Extracted bytes in the requested shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    Hex(String),
    Binary(Vec<u8>),
}

impl Extracted {
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            Extracted::Hex(s) => Some(s),
            Extracted::Binary(_) => None,
        }
    }

    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            Extracted::Binary(b) => Some(b),
            Extracted::Hex(_) => None,
        }
    }

    /// Raw bytes regardless of shape.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Extracted::Binary(b) => Ok(b),
            Extracted::Hex(s) => HexStream::parse(&s).map(|h| h.to_binary()),
        }
    }
}

/// Select bytes from `stream` according to `req`. The stream is not modified.
pub fn extract(stream: &HexStream, req: &ExtractionRequest) -> Result<Extracted> {
    let range = req.selected_range(stream.len())?;
    trace!(len = stream.len(), ?req, ?range, "extract");
    let selected = &stream.as_bytes()[range];
    Ok(match req.output {
        OutputShape::Hex => Extracted::Hex(join_tokens(selected, req.compress)),
        OutputShape::Binary => Extracted::Binary(selected.to_vec()),
    })
}

/// Parse `stream` as hex text and extract from it.
pub fn byte_rip(stream: &str, req: &ExtractionRequest) -> Result<Extracted> {
    extract(&HexStream::parse(stream)?, req)
}
