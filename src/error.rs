//! Error type shared by every frame helper.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// Non-hex characters, odd digit counts, or otherwise unusable hex text.
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    /// Window or byte range outside the available bytes.
    #[error("Range: {0}")]
    RangeError(String),
    /// Value recognized as none of the supported endian-swap shapes.
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),
}

pub type Result<T> = std::result::Result<T, FrameError>;
