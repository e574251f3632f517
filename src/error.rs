use alloc::string::String;

/// Errors from TGA decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TgaError {
    #[error("unexpected end of input")]
    TruncatedInput,

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i16, height: i16 },

    #[error("not implemented: {0}")]
    NotImplemented(String),

    #[error("palette index {index} out of range (palette has {len} entries)")]
    IndexOutOfRange { index: u8, len: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[cfg(feature = "std")]
    #[error("read failed: {0}")]
    Io(std::io::Error),
}

#[cfg(feature = "std")]
impl From<std::io::Error> for TgaError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            TgaError::TruncatedInput
        } else {
            TgaError::Io(e)
        }
    }
}
