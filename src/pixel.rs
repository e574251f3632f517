/// Layout of the encoded pixel data inside a TGA file.
///
/// Decoded output is always 8-bit RGBA; this describes what the file stores.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// Single channel, 8-bit luminance.
    Gray8,
    /// Single byte palette index.
    Indexed8,
    /// 3 channels, 8-bit B,G,R.
    Bgr8,
    /// 4 channels, 8-bit B,G,R,A.
    Bgra8,
    /// A depth the decoder does not convert (bits per pixel as declared).
    Other(u8),
}

impl PixelLayout {
    /// Bytes one encoded pixel occupies, following the 15-bit rule.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Gray8 | Self::Indexed8 => 1,
            Self::Bgr8 => 3,
            Self::Bgra8 => 4,
            Self::Other(bits) => bytes_per_unit(*bits),
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        match self {
            Self::Gray8 | Self::Indexed8 => 1,
            Self::Bgr8 => 3,
            Self::Bgra8 => 4,
            Self::Other(_) => 0,
        }
    }
}

/// Storage size in bytes of a TGA pixel or palette entry of `bits` bits.
///
/// 15-bit values are stored in 16 bits.
pub(crate) fn bytes_per_unit(bits: u8) -> usize {
    let bits = if bits == 15 { 16 } else { usize::from(bits) };
    bits / 8
}
