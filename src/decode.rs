use alloc::vec::Vec;
use core::slice::ChunksExact;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::error::TgaError;
use crate::limits::Limits;
use crate::source::{ByteSource, SliceSource};

/// A fully decoded image: top-down rows of 8-bit RGBA, no row padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl DecodedImage {
    /// Package a finished RGBA buffer. `pixels` must hold `width * height * 4` bytes.
    pub(crate) fn assemble(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * 4 * height as usize);
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Bytes per row (always `width * 4`).
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// RGBA value at column `x` of row `y`, counted from the top.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let at = y as usize * self.stride() + x as usize * 4;
        let px = self.pixels.get(at..at + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> ChunksExact<'_, u8> {
        self.pixels.chunks_exact(self.stride())
    }

    /// Reinterpret pixel data as typed RGBA pixels.
    #[cfg(feature = "rgb")]
    pub fn as_rgba(&self) -> &[rgb::RGBA8] {
        self.pixels.as_pixels()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of RGBA pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGBA8> {
        imgref::ImgRef::new(self.as_rgba(), self.width as usize, self.height as usize)
    }
}

/// Something that turns a byte source into a [`DecodedImage`].
pub trait ImageDecoder {
    fn decode(&self, source: &mut dyn ByteSource) -> Result<DecodedImage, TgaError>;
}

/// Reusable TGA decoder configuration.
///
/// ```no_run
/// use zentga::{ImageDecoder, Limits, SliceSource, TgaDecoder};
///
/// let data: &[u8] = &[]; // your TGA bytes
/// let decoder = TgaDecoder::new().with_limits(Limits {
///     max_pixels: Some(16_000_000),
///     ..Default::default()
/// });
/// let image = decoder.decode(&mut SliceSource::new(data))?;
/// println!("{}x{}", image.width, image.height);
/// # Ok::<(), zentga::TgaError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct TgaDecoder {
    limits: Option<Limits>,
}

impl TgaDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn limits(&self) -> Option<&Limits> {
        self.limits.as_ref()
    }
}

impl ImageDecoder for TgaDecoder {
    fn decode(&self, source: &mut dyn ByteSource) -> Result<DecodedImage, TgaError> {
        crate::tga::decode(source, self.limits.as_ref())
    }
}

/// One-shot decode of an in-memory TGA file.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self) -> Result<DecodedImage, TgaError> {
        let mut source = SliceSource::new(self.data);
        crate::tga::decode(&mut source, self.limits)
    }
}
