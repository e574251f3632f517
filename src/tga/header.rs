//! The fixed 18-byte TGA header and the identification block behind it.

use crate::error::TgaError;
use crate::pixel::{PixelLayout, bytes_per_unit};
use crate::source::ByteSource;

/// Size of the packed on-disk header.
pub const HEADER_LEN: usize = 18;

/// Descriptor bit set when rows are stored top-to-bottom.
const DESCRIPTOR_TOP_DOWN: u8 = 0x20;

/// Pixel encoding variant named by the header's image type code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageType {
    NoImage,
    UncompressedColorMap,
    UncompressedRgb,
    UncompressedBw,
    RleColorMap,
    RleRgb,
    CompressedBw,
    CompressedColorMap,
    CompressedColorMap2,
    /// A code outside the format's defined set.
    Unknown(u8),
}

impl ImageType {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::NoImage,
            1 => Self::UncompressedColorMap,
            2 => Self::UncompressedRgb,
            3 => Self::UncompressedBw,
            9 => Self::RleColorMap,
            10 => Self::RleRgb,
            11 => Self::CompressedBw,
            32 => Self::CompressedColorMap,
            33 => Self::CompressedColorMap2,
            other => Self::Unknown(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::NoImage => 0,
            Self::UncompressedColorMap => 1,
            Self::UncompressedRgb => 2,
            Self::UncompressedBw => 3,
            Self::RleColorMap => 9,
            Self::RleRgb => 10,
            Self::CompressedBw => 11,
            Self::CompressedColorMap => 32,
            Self::CompressedColorMap2 => 33,
            Self::Unknown(code) => code,
        }
    }

    /// Whether this decoder has a pixel path for the type at all.
    pub fn is_decodable(self) -> bool {
        matches!(
            self,
            Self::UncompressedColorMap | Self::UncompressedRgb | Self::UncompressedBw | Self::RleRgb
        )
    }
}

/// Parsed TGA header. Multi-byte fields are little-endian on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub id_length: u8,
    pub colormap_type: u8,
    pub image_type_code: u8,
    /// Index of the first palette entry. Read but never applied.
    pub colormap_origin: i16,
    pub colormap_entries: i16,
    pub colormap_entry_size: u8,
    pub lower_left_x: i16,
    pub lower_left_y: i16,
    pub width: i16,
    pub height: i16,
    pub pixel_size: u8,
    pub descriptor: u8,
}

impl Header {
    /// Parse the packed header layout. No semantic validation.
    pub fn parse(raw: &[u8; HEADER_LEN]) -> Self {
        let le = |at: usize| i16::from_le_bytes([raw[at], raw[at + 1]]);
        Self {
            id_length: raw[0],
            colormap_type: raw[1],
            image_type_code: raw[2],
            colormap_origin: le(3),
            colormap_entries: le(5),
            colormap_entry_size: raw[7],
            lower_left_x: le(8),
            lower_left_y: le(10),
            width: le(12),
            height: le(14),
            pixel_size: raw[16],
            descriptor: raw[17],
        }
    }

    pub fn image_type(&self) -> ImageType {
        ImageType::from_code(self.image_type_code)
    }

    /// Rows are stored first-row-first (descriptor bit 5).
    pub fn top_down(&self) -> bool {
        self.descriptor & DESCRIPTOR_TOP_DOWN != 0
    }

    pub fn bytes_per_pixel(&self) -> usize {
        bytes_per_unit(self.pixel_size)
    }

    pub fn bytes_per_colormap_entry(&self) -> usize {
        bytes_per_unit(self.colormap_entry_size)
    }

    /// Width and height, both required to be positive.
    pub fn dimensions(&self) -> Result<(u32, u32), TgaError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(TgaError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok((self.width as u32, self.height as u32))
    }

    /// How the encoded pixel bytes are laid out.
    pub fn native_layout(&self) -> PixelLayout {
        match (self.image_type(), self.bytes_per_pixel()) {
            (ImageType::UncompressedBw, 1) => PixelLayout::Gray8,
            (ImageType::UncompressedColorMap, 1) => PixelLayout::Indexed8,
            (ImageType::UncompressedRgb | ImageType::RleRgb, 3) => PixelLayout::Bgr8,
            (ImageType::UncompressedRgb | ImageType::RleRgb, 4) => PixelLayout::Bgra8,
            _ => PixelLayout::Other(self.pixel_size),
        }
    }
}

/// Read exactly [`HEADER_LEN`] bytes and parse them.
pub fn read_header(source: &mut dyn ByteSource) -> Result<Header, TgaError> {
    let mut raw = [0u8; HEADER_LEN];
    source.read_exact(&mut raw)?;
    Ok(Header::parse(&raw))
}

/// Consume and discard the identification block that follows the header.
pub fn skip_identification(source: &mut dyn ByteSource, header: &Header) -> Result<(), TgaError> {
    // id_length is a u8, so the block always fits.
    let mut field = [0u8; u8::MAX as usize];
    source.read_exact(&mut field[..usize::from(header.id_length)])
}
