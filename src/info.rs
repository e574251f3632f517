use crate::error::TgaError;
use crate::pixel::PixelLayout;
use crate::source::SliceSource;
use crate::tga::{ImageType, read_header};

/// Header-only summary of a TGA file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub image_type: ImageType,
    pub native_layout: PixelLayout,
    /// Rows are stored first-row-first.
    pub top_down: bool,
    /// Declared number of palette entries (0 if none).
    pub colormap_entries: u16,
}

impl ImageInfo {
    /// Probe the 18-byte header without touching pixel data.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TgaError> {
        let header = read_header(&mut SliceSource::new(data))?;
        let (width, height) = header.dimensions()?;
        Ok(Self {
            width,
            height,
            image_type: header.image_type(),
            native_layout: header.native_layout(),
            top_down: header.top_down(),
            colormap_entries: u16::try_from(header.colormap_entries).unwrap_or(0),
        })
    }

    /// Whether the type and depth combination has a decode path.
    ///
    /// Palette entry sizes are not checked here, and a truncated file still
    /// fails to decode.
    pub fn is_supported(&self) -> bool {
        let palette_ok =
            self.colormap_entries == 0 || self.image_type == ImageType::UncompressedColorMap;
        self.image_type.is_decodable()
            && palette_ok
            && !matches!(self.native_layout, PixelLayout::Other(_))
    }
}
