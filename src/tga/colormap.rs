//! Palette table for color-mapped images.

use alloc::vec;
use alloc::vec::Vec;

use super::header::{Header, ImageType};
use crate::error::TgaError;
use crate::source::ByteSource;

/// Expanded palette, one RGBA entry per declared color-map entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorMap {
    entries: Vec<[u8; 4]>,
}

impl ColorMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[[u8; 4]] {
        &self.entries
    }

    /// RGBA color for a palette index.
    ///
    /// The header's color-map origin is not applied; index 0 is the first
    /// stored entry.
    pub fn get(&self, index: u8) -> Result<[u8; 4], TgaError> {
        self.entries
            .get(usize::from(index))
            .copied()
            .ok_or(TgaError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }
}

/// Read the palette that follows the identification block.
///
/// Only called when the header declares a positive entry count. The raw
/// table is consumed before anything else is checked so a failure always
/// leaves the source at a well-defined point.
pub fn read_color_map(source: &mut dyn ByteSource, header: &Header) -> Result<ColorMap, TgaError> {
    let count = usize::try_from(header.colormap_entries).unwrap_or(0);
    let stride = header.bytes_per_colormap_entry();
    let mut raw = vec![0u8; count * stride];
    source.read_exact(&mut raw)?;

    if header.image_type() != ImageType::UncompressedColorMap {
        return Err(TgaError::NotImplemented(alloc::format!(
            "color map present on image type {}",
            header.image_type_code
        )));
    }
    if stride != 3 && stride != 4 {
        return Err(TgaError::NotImplemented(alloc::format!(
            "{}-bit color map entries",
            header.colormap_entry_size
        )));
    }
    if header.colormap_origin != 0 {
        log::warn!(
            "ignoring color map origin {}, indexing from the first stored entry",
            header.colormap_origin
        );
    }

    let entries = raw
        .chunks_exact(stride)
        .map(|bgr| [bgr[2], bgr[1], bgr[0], 0xFF])
        .collect();
    log::debug!("read {count} color map entries of {stride} bytes");
    Ok(ColorMap { entries })
}
