//! Pixel pass: expands encoded TGA pixel data into a top-down RGBA8 buffer.
//!
//! Rows are written straight to their final position, so bottom-up files
//! need no second flipping pass.

use alloc::vec;
use alloc::vec::Vec;

use super::colormap::ColorMap;
use super::header::{Header, ImageType};
use super::rle::decode_rle_rgb;
use crate::error::TgaError;
use crate::limits::Limits;
use crate::source::ByteSource;

/// Maps the n-th stored row to its row in the top-down output.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RowOrder {
    width: usize,
    height: usize,
    top_down: bool,
}

impl RowOrder {
    pub(crate) fn new(width: usize, height: usize, top_down: bool) -> Self {
        Self {
            width,
            height,
            top_down,
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    /// Output stride in bytes.
    pub(crate) fn stride(&self) -> usize {
        self.width * 4
    }

    /// Byte offset in the output of the stored row `stored`.
    pub(crate) fn row_start(&self, stored: usize) -> usize {
        let dest = if self.top_down {
            stored
        } else {
            self.height - 1 - stored
        };
        dest * self.stride()
    }
}

/// Convert a stored B,G,R[,A] pixel to RGBA. Three-byte pixels are opaque.
#[inline]
pub(crate) fn bgr_to_rgba(px: &[u8]) -> [u8; 4] {
    let alpha = if px.len() == 4 { px[3] } else { 0xFF };
    [px[2], px[1], px[0], alpha]
}

/// Uncompressed encodings, each one stored row at a time.
#[derive(Clone, Copy)]
enum RawKind<'p> {
    TrueColor,
    Gray,
    Indexed(&'p ColorMap),
}

enum PixelPath<'p> {
    Raw(RawKind<'p>),
    Rle,
}

/// Decode the pixel data that follows the header, ID block, and palette.
///
/// Every type, depth, and dimension check runs before the output buffer
/// is allocated.
pub fn decode_pixels(
    source: &mut dyn ByteSource,
    header: &Header,
    color_map: Option<&ColorMap>,
    limits: Option<&Limits>,
) -> Result<Vec<u8>, TgaError> {
    let (width, height) = header.dimensions()?;
    let bpp = header.bytes_per_pixel();
    let empty = ColorMap::default();

    let path = match header.image_type() {
        ImageType::UncompressedRgb if bpp == 3 || bpp == 4 => PixelPath::Raw(RawKind::TrueColor),
        ImageType::RleRgb if bpp == 3 || bpp == 4 => PixelPath::Rle,
        ImageType::UncompressedBw if bpp == 1 => PixelPath::Raw(RawKind::Gray),
        ImageType::UncompressedColorMap if bpp == 1 => {
            PixelPath::Raw(RawKind::Indexed(color_map.unwrap_or(&empty)))
        }
        ImageType::UncompressedRgb
        | ImageType::RleRgb
        | ImageType::UncompressedBw
        | ImageType::UncompressedColorMap => {
            return Err(TgaError::NotImplemented(alloc::format!(
                "{}-bit pixels for image type {}",
                header.pixel_size,
                header.image_type_code
            )));
        }
        _ => {
            return Err(TgaError::NotImplemented(alloc::format!(
                "image type {}",
                header.image_type_code
            )));
        }
    };

    if let Some(limits) = limits {
        limits.check(width, height)?;
    }
    let out_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|px| px.checked_mul(4))
        .ok_or(TgaError::DimensionsTooLarge { width, height })?;

    let order = RowOrder::new(width as usize, height as usize, header.top_down());
    let mut out = vec![0u8; out_len];

    match path {
        PixelPath::Rle => decode_rle_rgb(source, bpp, &order, &mut out)?,
        PixelPath::Raw(kind) => decode_raw(source, kind, bpp, &order, &mut out)?,
    }
    Ok(out)
}

fn decode_raw(
    source: &mut dyn ByteSource,
    kind: RawKind<'_>,
    bpp: usize,
    order: &RowOrder,
    out: &mut [u8],
) -> Result<(), TgaError> {
    let mut line = vec![0u8; order.width() * bpp];
    let stride = order.stride();

    for stored in 0..order.height() {
        source.read_exact(&mut line)?;
        let start = order.row_start(stored);
        let dst = &mut out[start..start + stride];

        match kind {
            RawKind::TrueColor => {
                for (px, rgba) in line.chunks_exact(bpp).zip(dst.chunks_exact_mut(4)) {
                    rgba.copy_from_slice(&bgr_to_rgba(px));
                }
            }
            RawKind::Gray => {
                for (&v, rgba) in line.iter().zip(dst.chunks_exact_mut(4)) {
                    rgba.copy_from_slice(&[v, v, v, 0xFF]);
                }
            }
            RawKind::Indexed(palette) => {
                for (&index, rgba) in line.iter().zip(dst.chunks_exact_mut(4)) {
                    rgba.copy_from_slice(&palette.get(index)?);
                }
            }
        }
    }
    Ok(())
}
