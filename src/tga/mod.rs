//! Truevision TGA (Targa) decoder stages.
//!
//! Header, identification block, optional palette, then pixel data, read
//! strictly in that order from a forward-only source. Use
//! [`crate::DecodeRequest`] or [`crate::TgaDecoder`] to run them all; the
//! stages are public for callers that want the header or palette on its own.

mod colormap;
mod decode;
mod header;
mod rle;

pub use colormap::{ColorMap, read_color_map};
pub use decode::decode_pixels;
pub use header::{HEADER_LEN, Header, ImageType, read_header, skip_identification};

use crate::decode::DecodedImage;
use crate::error::TgaError;
use crate::limits::Limits;
use crate::source::ByteSource;

/// Run the whole pipeline over one source.
pub(crate) fn decode(
    source: &mut dyn ByteSource,
    limits: Option<&Limits>,
) -> Result<DecodedImage, TgaError> {
    let header = read_header(source)?;
    log::debug!(
        "tga header: type {} {}x{} {}bpp {}, {} palette entries",
        header.image_type_code,
        header.width,
        header.height,
        header.pixel_size,
        if header.top_down() { "top-down" } else { "bottom-up" },
        header.colormap_entries
    );
    skip_identification(source, &header)?;

    let color_map = if header.colormap_entries > 0 {
        Some(read_color_map(source, &header)?)
    } else {
        None
    };

    let pixels = decode_pixels(source, &header, color_map.as_ref(), limits)?;
    let (width, height) = header.dimensions()?;
    log::debug!("decoded {width}x{height} tga into {} bytes", pixels.len());
    Ok(DecodedImage::assemble(width, height, pixels))
}
