//! # zentga
//!
//! Truevision TGA (Targa) image decoder.
//!
//! Every supported file decodes to a flat, top-down buffer of 8-bit RGBA
//! with a stride of `width * 4`, whatever order the file stores its rows in.
//!
//! ## Supported Formats
//!
//! - **Type 1**: uncompressed color-mapped, 8-bit indices into a 24/32-bit palette
//! - **Type 2**: uncompressed true-color, 24-bit BGR and 32-bit BGRA
//! - **Type 3**: uncompressed grayscale, 8-bit
//! - **Type 10**: run-length encoded true-color, 24-bit and 32-bit
//!
//! Other type codes (0, 9, 11, 32, 33, and anything unassigned) and other bit
//! depths fail with [`TgaError::NotImplemented`].
//!
//! ## Non-Goals
//!
//! - Encoding
//! - RLE color-mapped, RLE grayscale, Huffman/delta compressed variants
//! - Color management
//! - Streaming or partial decode
//!
//! ## Usage
//!
//! ```no_run
//! use zentga::{DecodeRequest, ImageInfo, Limits};
//!
//! let data: &[u8] = &[]; // your TGA bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.image_type);
//!
//! let limits = Limits { max_pixels: Some(1 << 24), ..Default::default() };
//! let image = DecodeRequest::new(data).with_limits(&limits).decode()?;
//! assert_eq!(image.pixels().len(), image.stride() * image.height as usize);
//! # Ok::<(), zentga::TgaError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod error;
mod info;
mod limits;
mod pixel;
mod source;
pub mod tga;

// Re-exports
pub use decode::{DecodeRequest, DecodedImage, ImageDecoder, TgaDecoder};
pub use error::TgaError;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::PixelLayout;
#[cfg(feature = "std")]
pub use source::ReadSource;
pub use source::{ByteSource, SliceSource};
pub use tga::ImageType;

/// Decode an in-memory TGA file.
pub fn decode_tga(data: &[u8]) -> Result<DecodedImage, TgaError> {
    DecodeRequest::new(data).decode()
}

/// Decode a TGA file from any reader. The reader is consumed front to back
/// and never seeked.
#[cfg(feature = "std")]
pub fn decode_tga_reader<R: std::io::Read>(reader: R) -> Result<DecodedImage, TgaError> {
    TgaDecoder::new().decode(&mut ReadSource::new(reader))
}
