//! Run-length encoded true-color pixel data (image type 10).
//!
//! Each packet starts with a control byte. Below 0x80 it is a raw packet of
//! `control + 1` literal pixels; from 0x80 up it is a run of `control - 127`
//! copies of one pixel. Packets ignore row boundaries.

use super::decode::{RowOrder, bgr_to_rgba};
use crate::error::TgaError;
use crate::source::ByteSource;

const RUN_FLAG: u8 = 0x80;

/// Column/row position of the next pixel to write, in stored order.
struct Cursor<'o> {
    order: &'o RowOrder,
    x: usize,
    y: usize,
}

impl Cursor<'_> {
    fn done(&self) -> bool {
        self.y >= self.order.height()
    }

    fn put(&mut self, out: &mut [u8], rgba: [u8; 4]) {
        let at = self.order.row_start(self.y) + self.x * 4;
        out[at..at + 4].copy_from_slice(&rgba);
        self.x += 1;
        if self.x == self.order.width() {
            self.x = 0;
            self.y += 1;
        }
    }
}

/// Expand an RLE packet stream until `order.height()` full rows are written.
///
/// Bytes after the last pixel are left in the source. A packet that runs
/// past the last pixel is clipped; literal pixels past the end are not read.
pub(crate) fn decode_rle_rgb(
    source: &mut dyn ByteSource,
    bpp: usize,
    order: &RowOrder,
    out: &mut [u8],
) -> Result<(), TgaError> {
    let mut cursor = Cursor { order, x: 0, y: 0 };
    let mut px = [0u8; 4];
    let mut packets = 0usize;

    while !cursor.done() {
        let control = source.read_u8()?;
        packets += 1;

        if control < RUN_FLAG {
            for _ in 0..=control {
                if cursor.done() {
                    break;
                }
                source.read_exact(&mut px[..bpp])?;
                cursor.put(out, bgr_to_rgba(&px[..bpp]));
            }
        } else {
            source.read_exact(&mut px[..bpp])?;
            let rgba = bgr_to_rgba(&px[..bpp]);
            for _ in 0..control - (RUN_FLAG - 1) {
                if cursor.done() {
                    break;
                }
                cursor.put(out, rgba);
            }
        }
    }

    log::trace!("rle: {packets} packets for {}x{}", order.width(), order.height());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SliceSource;
    use alloc::vec;
    use alloc::vec::Vec;

    fn run(data: &[u8], width: usize, height: usize, bpp: usize) -> Result<(Vec<u8>, usize), TgaError> {
        let order = RowOrder::new(width, height, true);
        let mut out = vec![0u8; width * height * 4];
        let mut src = SliceSource::new(data);
        decode_rle_rgb(&mut src, bpp, &order, &mut out)?;
        Ok((out, src.position()))
    }

    #[test]
    fn raw_packet_127_emits_128_pixels() {
        let mut data = vec![127u8];
        for i in 0..128u8 {
            data.extend_from_slice(&[i, i, i]);
        }
        let (out, used) = run(&data, 128, 1, 3).unwrap();
        assert_eq!(used, data.len());
        assert_eq!(&out[127 * 4..], &[127, 127, 127, 255]);
    }

    #[test]
    fn run_packet_128_emits_one_pixel() {
        let data = [128u8, 1, 2, 3, 128, 4, 5, 6];
        let (out, used) = run(&data, 2, 1, 3).unwrap();
        assert_eq!(used, 8);
        assert_eq!(out, [3, 2, 1, 255, 6, 5, 4, 255]);
    }

    #[test]
    fn run_packet_255_emits_128_pixels() {
        let data = [255u8, 9, 8, 7];
        let (out, used) = run(&data, 16, 8, 3).unwrap();
        assert_eq!(used, 4);
        assert!(out.chunks_exact(4).all(|p| p == [7, 8, 9, 255]));
    }

    #[test]
    fn packets_span_row_boundaries() {
        // 3-pixel run then 1 raw pixel over a 2x2 image
        let data = [0x82, 0, 0, 10, 0x00, 0, 0, 20];
        let (out, _) = run(&data, 2, 2, 3).unwrap();
        assert_eq!(
            out,
            [10, 0, 0, 255, 10, 0, 0, 255, 10, 0, 0, 255, 20, 0, 0, 255]
        );
    }

    #[test]
    fn overlong_packets_are_clipped() {
        // Raw packet of 4 pixels over a 1x2 image, followed by a stray byte.
        let data = [0x03, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 0xEE];
        let (out, used) = run(&data, 1, 2, 3).unwrap();
        assert_eq!(used, 7);
        assert_eq!(out, [1, 1, 1, 255, 2, 2, 2, 255]);

        let data = [0xFF, 5, 6, 7, 0xEE];
        let (_, used) = run(&data, 1, 2, 3).unwrap();
        assert_eq!(used, 4);
    }

    #[test]
    fn four_byte_pixels_keep_alpha() {
        let data = [0x81, 1, 2, 3, 4];
        let (out, _) = run(&data, 2, 1, 4).unwrap();
        assert_eq!(out, [3, 2, 1, 4, 3, 2, 1, 4]);
    }

    #[test]
    fn exhausted_stream_is_truncated() {
        assert!(matches!(run(&[0x85, 1, 2, 3], 4, 4, 3), Err(TgaError::TruncatedInput)));
        assert!(matches!(run(&[0x01, 1, 2, 3], 2, 1, 3), Err(TgaError::TruncatedInput)));
        assert!(matches!(run(&[0x81, 1], 2, 1, 3), Err(TgaError::TruncatedInput)));
    }
}
