#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(image_type: u8, w: u16, h: u16, bits: u8, descriptor: u8) -> Vec<u8> {
    let mut out = vec![0u8, 0, image_type, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    out.extend_from_slice(&w.to_le_bytes());
    out.extend_from_slice(&h.to_le_bytes());
    out.push(bits);
    out.push(descriptor);
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Type 2, 2x2 BGR, top-down
    let mut rgb = header(2, 2, 2, 24, 0x20);
    rgb.extend_from_slice(&[0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255]);
    fs::write(format!("{dir}/rgb_2x2.tga"), rgb).unwrap();

    // Type 2, 1x1 BGRA, bottom-up, with ID block
    let mut rgba = header(2, 1, 1, 32, 0);
    rgba[0] = 4;
    rgba.extend_from_slice(b"seed");
    rgba.extend_from_slice(&[1, 2, 3, 4]);
    fs::write(format!("{dir}/rgba_1x1_id.tga"), rgba).unwrap();

    // Type 3, 3x1 grayscale
    let mut gray = header(3, 3, 1, 8, 0);
    gray.extend_from_slice(&[0, 128, 255]);
    fs::write(format!("{dir}/gray_3x1.tga"), gray).unwrap();

    // Type 1, 2x1 indices into a 2-entry 24-bit palette
    let mut mapped = header(1, 2, 1, 8, 0);
    mapped[1] = 1;
    mapped[5..7].copy_from_slice(&2u16.to_le_bytes());
    mapped[7] = 24;
    mapped.extend_from_slice(&[0, 0, 255, 255, 0, 0]);
    mapped.extend_from_slice(&[1, 0]);
    fs::write(format!("{dir}/mapped_2x1.tga"), mapped).unwrap();

    // Type 10, 4x2 run + raw packets
    let mut rle = header(10, 4, 2, 24, 0);
    rle.extend_from_slice(&[0x84, 9, 8, 7, 0x02, 1, 1, 1, 2, 2, 2, 3, 3, 3]);
    fs::write(format!("{dir}/rle_4x2.tga"), rle).unwrap();

    println!("Seeds written to {dir}");
}
