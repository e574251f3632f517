#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the bytes say
    let slice = zentga::decode_tga(data);
    let _ = zentga::ImageInfo::from_bytes(data);

    // Reader and slice sources must agree
    let reader = zentga::decode_tga_reader(data);
    match (slice, reader) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a, b);
            assert_eq!(a.pixels().len(), a.stride() * a.height as usize);
        }
        (Err(_), Err(_)) => {}
        (a, b) => panic!("slice and reader disagree: {a:?} vs {b:?}"),
    }
});
