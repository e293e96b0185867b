#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Whole-buffer zero-copy decode — must never panic
    if let Ok(image) = zenxwd::decode(data) {
        let bounds = image.bounds();
        for y in 0..bounds.max_y.min(8) {
            for x in 0..bounds.max_x.min(8) {
                let _ = image.color_at(x, y);
            }
        }
        let _ = image.rows().count();
    }

    // Pixels-only path against a header parsed from the same bytes
    if let Some(block) = data.first_chunk::<{ zenxwd::HEADER_LEN }>() {
        let header = zenxwd::XwdHeader::parse(block);
        let _ = zenxwd::decode_pixels(&header, &data[zenxwd::HEADER_LEN..]);
    }
});
