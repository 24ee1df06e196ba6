#![no_main]
use libfuzzer_sys::fuzz_target;
use pnmraster::{DecodeRequest, Limits};

fuzz_target!(|data: &[u8]| {
    // Auto-detect decode must never panic
    let _ = pnmraster::decode(data);

    // Typed decoders must never panic either
    let limits = Limits {
        max_pixels: Some(1 << 24),
        ..Default::default()
    };
    let request = DecodeRequest::new(data).with_limits(&limits);
    let _ = request.decode_bitmap();
    let _ = request.decode_graymap();
    let _ = request.decode_pixmap();
});
