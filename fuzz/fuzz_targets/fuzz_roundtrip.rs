#![no_main]
use libfuzzer_sys::fuzz_target;
use pnmraster::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding in either encoding must decode to the same samples
    let Ok(decoded) = decode(data) else {
        return;
    };

    for encoding in [Encoding::Ascii, Encoding::Binary] {
        let mut expected = decoded.clone();
        expected.set_encoding(encoding);
        let Ok(again) = decode(&expected.encode()) else {
            panic!("re-encoded {} failed to decode", expected.variant());
        };
        assert_eq!(again, expected, "roundtrip mismatch");
    }

    // Transforms keep every sample within the max value, so the result must encode and decode
    let mut transformed = decoded;
    transformed.invert();
    transformed.rotate_90_clockwise();
    transformed.flip_vertical();
    assert!(decode(&transformed.encode()).is_ok());
});
