#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    let seeds: &[(&str, &[u8])] = &[
        // One of each variant
        ("pbm_ascii_3x2.pbm", b"P1\n# comment\n3 2\n1 0 1\n0 1 0\n"),
        ("pgm_ascii_2x2.pgm", b"P2\n2 2\n15\n0 5\n10 15\n"),
        ("ppm_ascii_2x1.ppm", b"P3\n2 1\n255\n255 0 0 0 0 255\n"),
        ("pbm_binary_9x2.pbm", b"P4\n9 2\n\x81\x80\x7f\x00"),
        ("pgm_binary_3x2.pgm", b"P5\n3 2\n255\n\x00\x40\x80\xc0\xff\x64"),
        ("ppm_binary_2x2.ppm", b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80"),
        // Truncated/malformed seeds for edge coverage
        ("empty.bin", b""),
        ("just_p6.bin", b"P6"),
        ("p2_short.bin", b"P2\n2 2\n255\n1 2 3"),
        ("p3_over_max.bin", b"P3\n1 1\n9\n10 0 0\n"),
        ("p1_bad_row.bin", b"P1\n2 1\n1 0 1\n"),
        ("p5_huge.bin", b"P5\n4294967295 4294967295\n255\n"),
        ("p5_glued_comment.bin", b"P5\n1 1\n255#note\n\x07"),
        ("p2_vertical_tab.bin", b"P2\n2 1\n255\n1\x0b2\n"),
    ];
    for (name, data) in seeds {
        fs::write(format!("{dir}/{name}"), data).unwrap();
    }

    println!("Generated seed corpus in {dir}/");
}
