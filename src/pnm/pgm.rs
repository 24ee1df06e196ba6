//! PGM: grayscale images, P2 (decimal tokens) and P5 (one byte per sample).

use alloc::vec::Vec;

use super::sealed::Codec;
use super::{ascii_tokens, eof_at, parse_sample, push_decimal};
use crate::error::NetpbmError;
use crate::image::Graymap;
use crate::pixel::Encoding;

/// Decode a P2 or P5 image.
pub fn decode(data: &[u8]) -> Result<Graymap, NetpbmError> {
    super::decode_as(data, None, "P2 or P5")
}

/// Encode as P2, regardless of the image's own encoding.
pub fn encode_ascii(image: &Graymap) -> Vec<u8> {
    super::encode(image, Encoding::Ascii)
}

/// Encode as P5, regardless of the image's own encoding.
pub fn encode_binary(image: &Graymap) -> Vec<u8> {
    super::encode(image, Encoding::Binary)
}

impl Codec for u8 {
    fn decode_ascii(
        payload: &[u8],
        width: usize,
        height: usize,
        max: u8,
    ) -> Result<Vec<u8>, NetpbmError> {
        let count = width * height;
        let mut out = Vec::with_capacity(count.min(payload.len()));
        let mut tokens = ascii_tokens(payload);

        for i in 0..count {
            let (row, col) = (i / width, i % width);
            let token = tokens.next().ok_or(NetpbmError::UnexpectedEof { row, col })?;
            out.push(parse_sample(token, max, row, col)?);
        }
        Ok(out)
    }

    fn decode_binary(
        payload: &[u8],
        width: usize,
        height: usize,
        max: u8,
    ) -> Result<Vec<u8>, NetpbmError> {
        let count = width * height;
        let samples = payload.get(..count).ok_or_else(|| eof_at(payload.len(), 1, width))?;

        if let Some(i) = samples.iter().position(|&s| s > max) {
            return Err(NetpbmError::SampleOutOfRange {
                value: u32::from(samples[i]),
                max,
                row: i / width,
                col: i % width,
            });
        }
        Ok(samples.to_vec())
    }

    fn encode_ascii(samples: &[u8], width: usize, out: &mut Vec<u8>) {
        for row in samples.chunks_exact(width) {
            for (x, &value) in row.iter().enumerate() {
                if x > 0 {
                    out.push(b' ');
                }
                push_decimal(out, value);
            }
            out.push(b'\n');
        }
    }

    fn encode_binary(samples: &[u8], _width: usize, out: &mut Vec<u8>) {
        out.extend_from_slice(samples);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::pixel::Variant;

    #[test]
    fn minimal_image() {
        let mut image = decode(b"P2\n1 1\n255\n128\n").unwrap();
        assert_eq!(image.samples(), [128]);
        image.invert();
        assert_eq!(image.samples(), [127]);
    }

    #[test]
    fn tokens_may_span_lines_freely() {
        let image = decode(b"P2 3 2 9\n1\n2 3 4\n\n 5 6").unwrap();
        assert_eq!(image.max_value(), 9);
        assert_eq!(image.samples(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn comment_glued_to_max_value_is_not_payload() {
        let image = decode(b"P5\n1 1\n255#note\n\x07").unwrap();
        assert_eq!(image.samples(), [7]);
        let image = decode(b"P2\n1 1\n255#c\n7\n").unwrap();
        assert_eq!(image.samples(), [7]);
    }

    #[test]
    fn vertical_tab_separates_samples() {
        let image = decode(b"P2\n2 1\n255\n1\x0b2\n").unwrap();
        assert_eq!(image.samples(), [1, 2]);
    }

    #[test]
    fn boundary_value_is_accepted() {
        let image = decode(b"P2\n2 1\n15\n15 0\n").unwrap();
        assert_eq!(image.samples(), [15, 0]);
        let image = decode(b"P5\n2 1\n15\n\x0f\x00").unwrap();
        assert_eq!(image.samples(), [15, 0]);
    }

    #[test]
    fn ascii_out_of_range() {
        match decode(b"P2\n2 2\n15\n0 1\n16 2\n").unwrap_err() {
            NetpbmError::SampleOutOfRange {
                value,
                max,
                row,
                col,
            } => assert_eq!((value, max, row, col), (16, 15, 1, 0)),
            other => panic!("expected SampleOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn binary_out_of_range() {
        match decode(b"P5\n2 2\n100\n\x00\x01\x02\x65").unwrap_err() {
            NetpbmError::SampleOutOfRange { value, row, col, .. } => {
                assert_eq!((value, row, col), (101, 1, 1))
            }
            other => panic!("expected SampleOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_is_malformed() {
        let err = decode(b"P2\n2 1\n255\n12 ab\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedPixelData);
    }

    #[test]
    fn truncated_payloads() {
        match decode(b"P2\n2 2\n255\n1 2 3").unwrap_err() {
            NetpbmError::UnexpectedEof { row, col } => assert_eq!((row, col), (1, 1)),
            other => panic!("expected UnexpectedEof, got {other:?}"),
        }
        match decode(b"P5\n2 2\n255\n\x01").unwrap_err() {
            NetpbmError::UnexpectedEof { row, col } => assert_eq!((row, col), (0, 1)),
            other => panic!("expected UnexpectedEof, got {other:?}"),
        }
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let image = decode(b"P5\n1 1\n255\n\x07\x08\x09").unwrap();
        assert_eq!(image.samples(), [7]);
    }

    #[test]
    fn encode_layout() {
        let image = decode(b"P5\n3 2\n200\n\x00\x64\xc8\x0a\x14\x1e").unwrap();
        assert_eq!(image.variant(), Variant::PgmBinary);
        assert_eq!(encode_ascii(&image), b"P2\n3 2\n200\n0 100 200\n10 20 30\n");
        assert_eq!(
            encode_binary(&image),
            b"P5\n3 2\n200\n\x00\x64\xc8\x0a\x14\x1e"
        );
    }
}
