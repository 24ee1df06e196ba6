//! PBM: bi-level images, P1 (ASCII) and P4 (packed bits).
//!
//! P1 rows are read one line at a time: every non-blank line holds exactly
//! `width` tokens, each `0` or `1`. P4 rows are `ceil(width / 8)` bytes,
//! MSB first.

use alloc::format;
use alloc::vec::Vec;

use super::bits::{pack_row, row_bytes, unpack_row};
use super::header::{is_pnm_space, lossy};
use super::sealed::Codec;
use crate::error::NetpbmError;
use crate::image::Bitmap;
use crate::pixel::Encoding;

/// Decode a P1 or P4 image.
pub fn decode(data: &[u8]) -> Result<Bitmap, NetpbmError> {
    super::decode_as(data, None, "P1 or P4")
}

/// Encode as P1, regardless of the image's own encoding.
pub fn encode_ascii(image: &Bitmap) -> Vec<u8> {
    super::encode(image, Encoding::Ascii)
}

/// Encode as P4, regardless of the image's own encoding.
pub fn encode_binary(image: &Bitmap) -> Vec<u8> {
    super::encode(image, Encoding::Binary)
}

impl Codec for bool {
    fn decode_ascii(
        payload: &[u8],
        width: usize,
        height: usize,
        _max: u8,
    ) -> Result<Vec<bool>, NetpbmError> {
        let mut out = Vec::with_capacity((width * height).min(payload.len()));
        let mut lines = payload
            .split(|&b| b == b'\n')
            .filter(|line| !line.iter().all(is_pnm_space));

        for row in 0..height {
            let line = lines
                .next()
                .ok_or(NetpbmError::UnexpectedEof { row, col: 0 })?;

            let mut col = 0;
            for token in line
                .split(is_pnm_space)
                .filter(|token| !token.is_empty())
            {
                if col == width {
                    return Err(NetpbmError::MalformedPixelData {
                        row,
                        col,
                        detail: format!("row has more than {width} samples"),
                    });
                }
                let bit = match token {
                    b"0" => false,
                    b"1" => true,
                    _ => {
                        return Err(NetpbmError::MalformedPixelData {
                            row,
                            col,
                            detail: format!("expected 0 or 1, found {:?}", lossy(token)),
                        });
                    }
                };
                out.push(bit);
                col += 1;
            }
            if col < width {
                return Err(NetpbmError::MalformedPixelData {
                    row,
                    col,
                    detail: format!("row has {col} samples, expected {width}"),
                });
            }
        }
        Ok(out)
    }

    fn decode_binary(
        payload: &[u8],
        width: usize,
        height: usize,
        _max: u8,
    ) -> Result<Vec<bool>, NetpbmError> {
        let stride = row_bytes(width);
        let needed = stride.saturating_mul(height);
        if payload.len() < needed {
            let row = payload.len() / stride;
            let col = ((payload.len() % stride) * 8).min(width);
            return Err(NetpbmError::UnexpectedEof { row, col });
        }

        let mut out = Vec::with_capacity(width * height);
        for packed in payload[..needed].chunks_exact(stride) {
            unpack_row(packed, width, &mut out);
        }
        Ok(out)
    }

    fn encode_ascii(samples: &[bool], width: usize, out: &mut Vec<u8>) {
        for row in samples.chunks_exact(width) {
            for (x, &bit) in row.iter().enumerate() {
                if x > 0 {
                    out.push(b' ');
                }
                out.push(if bit { b'1' } else { b'0' });
            }
            out.push(b'\n');
        }
    }

    fn encode_binary(samples: &[bool], width: usize, out: &mut Vec<u8>) {
        for row in samples.chunks_exact(width) {
            pack_row(row, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::pixel::Variant;

    fn rows(image: &Bitmap) -> Vec<Vec<bool>> {
        image.rows().map(<[bool]>::to_vec).collect()
    }

    #[test]
    fn decodes_ascii() {
        let image = decode(b"P1\n# comment\n3 2\n1 0 1\n0 1 0\n").unwrap();
        assert_eq!(image.variant(), Variant::PbmAscii);
        assert_eq!(image.size(), (3, 2));
        assert_eq!(rows(&image), [[true, false, true], [false, true, false]]);
    }

    #[test]
    fn ascii_tolerates_blank_lines_and_crlf() {
        let image = decode(b"P1\r\n2 2\r\n\r\n1 1\r\n\r\n0   0\r\n").unwrap();
        assert_eq!(rows(&image), [[true, true], [false, false]]);
    }

    #[test]
    fn vertical_tab_separates_samples() {
        let image = decode(b"P1\n2 2\n1\x0b0\n\x0b\n0 1\n").unwrap();
        assert_eq!(rows(&image), [[true, false], [false, true]]);
    }

    #[test]
    fn comment_glued_to_height_is_not_payload() {
        let image = decode(b"P4\n8 1# one byte\n\x81").unwrap();
        assert_eq!(rows(&image), [[true, false, false, false, false, false, false, true]]);
    }

    #[test]
    fn short_row_is_malformed_not_truncated() {
        let err = decode(b"P1\n3 2\n1 0 1\n0 1\n").unwrap_err();
        match err {
            NetpbmError::MalformedPixelData { row, col, .. } => assert_eq!((row, col), (1, 2)),
            other => panic!("expected MalformedPixelData, got {other:?}"),
        }
    }

    #[test]
    fn long_row_is_malformed() {
        let err = decode(b"P1\n2 1\n1 0 1\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedPixelData);
    }

    #[test]
    fn bad_token_is_malformed() {
        let payloads: [&[u8]; 4] = [b"1 2\n", b"1 x\n", b"10\n", b"1 01\n"];
        for payload in payloads {
            let mut data = b"P1\n2 1\n".to_vec();
            data.extend_from_slice(payload);
            assert_eq!(
                decode(&data).unwrap_err().kind(),
                ErrorKind::MalformedPixelData,
                "{payload:?}"
            );
        }
    }

    #[test]
    fn missing_rows_are_eof() {
        let err = decode(b"P1\n2 3\n1 0\n").unwrap_err();
        match err {
            NetpbmError::UnexpectedEof { row, col } => assert_eq!((row, col), (1, 0)),
            other => panic!("expected UnexpectedEof, got {other:?}"),
        }
    }

    #[test]
    fn decodes_binary() {
        let image = decode(b"P4\n10 2\n\xc0\x40\x01\xff").unwrap();
        assert_eq!(image.variant(), Variant::PbmBinary);
        let expected_row0: Vec<bool> = (0..10).map(|x| x < 2 || x == 9).collect();
        let expected_row1: Vec<bool> = (0..10).map(|x| x == 7 || x >= 8).collect();
        assert_eq!(rows(&image), [expected_row0, expected_row1]);
    }

    #[test]
    fn short_binary_is_eof() {
        let err = decode(b"P4\n10 2\n\xc0\x40\x01").unwrap_err();
        match err {
            NetpbmError::UnexpectedEof { row, col } => assert_eq!((row, col), (1, 8)),
            other => panic!("expected UnexpectedEof, got {other:?}"),
        }
    }

    #[test]
    fn encode_layout() {
        let image = decode(b"P1\n3 2\n1 0 1\n0 1 0\n").unwrap();
        assert_eq!(encode_ascii(&image), b"P1\n3 2\n1 0 1\n0 1 0\n");
        assert_eq!(encode_binary(&image), b"P4\n3 2\n\xa0\x40");
    }

    #[test]
    fn rejects_other_formats() {
        let err = decode(b"P2\n1 1\n255\n0\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMagicNumber);
    }
}
