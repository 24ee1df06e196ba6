//! PPM: RGB images, P3 (three decimal tokens per pixel) and P6 (R, G, B bytes).

use alloc::vec::Vec;

use rgb::{AsPixels as _, ComponentBytes as _};

use super::sealed::Codec;
use super::{ascii_tokens, eof_at, parse_sample, push_decimal};
use crate::error::NetpbmError;
use crate::image::Pixmap;
use crate::pixel::{Encoding, Rgb8, Sample as _};

/// Decode a P3 or P6 image.
pub fn decode(data: &[u8]) -> Result<Pixmap, NetpbmError> {
    super::decode_as(data, None, "P3 or P6")
}

/// Encode as P3, regardless of the image's own encoding.
pub fn encode_ascii(image: &Pixmap) -> Vec<u8> {
    super::encode(image, Encoding::Ascii)
}

/// Encode as P6, regardless of the image's own encoding.
pub fn encode_binary(image: &Pixmap) -> Vec<u8> {
    super::encode(image, Encoding::Binary)
}

impl Codec for Rgb8 {
    fn decode_ascii(
        payload: &[u8],
        width: usize,
        height: usize,
        max: u8,
    ) -> Result<Vec<Rgb8>, NetpbmError> {
        let count = width * height;
        let mut out = Vec::with_capacity(count.min(payload.len()));
        let mut tokens = ascii_tokens(payload);

        for i in 0..count {
            let (row, col) = (i / width, i % width);
            let mut channel = || -> Result<u8, NetpbmError> {
                let token = tokens.next().ok_or(NetpbmError::UnexpectedEof { row, col })?;
                parse_sample(token, max, row, col)
            };
            let r = channel()?;
            let g = channel()?;
            let b = channel()?;
            out.push(Rgb8 { r, g, b });
        }
        Ok(out)
    }

    fn decode_binary(
        payload: &[u8],
        width: usize,
        height: usize,
        max: u8,
    ) -> Result<Vec<Rgb8>, NetpbmError> {
        // The caller already checked that the decoded buffer size fits in usize.
        let needed = width * height * 3;
        let bytes = payload
            .get(..needed)
            .ok_or_else(|| eof_at(payload.len(), 3, width))?;
        let pixels: &[Rgb8] = bytes.as_pixels();

        if let Some(i) = pixels.iter().position(|px| !px.fits(max)) {
            return Err(NetpbmError::SampleOutOfRange {
                value: u32::from(pixels[i].peak()),
                max,
                row: i / width,
                col: i % width,
            });
        }
        Ok(pixels.to_vec())
    }

    fn encode_ascii(samples: &[Rgb8], width: usize, out: &mut Vec<u8>) {
        for row in samples.chunks_exact(width) {
            for (x, px) in row.iter().enumerate() {
                if x > 0 {
                    out.push(b' ');
                }
                push_decimal(out, px.r);
                out.push(b' ');
                push_decimal(out, px.g);
                out.push(b' ');
                push_decimal(out, px.b);
            }
            out.push(b'\n');
        }
    }

    fn encode_binary(samples: &[Rgb8], _width: usize, out: &mut Vec<u8>) {
        out.extend_from_slice(samples.as_bytes());
    }
}
