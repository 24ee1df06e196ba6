//! Netpbm family: P1/P4 (PBM), P2/P5 (PGM), P3/P6 (PPM).
//!
//! The header grammar is shared by all six variants; each format module
//! only knows how to turn its payload into samples and back.

mod bits;
mod header;
pub mod pbm;
pub mod pgm;
pub mod ppm;

pub use header::Header;

use alloc::format;
use alloc::vec::Vec;
use core::mem::size_of;

use imgref::ImgVec;

use crate::error::NetpbmError;
use crate::image::Image;
use crate::limits::Limits;
use crate::pixel::{Encoding, Format, Sample};

use bits::row_bytes;
use header::is_pnm_space;

pub(crate) mod sealed {
    use alloc::vec::Vec;

    use crate::error::NetpbmError;

    /// Payload codec for one sample type.
    ///
    /// Decoders return exactly `width * height` samples in row-major order,
    /// each already checked against `max`.
    pub trait Codec: Sized {
        fn decode_ascii(
            payload: &[u8],
            width: usize,
            height: usize,
            max: u8,
        ) -> Result<Vec<Self>, NetpbmError>;

        fn decode_binary(
            payload: &[u8],
            width: usize,
            height: usize,
            max: u8,
        ) -> Result<Vec<Self>, NetpbmError>;

        fn encode_ascii(samples: &[Self], width: usize, out: &mut Vec<u8>);

        fn encode_binary(samples: &[Self], width: usize, out: &mut Vec<u8>);
    }
}

/// Decode `data` as an image of sample type `S`.
///
/// Fails with `InvalidMagicNumber` if the header names a different format.
pub(crate) fn decode_as<S: Sample>(
    data: &[u8],
    limits: Option<&Limits>,
    expected: &'static str,
) -> Result<Image<S>, NetpbmError> {
    let header = Header::parse(data)?;
    if header.format() != S::FORMAT {
        return Err(NetpbmError::InvalidMagicNumber {
            found: header.variant.magic().into(),
            expected,
        });
    }
    decode_payload(data, &header, limits)
}

/// Decode the payload following an already parsed header.
pub(crate) fn decode_payload<S: Sample>(
    data: &[u8],
    header: &Header,
    limits: Option<&Limits>,
) -> Result<Image<S>, NetpbmError> {
    debug_assert_eq!(header.format(), S::FORMAT);

    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
    }
    let count = header.pixel_count()?;
    let out_bytes = count
        .checked_mul(size_of::<S>())
        .ok_or(NetpbmError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    if let Some(limits) = limits {
        limits.check_memory(out_bytes)?;
    }

    let payload = data.get(header.data_offset..).unwrap_or_default();
    let w = header.width as usize;
    let h = header.height as usize;
    let encoding = header.variant.encoding();

    let samples = match encoding {
        Encoding::Ascii => S::decode_ascii(payload, w, h, header.max_value)?,
        Encoding::Binary => S::decode_binary(payload, w, h, header.max_value)?,
    };
    log::trace!("{}: decoded {} samples", header.variant, samples.len());

    Ok(Image::from_parts(
        ImgVec::new(samples, w, h),
        header.max_value,
        encoding,
    ))
}

/// Serialize `image` with the given payload encoding.
pub(crate) fn encode<S: Sample>(image: &Image<S>, encoding: Encoding) -> Vec<u8> {
    let variant = crate::pixel::Variant::new(S::FORMAT, encoding);
    let (w, h) = image.size();

    let header = if S::FORMAT.has_max_value() {
        format!("{variant}\n{w} {h}\n{}\n", image.max_value())
    } else {
        format!("{variant}\n{w} {h}\n")
    };
    let payload = payload_len_hint(S::FORMAT, encoding, w, h).unwrap_or(0);
    let mut out = Vec::with_capacity(header.len().saturating_add(payload));
    out.extend_from_slice(header.as_bytes());

    match encoding {
        Encoding::Ascii => S::encode_ascii(image.samples(), w, &mut out),
        Encoding::Binary => S::encode_binary(image.samples(), w, &mut out),
    }
    log::trace!("{variant}: encoded {w}x{h} into {} bytes", out.len());
    out
}

/// Upper bound on the encoded payload size, `None` if it overflows.
pub(crate) fn payload_len_hint(
    format: Format,
    encoding: Encoding,
    width: usize,
    height: usize,
) -> Option<usize> {
    let channels = match format {
        Format::Pbm | Format::Pgm => 1,
        Format::Ppm => 3,
    };
    match (encoding, format) {
        (Encoding::Binary, Format::Pbm) => row_bytes(width).checked_mul(height),
        // "0 " or "1 " per pixel.
        (Encoding::Ascii, Format::Pbm) => width.checked_mul(height)?.checked_mul(2),
        // Worst case "255 " per channel.
        (Encoding::Ascii, _) => width.checked_mul(height)?.checked_mul(4 * channels),
        (Encoding::Binary, _) => width.checked_mul(height)?.checked_mul(channels),
    }
}

/// Non-empty whitespace-separated tokens of an ASCII payload.
pub(crate) fn ascii_tokens(payload: &[u8]) -> impl Iterator<Item = &[u8]> {
    payload
        .split(is_pnm_space)
        .filter(|token| !token.is_empty())
}

/// Parse one decimal sample token and check it against `max`.
pub(crate) fn parse_sample(
    token: &[u8],
    max: u8,
    row: usize,
    col: usize,
) -> Result<u8, NetpbmError> {
    if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
        return Err(NetpbmError::MalformedPixelData {
            row,
            col,
            detail: format!(
                "expected a decimal sample, found {:?}",
                header::lossy(token)
            ),
        });
    }
    // All digits: the only parse failure left is overflow, which is out of range anyway.
    let value = header::parse_decimal(token).unwrap_or(u32::MAX);
    check_sample(value, max, row, col)
}

/// Check a sample value against `max`.
pub(crate) fn check_sample(value: u32, max: u8, row: usize, col: usize) -> Result<u8, NetpbmError> {
    if value > u32::from(max) {
        return Err(NetpbmError::SampleOutOfRange {
            value,
            max,
            row,
            col,
        });
    }
    Ok(value as u8)
}

/// Row and column of the first sample missing from a truncated payload.
pub(crate) fn eof_at(available: usize, per_pixel: usize, width: usize) -> NetpbmError {
    let pixel = available / per_pixel;
    NetpbmError::UnexpectedEof {
        row: pixel / width,
        col: pixel % width,
    }
}

/// Append `value` in decimal.
pub(crate) fn push_decimal(out: &mut Vec<u8>, value: u8) {
    if value >= 100 {
        out.push(b'0' + value / 100);
    }
    if value >= 10 {
        out.push(b'0' + value / 10 % 10);
    }
    out.push(b'0' + value % 10);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn decimal_output() {
        let mut out = Vec::new();
        for v in [0u8, 7, 10, 99, 100, 128, 255] {
            push_decimal(&mut out, v);
            out.push(b' ');
        }
        assert_eq!(out, b"0 7 10 99 100 128 255 ");
    }

    #[test]
    fn tokens_skip_any_whitespace() {
        let tokens: Vec<&[u8]> = ascii_tokens(b"  1\t22\r\n\n333\x0b4 ").collect();
        assert_eq!(tokens, [&b"1"[..], &b"22"[..], &b"333"[..], &b"4"[..]]);
    }

    #[test]
    fn payload_hint_matches_layout() {
        assert_eq!(payload_len_hint(Format::Pbm, Encoding::Binary, 9, 3), Some(6));
        assert_eq!(payload_len_hint(Format::Pbm, Encoding::Ascii, 3, 2), Some(12));
        assert_eq!(payload_len_hint(Format::Pgm, Encoding::Binary, 3, 2), Some(6));
        assert_eq!(payload_len_hint(Format::Ppm, Encoding::Binary, 3, 2), Some(18));
        assert_eq!(payload_len_hint(Format::Ppm, Encoding::Ascii, 1, 1), Some(12));
        assert_eq!(payload_len_hint(Format::Pgm, Encoding::Ascii, usize::MAX, 2), None);
    }

    #[test]
    fn encoded_sizes_stay_within_hint() {
        let bits = crate::Bitmap::from_fn(17, 5, 1, |x, _| x % 3 == 0).unwrap();
        for encoding in [Encoding::Ascii, Encoding::Binary] {
            let out = bits.encode_as(encoding);
            let header = format!("{}\n17 5\n", crate::Variant::new(Format::Pbm, encoding));
            let hint = payload_len_hint(Format::Pbm, encoding, 17, 5).unwrap();
            assert!(out.len() - header.len() <= hint);
        }
        let binary = bits.encode_as(Encoding::Binary);
        assert_eq!(binary.len(), "P4\n17 5\n".len() + 15);
    }

    #[test]
    fn sample_parsing() {
        assert_eq!(parse_sample(b"15", 15, 0, 0).unwrap(), 15);
        assert_eq!(parse_sample(b"0", 1, 0, 0).unwrap(), 0);
        assert_eq!(
            parse_sample(b"16", 15, 0, 0).unwrap_err().kind(),
            ErrorKind::SampleOutOfRange
        );
        assert_eq!(
            parse_sample(b"99999999999999", 255, 0, 0).unwrap_err().kind(),
            ErrorKind::SampleOutOfRange
        );
        assert_eq!(
            parse_sample(b"1.5", 255, 0, 0).unwrap_err().kind(),
            ErrorKind::MalformedPixelData
        );
        assert_eq!(
            parse_sample(b"-1", 255, 0, 0).unwrap_err().kind(),
            ErrorKind::MalformedPixelData
        );
    }

    #[test]
    fn eof_position() {
        match eof_at(7, 3, 2) {
            NetpbmError::UnexpectedEof { row, col } => assert_eq!((row, col), (1, 0)),
            other => panic!("unexpected {other:?}"),
        }
    }
}
