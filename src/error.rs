use alloc::string::String;

use crate::pixel::Format;

/// Errors from Netpbm decoding, encoding and pixel access.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum NetpbmError {
    #[error("invalid magic number {found:?}, expected {expected}")]
    InvalidMagicNumber {
        found: String,
        expected: &'static str,
    },

    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("invalid max value {found:?}, expected an integer in 1..=255")]
    InvalidMaxValue { found: String },

    #[error("unexpected end of input at row {row}, column {col}")]
    UnexpectedEof { row: usize, col: usize },

    #[error("malformed pixel data at row {row}, column {col}: {detail}")]
    MalformedPixelData {
        row: usize,
        col: usize,
        detail: String,
    },

    #[error("sample {value} at row {row}, column {col} exceeds max value {max}")]
    SampleOutOfRange {
        value: u32,
        max: u8,
        row: usize,
        col: usize,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("{found:?} pixel written to a {expected:?} image")]
    FormatMismatch { expected: Format, found: Format },

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// The kind of a [`NetpbmError`], without its context.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidMagicNumber,
    InvalidDimensions,
    InvalidMaxValue,
    UnexpectedEndOfInput,
    MalformedPixelData,
    SampleOutOfRange,
    DimensionsTooLarge,
    LimitExceeded,
    OutOfBounds,
    FormatMismatch,
    Io,
}

impl NetpbmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMagicNumber { .. } => ErrorKind::InvalidMagicNumber,
            Self::InvalidDimensions(_) => ErrorKind::InvalidDimensions,
            Self::InvalidMaxValue { .. } => ErrorKind::InvalidMaxValue,
            Self::UnexpectedEof { .. } => ErrorKind::UnexpectedEndOfInput,
            Self::MalformedPixelData { .. } => ErrorKind::MalformedPixelData,
            Self::SampleOutOfRange { .. } => ErrorKind::SampleOutOfRange,
            Self::DimensionsTooLarge { .. } => ErrorKind::DimensionsTooLarge,
            Self::LimitExceeded(_) => ErrorKind::LimitExceeded,
            Self::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            Self::FormatMismatch { .. } => ErrorKind::FormatMismatch,
            #[cfg(feature = "std")]
            Self::Io(_) => ErrorKind::Io,
        }
    }
}
