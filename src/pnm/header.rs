//! Header lexer shared by all six variants.
//!
//! The header is a run of whitespace-separated ASCII tokens: magic number,
//! width, height and (PGM/PPM only) max value. `#` starts a comment that
//! runs to the end of the line. Comments are only recognized here; once the
//! last field is read, either a comment glued to it (through its newline) or
//! exactly one whitespace byte is consumed, and the rest of the input
//! belongs to the payload. Vertical tab counts as whitespace, as with C
//! `isspace`.

use alloc::format;
use alloc::string::String;

use crate::error::NetpbmError;
use crate::pixel::{Format, Variant};

/// Parsed header fields plus the offset where pixel data begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub variant: Variant,
    pub width: u32,
    pub height: u32,
    /// Declared max value; always 1 for PBM.
    pub max_value: u8,
    /// Byte offset of the first payload byte.
    pub data_offset: usize,
}

impl Header {
    /// Parse the header at the start of `data`.
    ///
    /// Whitespace and comments are also accepted before the magic number,
    /// as many writers emit a leading comment line.
    pub fn parse(data: &[u8]) -> Result<Header, NetpbmError> {
        let mut lexer = Lexer { data, pos: 0 };

        let magic = lexer.token().unwrap_or(b"");
        let variant = Variant::from_magic(magic).ok_or_else(|| NetpbmError::InvalidMagicNumber {
            found: lossy(magic),
            expected: "one of P1..P6",
        })?;

        let width = lexer.dimension("width")?;
        let height = lexer.dimension("height")?;

        let max_value = if variant.format().has_max_value() {
            lexer.max_value()?
        } else {
            1
        };

        // A comment glued to the last field runs through its newline;
        // otherwise a single whitespace byte separates header and payload.
        match data.get(lexer.pos) {
            Some(b'#') => lexer.skip_comment(),
            Some(b) if is_pnm_space(b) => lexer.pos += 1,
            _ => {}
        }

        log::debug!(
            "{variant} header: {width}x{height}, max value {max_value}, payload at byte {}",
            lexer.pos
        );

        Ok(Header {
            variant,
            width,
            height,
            max_value,
            data_offset: lexer.pos,
        })
    }

    pub fn format(&self) -> Format {
        self.variant.format()
    }

    /// `width * height` as `usize`, or `DimensionsTooLarge` on overflow.
    pub fn pixel_count(&self) -> Result<usize, NetpbmError> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or(NetpbmError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            })
    }
}

struct Lexer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Skip whitespace and comments.
    fn skip_blanks(&mut self) {
        while let Some(&byte) = self.data.get(self.pos) {
            if byte == b'#' {
                self.skip_comment();
            } else if is_pnm_space(&byte) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Skip from `#` through the end of the line, newline included.
    fn skip_comment(&mut self) {
        while let Some(&byte) = self.data.get(self.pos) {
            self.pos += 1;
            if byte == b'\n' {
                break;
            }
        }
    }

    /// Next token, ending at whitespace or a comment marker.
    fn token(&mut self) -> Option<&'a [u8]> {
        self.skip_blanks();
        let start = self.pos;
        while self
            .data
            .get(self.pos)
            .is_some_and(|b| !is_pnm_space(b) && *b != b'#')
        {
            self.pos += 1;
        }
        (self.pos > start).then(|| &self.data[start..self.pos])
    }

    fn dimension(&mut self, name: &str) -> Result<u32, NetpbmError> {
        let token = self
            .token()
            .ok_or_else(|| NetpbmError::InvalidDimensions(format!("missing {name}")))?;
        match parse_decimal(token) {
            Some(0) => Err(NetpbmError::InvalidDimensions(format!("{name} is zero"))),
            Some(value) => Ok(value),
            None => Err(NetpbmError::InvalidDimensions(format!(
                "{name} {:?} is not a decimal integer",
                lossy(token)
            ))),
        }
    }

    fn max_value(&mut self) -> Result<u8, NetpbmError> {
        let token = self.token().unwrap_or(b"");
        parse_decimal(token)
            .filter(|v| (1..=255).contains(v))
            .map(|v| v as u8)
            .ok_or_else(|| NetpbmError::InvalidMaxValue {
                found: lossy(token),
            })
    }
}

/// Whitespace as C `isspace` sees it: ASCII whitespace plus vertical tab.
pub(crate) fn is_pnm_space(byte: &u8) -> bool {
    byte.is_ascii_whitespace() || *byte == 0x0b
}

/// Parse an unsigned decimal token. `None` if empty, non-digit, or > u32::MAX.
pub(crate) fn parse_decimal(token: &[u8]) -> Option<u32> {
    if token.is_empty() {
        return None;
    }
    token.iter().try_fold(0u32, |acc, &b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(u32::from(b - b'0'))
    })
}

pub(crate) fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
