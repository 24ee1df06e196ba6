/// RGB triplet used for PPM samples, in R, G, B order.
pub type Rgb8 = rgb::Rgb<u8>;

/// Netpbm image family, which fixes the sample type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Bi-level, one boolean per pixel.
    Pbm,
    /// Grayscale, one `u8` per pixel.
    Pgm,
    /// Color, one [`Rgb8`] per pixel.
    Ppm,
}

impl Format {
    /// Whether the header carries a max-value line.
    pub fn has_max_value(self) -> bool {
        !matches!(self, Format::Pbm)
    }
}

/// Payload serialization mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Whitespace-separated decimal tokens.
    #[default]
    Ascii,
    /// Packed bits (PBM) or raw bytes (PGM/PPM).
    Binary,
}

/// One of the six magic numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// P1
    PbmAscii,
    /// P2
    PgmAscii,
    /// P3
    PpmAscii,
    /// P4
    PbmBinary,
    /// P5
    PgmBinary,
    /// P6
    PpmBinary,
}

impl Variant {
    pub fn new(format: Format, encoding: Encoding) -> Self {
        match (format, encoding) {
            (Format::Pbm, Encoding::Ascii) => Variant::PbmAscii,
            (Format::Pgm, Encoding::Ascii) => Variant::PgmAscii,
            (Format::Ppm, Encoding::Ascii) => Variant::PpmAscii,
            (Format::Pbm, Encoding::Binary) => Variant::PbmBinary,
            (Format::Pgm, Encoding::Binary) => Variant::PgmBinary,
            (Format::Ppm, Encoding::Binary) => Variant::PpmBinary,
        }
    }

    /// Parse a magic-number token such as `b"P4"`.
    pub fn from_magic(token: &[u8]) -> Option<Self> {
        match token {
            b"P1" => Some(Variant::PbmAscii),
            b"P2" => Some(Variant::PgmAscii),
            b"P3" => Some(Variant::PpmAscii),
            b"P4" => Some(Variant::PbmBinary),
            b"P5" => Some(Variant::PgmBinary),
            b"P6" => Some(Variant::PpmBinary),
            _ => None,
        }
    }

    pub fn magic(self) -> &'static str {
        match self {
            Variant::PbmAscii => "P1",
            Variant::PgmAscii => "P2",
            Variant::PpmAscii => "P3",
            Variant::PbmBinary => "P4",
            Variant::PgmBinary => "P5",
            Variant::PpmBinary => "P6",
        }
    }

    pub fn format(self) -> Format {
        match self {
            Variant::PbmAscii | Variant::PbmBinary => Format::Pbm,
            Variant::PgmAscii | Variant::PgmBinary => Format::Pgm,
            Variant::PpmAscii | Variant::PpmBinary => Format::Ppm,
        }
    }

    pub fn encoding(self) -> Encoding {
        match self {
            Variant::PbmAscii | Variant::PgmAscii | Variant::PpmAscii => Encoding::Ascii,
            Variant::PbmBinary | Variant::PgmBinary | Variant::PpmBinary => Encoding::Binary,
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.magic())
    }
}

/// Per-format sample semantics.
///
/// Transforms are written once against this trait. `max` is the image's
/// declared max value; bi-level samples ignore it (their ceiling is 1).
pub trait Sample: crate::pnm::sealed::Codec + Copy + PartialEq + core::fmt::Debug {
    const FORMAT: Format;

    /// `max - self`, per channel; logical negation for booleans.
    fn invert(self, max: u8) -> Self;

    /// Largest component of this sample.
    fn peak(self) -> u8;

    /// Whether every component is `<= max`.
    fn fits(self, max: u8) -> bool {
        self.peak() <= max
    }
}

impl Sample for bool {
    const FORMAT: Format = Format::Pbm;

    fn invert(self, _max: u8) -> Self {
        !self
    }

    fn peak(self) -> u8 {
        u8::from(self)
    }
}

impl Sample for u8 {
    const FORMAT: Format = Format::Pgm;

    fn invert(self, max: u8) -> Self {
        max - self
    }

    fn peak(self) -> u8 {
        self
    }
}

impl Sample for Rgb8 {
    const FORMAT: Format = Format::Ppm;

    fn invert(self, max: u8) -> Self {
        Rgb8 {
            r: max - self.r,
            g: max - self.g,
            b: max - self.b,
        }
    }

    fn peak(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }
}

/// A single pixel of any format, as read from or written to a [`Raster`](crate::Raster).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pixel {
    Bit(bool),
    Gray(u8),
    Rgb(Rgb8),
}

impl Pixel {
    pub fn format(self) -> Format {
        match self {
            Pixel::Bit(_) => Format::Pbm,
            Pixel::Gray(_) => Format::Pgm,
            Pixel::Rgb(_) => Format::Ppm,
        }
    }
}

impl From<bool> for Pixel {
    fn from(bit: bool) -> Self {
        Pixel::Bit(bit)
    }
}

impl From<u8> for Pixel {
    fn from(gray: u8) -> Self {
        Pixel::Gray(gray)
    }
}

impl From<Rgb8> for Pixel {
    fn from(rgb: Rgb8) -> Self {
        Pixel::Rgb(rgb)
    }
}
