use alloc::format;
use alloc::vec::Vec;

use imgref::{ImgRef, ImgVec};

use crate::error::NetpbmError;
use crate::pixel::{Encoding, Format, Pixel, Rgb8, Sample, Variant};

/// An owned, row-major Netpbm image with samples of type `S`.
///
/// Every sample is `<= max_value()`, and there are exactly
/// `width * height` of them. The constructors and decoders are the only
/// ways to obtain one, so those invariants always hold.
#[derive(Clone, Debug)]
pub struct Image<S: Sample> {
    pixels: ImgVec<S>,
    max_value: u8,
    encoding: Encoding,
}

/// Bi-level image (PBM).
pub type Bitmap = Image<bool>;
/// Grayscale image (PGM).
pub type Graymap = Image<u8>;
/// RGB image (PPM).
pub type Pixmap = Image<Rgb8>;

impl<S: Sample> Image<S> {
    /// Build an image from row-major samples, validating every invariant.
    ///
    /// `max_value` must be 1 for bitmaps and in `1..=255` otherwise. The
    /// encoding defaults to ASCII; see [`Image::with_encoding`].
    pub fn new(
        width: usize,
        height: usize,
        max_value: u8,
        samples: Vec<S>,
    ) -> Result<Self, NetpbmError> {
        if width == 0 || height == 0 {
            return Err(NetpbmError::InvalidDimensions(format!(
                "{width}x{height} has no pixels"
            )));
        }
        let expected = width.checked_mul(height).ok_or_else(|| {
            NetpbmError::InvalidDimensions(format!("{width}x{height} overflows usize"))
        })?;
        if samples.len() != expected {
            return Err(NetpbmError::InvalidDimensions(format!(
                "{width}x{height} needs {expected} samples, got {}",
                samples.len()
            )));
        }
        let valid_max = match S::FORMAT {
            Format::Pbm => max_value == 1,
            Format::Pgm | Format::Ppm => max_value >= 1,
        };
        if !valid_max {
            return Err(NetpbmError::InvalidMaxValue {
                found: format!("{max_value}"),
            });
        }
        if let Some(i) = samples.iter().position(|s| !s.fits(max_value)) {
            return Err(NetpbmError::SampleOutOfRange {
                value: u32::from(samples[i].peak()),
                max: max_value,
                row: i / width,
                col: i % width,
            });
        }
        Ok(Self::from_parts(
            ImgVec::new(samples, width, height),
            max_value,
            Encoding::Ascii,
        ))
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(
        width: usize,
        height: usize,
        max_value: u8,
        mut f: impl FnMut(usize, usize) -> S,
    ) -> Result<Self, NetpbmError> {
        let mut samples = Vec::with_capacity(width.saturating_mul(height));
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }
        Self::new(width, height, max_value, samples)
    }

    /// Caller guarantees the invariants.
    pub(crate) fn from_parts(pixels: ImgVec<S>, max_value: u8, encoding: Encoding) -> Self {
        debug_assert_eq!(pixels.stride(), pixels.width());
        Self {
            pixels,
            max_value,
            encoding,
        }
    }

    /// Same image, serialized with `encoding`.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Declared sample ceiling; 1 for bitmaps.
    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Switch between the ASCII and binary variant of this format.
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = encoding;
    }

    pub fn format(&self) -> Format {
        S::FORMAT
    }

    pub fn variant(&self) -> Variant {
        Variant::new(S::FORMAT, self.encoding)
    }

    /// All samples, row-major.
    pub fn samples(&self) -> &[S] {
        &self.pixels.buf()[..]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[S]> {
        self.samples().chunks_exact(self.width())
    }

    /// Borrowed 2D view.
    pub fn as_imgref(&self) -> ImgRef<'_, S> {
        self.pixels.as_ref()
    }

    /// Take ownership of the sample buffer.
    pub fn into_imgvec(self) -> ImgVec<S> {
        self.pixels
    }

    /// Sample at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<S> {
        (x < self.width() && y < self.height()).then(|| self.samples()[y * self.width() + x])
    }

    /// Overwrite the sample at column `x`, row `y`.
    pub fn set(&mut self, x: usize, y: usize, value: S) -> Result<(), NetpbmError> {
        let (width, height) = self.size();
        if x >= width || y >= height {
            return Err(NetpbmError::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        if !value.fits(self.max_value) {
            return Err(NetpbmError::SampleOutOfRange {
                value: u32::from(value.peak()),
                max: self.max_value,
                row: y,
                col: x,
            });
        }
        self.samples_mut()[y * width + x] = value;
        Ok(())
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [S] {
        &mut self.pixels.buf_mut()[..]
    }

    pub(crate) fn replace_pixels(&mut self, pixels: ImgVec<S>) {
        debug_assert_eq!(pixels.stride(), pixels.width());
        self.pixels = pixels;
    }
}

impl<S: Sample> PartialEq for Image<S> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
            && self.max_value == other.max_value
            && self.encoding == other.encoding
            && self.samples() == other.samples()
    }
}

impl<S: Sample> Eq for Image<S> where S: Eq {}

/// Scale every sample from `from` to `to`, rounding to nearest.
fn rescale(value: u8, from: u8, to: u8) -> u8 {
    let (value, from, to) = (u32::from(value), u32::from(from), u32::from(to));
    ((value * to + from / 2) / from) as u8
}

impl Graymap {
    /// Change the max value, rescaling samples proportionally.
    pub fn set_max_value(&mut self, max_value: u8) -> Result<(), NetpbmError> {
        if max_value == 0 {
            return Err(NetpbmError::InvalidMaxValue { found: "0".into() });
        }
        let from = self.max_value;
        if from != max_value {
            for s in self.samples_mut() {
                *s = rescale(*s, from, max_value);
            }
            self.max_value = max_value;
        }
        Ok(())
    }
}

impl Pixmap {
    /// Change the max value, rescaling every channel proportionally.
    pub fn set_max_value(&mut self, max_value: u8) -> Result<(), NetpbmError> {
        if max_value == 0 {
            return Err(NetpbmError::InvalidMaxValue { found: "0".into() });
        }
        let from = self.max_value;
        if from != max_value {
            for px in self.samples_mut() {
                *px = Rgb8 {
                    r: rescale(px.r, from, max_value),
                    g: rescale(px.g, from, max_value),
                    b: rescale(px.b, from, max_value),
                };
            }
            self.max_value = max_value;
        }
        Ok(())
    }
}

/// A decoded image of any of the three formats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Raster {
    Bitmap(Bitmap),
    Graymap(Graymap),
    Pixmap(Pixmap),
}

macro_rules! each {
    ($self:expr, $image:ident => $body:expr) => {
        match $self {
            Raster::Bitmap($image) => $body,
            Raster::Graymap($image) => $body,
            Raster::Pixmap($image) => $body,
        }
    };
}

impl Raster {
    pub fn width(&self) -> usize {
        each!(self, image => image.width())
    }

    pub fn height(&self) -> usize {
        each!(self, image => image.height())
    }

    pub fn size(&self) -> (usize, usize) {
        each!(self, image => image.size())
    }

    pub fn max_value(&self) -> u8 {
        each!(self, image => image.max_value())
    }

    pub fn format(&self) -> Format {
        each!(self, image => image.format())
    }

    pub fn encoding(&self) -> Encoding {
        each!(self, image => image.encoding())
    }

    pub fn set_encoding(&mut self, encoding: Encoding) {
        each!(self, image => image.set_encoding(encoding))
    }

    pub fn variant(&self) -> Variant {
        each!(self, image => image.variant())
    }

    pub fn invert(&mut self) {
        each!(self, image => image.invert())
    }

    /// Pixel at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        each!(self, image => image.get(x, y).map(Pixel::from))
    }

    /// Overwrite one pixel. `value` must match this raster's format.
    pub fn set(&mut self, x: usize, y: usize, value: impl Into<Pixel>) -> Result<(), NetpbmError> {
        match (self, value.into()) {
            (Raster::Bitmap(image), Pixel::Bit(bit)) => image.set(x, y, bit),
            (Raster::Graymap(image), Pixel::Gray(gray)) => image.set(x, y, gray),
            (Raster::Pixmap(image), Pixel::Rgb(rgb)) => image.set(x, y, rgb),
            (raster, pixel) => Err(NetpbmError::FormatMismatch {
                expected: raster.format(),
                found: pixel.format(),
            }),
        }
    }

    /// Change the max value, rescaling samples. Bitmaps only accept 1.
    pub fn set_max_value(&mut self, max_value: u8) -> Result<(), NetpbmError> {
        match self {
            Raster::Bitmap(_) if max_value == 1 => Ok(()),
            Raster::Bitmap(_) => Err(NetpbmError::InvalidMaxValue {
                found: format!("{max_value}"),
            }),
            Raster::Graymap(image) => image.set_max_value(max_value),
            Raster::Pixmap(image) => image.set_max_value(max_value),
        }
    }

    pub fn flip_horizontal(&mut self) {
        each!(self, image => image.flip_horizontal())
    }

    pub fn flip_vertical(&mut self) {
        each!(self, image => image.flip_vertical())
    }

    pub fn rotate_90_clockwise(&mut self) {
        each!(self, image => image.rotate_90_clockwise())
    }

    /// Serialize using the image's own variant.
    pub fn encode(&self) -> Vec<u8> {
        each!(self, image => image.encode())
    }

    pub fn as_bitmap(&self) -> Option<&Bitmap> {
        match self {
            Raster::Bitmap(image) => Some(image),
            _ => None,
        }
    }

    pub fn as_graymap(&self) -> Option<&Graymap> {
        match self {
            Raster::Graymap(image) => Some(image),
            _ => None,
        }
    }

    pub fn as_pixmap(&self) -> Option<&Pixmap> {
        match self {
            Raster::Pixmap(image) => Some(image),
            _ => None,
        }
    }
}

impl From<Bitmap> for Raster {
    fn from(image: Bitmap) -> Self {
        Raster::Bitmap(image)
    }
}

impl From<Graymap> for Raster {
    fn from(image: Graymap) -> Self {
        Raster::Graymap(image)
    }
}

impl From<Pixmap> for Raster {
    fn from(image: Pixmap) -> Self {
        Raster::Pixmap(image)
    }
}
