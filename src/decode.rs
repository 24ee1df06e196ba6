use crate::error::NetpbmError;
use crate::image::{Bitmap, Graymap, Pixmap, Raster};
use crate::limits::Limits;
use crate::pixel::Format;
use crate::pnm::{self, Header};

/// Decode configuration for one input buffer.
///
/// ```
/// use pnmraster::{DecodeRequest, Limits};
///
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let raster = DecodeRequest::new(b"P2\n2 1\n255\n0 255\n")
///     .with_limits(&limits)
///     .decode()?;
/// assert_eq!(raster.size(), (2, 1));
/// # Ok::<(), pnmraster::NetpbmError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images whose dimensions or buffer size exceed `limits`.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode whichever of the six variants the magic number names.
    pub fn decode(&self) -> Result<Raster, NetpbmError> {
        let header = Header::parse(self.data)?;
        Ok(match header.format() {
            Format::Pbm => Raster::Bitmap(pnm::decode_payload(self.data, &header, self.limits)?),
            Format::Pgm => Raster::Graymap(pnm::decode_payload(self.data, &header, self.limits)?),
            Format::Ppm => Raster::Pixmap(pnm::decode_payload(self.data, &header, self.limits)?),
        })
    }

    /// Decode a P1 or P4 image.
    pub fn decode_bitmap(&self) -> Result<Bitmap, NetpbmError> {
        pnm::decode_as(self.data, self.limits, "P1 or P4")
    }

    /// Decode a P2 or P5 image.
    pub fn decode_graymap(&self) -> Result<Graymap, NetpbmError> {
        pnm::decode_as(self.data, self.limits, "P2 or P5")
    }

    /// Decode a P3 or P6 image.
    pub fn decode_pixmap(&self) -> Result<Pixmap, NetpbmError> {
        pnm::decode_as(self.data, self.limits, "P3 or P6")
    }
}

/// Decode any PBM/PGM/PPM image with no limits.
pub fn decode(data: &[u8]) -> Result<Raster, NetpbmError> {
    DecodeRequest::new(data).decode()
}
