use alloc::vec::Vec;

use crate::image::Image;
use crate::pixel::{Encoding, Sample};
use crate::pnm;

impl<S: Sample> Image<S> {
    /// Serialize with the image's own variant.
    ///
    /// The magic number, dimensions and (PGM/PPM) max value are each written
    /// on their own line, followed by the payload. ASCII payloads put one
    /// image row per line.
    pub fn encode(&self) -> Vec<u8> {
        pnm::encode(self, self.encoding())
    }

    /// Serialize with `encoding`, ignoring the image's own.
    pub fn encode_as(&self, encoding: Encoding) -> Vec<u8> {
        pnm::encode(self, encoding)
    }
}
