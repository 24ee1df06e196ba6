//! Lossy conversions between formats.
//!
//! Each conversion leaves the source untouched and returns a new image with
//! the same dimensions and payload encoding.

use alloc::vec::Vec;

use imgref::ImgVec;

use crate::image::{Bitmap, Graymap, Image, Pixmap, Raster};
use crate::pixel::Sample;

fn map_samples<S: Sample, T: Sample>(
    src: &Image<S>,
    max_value: u8,
    f: impl Fn(S) -> T,
) -> Image<T> {
    let samples: Vec<T> = src.samples().iter().map(|&s| f(s)).collect();
    log::trace!(
        "converting {}x{} {:?} to {:?}",
        src.width(),
        src.height(),
        S::FORMAT,
        T::FORMAT
    );
    Image::from_parts(
        ImgVec::new(samples, src.width(), src.height()),
        max_value,
        src.encoding(),
    )
}

impl Pixmap {
    /// Average the three channels (floor division), keeping the max value.
    pub fn to_graymap(&self) -> Graymap {
        map_samples(self, self.max_value(), |px| {
            ((u16::from(px.r) + u16::from(px.g) + u16::from(px.b)) / 3) as u8
        })
    }

    /// A pixel is set iff any channel is non-zero.
    ///
    /// This is a "not black" test, unlike [`Graymap::to_bitmap`], which
    /// thresholds on brightness.
    pub fn to_bitmap(&self) -> Bitmap {
        map_samples(self, 1, |px| px.r != 0 || px.g != 0 || px.b != 0)
    }
}

impl Graymap {
    /// A pixel is set iff its sample exceeds `max_value / 2` (floor).
    pub fn to_bitmap(&self) -> Bitmap {
        let threshold = self.max_value() / 2;
        map_samples(self, 1, |s| s > threshold)
    }
}

impl Raster {
    /// Reduce to bi-level with the format's own rule; bitmaps are cloned.
    pub fn to_bitmap(&self) -> Bitmap {
        match self {
            Raster::Bitmap(image) => image.clone(),
            Raster::Graymap(image) => image.to_bitmap(),
            Raster::Pixmap(image) => image.to_bitmap(),
        }
    }

    /// Reduce to grayscale. `None` for bitmaps; graymaps are cloned.
    pub fn to_graymap(&self) -> Option<Graymap> {
        match self {
            Raster::Bitmap(_) => None,
            Raster::Graymap(image) => Some(image.clone()),
            Raster::Pixmap(image) => Some(image.to_graymap()),
        }
    }
}
