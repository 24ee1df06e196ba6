//! In-place geometric and photometric transforms.
//!
//! Written once over [`Sample`]; they never change the sample count and
//! never produce a sample above the image's max value.

use alloc::vec::Vec;

use imgref::ImgVec;

use crate::image::Image;
use crate::pixel::Sample;

impl<S: Sample> Image<S> {
    /// Replace every sample `s` with `max_value - s` (per channel; negation for bitmaps).
    pub fn invert(&mut self) {
        let max = self.max_value();
        for s in self.samples_mut() {
            *s = s.invert(max);
        }
        log::trace!("inverted {}x{} {:?}", self.width(), self.height(), self.format());
    }

    /// Mirror left to right.
    pub fn flip_horizontal(&mut self) {
        let width = self.width();
        for row in self.samples_mut().chunks_exact_mut(width) {
            row.reverse();
        }
    }

    /// Mirror top to bottom.
    pub fn flip_vertical(&mut self) {
        let (width, height) = self.size();
        let buf = self.samples_mut();
        for y in 0..height / 2 {
            let (top, bottom) = buf.split_at_mut((height - 1 - y) * width);
            top[y * width..(y + 1) * width].swap_with_slice(&mut bottom[..width]);
        }
    }

    /// Rotate a quarter turn clockwise; the top row becomes the right column.
    pub fn rotate_90_clockwise(&mut self) {
        let (width, height) = self.size();
        let src = self.samples();
        let mut rotated = Vec::with_capacity(src.len());
        for x in 0..width {
            for y in (0..height).rev() {
                rotated.push(src[y * width + x]);
            }
        }
        self.replace_pixels(ImgVec::new(rotated, height, width));
        log::trace!("rotated {width}x{height} to {height}x{width}");
    }
}
