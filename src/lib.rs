//! # pnmraster
//!
//! Decoder, encoder and pixel-level editor for the Netpbm family.
//!
//! ## Supported Formats
//!
//! | Magic | Format | Encoding | Sample |
//! |-------|--------|----------|--------|
//! | `P1`  | PBM    | ASCII    | `bool` |
//! | `P2`  | PGM    | ASCII    | `u8`   |
//! | `P3`  | PPM    | ASCII    | [`Rgb8`] |
//! | `P4`  | PBM    | binary, 8 pixels per byte, MSB first | `bool` |
//! | `P5`  | PGM    | binary, one byte per sample | `u8` |
//! | `P6`  | PPM    | binary, three bytes per pixel | [`Rgb8`] |
//!
//! Headers may carry `#` comments anywhere whitespace is allowed. Max values
//! are limited to `1..=255`.
//!
//! ## Non-Goals
//!
//! - 16-bit samples (max value above 255)
//! - PAM (`P7`) and PFM
//! - Multiple images concatenated in one stream
//!
//! ## Credits
//!
//! Header lexing follows [zune-ppm](https://github.com/etemesi254/zune-image)
//! by Caleb Etemesi (MIT/Apache-2.0/Zlib licensed).
//!
//! ## Usage
//!
//! ```
//! use pnmraster::{Encoding, Raster};
//!
//! let mut raster = pnmraster::decode(b"P2\n# tiny\n2 1\n255\n0 200\n")?;
//! raster.invert();
//! raster.set_encoding(Encoding::Binary);
//! assert_eq!(raster.encode(), b"P5\n2 1\n255\n\xff\x37");
//!
//! if let Raster::Graymap(gray) = &raster {
//!     assert_eq!(gray.to_bitmap().samples(), [true, false]);
//! }
//! # Ok::<(), pnmraster::NetpbmError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod convert;
mod error;
mod image;
mod limits;
mod pixel;
mod transform;

pub mod pnm;

mod decode;
mod encode;
#[cfg(feature = "std")]
mod io;

// Re-exports
pub use decode::{DecodeRequest, decode};
pub use error::{ErrorKind, NetpbmError};
pub use image::{Bitmap, Graymap, Image, Pixmap, Raster};
pub use limits::Limits;
pub use pixel::{Encoding, Format, Pixel, Rgb8, Sample, Variant};
pub use pnm::Header;
