//! File and stream wrappers around the in-memory codec.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use std::vec::Vec;

use crate::decode::DecodeRequest;
use crate::error::NetpbmError;
use crate::image::{Image, Raster};
use crate::pixel::Sample;

impl Raster {
    /// Read and decode a whole file.
    pub fn open(path: impl AsRef<Path>) -> Result<Raster, NetpbmError> {
        let data = fs::read(path)?;
        DecodeRequest::new(&data).decode()
    }

    /// Read `reader` to the end and decode it.
    pub fn read(mut reader: impl Read) -> Result<Raster, NetpbmError> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        DecodeRequest::new(&data).decode()
    }

    pub fn write_to(&self, mut writer: impl Write) -> Result<(), NetpbmError> {
        writer.write_all(&self.encode())?;
        Ok(())
    }

    /// Encode and write to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), NetpbmError> {
        fs::write(path, self.encode())?;
        Ok(())
    }
}

impl<S: Sample> Image<S> {
    pub fn write_to(&self, mut writer: impl Write) -> Result<(), NetpbmError> {
        writer.write_all(&self.encode())?;
        Ok(())
    }

    /// Encode and write to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), NetpbmError> {
        fs::write(path, self.encode())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use crate::image::Graymap;
    use std::vec;

    #[test]
    fn stream_roundtrip() {
        let image = Graymap::new(2, 2, 255, vec![1, 2, 3, 4]).unwrap();
        let mut out = Vec::new();
        image.write_to(&mut out).unwrap();
        let raster = Raster::read(out.as_slice()).unwrap();
        assert_eq!(raster, Raster::Graymap(image));
    }

    #[test]
    fn file_roundtrip() {
        let path = std::env::temp_dir().join(format!("pnmraster-io-{}.pgm", std::process::id()));
        let raster = Raster::from(Graymap::new(1, 2, 7, vec![7, 0]).unwrap());
        raster.save(&path).unwrap();
        let back = Raster::open(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(back, raster);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Raster::open("/nonexistent/pnmraster/none.pbm").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
