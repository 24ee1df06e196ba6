use alloc::format;

use crate::error::NetpbmError;

/// Resource caps checked against the header before any sample is decoded.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the decoded sample buffer.
    pub max_memory_bytes: Option<u64>,
}

fn exceeded(what: &str, value: u64, limit: Option<u64>) -> Result<(), NetpbmError> {
    match limit {
        Some(limit) if value > limit => Err(NetpbmError::LimitExceeded(format!(
            "{what} {value} exceeds limit {limit}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), NetpbmError> {
        let (width, height) = (u64::from(width), u64::from(height));
        exceeded("width", width, self.max_width)?;
        exceeded("height", height, self.max_height)?;
        exceeded("pixel count", width * height, self.max_pixels)
    }

    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), NetpbmError> {
        exceeded("sample buffer of bytes", bytes as u64, self.max_memory_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn default_accepts_anything() {
        let limits = Limits::default();
        assert!(limits.check(u32::MAX, u32::MAX).is_ok());
        assert!(limits.check_memory(usize::MAX).is_ok());
    }

    #[test]
    fn each_limit_is_enforced() {
        let limits = Limits {
            max_width: Some(10),
            max_height: Some(20),
            max_pixels: Some(100),
            max_memory_bytes: Some(64),
        };
        assert!(limits.check(10, 10).is_ok());
        assert_eq!(limits.check(11, 1).unwrap_err().kind(), ErrorKind::LimitExceeded);
        assert_eq!(limits.check(1, 21).unwrap_err().kind(), ErrorKind::LimitExceeded);
        assert_eq!(limits.check(10, 11).unwrap_err().kind(), ErrorKind::LimitExceeded);
        assert!(limits.check_memory(64).is_ok());
        assert_eq!(limits.check_memory(65).unwrap_err().kind(), ErrorKind::LimitExceeded);
    }
}
