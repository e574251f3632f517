use crate::error::TgaError;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the RGBA output buffer in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject an image whose dimensions or output size exceed a configured cap.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), TgaError> {
        let over = |value: u64, max: Option<u64>| max.filter(|&m| value > m);

        if let Some(max) = over(u64::from(width), self.max_width) {
            return Err(TgaError::LimitExceeded(alloc::format!(
                "width {width} exceeds limit {max}"
            )));
        }
        if let Some(max) = over(u64::from(height), self.max_height) {
            return Err(TgaError::LimitExceeded(alloc::format!(
                "height {height} exceeds limit {max}"
            )));
        }
        let pixels = u64::from(width) * u64::from(height);
        if let Some(max) = over(pixels, self.max_pixels) {
            return Err(TgaError::LimitExceeded(alloc::format!(
                "pixel count {pixels} exceeds limit {max}"
            )));
        }
        let bytes = pixels * 4;
        if let Some(max) = over(bytes, self.max_memory_bytes) {
            return Err(TgaError::LimitExceeded(alloc::format!(
                "output buffer of {bytes} bytes exceeds memory limit {max}"
            )));
        }
        Ok(())
    }
}
