use crate::constants::{
    DEFAULT_JPEG_QUALITY, DEFAULT_WEBP_QUALITY, DEFAULT_WEB_SIZE, MAX_QUALITY, MAX_WEB_SIZE,
    MIN_QUALITY, OPTIMIZED_DIR, ORIGINALS_DIR,
};
use crate::error::{OptimizerError, Result};
use std::path::{Path, PathBuf};

/// Directory layout and encoder settings for one optimizer run.
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Archive of untouched `*-logo.png` originals
    pub originals_dir: PathBuf,
    /// Where web-ready images are written
    pub optimized_dir: PathBuf,
    /// Exact output dimensions `(width, height)`
    pub web_size: (u32, u32),
    pub jpeg_quality: u8,
    pub webp_quality: u8,
}

impl OptimizerConfig {
    /// Builds a config rooted at `root`, validating any overrides.
    ///
    /// # Arguments
    /// * `root` - Project root holding `assets/originals` and `public/question-sets`
    /// * `size` - Square output edge in pixels (default 256)
    /// * `jpeg_quality` - JPEG quality 1-100 (default 85)
    /// * `webp_quality` - WebP quality 1-100 (default 80)
    ///
    /// # Returns
    /// * `Err(OptimizerError::InvalidQuality)` or `Err(OptimizerError::InvalidSize)`
    ///   when an override is out of range
    pub fn new(
        root: &Path,
        size: Option<u32>,
        jpeg_quality: Option<u8>,
        webp_quality: Option<u8>,
    ) -> Result<Self> {
        let size = size.unwrap_or(DEFAULT_WEB_SIZE);
        if size == 0 || size > MAX_WEB_SIZE {
            return Err(OptimizerError::InvalidSize(size, MAX_WEB_SIZE));
        }

        let jpeg_quality = validate_quality(jpeg_quality.unwrap_or(DEFAULT_JPEG_QUALITY))?;
        let webp_quality = validate_quality(webp_quality.unwrap_or(DEFAULT_WEBP_QUALITY))?;

        Ok(Self {
            originals_dir: root.join(ORIGINALS_DIR),
            optimized_dir: root.join(OPTIMIZED_DIR),
            web_size: (size, size),
            jpeg_quality,
            webp_quality,
        })
    }

    /// Default settings rooted at `root`.
    pub fn with_root(root: &Path) -> Self {
        Self {
            originals_dir: root.join(ORIGINALS_DIR),
            optimized_dir: root.join(OPTIMIZED_DIR),
            web_size: (DEFAULT_WEB_SIZE, DEFAULT_WEB_SIZE),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            webp_quality: DEFAULT_WEBP_QUALITY,
        }
    }
}

fn validate_quality(quality: u8) -> Result<u8> {
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(OptimizerError::InvalidQuality(quality));
    }
    Ok(quality)
}
