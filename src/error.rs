use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("WebP encoding error: {0}")]
    WebpEncoding(String),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid target size: {0}px. Must be between 1 and {1}")]
    InvalidSize(u32, u32),

    #[error("Invalid image dimensions: {0}x{1}. Maximum allowed: {2}x{2}")]
    InvalidDimensions(u32, u32, u32),

    #[error("File too large: {0} bytes. Maximum allowed: {1} bytes")]
    FileTooLarge(u64, u64),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to create directory: {0}")]
    DirectoryCreationFailed(PathBuf),

    #[error("Originals directory does not exist: {0}")]
    ArchiveMissing(PathBuf),

    #[error("No *-logo.png files found in: {0}")]
    NoOriginalsFound(PathBuf),

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

pub type Result<T> = std::result::Result<T, OptimizerError>;
