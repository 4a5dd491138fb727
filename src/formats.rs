//! Output format handling
//!
//! The set of formats a logo can be re-encoded into and the file extension
//! each one is written with.

use clap::ValueEnum;
use std::fmt;

/// Supported output image formats
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// PNG format, losslessly optimized with oxipng
    #[default]
    #[value(name = "PNG")]
    Png,
    /// WebP format with lossy compression
    #[value(name = "WEBP")]
    WebP,
    /// JPEG format with lossy compression
    #[value(name = "JPEG")]
    Jpeg,
}

impl OutputFormat {
    /// Returns the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::WebP => "webp",
            OutputFormat::Jpeg => "jpg",
        }
    }

    /// Whether the encoder needs an alpha channel
    pub fn keeps_alpha(&self) -> bool {
        matches!(self, OutputFormat::Png)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Png => "PNG",
            OutputFormat::WebP => "WEBP",
            OutputFormat::Jpeg => "JPEG",
        };
        write!(f, "{}", name)
    }
}
