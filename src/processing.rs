use crate::config::OptimizerConfig;
use crate::constants::{LIBDEFLATER_HIGH_LEVEL, MAX_FILE_SIZE, MAX_IMAGE_DIMENSION, OXIPNG_PRESET};
use crate::error::{OptimizerError, Result};
use crate::formats::OutputFormat;
use crate::optimizer::ImageOptimizer;
use crate::report::OptimizationStats;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use oxipng::{Deflaters, Options};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

impl ImageOptimizer {
    /// Optimizes a single image: load -> convert -> fit -> encode -> save
    ///
    /// # Arguments
    /// * `input` - Path to the original image
    /// * `output` - Path the optimized image is written to (overwritten)
    /// * `size` - Exact output dimensions `(width, height)`
    /// * `format` - Target encoding
    ///
    /// # Returns
    /// * `Ok(OptimizationStats)` - On-disk sizes before and after plus the ratio
    /// * `Err(OptimizerError)` - If any step fails; nothing is retried
    pub fn optimize_image(
        &self,
        input: &Path,
        output: &Path,
        size: (u32, u32),
        format: OutputFormat,
    ) -> Result<OptimizationStats> {
        let started = Instant::now();

        let (img, original_size) = load_image_with_metadata(input)?;
        tracing::debug!(
            input = %input.display(),
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "decoded original"
        );

        let fitted = fit_to_size(img, size, format);
        let encoded = encode_image(&fitted, format, self.config())?;
        save_encoded(&encoded, output)?;

        let optimized_size = fs::metadata(output)?.len();
        tracing::debug!(
            output = %output.display(),
            %format,
            original_size,
            optimized_size,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "wrote optimized image"
        );

        Ok(OptimizationStats::from_sizes(original_size, optimized_size))
    }
}

/// Loads an image file and returns it along with its size on disk.
///
/// # Returns
/// * `Ok((image, file_size))` - The decoded image and its file size in bytes
/// * `Err(OptimizerError)` - If the file is missing, too large, undecodable
///   or its dimensions exceed the limit
pub fn load_image_with_metadata(input_path: &Path) -> Result<(DynamicImage, u64)> {
    if !input_path.is_file() {
        return Err(OptimizerError::FileNotFound(input_path.to_path_buf()));
    }

    // Check file size before loading
    let file_size = fs::metadata(input_path)?.len();
    if file_size > MAX_FILE_SIZE {
        return Err(OptimizerError::FileTooLarge(file_size, MAX_FILE_SIZE));
    }

    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()?;

    let (width, height) = img.dimensions();
    if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        return Err(OptimizerError::InvalidDimensions(
            width,
            height,
            MAX_IMAGE_DIMENSION,
        ));
    }

    Ok((img, file_size))
}

/// Converts the colour mode for `format` and crop-fills to exactly `size`.
///
/// PNG keeps an alpha channel (RGBA8); JPEG and WebP are flattened to RGB8.
/// The centred box with the target aspect ratio is cropped from the source
/// first and only that box is resampled, so a very thin source never
/// produces an oversized intermediate.
pub fn fit_to_size(img: DynamicImage, size: (u32, u32), format: OutputFormat) -> DynamicImage {
    let converted = if format.keeps_alpha() {
        DynamicImage::ImageRgba8(img.into_rgba8())
    } else {
        DynamicImage::ImageRgb8(img.into_rgb8())
    };

    let (width, height) = size;
    if converted.dimensions() == size {
        return converted;
    }

    let (x, y, crop_width, crop_height) = centered_crop_box(converted.dimensions(), size);
    let cropped = converted.crop_imm(x, y, crop_width, crop_height);
    if cropped.dimensions() == size {
        return cropped;
    }
    cropped.resize_exact(width, height, FilterType::Lanczos3)
}

/// Largest centred `(x, y, width, height)` box inside `source` whose aspect
/// ratio matches `target`. Never empty.
pub fn centered_crop_box(source: (u32, u32), target: (u32, u32)) -> (u32, u32, u32, u32) {
    let (src_w, src_h) = (u64::from(source.0), u64::from(source.1));
    let (dst_w, dst_h) = (u64::from(target.0.max(1)), u64::from(target.1.max(1)));

    let (crop_w, crop_h) = if src_w * dst_h > src_h * dst_w {
        // source is wider than the target: trim the sides
        let w = (src_h * dst_w + dst_h / 2) / dst_h;
        (w.clamp(1, src_w), src_h)
    } else {
        let h = (src_w * dst_h + dst_w / 2) / dst_w;
        (src_w, h.clamp(1, src_h))
    };

    let x = (src_w - crop_w) / 2;
    let y = (src_h - crop_h) / 2;
    (x as u32, y as u32, crop_w as u32, crop_h as u32)
}

/// Encodes `img` in memory with the format's quality settings.
pub fn encode_image(
    img: &DynamicImage,
    format: OutputFormat,
    config: &OptimizerConfig,
) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Jpeg => {
            let mut buf = Vec::new();
            let encoder = JpegEncoder::new_with_quality(&mut buf, config.jpeg_quality);
            img.write_with_encoder(encoder)?;
            Ok(buf)
        }
        OutputFormat::WebP => {
            let encoder = webp::Encoder::from_image(img)
                .map_err(|e| OptimizerError::WebpEncoding(e.to_string()))?;
            Ok(encoder.encode(f32::from(config.webp_quality)).to_vec())
        }
        OutputFormat::Png => {
            let mut raw = Vec::new();
            img.write_to(&mut Cursor::new(&mut raw), ImageFormat::Png)?;

            // Lossless re-deflate of the encoder output
            let mut options = Options::from_preset(OXIPNG_PRESET);
            options.deflate = Deflaters::Libdeflater {
                compression: LIBDEFLATER_HIGH_LEVEL,
            };
            oxipng::optimize_from_memory(&raw, &options)
                .map_err(|e| OptimizerError::PngOptimization(e.to_string()))
        }
    }
}

fn save_encoded(bytes: &[u8], output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .map_err(|_| OptimizerError::DirectoryCreationFailed(parent.to_path_buf()))?;
    }
    fs::write(output, bytes)?;
    Ok(())
}
