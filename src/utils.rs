//! Small helpers shared by the archive, processing and report modules.

use crate::constants::PROGRESS_BAR_TEMPLATE;
use crate::logger;
use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar with consistent styling
///
/// Returns a hidden bar in quiet mode so callers can drive it unconditionally.
pub fn create_progress_bar(len: u64) -> ProgressBar {
    if logger::is_quiet() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
        pb.set_style(style.progress_chars("=> "));
    }
    pb
}

/// Format file size in human-readable format
///
/// # Arguments
/// * `bytes` - Size in bytes
///
/// # Returns
/// * Human-readable size string (e.g., "1.2 MB", "512 B")
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Format a byte count with thousands separators, e.g. `12,345`
pub fn format_bytes_grouped(bytes: u64) -> String {
    let digits = bytes.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Calculate compression ratio as a percentage
///
/// Equal to `(1 - compressed / original) * 100`. Positive means the file
/// shrank, negative means it grew. An empty original yields 0.
pub fn calculate_compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - compressed_size as f64) / original_size as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1.0 GB");
    }

    #[test]
    fn test_format_bytes_grouped() {
        assert_eq!(format_bytes_grouped(0), "0");
        assert_eq!(format_bytes_grouped(999), "999");
        assert_eq!(format_bytes_grouped(1000), "1,000");
        assert_eq!(format_bytes_grouped(123456), "123,456");
        assert_eq!(format_bytes_grouped(1234567), "1,234,567");
    }

    #[test]
    fn test_calculate_compression_ratio() {
        assert_eq!(calculate_compression_ratio(1000, 800), 20.0);
        assert_eq!(calculate_compression_ratio(1000, 1200), -20.0);
        assert_eq!(calculate_compression_ratio(1000, 1000), 0.0);
        assert_eq!(calculate_compression_ratio(0, 500), 0.0);
    }
}
