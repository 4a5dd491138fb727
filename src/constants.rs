pub const DEFAULT_WEB_SIZE: u32 = 256;
pub const MAX_WEB_SIZE: u32 = 4096;

pub const DEFAULT_JPEG_QUALITY: u8 = 85;
pub const DEFAULT_WEBP_QUALITY: u8 = 80;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

pub const OXIPNG_PRESET: u8 = 2;
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;

/// Inputs above this size are refused before decoding (100 MiB).
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;
pub const MAX_IMAGE_DIMENSION: u32 = 16384;

pub const ORIGINALS_DIR: &str = "assets/originals";
pub const OPTIMIZED_DIR: &str = "public/question-sets";
pub const LOGO_SUFFIX: &str = "-logo.png";

pub const PROGRESS_BAR_TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}";

// Common output message prefixes
pub const ORIGINALS_PREFIX: &str = "📁 Originals:";
pub const OPTIMIZED_PREFIX: &str = "📁 Optimized:";
pub const BACKUP_PREFIX: &str = "📦";
pub const PROCESS_PREFIX: &str = "🗜️ ";
pub const SUCCESS_PREFIX: &str = "✅";
pub const SUMMARY_PREFIX: &str = "📊";
