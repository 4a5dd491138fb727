#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestProject {
    pub temp_dir: TempDir,
    pub originals: PathBuf,
    pub optimized: PathBuf,
}

impl TestProject {
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// A temp project root with `assets/originals` and `public/question-sets`.
pub fn create_project() -> TestProject {
    let temp_dir = TempDir::new().unwrap();
    let originals = temp_dir.path().join("assets").join("originals");
    let optimized = temp_dir.path().join("public").join("question-sets");
    fs::create_dir_all(&originals).unwrap();
    fs::create_dir_all(&optimized).unwrap();
    TestProject {
        temp_dir,
        originals,
        optimized,
    }
}

pub fn logo_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        let alpha = if (x / 16 + y / 16) % 2 == 0 { 255 } else { 128 };
        Rgba([(x * 7 % 256) as u8, (y * 3 % 256) as u8, ((x ^ y) % 256) as u8, alpha])
    }))
}

/// Writes a real PNG logo to `dir/name`.
pub fn create_logo(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    logo_image(width, height).save(&path).unwrap();
    path
}

/// Writes `img` as a PNG to `dir/name`, keeping its colour mode.
pub fn create_logo_from(dir: &Path, name: &str, img: &DynamicImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

/// Writes a palette (colour type 3) PNG with four colours scattered in noise.
pub fn create_indexed_logo(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    const COLORS: [[u8; 3]; 4] = [[220, 20, 60], [30, 144, 255], [255, 215, 0], [34, 139, 34]];
    let mut seed: u32 = 0x2545_f491;
    let img = DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |_, _| {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        Rgb(COLORS[(seed >> 16) as usize % COLORS.len()])
    }));

    let mut raw = Vec::new();
    img.write_to(&mut Cursor::new(&mut raw), ImageFormat::Png).unwrap();
    let indexed = oxipng::optimize_from_memory(&raw, &oxipng::Options::from_preset(2)).unwrap();
    assert_eq!(indexed[25], 3, "fixture was not palette-reduced");

    let path = dir.join(name);
    fs::write(&path, indexed).unwrap();
    path
}

pub fn create_corrupt_logo(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"\x89PNG but not really").unwrap();
    path
}

/// Sorted file names directly inside `dir`.
pub fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
