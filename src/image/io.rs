//! I/O helpers for color images and JSON reports.
//!
//! - `load_planar_image`: read a PNG/JPEG/etc. into a planar f32 buffer in [0, 1].
//! - `save_planar_image`: write a planar buffer to an 8-bit image file.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::convert::{interleaved_to_planar, planar_to_interleaved};
use super::planar::PlanarF32;
use image::{DynamicImage, GrayImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk as an RGB planar buffer normalized to [0, 1].
pub fn load_planar_image(path: &Path) -> Result<PlanarF32, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    let interleaved: Vec<f32> = img.into_raw().iter().map(|&b| b as f32 / 255.0).collect();
    Ok(interleaved_to_planar(&interleaved, w, h, 3))
}

/// Save a planar buffer to an image file, clamping samples into [0, 255].
///
/// Supports one (grayscale) or three (RGB) channels.
pub fn save_planar_image(img: &PlanarF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let (w, h, channels) = img.shape();
    let interleaved = planar_to_interleaved(img);
    let bytes: Vec<u8> = interleaved
        .iter()
        .map(|&v| (v * 255.0).clamp(0.0, 255.0) as u8)
        .collect();
    let dynimg = match channels {
        1 => GrayImage::from_raw(w as u32, h as u32, bytes)
            .map(DynamicImage::ImageLuma8)
            .ok_or_else(|| "Failed to create grayscale buffer".to_string())?,
        3 => RgbImage::from_raw(w as u32, h as u32, bytes)
            .map(DynamicImage::ImageRgb8)
            .ok_or_else(|| "Failed to create RGB buffer".to_string())?,
        n => return Err(format!("Unsupported channel count {n} for image export")),
    };
    dynimg
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
