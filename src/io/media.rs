// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image file loading.
//!
//! This module decodes image files into RGBA8 pixel buffers suitable for
//! uploading as egui textures or using as window icons.

use anyhow::{Context, Result};
use std::path::Path;

/// A decoded image in RGBA8 layout.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Load an image file and convert it to RGBA8.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to decode image {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();

    Ok(LoadedImage {
        width,
        height,
        pixels: img.into_raw(),
    })
}

/// Load an image file as window icon data.
pub fn load_icon(path: &Path) -> Result<egui::IconData> {
    let img = load_image(path)?;
    Ok(egui::IconData {
        rgba: img.pixels,
        width: img.width,
        height: img.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_image_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!((img.width, img.height), (3, 2));
        assert_eq!(img.pixels.len(), 3 * 2 * 4);
        assert_eq!(&img.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_load_image_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_image(&dir.path().join("missing.png")).is_err());
    }

    #[test]
    fn test_load_icon() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        image::RgbaImage::new(4, 4).save(&path).unwrap();

        let icon = load_icon(&path).unwrap();
        assert_eq!((icon.width, icon.height), (4, 4));
        assert_eq!(icon.rgba.len(), 64);
    }
}
