// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the aspect-preserving fit used to place an image
//! inside the canvas.

/// Largest size with the image's aspect ratio that fits in the available area.
pub fn fit_size(image_width: u32, image_height: u32, available: (f32, f32)) -> (f32, f32) {
    let (available_width, available_height) = available;
    if image_width == 0 || image_height == 0 || available_width <= 0.0 || available_height <= 0.0 {
        return (0.0, 0.0);
    }

    let img_aspect = image_width as f32 / image_height as f32;
    let available_aspect = available_width / available_height;

    if img_aspect > available_aspect {
        // Image is wider - fit to width
        (available_width, available_width / img_aspect)
    } else {
        // Image is taller - fit to height
        (available_height * img_aspect, available_height)
    }
}

/// Offset that centres `size` inside `available`.
pub fn center_offset(size: (f32, f32), available: (f32, f32)) -> (f32, f32) {
    ((available.0 - size.0) / 2.0, (available.1 - size.1) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_image() {
        let (w, h) = fit_size(1920, 1080, (800.0, 800.0));
        assert!((w - 800.0).abs() < 0.0001);
        assert!((h - 450.0).abs() < 0.0001);
    }

    #[test]
    fn test_fit_tall_image() {
        let (w, h) = fit_size(300, 600, (800.0, 400.0));
        assert!((w - 200.0).abs() < 0.0001);
        assert!((h - 400.0).abs() < 0.0001);
    }

    #[test]
    fn test_fit_degenerate() {
        assert_eq!(fit_size(0, 10, (100.0, 100.0)), (0.0, 0.0));
        assert_eq!(fit_size(10, 10, (0.0, 100.0)), (0.0, 0.0));
    }

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset((800.0, 450.0), (800.0, 800.0)), (0.0, 175.0));
    }
}
