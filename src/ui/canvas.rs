// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image canvas.
//!
//! This module provides the main canvas area that displays the image served
//! by the backend's image provider, scaled to fit and centred.

use crate::util::geometry::{center_offset, fit_size};

/// Display the canvas with the given texture, or a placeholder message.
pub fn show(
    ui: &mut egui::Ui,
    image_texture: Option<&egui::TextureHandle>,
    image_size: Option<(u32, u32)>,
    message: Option<&str>,
) {
    // Set background color
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        match (image_texture, image_size) {
            (Some(texture), Some((img_width, img_height))) => {
                let available = ui.available_size();
                let (display_width, display_height) =
                    fit_size(img_width, img_height, (available.x, available.y));
                let (x_offset, y_offset) =
                    center_offset((display_width, display_height), (available.x, available.y));

                let image_rect = egui::Rect::from_min_size(
                    ui.min_rect().min + egui::vec2(x_offset, y_offset),
                    egui::vec2(display_width, display_height),
                );

                ui.painter().image(
                    texture.id(),
                    image_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            _ => {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new(message.unwrap_or("No image"))
                            .color(egui::Color32::from_gray(180)),
                    );
                });
            }
        }
    });
}
