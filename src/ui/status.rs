// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Status bar.

/// What the status bar reports.
pub struct StatusInfo<'a> {
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub selected_class: Option<&'a str>,
    pub starting_directory: Option<String>,
}

/// Display the status bar.
pub fn show(ui: &mut egui::Ui, info: &StatusInfo<'_>) {
    ui.horizontal(|ui| {
        match (&info.image, &info.image_url) {
            (Some(image), Some(url)) => {
                ui.label(format!("Image: {}", image)).on_hover_text(url);
            }
            (Some(image), None) => {
                ui.label(format!("Image: {}", image));
            }
            _ => {
                ui.label("No image loaded");
            }
        }
        ui.separator();
        ui.label(format!("Class: {}", info.selected_class.unwrap_or("-")));
        if let Some(dir) = &info.starting_directory {
            ui.separator();
            ui.label(egui::RichText::new(dir).weak());
        }
    });
}
