// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with file operations.

use super::UiAction;

/// Display the toolbar.
pub fn show(ui: &mut egui::Ui) -> UiAction {
    let mut action = UiAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("📂 Open Image...").clicked() {
            action = UiAction::OpenImageDialog;
        }

        ui.separator();

        if ui.button("Quit").clicked() {
            action = UiAction::Quit;
        }

        ui.separator();

        ui.label(
            egui::RichText::new("Drop an image file on the window to open it")
                .italics()
                .weak(),
        );
    });

    action
}
