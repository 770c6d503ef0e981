// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Label class list panel.
//!
//! Shows the configured classes with their colours and lets the user pick
//! the class to label with.

use super::UiAction;
use crate::models::classes::LabelClass;

/// Display the class list.
pub fn show(ui: &mut egui::Ui, classes: &[LabelClass], selected: Option<u32>) -> UiAction {
    let mut action = UiAction::None;

    ui.heading("Classes");
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        for class in classes {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                let [r, g, b] = class.color;
                ui.painter()
                    .rect_filled(rect, 2.0, egui::Color32::from_rgb(r, g, b));

                let label = format!("{}  {}", class.id, class.name);
                if ui
                    .selectable_label(selected == Some(class.id), label)
                    .clicked()
                {
                    action = UiAction::SelectClass(class.id);
                }
            });
        }
    });

    action
}
