// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the labeling window. It renders the windows of the
//! loaded UI definition, reads the backend and utility objects from the
//! engine's context properties and displays the image served by the
//! `backend` image provider.

use crate::backend::{
    utils::{UiUtils, IMAGE_EXTENSIONS},
    LabelBackend,
};
use crate::engine::{EngineError, UiEngine};
use crate::launcher::{EventLoop, BACKEND_NAME, DEFAULT_STYLE, STYLE_ENV, UTILS_NAME};
use crate::models::layout::{PanelKind, WindowDef};
use crate::runtime::Application;
use crate::ui::{canvas, classes, status, toolbar, UiAction};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// URL of the backend's current image.
const CURRENT_IMAGE_URL: &str = "image://backend/image";

/// Runs the labeling window with eframe.
pub struct NativeEventLoop;

impl EventLoop for NativeEventLoop {
    fn exec(&mut self, app: Application, engine: UiEngine) -> Result<i32> {
        let window = engine
            .root_objects()
            .first()
            .cloned()
            .context("UI definition has no root window")?;
        let options = app.native_options(&window);

        eframe::run_native(
            app.name(),
            options,
            Box::new(
                move |cc: &eframe::CreationContext<'_>| -> Result<
                    Box<dyn eframe::App>,
                    Box<dyn std::error::Error + Send + Sync>,
                > {
                    let app = LabelGrabApp::new(cc, engine)?;
                    Ok(Box::new(app))
                },
            ),
        )
        .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

        Ok(0)
    }
}

/// Map a style name to egui visuals.
pub fn visuals_for_style(style: &str) -> egui::Visuals {
    match style.to_ascii_lowercase().as_str() {
        "dark" => egui::Visuals::dark(),
        "light" => egui::Visuals::light(),
        other => {
            log::warn!("Unknown UI style '{}', using {}", other, DEFAULT_STYLE);
            egui::Visuals::dark()
        }
    }
}

/// Main application state.
pub struct LabelGrabApp {
    /// Engine holding the backend, utilities and image providers
    engine: UiEngine,

    /// Windows declared by the UI definition; the first is the native window
    windows: Vec<WindowDef>,

    /// Texture of the provider image currently displayed
    image_texture: Option<egui::TextureHandle>,

    /// Image dimensions (width, height)
    image_size: Option<(u32, u32)>,

    /// Revision of the image the texture was built from
    image_revision: Option<u64>,

    /// Last error reported while requesting the image
    image_error: Option<String>,
}

impl LabelGrabApp {
    /// Create the application from a loaded engine.
    pub fn new(cc: &eframe::CreationContext<'_>, engine: UiEngine) -> Result<Self> {
        engine.context_property::<LabelBackend>(BACKEND_NAME)?;
        engine.context_property::<UiUtils>(UTILS_NAME)?;

        let style = std::env::var(STYLE_ENV).unwrap_or_else(|_| DEFAULT_STYLE.to_string());
        cc.egui_ctx.set_visuals(visuals_for_style(&style));

        let windows = engine.root_objects().to_vec();
        Ok(Self {
            engine,
            windows,
            image_texture: None,
            image_size: None,
            image_revision: None,
            image_error: None,
        })
    }

    fn backend(&self) -> Result<&LabelBackend, EngineError> {
        self.engine.context_property::<LabelBackend>(BACKEND_NAME)
    }

    fn utils(&self) -> UiUtils {
        self.engine
            .context_property::<UiUtils>(UTILS_NAME)
            .copied()
            .unwrap_or_default()
    }

    /// Re-upload the texture when the provider publishes a new image.
    fn refresh_texture(&mut self, ctx: &egui::Context) {
        match self.engine.request_image(CURRENT_IMAGE_URL) {
            Ok(image) => {
                self.image_error = None;
                if self.image_revision == Some(image.revision) {
                    return;
                }

                let size = [image.width as usize, image.height as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.rgba);
                let texture =
                    ctx.load_texture("backend_image", color_image, egui::TextureOptions::LINEAR);

                self.image_texture = Some(texture);
                self.image_size = Some((image.width, image.height));
                self.image_revision = Some(image.revision);
            }
            Err(e) => {
                let message = e.to_string();
                if self.image_error.as_deref() != Some(message.as_str()) {
                    log::warn!("Image request failed: {}", message);
                }
                self.image_error = Some(message);
            }
        }
    }

    /// Open the first dropped image file.
    fn dropped_image(&self, ctx: &egui::Context) -> UiAction {
        let utils = self.utils();
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());

        for file in dropped {
            let path = file
                .path
                .clone()
                .or_else(|| utils.file_url_to_path(&file.name));
            match path {
                Some(path) if utils.is_image_file(&path) => return UiAction::OpenImage(path),
                Some(path) => log::warn!("Ignoring dropped file {}", path.display()),
                None => log::warn!("Ignoring dropped item {}", file.name),
            }
        }
        UiAction::None
    }

    fn show_panel(&self, ui: &mut egui::Ui, panel: PanelKind) -> UiAction {
        let backend = match self.backend() {
            Ok(backend) => backend,
            Err(e) => {
                ui.label(e.to_string());
                return UiAction::None;
            }
        };

        match panel {
            PanelKind::Toolbar => toolbar::show(ui),
            PanelKind::Classes => classes::show(
                ui,
                backend.classes(),
                backend.selected_class().map(|c| c.id),
            ),
            PanelKind::Canvas => {
                canvas::show(
                    ui,
                    self.image_texture.as_ref(),
                    self.image_size,
                    self.image_error.as_deref(),
                );
                UiAction::None
            }
            PanelKind::Status => {
                let utils = self.utils();
                let base = backend.starting_directory();
                let info = status::StatusInfo {
                    image: backend.image_path().map(|p| utils.display_path(p, base)),
                    image_url: backend.image_path().map(|p| utils.path_to_file_url(p)),
                    selected_class: backend.selected_class().map(|c| c.name.as_str()),
                    starting_directory: base.map(|d| d.display().to_string()),
                };
                status::show(ui, &info);
                UiAction::None
            }
        }
    }

    /// Lay out the native window: toolbar on top, status at the bottom,
    /// classes on the right and the canvas in the centre.
    fn show_main_window(&self, ctx: &egui::Context, window: &WindowDef) -> UiAction {
        let mut action = UiAction::None;

        if window.has_panel(PanelKind::Toolbar) {
            let toolbar = egui::TopBottomPanel::top("toolbar")
                .show(ctx, |ui| self.show_panel(ui, PanelKind::Toolbar))
                .inner;
            action = action.or(toolbar);
        }

        if window.has_panel(PanelKind::Status) {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                self.show_panel(ui, PanelKind::Status);
            });
        }

        if window.has_panel(PanelKind::Classes) {
            let classes = egui::SidePanel::right("classes")
                .default_width(220.0)
                .show(ctx, |ui| self.show_panel(ui, PanelKind::Classes))
                .inner;
            action = action.or(classes);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if window.has_panel(PanelKind::Canvas) {
                self.show_panel(ui, PanelKind::Canvas);
            }
        });

        action
    }

    /// Additional windows float inside the native one, panels stacked vertically.
    fn show_floating_window(&self, ctx: &egui::Context, window: &WindowDef) -> UiAction {
        let mut action = UiAction::None;

        let mut frame = egui::Window::new(window.title.as_str()).id(egui::Id::new(&window.id));
        if let Some([width, height]) = window.inner_size {
            frame = frame.default_size([width, height]);
        }
        frame.show(ctx, |ui| {
            for panel in &window.panels {
                let panel_action = self.show_panel(ui, *panel);
                action = std::mem::replace(&mut action, UiAction::None).or(panel_action);
            }
        });

        action
    }

    fn apply(&mut self, action: UiAction, ctx: &egui::Context) {
        match action {
            UiAction::OpenImageDialog => {
                let mut dialog = rfd::FileDialog::new().add_filter("Images", IMAGE_EXTENSIONS);
                if let Ok(Some(dir)) = self.backend().map(|b| b.starting_directory()) {
                    dialog = dialog.set_directory(dir);
                }
                if let Some(path) = dialog.pick_file() {
                    self.open_image(path);
                }
            }
            UiAction::OpenImage(path) => self.open_image(path),
            UiAction::SelectClass(id) => {
                let result = self
                    .engine
                    .context_property_mut::<LabelBackend>(BACKEND_NAME)
                    .map_err(anyhow::Error::from)
                    .and_then(|backend| backend.select_class(id));
                match result {
                    Ok(()) => log::info!("Selected class {}", id),
                    Err(e) => log::error!("Failed to select class {}: {:#}", id, e),
                }
            }
            UiAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            UiAction::None => {}
        }
    }

    fn open_image(&mut self, path: PathBuf) {
        let result = self
            .engine
            .context_property_mut::<LabelBackend>(BACKEND_NAME)
            .map_err(anyhow::Error::from)
            .and_then(|backend| backend.set_image_path(&path));
        if let Err(e) = result {
            log::error!("Failed to open image {}: {:#}", path.display(), e);
        }
    }
}

impl eframe::App for LabelGrabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.refresh_texture(ctx);

        let mut action = self.dropped_image(ctx);

        if let Some((main, floating)) = self.windows.split_first() {
            action = action.or(self.show_main_window(ctx, main));
            for window in floating {
                action = action.or(self.show_floating_window(ctx, window));
            }
        }

        self.apply(action, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visuals_for_style() {
        assert!(visuals_for_style("dark").dark_mode);
        assert!(!visuals_for_style("Light").dark_mode);
        assert!(visuals_for_style("fusion").dark_mode);
    }

    #[test]
    fn test_current_image_url_addresses_backend() {
        let (provider, id) = crate::engine::provider::parse_image_url(CURRENT_IMAGE_URL).unwrap();
        assert_eq!(provider, BACKEND_NAME);
        assert_eq!(id, crate::backend::provider::CURRENT_IMAGE_ID);
    }
}
