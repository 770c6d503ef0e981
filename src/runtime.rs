// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application runtime handle.
//!
//! Holds the process-wide GUI settings (identity and window icon) that the
//! native window is created with.

use crate::models::layout::WindowDef;
use std::path::Path;
use std::sync::Arc;

/// Explicitly owned GUI application state.
#[derive(Debug, Clone)]
pub struct Application {
    name: String,
    organization_name: String,
    organization_domain: String,
    icon: Option<Arc<egui::IconData>>,
}

impl Application {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            organization_name: String::new(),
            organization_domain: String::new(),
            icon: None,
        }
    }

    pub fn set_organization(&mut self, name: &str, domain: &str) {
        self.organization_name = name.to_string();
        self.organization_domain = domain.to_string();
    }

    /// Set the window icon. A missing or unreadable icon leaves the window without one.
    pub fn set_window_icon(&mut self, path: &Path) {
        match crate::io::media::load_icon(path) {
            Ok(icon) => self.icon = Some(Arc::new(icon)),
            Err(e) => log::warn!("Window icon not loaded: {:#}", e),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_icon(&self) -> bool {
        self.icon.is_some()
    }

    /// Reverse-domain application id, e.g. `ch.epfl.label-grab`.
    pub fn app_id(&self) -> String {
        [
            self.organization_domain.as_str(),
            self.organization_name.as_str(),
            self.name.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join(".")
    }

    /// Native window options for the given root window.
    pub fn native_options(&self, window: &WindowDef) -> eframe::NativeOptions {
        let mut viewport = egui::ViewportBuilder::default()
            .with_title(window.title.clone())
            .with_app_id(self.app_id())
            .with_drag_and_drop(true);

        if let Some(size) = window.inner_size {
            viewport = viewport.with_inner_size(size);
        }
        if let Some(size) = window.min_inner_size {
            viewport = viewport.with_min_inner_size(size);
        }
        if let Some(icon) = &self.icon {
            viewport = viewport.with_icon(Arc::clone(icon));
        }

        eframe::NativeOptions {
            viewport,
            ..Default::default()
        }
    }
}
