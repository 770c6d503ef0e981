// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Labeling backend.
//!
//! The backend holds the label class configuration, the starting directory
//! for file dialogs and the image currently being labeled. The UI reaches it
//! through the `backend` context property and reads its image through the
//! image provider of the same name.

pub mod provider;
pub mod utils;

use crate::engine::provider::ProvidedImage;
use crate::models::classes::{ClassConfig, LabelClass};
use anyhow::{bail, Result};
use provider::{BackendImageProvider, ImageSlot};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// State shared with the UI layer.
#[derive(Default)]
pub struct LabelBackend {
    /// Path of the loaded class configuration
    config_path: Option<PathBuf>,

    /// Loaded class list
    config: ClassConfig,

    /// Id of the class currently selected for labeling
    selected_class: Option<u32>,

    /// Directory file dialogs start in (`None` when unset)
    starting_directory: Option<PathBuf>,

    /// Path of the image currently published
    image_path: Option<PathBuf>,

    /// Image published to the provider
    current_image: ImageSlot,

    /// Revision counter for published images
    revision: u64,
}

impl LabelBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the class configuration and select its first class.
    pub fn load_config(&mut self, path: &Path) -> Result<()> {
        let config = crate::io::serialization::import_class_config(path)?;
        if let Err(e) = config.validate() {
            bail!("Invalid class configuration {}: {}", path.display(), e);
        }

        log::info!(
            "Loaded {} classes from {}",
            config.classes.len(),
            path.display()
        );
        self.selected_class = config.classes.first().map(|c| c.id);
        self.config = config;
        self.config_path = Some(path.to_path_buf());
        Ok(())
    }

    pub fn set_starting_directory(&mut self, dir: Option<PathBuf>) {
        match &dir {
            Some(dir) => log::info!("Starting directory: {}", dir.display()),
            None => log::debug!("No starting directory"),
        }
        self.starting_directory = dir;
    }

    /// Decode an image and publish it to the image provider.
    pub fn set_image_path(&mut self, path: &Path) -> Result<()> {
        let loaded = crate::io::media::load_image(path)?;
        self.revision += 1;

        let image = Arc::new(ProvidedImage {
            width: loaded.width,
            height: loaded.height,
            rgba: loaded.pixels,
            revision: self.revision,
        });
        *self.current_image.write().unwrap_or_else(|e| e.into_inner()) = Some(image);
        self.image_path = Some(path.to_path_buf());

        log::info!(
            "Loaded image: {} ({}x{})",
            path.display(),
            loaded.width,
            loaded.height
        );
        Ok(())
    }

    /// Provider serving this backend's current image.
    pub fn image_provider(&self) -> Arc<BackendImageProvider> {
        Arc::new(BackendImageProvider::new(Arc::clone(&self.current_image)))
    }

    /// Select the class used for labeling.
    pub fn select_class(&mut self, id: u32) -> Result<()> {
        if self.config.get(id).is_none() {
            bail!("Unknown class id {}", id);
        }
        self.selected_class = Some(id);
        Ok(())
    }

    pub fn classes(&self) -> &[LabelClass] {
        &self.config.classes
    }

    pub fn selected_class(&self) -> Option<&LabelClass> {
        self.selected_class.and_then(|id| self.config.get(id))
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn starting_directory(&self) -> Option<&Path> {
        self.starting_directory.as_deref()
    }

    pub fn image_path(&self) -> Option<&Path> {
        self.image_path.as_deref()
    }
}
