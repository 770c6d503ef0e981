// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI engine.
//!
//! The engine owns everything the UI layer can reach: the loaded UI
//! definition, the named context properties and the image providers.
//! Dropping the engine releases all of them.

pub mod context;
pub mod provider;

use crate::models::layout::WindowDef;
use context::ContextProperties;
use provider::{ImageProvider, ImageProviderRegistry, ProvidedImage, ProviderError};
use std::any::Any;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by the engine's named registries.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("context property '{0}' is not registered")]
    ContextPropertyNotFound(String),
    #[error("context property '{0}' has a different type")]
    ContextPropertyType(String),
    #[error("image provider '{0}' is not registered")]
    ImageProviderNotFound(String),
    #[error("image provider '{0}' is already registered")]
    DuplicateImageProvider(String),
    #[error("invalid image url: {0}")]
    InvalidImageUrl(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Loads UI definitions and exposes backend objects to them.
#[derive(Default)]
pub struct UiEngine {
    import_paths: Vec<PathBuf>,
    context: ContextProperties,
    image_providers: ImageProviderRegistry,
    root_objects: Vec<WindowDef>,
}

impl UiEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory searched when loading relative UI definition paths.
    pub fn add_import_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        log::debug!("Added UI import path {}", path.display());
        self.import_paths.push(path);
    }

    pub fn set_context_property<T: Any>(&mut self, name: &str, value: T) {
        self.context.set(name, value);
    }

    pub fn context_property<T: Any>(&self, name: &str) -> Result<&T, EngineError> {
        self.context.get(name)
    }

    pub fn context_property_mut<T: Any>(&mut self, name: &str) -> Result<&mut T, EngineError> {
        self.context.get_mut(name)
    }

    pub fn add_image_provider(
        &mut self,
        name: &str,
        provider: Arc<dyn ImageProvider>,
    ) -> Result<(), EngineError> {
        self.image_providers.register(name, provider)?;
        log::debug!(
            "Registered image provider '{}' ({} total)",
            name,
            self.image_providers.len()
        );
        Ok(())
    }

    pub fn image_provider(&self, name: &str) -> Result<Arc<dyn ImageProvider>, EngineError> {
        self.image_providers.resolve(name)
    }

    /// Request an image by `image://<provider>/<id>` URL.
    pub fn request_image(&self, url: &str) -> Result<Arc<ProvidedImage>, EngineError> {
        self.image_providers.request(url)
    }

    /// Load a UI definition. Failures are logged and leave no root objects.
    pub fn load(&mut self, path: &Path) {
        let resolved = self.resolve_path(path);
        match crate::io::serialization::import_ui_document(&resolved) {
            Ok(document) => {
                log::info!(
                    "Loaded UI definition {} ({} windows)",
                    resolved.display(),
                    document.windows.len()
                );
                self.root_objects.extend(document.windows);
            }
            Err(e) => {
                log::error!("{:#}", e);
            }
        }
    }

    /// Windows produced by the loaded UI definitions.
    pub fn root_objects(&self) -> &[WindowDef] {
        &self.root_objects
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        self.import_paths
            .iter()
            .map(|dir| dir.join(path))
            .find(|candidate| candidate.is_file())
            .unwrap_or_else(|| path.to_path_buf())
    }
}

impl Drop for UiEngine {
    fn drop(&mut self) {
        log::debug!("Releasing UI engine");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAIN_UI: &str = "windows:\n  - id: main\n    title: Main\n    panels: [canvas]\n";

    #[test]
    fn test_load_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.yaml");
        std::fs::write(&path, MAIN_UI).unwrap();

        let mut engine = UiEngine::new();
        engine.load(&path);
        assert_eq!(engine.root_objects().len(), 1);
        assert_eq!(engine.root_objects()[0].id, "main");
    }

    #[test]
    fn test_load_relative_path_uses_import_paths_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::create_dir(second.path().join("ui")).unwrap();
        std::fs::write(second.path().join("ui").join("main.yaml"), MAIN_UI).unwrap();

        let mut engine = UiEngine::new();
        engine.add_import_path(first.path());
        engine.add_import_path(second.path());
        engine.load(Path::new("ui/main.yaml"));
        assert_eq!(engine.root_objects().len(), 1);
    }

    #[test]
    fn test_load_failure_leaves_no_root_objects() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = UiEngine::new();

        engine.load(&dir.path().join("missing.yaml"));
        assert!(engine.root_objects().is_empty());

        let broken = dir.path().join("broken.yaml");
        std::fs::write(&broken, "windows: [ {").unwrap();
        engine.load(&broken);
        assert!(engine.root_objects().is_empty());
    }

    #[test]
    fn test_empty_document_has_no_root_objects() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yaml");
        std::fs::write(&path, "windows: []\n").unwrap();

        let mut engine = UiEngine::new();
        engine.load(&path);
        assert!(engine.root_objects().is_empty());
    }

    #[test]
    fn test_request_image_without_provider() {
        let engine = UiEngine::new();
        assert!(matches!(
            engine.request_image("image://backend/image"),
            Err(EngineError::ImageProviderNotFound(_))
        ));
    }
}
