// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Bundled, read-only application resources.

use std::path::{Path, PathBuf};

const RESOURCE_DIR: &str = "resources";

/// Locations of the files shipped with the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resources {
    root: PathBuf,
}

impl Resources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Find the resource directory next to the executable, falling back to
    /// the one in the source tree.
    pub fn locate() -> Self {
        let built_in = Path::new(env!("CARGO_MANIFEST_DIR")).join(RESOURCE_DIR);
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(RESOURCE_DIR)));

        let root = beside_exe
            .into_iter()
            .chain(std::iter::once(built_in.clone()))
            .find(|dir| dir.is_dir())
            .unwrap_or(built_in);

        log::debug!("Using resources from {}", root.display());
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn default_config(&self) -> PathBuf {
        self.root.join("config").join("default_classes.json")
    }

    pub fn icon(&self) -> PathBuf {
        self.root.join("label-grab-icon.png")
    }

    pub fn sample_image(&self) -> PathBuf {
        self.root.join("images").join("test.png")
    }

    pub fn ui_dir(&self) -> PathBuf {
        self.root.join("ui")
    }

    pub fn main_ui(&self) -> PathBuf {
        self.ui_dir().join("main.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_resources_exist() {
        let resources = Resources::locate();
        assert!(resources.default_config().is_file());
        assert!(resources.icon().is_file());
        assert!(resources.sample_image().is_file());
        assert!(resources.main_ui().is_file());
    }

    #[test]
    fn test_bundled_files_load() {
        let resources = Resources::locate();

        let config = crate::io::serialization::import_class_config(&resources.default_config())
            .unwrap();
        assert!(config.validate().is_ok());

        let document = crate::io::serialization::import_ui_document(&resources.main_ui()).unwrap();
        assert!(!document.windows.is_empty());

        assert!(crate::io::media::load_image(&resources.sample_image()).is_ok());
        assert!(crate::io::media::load_icon(&resources.icon()).is_ok());
    }
}
