// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Path helpers exposed to the UI as the `utils` context property.

use std::path::{Path, PathBuf};

/// File extensions the labeling UI accepts as images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tif", "tiff"];

const FILE_URL_PREFIX: &str = "file://";

/// Stateless helpers for the UI layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct UiUtils;

impl UiUtils {
    pub fn new() -> Self {
        Self
    }

    /// Whether the path has a supported image extension.
    pub fn is_image_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                IMAGE_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }

    /// Show `path` relative to `base` when it lies inside it.
    pub fn display_path(&self, path: &Path, base: Option<&Path>) -> String {
        base.and_then(|base| path.strip_prefix(base).ok())
            .filter(|rel| !rel.as_os_str().is_empty())
            .unwrap_or(path)
            .display()
            .to_string()
    }

    pub fn path_to_file_url(&self, path: &Path) -> String {
        format!("{}{}", FILE_URL_PREFIX, path.display())
    }

    /// Convert a `file://` URL back into a path. Anything else is `None`.
    pub fn file_url_to_path(&self, url: &str) -> Option<PathBuf> {
        url.strip_prefix(FILE_URL_PREFIX)
            .filter(|rest| !rest.is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_file() {
        let utils = UiUtils::new();
        assert!(utils.is_image_file(Path::new("/data/frame_001.PNG")));
        assert!(utils.is_image_file(Path::new("photo.jpeg")));
        assert!(!utils.is_image_file(Path::new("labels.json")));
        assert!(!utils.is_image_file(Path::new("README")));
    }

    #[test]
    fn test_display_path() {
        let utils = UiUtils::new();
        let base = Path::new("/tmp/proj");
        assert_eq!(
            utils.display_path(Path::new("/tmp/proj/img/a.png"), Some(base)),
            Path::new("img/a.png").display().to_string()
        );
        assert_eq!(
            utils.display_path(Path::new("/other/a.png"), Some(base)),
            "/other/a.png"
        );
        assert_eq!(utils.display_path(Path::new("/other/a.png"), None), "/other/a.png");
    }

    #[test]
    fn test_file_urls() {
        let utils = UiUtils::new();
        assert_eq!(utils.path_to_file_url(Path::new("/tmp/a.png")), "file:///tmp/a.png");
        assert_eq!(
            utils.file_url_to_path("file:///tmp/a.png"),
            Some(PathBuf::from("/tmp/a.png"))
        );
        assert_eq!(utils.file_url_to_path("http://example.com/a.png"), None);
        assert_eq!(utils.file_url_to_path("file://"), None);
    }
}
