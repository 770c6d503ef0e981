// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Configuration and UI definition deserialization.
//!
//! Class configurations are JSON documents, UI definitions are YAML.

use crate::models::{classes::ClassConfig, layout::UiDocument};
use anyhow::{Context, Result};
use std::path::Path;

/// Import a class configuration from JSON format.
pub fn import_class_config(path: &Path) -> Result<ClassConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read class configuration {}", path.display()))?;
    let config: ClassConfig = serde_json::from_str(&json)
        .with_context(|| format!("Invalid class configuration {}", path.display()))?;
    Ok(config)
}

/// Import a UI definition from YAML format.
pub fn import_ui_document(path: &Path) -> Result<UiDocument> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read UI definition {}", path.display()))?;
    let document = serde_yaml::from_str(&yaml)
        .with_context(|| format!("Invalid UI definition {}", path.display()))?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{classes::LabelClass, layout::PanelKind};

    #[test]
    fn test_import_class_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classes.json");
        std::fs::write(
            &path,
            r#"{ "classes": [ { "id": 2, "name": "sky", "color": [70, 130, 180] } ] }"#,
        )
        .unwrap();

        let config = import_class_config(&path).unwrap();
        assert_eq!(config.classes, vec![LabelClass::new(2, "sky", [70, 130, 180])]);
    }

    #[test]
    fn test_import_class_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = import_class_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.json"));
    }

    #[test]
    fn test_import_ui_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.yaml");
        std::fs::write(
            &path,
            "windows:\n  - id: main\n    title: Test\n    inner_size: [640.0, 480.0]\n    panels: [toolbar, canvas]\n",
        )
        .unwrap();

        let document = import_ui_document(&path).unwrap();
        assert_eq!(document.windows.len(), 1);
        let window = &document.windows[0];
        assert_eq!(window.title, "Test");
        assert_eq!(window.inner_size, Some([640.0, 480.0]));
        assert!(window.has_panel(PanelKind::Canvas));
        assert!(!window.has_panel(PanelKind::Status));
    }

    #[test]
    fn test_import_ui_document_rejects_unknown_panel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.yaml");
        std::fs::write(
            &path,
            "windows:\n  - id: main\n    title: Test\n    panels: [timeline]\n",
        )
        .unwrap();

        assert!(import_ui_document(&path).is_err());
    }
}
