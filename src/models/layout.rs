// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI definition documents.
//!
//! A UI definition declares the windows of the application and the panels
//! each window is made of. Every declared window is a root object of the
//! loaded definition.

use serde::{Deserialize, Serialize};

/// Panels a window can be composed of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    Toolbar,
    Classes,
    Canvas,
    Status,
}

/// A window declared by a UI definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowDef {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub inner_size: Option<[f32; 2]>,
    #[serde(default)]
    pub min_inner_size: Option<[f32; 2]>,
    #[serde(default)]
    pub panels: Vec<PanelKind>,
}

impl WindowDef {
    pub fn has_panel(&self, kind: PanelKind) -> bool {
        self.panels.contains(&kind)
    }
}

/// Top-level UI definition document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiDocument {
    #[serde(default)]
    pub windows: Vec<WindowDef>,
}
