// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Label Grab application.

pub mod canvas;
pub mod classes;
pub mod status;
pub mod toolbar;

use std::path::PathBuf;

/// Result of interacting with a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    None,
    OpenImageDialog,
    OpenImage(PathBuf),
    SelectClass(u32),
    Quit,
}

impl UiAction {
    /// Keep the first action taken this frame.
    pub fn or(self, other: UiAction) -> UiAction {
        match self {
            UiAction::None => other,
            action => action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_keeps_first_action() {
        assert_eq!(UiAction::None.or(UiAction::Quit), UiAction::Quit);
        assert_eq!(
            UiAction::SelectClass(2).or(UiAction::Quit),
            UiAction::SelectClass(2)
        );
        assert_eq!(UiAction::None.or(UiAction::None), UiAction::None);
    }
}
