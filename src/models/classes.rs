// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Label class configuration.
//!
//! This module defines the class list that a labeling session works with:
//! every class has a numeric id, a display name and an RGB colour.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single label class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelClass {
    pub id: u32,
    pub name: String,
    pub color: [u8; 3],
}

impl LabelClass {
    pub fn new(id: u32, name: impl Into<String>, color: [u8; 3]) -> Self {
        Self {
            id,
            name: name.into(),
            color,
        }
    }
}

/// The class list loaded from a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassConfig {
    pub classes: Vec<LabelClass>,
}

impl ClassConfig {
    /// Check that the class list is usable: non-empty, with unique ids.
    pub fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            bail!("class configuration contains no classes");
        }

        let mut seen = HashSet::new();
        for class in &self.classes {
            if !seen.insert(class.id) {
                bail!("duplicate class id {} ({})", class.id, class.name);
            }
        }
        Ok(())
    }

    /// Look up a class by id.
    pub fn get(&self, id: u32) -> Option<&LabelClass> {
        self.classes.iter().find(|c| c.id == id)
    }
}
