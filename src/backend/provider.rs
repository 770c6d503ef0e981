// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image provider serving the backend's current image.

use crate::engine::provider::{ImageProvider, ProvidedImage, ProviderError};
use std::sync::{Arc, RwLock};

/// Id under which the current image is served.
pub const CURRENT_IMAGE_ID: &str = "image";

/// Slot shared between the backend (writer) and its provider (reader).
pub(crate) type ImageSlot = Arc<RwLock<Option<Arc<ProvidedImage>>>>;

/// Serves the image most recently published by the backend.
pub struct BackendImageProvider {
    current: ImageSlot,
}

impl BackendImageProvider {
    pub(crate) fn new(current: ImageSlot) -> Self {
        Self { current }
    }
}

impl ImageProvider for BackendImageProvider {
    fn request_image(&self, id: &str) -> Result<Arc<ProvidedImage>, ProviderError> {
        if id != CURRENT_IMAGE_ID {
            return Err(ProviderError::UnknownImage(id.to_string()));
        }
        let current = self.current.read().unwrap_or_else(|e| e.into_inner());
        current.clone().ok_or(ProviderError::NoImage)
    }
}
