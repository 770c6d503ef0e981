// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Named image providers.
//!
//! The UI requests images by URL (`image://<provider>/<id>`). Providers are
//! registered under a name and looked up at render time.

use super::EngineError;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// URL scheme used by the UI to address provider images.
pub const IMAGE_URL_SCHEME: &str = "image://";

/// Image data served to the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvidedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    /// Changes whenever the provider publishes a different image under the same id.
    pub revision: u64,
}

/// Errors reported by an image provider.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("unknown image id: {0}")]
    UnknownImage(String),
    #[error("no image has been loaded yet")]
    NoImage,
}

/// A hook the UI calls into to obtain image data.
pub trait ImageProvider: Send + Sync {
    fn request_image(&self, id: &str) -> Result<Arc<ProvidedImage>, ProviderError>;
}

/// Registry of image providers keyed by name.
#[derive(Default)]
pub struct ImageProviderRegistry {
    providers: HashMap<String, Arc<dyn ImageProvider>>,
}

impl ImageProviderRegistry {
    /// Register a provider. A name can only be registered once.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        provider: Arc<dyn ImageProvider>,
    ) -> Result<(), EngineError> {
        let name = name.into();
        if self.providers.contains_key(&name) {
            return Err(EngineError::DuplicateImageProvider(name));
        }
        self.providers.insert(name, provider);
        Ok(())
    }

    /// Look up a provider by name.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn ImageProvider>, EngineError> {
        self.providers
            .get(name)
            .cloned()
            .ok_or_else(|| EngineError::ImageProviderNotFound(name.to_string()))
    }

    /// Resolve an `image://<provider>/<id>` URL and request the image.
    pub fn request(&self, url: &str) -> Result<Arc<ProvidedImage>, EngineError> {
        let (name, id) = parse_image_url(url)?;
        let provider = self.resolve(name)?;
        Ok(provider.request_image(id)?)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }
}

/// Split an image URL into provider name and image id.
pub fn parse_image_url(url: &str) -> Result<(&str, &str), EngineError> {
    let invalid = || EngineError::InvalidImageUrl(url.to_string());

    let rest = url.strip_prefix(IMAGE_URL_SCHEME).ok_or_else(invalid)?;
    let (name, id) = rest.split_once('/').ok_or_else(invalid)?;
    if name.is_empty() || id.is_empty() {
        return Err(invalid());
    }
    Ok((name, id))
}
