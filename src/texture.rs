//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
//! Process-wide texture lookup keyed by asset identifier.
//!
//! The cache never decodes pixels itself. A [`TextureLoader`] supplied by the host resolves an
//! asset name into the extent of a texture it uploaded; widgets only ever see the resulting
//! [`TextureHandle`].

use crate::{UiError, UiResult};
use log::{debug, warn};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
/// Identifier the render backend uses to bind a texture.
pub struct TextureId(u32);

impl TextureId {
    /// Returns the raw numeric value.
    pub fn raw(self) -> u32 { self.0 }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
/// Extent of a texture that the backend has uploaded.
pub struct TextureInfo {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

#[derive(Debug)]
/// Cached texture entry.
pub struct Texture {
    id: TextureId,
    name: String,
    info: Option<TextureInfo>,
}

impl Texture {
    /// Backend identifier.
    pub fn id(&self) -> TextureId { self.id }
    /// Asset identifier the texture was requested with.
    pub fn name(&self) -> &str { &self.name }
    /// Extent, if the texture was successfully loaded.
    pub fn info(&self) -> Option<TextureInfo> { self.info }
    /// Returns `true` when the texture can be drawn.
    pub fn is_initialized(&self) -> bool { self.info.is_some() }
}

/// Shared texture handle held by widgets.
pub type TextureHandle = Rc<Texture>;

/// Host hook that makes an asset available to the render backend.
pub trait TextureLoader {
    /// Loads `name` and reports its extent.
    fn load(&mut self, name: &str) -> UiResult<TextureInfo>;
}

#[derive(Default)]
/// Deduplicating texture cache.
pub struct TextureCache {
    entries: HashMap<String, TextureHandle>,
    next_id: u32,
    loader: Option<Box<dyn TextureLoader>>,
}

impl TextureCache {
    /// Creates a cache without a loader. Requested textures stay uninitialized until they are
    /// registered with [`TextureCache::set_texture`].
    pub fn new() -> Self { Self::default() }

    /// Creates a cache that resolves unknown names through `loader`.
    pub fn with_loader(loader: Box<dyn TextureLoader>) -> Self { Self { loader: Some(loader), ..Self::default() } }

    /// Returns the texture registered under `name`, loading it on first use.
    ///
    /// Repeated requests for the same name return the same handle. A failed load is logged and
    /// yields an uninitialized texture that renders nothing.
    pub fn get_texture(&mut self, name: &str) -> TextureHandle {
        if let Some(texture) = self.entries.get(name) {
            return texture.clone();
        }

        let info = match self.loader.as_mut() {
            Some(loader) => match loader.load(name) {
                Ok(info) => Some(info),
                Err(err) => {
                    warn!("{}", err);
                    None
                }
            },
            None => None,
        };
        debug!("texture cache: `{}` registered (loaded: {})", name, info.is_some());
        self.insert(name, info)
    }

    /// Returns `true` if `name` is cached and drawable.
    pub fn is_texture_present(&self, name: &str) -> bool { self.entries.get(name).map(|t| t.is_initialized()).unwrap_or(false) }

    /// Registers (or replaces) a texture the host uploaded itself.
    pub fn set_texture(&mut self, name: &str, info: TextureInfo) -> UiResult<TextureHandle> {
        if info.width == 0 || info.height == 0 {
            return Err(UiError::InvalidTexture { name: name.to_string() });
        }
        Ok(self.insert(name, Some(info)))
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize { self.entries.len() }

    /// Returns `true` when nothing is cached.
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Drops every cached entry. Handles already held by widgets stay valid but are no longer
    /// shared with new requests.
    pub fn release(&mut self) {
        debug!("texture cache: releasing {} entries", self.entries.len());
        self.entries.clear();
    }

    fn insert(&mut self, name: &str, info: Option<TextureInfo>) -> TextureHandle {
        let id = TextureId(self.next_id);
        self.next_id += 1;
        let texture = Rc::new(Texture { id, name: name.to_string(), info });
        self.entries.insert(name.to_string(), texture.clone());
        texture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingLoader;

    impl TextureLoader for FailingLoader {
        fn load(&mut self, name: &str) -> UiResult<TextureInfo> {
            Err(UiError::TextureLoad { name: name.to_string(), reason: "missing".to_string() })
        }
    }

    struct CountingLoader(Rc<std::cell::Cell<usize>>);

    impl TextureLoader for CountingLoader {
        fn load(&mut self, _name: &str) -> UiResult<TextureInfo> {
            self.0.set(self.0.get() + 1);
            Ok(TextureInfo { width: 4, height: 4 })
        }
    }

    #[test]
    fn get_texture_dedups_by_name() {
        let loads = Rc::new(std::cell::Cell::new(0));
        let mut cache = TextureCache::with_loader(Box::new(CountingLoader(loads.clone())));
        let a = cache.get_texture("Assets/arrow.dds");
        let b = cache.get_texture("Assets/arrow.dds");
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(loads.get(), 1);
        assert!(cache.is_texture_present("Assets/arrow.dds"));
    }

    #[test]
    fn failed_load_leaves_texture_uninitialized() {
        let mut cache = TextureCache::with_loader(Box::new(FailingLoader));
        let tex = cache.get_texture("nope.dds");
        assert!(!tex.is_initialized());
        assert!(!cache.is_texture_present("nope.dds"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn set_texture_rejects_empty_extent() {
        let mut cache = TextureCache::new();
        assert!(matches!(cache.set_texture("empty", TextureInfo { width: 0, height: 8 }), Err(UiError::InvalidTexture { .. })));
        let tex = cache.set_texture("ok", TextureInfo { width: 8, height: 8 }).unwrap();
        assert_eq!(tex.name(), "ok");
        cache.release();
        assert!(cache.is_empty());
    }
}
