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
#![deny(missing_docs)]
//! `shell-ui` is the retained-mode dialog and widget layer used by game sample shells.
//!
//! Widgets are owned by [`Dialog`]s, receive decoded [`UiEvent`]s, advance their timers once per
//! frame and record draw calls into any [`RenderBatch`]. Fonts, textures and platform input are
//! collaborators supplied by the host application; the crate never talks to a GPU or a window.
//!
//! Widgets never call back into application code. Anything the application needs to react to
//! (a pressed button, a selected drop-down option, Enter inside a text field) is queued as a
//! [`Notification`] and collected with [`Context::take_notifications`].

use std::sync::atomic::{AtomicU64, Ordering};

mod animated_texture;
mod batch;
mod context;
mod dialog;
mod error;
mod event;
mod font;
mod input;
mod style;
mod texture;
mod widget;
mod widgets;

#[cfg(test)]
pub(crate) mod test_support;

pub use animated_texture::*;
pub use batch::*;
pub use context::*;
pub use dialog::*;
pub use error::*;
pub use event::*;
pub use font::*;
pub use input::*;
pub use rs_math3d::Vec2f;
pub use style::*;
pub use texture::*;
pub use widget::*;
pub use widgets::*;

use bitflags::*;

/// Paint and hit-test ordering value. Higher layers are drawn later, on top of lower ones.
pub type Layer = i32;

/// Layer assigned to widgets that do not ask for a specific one.
pub const DEFAULT_LAYER: Layer = 100;

/// Converts a layer into the depth value handed to the render batch.
/// Smaller depths are closer to the viewer.
pub fn layer_to_depth(layer: Layer) -> f32 { 0.7 - layer as f32 * 0.001 }

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
/// Process-unique identity of a widget.
///
/// Identities are handed out at construction and never reused, so they can be stored by the
/// application and used to look widgets up in their owning dialog later on.
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocates a fresh identity.
    pub fn next() -> Self { Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed)) }

    /// Returns the raw numeric value.
    pub fn raw(self) -> u64 { self.0 }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Mouse button state as reported by the platform layer.
    pub struct MouseButton : u32 {
        /// Middle mouse button.
        const MIDDLE = 4;
        /// Right mouse button.
        const RIGHT = 2;
        /// Left mouse button.
        const LEFT = 1;
        /// No buttons pressed.
        const NONE = 0;
    }
}

impl MouseButton {
    /// Returns `true` if the middle mouse button is pressed.
    pub fn is_middle(&self) -> bool { self.intersects(Self::MIDDLE) }
    /// Returns `true` if the right mouse button is pressed.
    pub fn is_right(&self) -> bool { self.intersects(Self::RIGHT) }
    /// Returns `true` if the left mouse button is pressed.
    pub fn is_left(&self) -> bool { self.intersects(Self::LEFT) }
    /// Returns `true` if no mouse buttons are pressed.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Modifier keys held while a key event was produced.
    pub struct KeyMods : u32 {
        /// Alt key held.
        const ALT = 4;
        /// Control key held.
        const CTRL = 2;
        /// Shift key held.
        const SHIFT = 1;
        /// No modifiers active.
        const NONE = 0;
    }
}

impl KeyMods {
    /// Returns `true` if no modifiers are active.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
    /// Returns `true` if Alt is held.
    pub fn is_alt(&self) -> bool { self.intersects(Self::ALT) }
    /// Returns `true` if Control is held.
    pub fn is_ctrl(&self) -> bool { self.intersects(Self::CTRL) }
    /// Returns `true` if Shift is held.
    pub fn is_shift(&self) -> bool { self.intersects(Self::SHIFT) }
}

#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
/// Simple RGBA color stored with 8-bit components.
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = color(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Color = color(0, 0, 0, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = color(0, 0, 0, 0);

    /// Returns `true` when the color would not show up at all.
    pub fn is_transparent(&self) -> bool { self.a == 0 }
}

/// Convenience constructor for [`Color`].
pub const fn color(r: u8, g: u8, b: u8, a: u8) -> Color { Color { r, g, b, a } }

/// Convenience constructor for [`Vec2f`].
pub fn vec2f(x: f32, y: f32) -> Vec2f { Vec2f::new(x, y) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_layers_are_closer() {
        assert!(layer_to_depth(DEFAULT_LAYER) < layer_to_depth(DEFAULT_LAYER - 1));
        assert!((layer_to_depth(0) - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn widget_ids_are_unique() {
        let a = WidgetId::next();
        let b = WidgetId::next();
        assert_ne!(a, b);
        assert!(b.raw() > a.raw());
    }
}
