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
use crate::widget::implement_widget_base;
use crate::{Color, FontHandle, Key, Layer, RenderBatch, Signal, Sprite, TextLabel, TextureCache, UiCtx, UiEvent, Vec2f, Widget, WidgetBase};

/// Texture shown while ticked.
pub const DEFAULT_TICKED_ASSET: &str = "Assets/checkbox_ticked.dds";
/// Texture shown while unticked.
pub const DEFAULT_UNTICKED_ASSET: &str = "Assets/checkbox_unticked.dds";

/// Square toggle followed by a caption.
pub struct Checkbox {
    base: WidgetBase,
    label: TextLabel,
    ticked_sprite: Sprite,
    unticked_sprite: Sprite,
    ticked: bool,
}

impl Checkbox {
    /// Creates an unticked checkbox with the default box textures.
    pub fn new(position: Vec2f, size: Vec2f, layer: Layer, text: &str) -> Self { Self::with_assets(position, size, layer, text, DEFAULT_TICKED_ASSET, DEFAULT_UNTICKED_ASSET) }

    /// Creates an unticked checkbox with custom box textures.
    pub fn with_assets(position: Vec2f, size: Vec2f, layer: Layer, text: &str, ticked: &str, unticked: &str) -> Self {
        let square = Vec2f::new(size.y, size.y);
        Self {
            base: WidgetBase::new(position, size, layer),
            label: TextLabel::new(Vec2f::new(position.x + square.x, position.y), Vec2f::new(size.x - square.x, size.y), layer, text),
            ticked_sprite: Sprite::new(position, square, layer, ticked),
            unticked_sprite: Sprite::new(position, square, layer, unticked),
            ticked: false,
        }
    }

    /// Sets the caption font.
    pub fn with_font(mut self, font: FontHandle) -> Self {
        self.label.set_font(font);
        self
    }

    /// Sets the caption background and text tints.
    pub fn with_colors(mut self, background: Color, text: Color) -> Self {
        self.label = self.label.with_colors(background, text);
        self
    }

    /// Caption label.
    pub fn label(&self) -> &TextLabel { &self.label }

    /// Current state.
    pub fn is_ticked(&self) -> bool { self.ticked }

    /// Changes the state, raising [`Signal::CheckboxToggled`] when `notify` is set.
    pub fn set_ticked(&mut self, ticked: bool, notify: bool) {
        self.ticked = ticked;
        if notify {
            self.base.emit(Signal::CheckboxToggled(ticked));
        }
    }

    fn active_sprite(&self) -> &Sprite {
        if self.ticked {
            &self.ticked_sprite
        } else {
            &self.unticked_sprite
        }
    }
}

impl Widget for Checkbox {
    implement_widget_base!();

    fn on_ui_event(&mut self, event: &UiEvent, _ctx: &mut UiCtx<'_>) {
        if !self.is_shown() || !self.is_enabled() {
            return;
        }
        let pressed = matches!(event, UiEvent::MousePressed { .. });
        if pressed || (self.is_focused() && event.is_key_pressed(Key::Enter)) {
            self.set_ticked(!self.ticked, true);
        }
    }

    fn update(&mut self, ctx: &mut UiCtx<'_>) { self.label.update(ctx); }

    fn render(&self, batch: &mut dyn RenderBatch) {
        if !self.is_shown() {
            return;
        }
        self.base.render_borders(batch);
        self.label.render(batch);
        self.active_sprite().render(batch);
    }

    fn create(&mut self, textures: &mut TextureCache) {
        self.label.create(textures);
        self.ticked_sprite.create(textures);
        self.unticked_sprite.create(textures);
    }

    fn release(&mut self) {
        self.label.release();
        self.ticked_sprite.release();
        self.unticked_sprite.release();
    }

    fn set_position(&mut self, position: Vec2f) {
        self.base.set_position(position);
        self.ticked_sprite.set_position(position);
        self.unticked_sprite.set_position(position);
        let offset = self.ticked_sprite.size().x;
        self.label.set_position(Vec2f::new(position.x + offset, position.y));
    }

    fn set_size(&mut self, size: Vec2f) {
        self.base.set_size(size);
        let square = Vec2f::new(size.y, size.y);
        self.ticked_sprite.set_size(square);
        self.unticked_sprite.set_size(square);
        self.label.set_size(Vec2f::new(size.x - square.x, size.y));
    }
}
