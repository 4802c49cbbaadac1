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
use crate::{layer_to_depth, Color, FontHandle, Layer, RenderBatch, Sprite, TextureCache, UiCtx, UiEvent, Vec2f, Widget, WidgetBase};

/// Horizontal gap between a left-aligned label's edge and its text.
pub const DEFAULT_HORIZONTAL_OFFSET: f32 = 10.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Horizontal placement of label text.
pub enum Alignment {
    /// Flush left, after the horizontal offset.
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
}

/// Single run of text over an optional background image.
pub struct TextLabel {
    base: WidgetBase,
    text: String,
    font: Option<FontHandle>,
    text_position: Vec2f,
    horizontal_offset: f32,
    text_color: Color,
    alignment: Alignment,
    background: Sprite,
    background_visible: bool,
}

impl TextLabel {
    /// Creates a centered label without a background.
    pub fn new(position: Vec2f, size: Vec2f, layer: Layer, text: &str) -> Self {
        Self {
            base: WidgetBase::new(position, size, layer),
            text: text.to_string(),
            font: None,
            text_position: position,
            horizontal_offset: DEFAULT_HORIZONTAL_OFFSET,
            text_color: Color::WHITE,
            alignment: Alignment::Center,
            background: Sprite::colored(position, size, layer, Color::WHITE),
            background_visible: false,
        }
    }

    /// Shows `asset` behind the text.
    pub fn with_background(mut self, asset: &str) -> Self {
        let color = self.background.color();
        self.background = Sprite::new(self.position(), self.size(), self.layer(), asset).with_color(color);
        self.background_visible = true;
        self
    }

    /// Cycles through `frames` behind the text.
    pub fn with_animated_background(mut self, frames: Vec<String>) -> Self {
        let color = self.background.color();
        self.background_visible = !frames.is_empty();
        self.background = Sprite::animated(self.position(), self.size(), self.layer(), frames).with_color(color);
        self
    }

    /// Sets text alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self.update_text_position();
        self
    }

    /// Sets the text and background tints.
    pub fn with_colors(mut self, background: Color, text: Color) -> Self {
        self.background.set_color(background);
        self.text_color = text;
        self
    }

    /// Sets the font used to measure and draw the text.
    pub fn with_font(mut self, font: FontHandle) -> Self {
        self.set_font(font);
        self
    }

    /// Displayed text.
    pub fn text(&self) -> &str { &self.text }

    /// Replaces the displayed text.
    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
            self.update_text_position();
        }
    }

    /// Empties the displayed text.
    pub fn clear_text(&mut self) { self.set_text(""); }

    /// Font used to measure and draw the text.
    pub fn font(&self) -> Option<&FontHandle> { self.font.as_ref() }

    /// Changes the font.
    pub fn set_font(&mut self, font: FontHandle) {
        self.font = Some(font);
        self.update_text_position();
    }

    /// Top-left corner of the drawn text.
    pub fn text_position(&self) -> Vec2f { self.text_position }

    /// Changes the left gap used by left alignment and the fit test.
    pub fn set_horizontal_offset(&mut self, offset: f32) {
        self.horizontal_offset = offset;
        self.update_text_position();
    }

    /// Text tint.
    pub fn text_color(&self) -> Color { self.text_color }

    /// Changes the text tint.
    pub fn set_text_color(&mut self, color: Color) { self.text_color = color; }

    /// Background tint.
    pub fn background_color(&self) -> Color { self.background.color() }

    /// Changes the background tint.
    pub fn set_background_color(&mut self, color: Color) { self.background.set_color(color); }

    /// Background sprite.
    pub fn background(&self) -> &Sprite { &self.background }

    /// Mutable background sprite.
    pub fn background_mut(&mut self) -> &mut Sprite { &mut self.background }

    /// Shows or hides the background.
    pub fn set_background_visible(&mut self, visible: bool) { self.background_visible = visible; }

    fn update_text_position(&mut self) {
        let font = match &self.font {
            Some(font) => font.clone(),
            None => return,
        };
        let pos = self.position();
        let size = self.size();
        let extent = font.measure_string(&self.text);

        let mut x = self.text_position.x;
        if extent.x < size.x - self.horizontal_offset {
            x = match self.alignment {
                Alignment::Center => pos.x + size.x / 2.0 - extent.x / 2.0,
                Alignment::Right => pos.x + size.x - extent.x,
                Alignment::Left => pos.x + self.horizontal_offset,
            };
        }
        let y = pos.y + size.y / 2.0 - extent.y / 2.0;
        self.text_position = Vec2f::new(x.ceil(), y.ceil());
    }
}

impl Widget for TextLabel {
    implement_widget_base!();

    fn on_ui_event(&mut self, event: &UiEvent, ctx: &mut UiCtx<'_>) { self.background.on_ui_event(event, ctx); }

    fn update(&mut self, ctx: &mut UiCtx<'_>) { self.background.update(ctx); }

    fn render(&self, batch: &mut dyn RenderBatch) {
        if !self.is_shown() {
            return;
        }
        self.base.render_borders(batch);

        if self.background_visible {
            self.background.render(batch);
        }
        if let Some(font) = &self.font {
            if !self.text.is_empty() {
                batch.draw_text(font.as_ref(), &self.text, self.text_position, self.text_color, layer_to_depth(self.layer() + 1));
            }
        }
    }

    fn create(&mut self, textures: &mut TextureCache) { self.background.create(textures); }

    fn release(&mut self) { self.background.release(); }

    fn set_position(&mut self, position: Vec2f) {
        self.base.set_position(position);
        self.background.set_position(position);
        self.update_text_position();
    }

    fn set_size(&mut self, size: Vec2f) {
        self.base.set_size(size);
        self.background.set_size(size);
        self.update_text_position();
    }
}
