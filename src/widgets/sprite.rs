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
use crate::{AnimatedTexture, Color, Layer, Quad, RenderBatch, TextureCache, TextureHandle, UiCtx, UiEvent, Vec2f, Widget, WidgetBase};

/// Textured (or flat tinted) rectangle, optionally animated.
pub struct Sprite {
    base: WidgetBase,
    texture_name: Option<String>,
    texture: Option<TextureHandle>,
    animation: Option<AnimatedTexture>,
    color: Color,
}

impl Sprite {
    /// Creates a sprite showing a single texture.
    pub fn new(position: Vec2f, size: Vec2f, layer: Layer, texture: &str) -> Self {
        Self {
            base: WidgetBase::new(position, size, layer),
            texture_name: Some(texture.to_string()),
            texture: None,
            animation: None,
            color: Color::WHITE,
        }
    }

    /// Creates a sprite cycling through `frames`.
    pub fn animated(position: Vec2f, size: Vec2f, layer: Layer, frames: Vec<String>) -> Self {
        Self {
            base: WidgetBase::new(position, size, layer),
            texture_name: None,
            texture: None,
            animation: Some(AnimatedTexture::new(frames)),
            color: Color::WHITE,
        }
    }

    /// Creates an untextured sprite filled with `color`.
    pub fn colored(position: Vec2f, size: Vec2f, layer: Layer, color: Color) -> Self {
        Self {
            base: WidgetBase::new(position, size, layer),
            texture_name: None,
            texture: None,
            animation: None,
            color,
        }
    }

    /// Sets the tint.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Tint applied to the texture.
    pub fn color(&self) -> Color { self.color }

    /// Changes the tint.
    pub fn set_color(&mut self, color: Color) { self.color = color; }

    /// Replaces the displayed texture with an already resolved one.
    pub fn set_texture(&mut self, texture: TextureHandle) {
        self.texture_name = Some(texture.name().to_string());
        self.texture = Some(texture);
        self.animation = None;
    }

    /// Texture currently drawn, if resolved.
    pub fn texture(&self) -> Option<&TextureHandle> {
        match &self.animation {
            Some(animation) => animation.current_texture(),
            None => self.texture.as_ref(),
        }
    }

    /// Frame animation, for animated sprites.
    pub fn animation(&self) -> Option<&AnimatedTexture> { self.animation.as_ref() }

    /// Mutable frame animation, for animated sprites.
    pub fn animation_mut(&mut self) -> Option<&mut AnimatedTexture> { self.animation.as_mut() }

    fn is_flat(&self) -> bool { self.texture_name.is_none() && self.animation.is_none() }
}

impl Widget for Sprite {
    implement_widget_base!();

    fn on_ui_event(&mut self, _event: &UiEvent, _ctx: &mut UiCtx<'_>) {}

    fn update(&mut self, ctx: &mut UiCtx<'_>) {
        if let Some(animation) = self.animation.as_mut() {
            animation.tick(ctx.elapsed_seconds());
        }
    }

    fn render(&self, batch: &mut dyn RenderBatch) {
        if !self.is_shown() {
            return;
        }
        self.base.render_borders(batch);

        let depth = self.base.depth();
        match self.texture() {
            Some(texture) if texture.is_initialized() => {
                batch.draw_quad(&Quad::new(Some(texture.id()), self.position(), self.size(), self.color, depth));
            }
            _ if self.is_flat() && !self.color.is_transparent() => {
                batch.draw_quad(&Quad::new(None, self.position(), self.size(), self.color, depth));
            }
            _ => {}
        }
    }

    fn create(&mut self, textures: &mut TextureCache) {
        if let Some(name) = &self.texture_name {
            self.texture = Some(textures.get_texture(name));
        }
        if let Some(animation) = self.animation.as_mut() {
            animation.create(textures);
        }
    }

    fn release(&mut self) {
        self.texture = None;
        if let Some(animation) = self.animation.as_mut() {
            animation.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{v, Harness};
    use crate::{CommandList, DrawCommand, TextureInfo, DEFAULT_LAYER};

    #[test]
    fn renders_only_initialized_textures() {
        let mut cache = TextureCache::new();
        let mut sprite = Sprite::new(v(0.0, 0.0), v(16.0, 16.0), DEFAULT_LAYER, "Assets/missing.dds");
        sprite.create(&mut cache);

        let mut list = CommandList::new();
        sprite.render(&mut list);
        assert!(list.is_empty());

        let tex = cache.set_texture("Assets/present.dds", TextureInfo { width: 4, height: 4 }).unwrap();
        sprite.set_texture(tex.clone());
        sprite.render(&mut list);
        match list.commands() {
            [DrawCommand::Quad(q)] => assert_eq!(q.texture, Some(tex.id())),
            other => panic!("unexpected commands {:?}", other),
        }
    }

    #[test]
    fn flat_sprite_draws_tint_unless_transparent() {
        let mut list = CommandList::new();
        Sprite::colored(v(0.0, 0.0), v(4.0, 4.0), DEFAULT_LAYER, Color::BLACK).render(&mut list);
        Sprite::colored(v(0.0, 0.0), v(4.0, 4.0), DEFAULT_LAYER, Color::TRANSPARENT).render(&mut list);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn update_ticks_the_animation() {
        let mut h = Harness::new();
        let mut cache = TextureCache::new();
        let mut sprite = Sprite::animated(v(0.0, 0.0), v(4.0, 4.0), DEFAULT_LAYER, vec!["a.dds".into(), "b.dds".into()]);
        sprite.create(&mut cache);
        if let Some(anim) = sprite.animation_mut() {
            anim.play(2.0, false);
        }
        sprite.update(&mut h.ctx(0.6));
        assert_eq!(sprite.texture().map(|t| t.name()), Some("b.dds"));
    }
}
