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
use crate::{Color, FontHandle, Layer, Quad, RenderBatch, TextLabel, TextureCache, TextureHandle, UiCtx, UiEvent, Vec2f, Widget, WidgetBase};

/// Horizontal bar that fills from left to right, captioned with a percentage.
pub struct ProgressBar {
    base: WidgetBase,
    label: TextLabel,
    text: String,
    finished_asset: String,
    unfinished_asset: String,
    finished: Option<TextureHandle>,
    unfinished: Option<TextureHandle>,
    progress: f32,
}

impl ProgressBar {
    /// Creates an empty bar. The caption reads `"{text}: {percent}%"`.
    pub fn new(position: Vec2f, size: Vec2f, layer: Layer, text: &str, finished_asset: &str, unfinished_asset: &str) -> Self {
        Self {
            base: WidgetBase::new(position, size, layer),
            label: TextLabel::new(position, size, layer + 1, text),
            text: text.to_string(),
            finished_asset: finished_asset.to_string(),
            unfinished_asset: unfinished_asset.to_string(),
            finished: None,
            unfinished: None,
            progress: 0.0,
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

    /// Sets the completed fraction, clamped to `0..=1`.
    pub fn set_progress(&mut self, progress: f32) { self.progress = progress.clamp(0.0, 1.0); }

    /// Completed fraction.
    pub fn progress(&self) -> f32 { self.progress }

    /// Caption label.
    pub fn label(&self) -> &TextLabel { &self.label }
}

impl Widget for ProgressBar {
    implement_widget_base!();

    fn on_ui_event(&mut self, _event: &UiEvent, _ctx: &mut UiCtx<'_>) {}

    fn update(&mut self, ctx: &mut UiCtx<'_>) {
        let caption = format!("{}: {}%", self.text, (self.progress * 100.0) as i32);
        self.label.set_text(&caption);
        self.label.update(ctx);
    }

    fn render(&self, batch: &mut dyn RenderBatch) {
        if !self.is_shown() {
            return;
        }
        self.base.render_borders(batch);

        if let (Some(finished), Some(unfinished)) = (&self.finished, &self.unfinished) {
            if finished.is_initialized() && unfinished.is_initialized() {
                let (pos, size, p) = (self.position(), self.size(), self.progress);
                let done = size.x * p;
                let depth = self.base.depth();
                batch.draw_quad(
                    &Quad::new(Some(finished.id()), pos, Vec2f::new(done, size.y), Color::WHITE, depth).with_uv(Vec2f::new(0.0, 0.0), Vec2f::new(p, 1.0)),
                );
                batch.draw_quad(
                    &Quad::new(Some(unfinished.id()), Vec2f::new(pos.x + done, pos.y), Vec2f::new(size.x - done, size.y), Color::WHITE, depth)
                        .with_uv(Vec2f::new(p, 0.0), Vec2f::new(1.0, 1.0)),
                );
            }
        }
        self.label.render(batch);
    }

    fn create(&mut self, textures: &mut TextureCache) {
        self.label.create(textures);
        if !self.finished_asset.is_empty() {
            self.finished = Some(textures.get_texture(&self.finished_asset));
        }
        if !self.unfinished_asset.is_empty() {
            self.unfinished = Some(textures.get_texture(&self.unfinished_asset));
        }
    }

    fn release(&mut self) {
        self.label.release();
        self.finished = None;
        self.unfinished = None;
    }

    fn set_position(&mut self, position: Vec2f) {
        self.base.set_position(position);
        self.label.set_position(position);
    }

    fn set_size(&mut self, size: Vec2f) {
        self.base.set_size(size);
        self.label.set_size(size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{mono_font, v, Harness};
    use crate::{CommandList, DrawCommand, TextureInfo, DEFAULT_LAYER};

    fn bar() -> ProgressBar { ProgressBar::new(v(0.0, 0.0), v(200.0, 20.0), DEFAULT_LAYER, "Upload", "done.dds", "todo.dds").with_font(mono_font()) }

    #[test]
    fn caption_truncates_and_progress_clamps() {
        let mut h = Harness::new();
        let mut b = bar();
        b.set_progress(0.426);
        b.update(&mut h.ctx(0.0));
        assert_eq!(b.label().text(), "Upload: 42%");

        b.set_progress(1.7);
        b.update(&mut h.ctx(0.0));
        assert_eq!(b.progress(), 1.0);
        assert_eq!(b.label().text(), "Upload: 100%");

        b.set_progress(-0.5);
        b.update(&mut h.ctx(0.0));
        assert_eq!(b.label().text(), "Upload: 0%");
    }

    #[test]
    fn renders_split_quads_under_the_caption() {
        let mut cache = TextureCache::new();
        cache.set_texture("done.dds", TextureInfo { width: 8, height: 8 }).unwrap();
        cache.set_texture("todo.dds", TextureInfo { width: 8, height: 8 }).unwrap();

        let mut h = Harness::new();
        let mut b = bar();
        b.create(&mut cache);
        b.set_progress(0.25);
        b.update(&mut h.ctx(0.0));

        let mut list = CommandList::new();
        b.render(&mut list);
        match list.commands() {
            [DrawCommand::Quad(done), DrawCommand::Quad(todo), DrawCommand::Text { text, depth, .. }] => {
                assert_eq!((done.size.x, done.uv_max.x), (50.0, 0.25));
                assert_eq!((todo.pos.x, todo.size.x, todo.uv_min.x), (50.0, 150.0, 0.25));
                assert_eq!(text, "Upload: 25%");
                assert!(*depth < done.depth);
            }
            other => panic!("unexpected commands {:?}", other),
        }
    }

    #[test]
    fn overshoot_renders_within_the_bar_before_any_update() {
        let mut cache = TextureCache::new();
        cache.set_texture("done.dds", TextureInfo { width: 8, height: 8 }).unwrap();
        cache.set_texture("todo.dds", TextureInfo { width: 8, height: 8 }).unwrap();

        let mut b = bar();
        b.create(&mut cache);
        b.set_progress(1.5);
        assert_eq!(b.progress(), 1.0);

        let mut list = CommandList::new();
        b.render(&mut list);
        match list.commands() {
            [DrawCommand::Quad(done), DrawCommand::Quad(todo), ..] => {
                assert_eq!((done.size.x, done.uv_max.x), (200.0, 1.0));
                assert_eq!(todo.size.x, 0.0);
            }
            other => panic!("unexpected commands {:?}", other),
        }
    }

    #[test]
    fn missing_textures_only_draw_the_caption() {
        let mut cache = TextureCache::new();
        let mut b = bar();
        b.create(&mut cache);
        let mut list = CommandList::new();
        b.render(&mut list);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["Upload"]);
        assert_eq!(list.len(), 1);
    }
}
