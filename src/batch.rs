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
use crate::{Color, Font, TextureId, Vec2f};
use std::cmp::Ordering;

#[derive(Copy, Clone, Debug)]
/// Axis-aligned rectangle drawn with an optional texture.
pub struct Quad {
    /// Texture sampled across the quad, or `None` for a flat tint.
    pub texture: Option<TextureId>,
    /// Top-left corner in screen pixels.
    pub pos: Vec2f,
    /// Width and height in screen pixels.
    pub size: Vec2f,
    /// Texture coordinate at the top-left corner.
    pub uv_min: Vec2f,
    /// Texture coordinate at the bottom-right corner.
    pub uv_max: Vec2f,
    /// Tint multiplied with the texture.
    pub color: Color,
    /// Depth derived from the owning widget's layer.
    pub depth: f32,
}

impl Quad {
    /// Creates a quad covering the whole texture (or a flat tint when `texture` is `None`).
    pub fn new(texture: Option<TextureId>, pos: Vec2f, size: Vec2f, color: Color, depth: f32) -> Self {
        Self { texture, pos, size, uv_min: Vec2f::new(0.0, 0.0), uv_max: Vec2f::new(1.0, 1.0), color, depth }
    }

    /// Restricts the sampled texture window.
    pub fn with_uv(mut self, uv_min: Vec2f, uv_max: Vec2f) -> Self {
        self.uv_min = uv_min;
        self.uv_max = uv_max;
        self
    }
}

/// Sink for the draw calls widgets make during render.
pub trait RenderBatch {
    /// Draws a (possibly textured) rectangle.
    fn draw_quad(&mut self, quad: &Quad);
    /// Draws connected line segments through `points`.
    fn draw_polyline(&mut self, points: &[Vec2f], color: Color, thickness: f32, depth: f32);
    /// Draws `text` with its top-left corner at `pos`.
    fn draw_text(&mut self, font: &dyn Font, text: &str, pos: Vec2f, color: Color, depth: f32);
}

#[derive(Clone, Debug)]
/// Draw call recorded by [`CommandList`].
pub enum DrawCommand {
    /// See [`RenderBatch::draw_quad`].
    Quad(Quad),
    /// See [`RenderBatch::draw_polyline`].
    Polyline {
        /// Line vertices.
        points: Vec<Vec2f>,
        /// Line color.
        color: Color,
        /// Line thickness in pixels.
        thickness: f32,
        /// Render depth.
        depth: f32,
    },
    /// See [`RenderBatch::draw_text`].
    Text {
        /// Name of the font used.
        font: String,
        /// UTF-8 string to render.
        text: String,
        /// Top-left text position.
        pos: Vec2f,
        /// Text color.
        color: Color,
        /// Render depth.
        depth: f32,
    },
}

impl DrawCommand {
    /// Returns the render depth of the command.
    pub fn depth(&self) -> f32 {
        match self {
            DrawCommand::Quad(q) => q.depth,
            DrawCommand::Polyline { depth, .. } | DrawCommand::Text { depth, .. } => *depth,
        }
    }
}

#[derive(Default, Clone, Debug)]
/// Render batch that records draw calls so a backend can replay them later.
pub struct CommandList {
    commands: Vec<DrawCommand>,
}

impl CommandList {
    /// Creates an empty list.
    pub fn new() -> Self { Self::default() }

    /// Recorded commands in submission (or sorted) order.
    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    /// Number of recorded commands.
    pub fn len(&self) -> usize { self.commands.len() }

    /// Returns `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// Drops all recorded commands.
    pub fn clear(&mut self) { self.commands.clear(); }

    /// Iterates over the strings of every recorded text command.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Orders commands so the farthest ones come first. Commands at equal depth keep their
    /// submission order.
    pub fn sort_back_to_front(&mut self) { self.commands.sort_by(|a, b| b.depth().partial_cmp(&a.depth()).unwrap_or(Ordering::Equal)); }
}

impl RenderBatch for CommandList {
    fn draw_quad(&mut self, quad: &Quad) { self.commands.push(DrawCommand::Quad(*quad)); }

    fn draw_polyline(&mut self, points: &[Vec2f], color: Color, thickness: f32, depth: f32) {
        self.commands.push(DrawCommand::Polyline { points: points.to_vec(), color, thickness, depth });
    }

    fn draw_text(&mut self, font: &dyn Font, text: &str, pos: Vec2f, color: Color, depth: f32) {
        self.commands.push(DrawCommand::Text {
            font: font.name().to_string(),
            text: text.to_string(),
            pos,
            color,
            depth,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{layer_to_depth, MonoFont};

    #[test]
    fn sort_puts_higher_layers_last() {
        let font = MonoFont::new("mono", 8.0, 16.0);
        let mut list = CommandList::new();
        list.draw_quad(&Quad::new(None, Vec2f::new(0.0, 0.0), Vec2f::new(4.0, 4.0), Color::BLACK, layer_to_depth(101)));
        list.draw_text(&font, "under", Vec2f::new(0.0, 0.0), Color::WHITE, layer_to_depth(100));
        list.draw_text(&font, "also-under", Vec2f::new(0.0, 0.0), Color::WHITE, layer_to_depth(100));

        list.sort_back_to_front();

        assert!(matches!(list.commands()[2], DrawCommand::Quad(_)));
        let texts: Vec<&str> = list.texts().collect();
        assert_eq!(texts, vec!["under", "also-under"]);
    }
}
