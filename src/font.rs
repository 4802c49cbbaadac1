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
use crate::Vec2f;
use std::rc::Rc;

/// Text measurement capability consumed by labels and text fields.
pub trait Font {
    /// Returns the font's display name.
    fn name(&self) -> &str;
    /// Returns the pixel extent of `text`. Multi-line text measures as the widest line by the
    /// number of lines.
    fn measure_string(&self, text: &str) -> Vec2f;
    /// Returns `true` if the font can render `c`.
    fn contains_character(&self, c: char) -> bool;
}

/// Shared font handle held by widgets.
pub type FontHandle = Rc<dyn Font>;

#[derive(Clone, Debug)]
/// Fixed-advance font metrics, for headless shells and tests.
pub struct MonoFont {
    name: String,
    advance: f32,
    line_height: f32,
    missing: Vec<char>,
}

impl MonoFont {
    /// Creates a font where every glyph advances by `advance` pixels.
    pub fn new(name: &str, advance: f32, line_height: f32) -> Self {
        Self { name: name.to_string(), advance, line_height, missing: Vec::new() }
    }

    /// Marks characters the font cannot render.
    pub fn without_chars(mut self, chars: &str) -> Self {
        self.missing.extend(chars.chars());
        self
    }

    /// Horizontal advance of a single glyph.
    pub fn advance(&self) -> f32 { self.advance }

    /// Returns a shared handle to this font.
    pub fn into_handle(self) -> FontHandle { Rc::new(self) }
}

impl Font for MonoFont {
    fn name(&self) -> &str { &self.name }

    fn measure_string(&self, text: &str) -> Vec2f {
        let widest = text.split('\n').map(|line| line.chars().count()).max().unwrap_or(0);
        let lines = text.split('\n').count();
        Vec2f::new(widest as f32 * self.advance, lines as f32 * self.line_height)
    }

    fn contains_character(&self, c: char) -> bool { !c.is_control() && !self.missing.contains(&c) }
}

#[cfg(feature = "ttf")]
mod ttf {
    use super::Font;
    use crate::{UiError, UiResult, Vec2f};
    use std::path::Path;

    /// TrueType/OpenType font measured with `fontdue`.
    pub struct TtfFont {
        name: String,
        font: fontdue::Font,
        px: f32,
        line_height: f32,
    }

    impl TtfFont {
        /// Parses font data and measures it at `px` pixels.
        pub fn from_bytes(name: &str, bytes: &[u8], px: f32) -> UiResult<Self> {
            let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()).map_err(|e| UiError::FontLoad(format!("{}: {}", name, e)))?;
            let line_height = font.horizontal_line_metrics(px).map(|m| m.new_line_size).unwrap_or(px);
            log::info!("loaded font {} at {}px", name, px);
            Ok(Self { name: name.to_string(), font, px, line_height })
        }

        /// Reads a font file from disk.
        pub fn from_file(name: &str, path: impl AsRef<Path>, px: f32) -> UiResult<Self> {
            let bytes = std::fs::read(path)?;
            Self::from_bytes(name, &bytes, px)
        }

        /// Pixel size the font is measured at.
        pub fn size(&self) -> f32 { self.px }
    }

    impl Font for TtfFont {
        fn name(&self) -> &str { &self.name }

        fn measure_string(&self, text: &str) -> Vec2f {
            let mut widest = 0.0f32;
            let mut lines = 0usize;
            for line in text.split('\n') {
                let width: f32 = line.chars().map(|c| self.font.metrics(c, self.px).advance_width).sum();
                widest = widest.max(width);
                lines += 1;
            }
            Vec2f::new(widest.ceil(), (lines as f32 * self.line_height).ceil())
        }

        fn contains_character(&self, c: char) -> bool { self.font.lookup_glyph_index(c) != 0 }
    }
}

#[cfg(feature = "ttf")]
pub use ttf::TtfFont;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_font_measures_widest_line() {
        let font = MonoFont::new("mono", 8.0, 16.0);
        let size = font.measure_string("ab\nabcd\n");
        assert_eq!((size.x, size.y), (32.0, 48.0));
        let empty = font.measure_string("");
        assert_eq!((empty.x, empty.y), (0.0, 16.0));
    }

    #[test]
    fn mono_font_rejects_missing_glyphs() {
        let font = MonoFont::new("mono", 8.0, 16.0).without_chars("~");
        assert!(font.contains_character('a'));
        assert!(!font.contains_character('~'));
        assert!(!font.contains_character('\n'));
    }
}
