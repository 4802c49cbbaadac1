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
use crate::{color, layer_to_depth, Color, FontHandle, Key, Layer, Quad, RenderBatch, Signal, Sprite, TextureCache, UiCtx, UiEvent, Vec2f, Widget, WidgetBase};

/// Height of one row when the caller does not pick one.
pub const DEFAULT_ENTRY_HEIGHT: f32 = 20.0;

const TEXT_INSET: f32 = 5.0;

/// Scrollable column of text rows.
///
/// Clicking a row, or pressing Enter on the highlighted one, raises
/// [`Signal::EntrySelected`] with the row index.
pub struct ListView {
    base: WidgetBase,
    entries: Vec<String>,
    first: usize,
    entry_height: f32,
    font: Option<FontHandle>,
    text_color: Color,
    background: Sprite,
    highlight: Option<usize>,
    highlight_color: Color,
    entries_visible: bool,
}

impl ListView {
    /// Creates an empty list with rows of `entry_height` pixels.
    pub fn new(position: Vec2f, size: Vec2f, layer: Layer, entry_height: f32) -> Self {
        Self {
            base: WidgetBase::new(position, size, layer),
            entries: Vec::new(),
            first: 0,
            entry_height: if entry_height > 0.0 { entry_height } else { DEFAULT_ENTRY_HEIGHT },
            font: None,
            text_color: Color::WHITE,
            background: Sprite::colored(position, size, layer, Color::TRANSPARENT),
            highlight: None,
            highlight_color: color(80, 80, 120, 255),
            entries_visible: true,
        }
    }

    /// Sets the font used to draw rows.
    pub fn with_font(mut self, font: FontHandle) -> Self {
        self.font = Some(font);
        self
    }

    /// Sets the background and text tints.
    pub fn with_colors(mut self, background: Color, text: Color) -> Self {
        self.set_colors(background, text);
        self
    }

    /// Changes the background and text tints.
    pub fn set_colors(&mut self, background: Color, text: Color) {
        self.background.set_color(background);
        self.text_color = text;
    }

    /// Changes the font used to draw rows.
    pub fn set_font(&mut self, font: FontHandle) { self.font = Some(font); }

    /// Replaces every row and scrolls back to the top.
    pub fn refresh_data(&mut self, entries: Vec<String>) {
        self.entries = entries;
        self.first = 0;
        self.highlight = None;
    }

    /// Removes every row.
    pub fn clear(&mut self) { self.refresh_data(Vec::new()); }

    /// Rows in display order.
    pub fn entries(&self) -> &[String] { &self.entries }

    /// Number of rows.
    pub fn num_entries(&self) -> usize { self.entries.len() }

    /// Height of one row.
    pub fn entry_height(&self) -> f32 { self.entry_height }

    /// Number of whole rows that fit in the widget.
    pub fn lines_per_page(&self) -> usize { (self.size().y / self.entry_height).floor().max(0.0) as usize }

    /// Index of the top visible row.
    pub fn first_visible_entry(&self) -> usize { self.first }

    /// Index of the bottom visible row.
    pub fn last_visible_entry(&self) -> usize { (self.first + self.lines_per_page()).min(self.entries.len()).saturating_sub(1) }

    /// Scrolls `lines` rows towards the top.
    pub fn scroll_up(&mut self, lines: usize) { self.first = self.first.saturating_sub(lines); }

    /// Scrolls `lines` rows towards the bottom.
    pub fn scroll_down(&mut self, lines: usize) { self.first = (self.first + lines).min(self.max_first()); }

    /// Shows the first row at the top.
    pub fn scroll_to_top(&mut self) { self.first = 0; }

    /// Shows the last row at the bottom.
    pub fn scroll_to_bottom(&mut self) { self.first = self.max_first(); }

    /// Highlighted row, if any.
    pub fn highlighted_entry(&self) -> Option<usize> { self.highlight }

    /// Highlights `index` and scrolls it into view. Out-of-range indices clear the highlight.
    pub fn set_highlighted_entry(&mut self, index: usize) {
        if index >= self.entries.len() {
            self.highlight = None;
            return;
        }
        self.highlight = Some(index);
        let per_page = self.lines_per_page().max(1);
        if index < self.first {
            self.first = index;
        } else if index >= self.first + per_page {
            self.first = (index + 1 - per_page).min(self.max_first());
        }
    }

    /// Shows or hides the rows. The background is unaffected.
    pub fn set_entries_visible(&mut self, visible: bool) { self.entries_visible = visible; }

    fn max_first(&self) -> usize { self.entries.len().saturating_sub(self.lines_per_page()) }

    fn entry_at(&self, pos: Vec2f) -> Option<usize> {
        let row = ((pos.y - self.position().y) / self.entry_height).floor();
        if row < 0.0 {
            return None;
        }
        let index = self.first + row as usize;
        (index < self.entries.len() && index <= self.last_visible_entry()).then_some(index)
    }

    fn select(&mut self, index: usize) {
        self.highlight = Some(index);
        self.base.emit(Signal::EntrySelected(index));
    }
}

impl Widget for ListView {
    implement_widget_base!();

    fn on_ui_event(&mut self, event: &UiEvent, _ctx: &mut UiCtx<'_>) {
        if !self.is_shown() || !self.is_enabled() {
            return;
        }

        match event {
            UiEvent::MousePressed { pos } if self.check_collision(*pos) => {
                if let Some(index) = self.entry_at(*pos) {
                    self.select(index);
                }
            }
            UiEvent::MouseWheelScrolled { lines, .. } => {
                let amount = lines.unsigned_abs() as usize;
                if *lines > 0 {
                    self.scroll_up(amount);
                } else {
                    self.scroll_down(amount);
                }
            }
            UiEvent::KeyPressed { key: Key::Up, .. } => {
                let index = self.highlight.map(|i| i.saturating_sub(1)).unwrap_or(0);
                self.set_highlighted_entry(index);
            }
            UiEvent::KeyPressed { key: Key::Down, .. } => {
                let index = self.highlight.map(|i| (i + 1).min(self.entries.len().saturating_sub(1))).unwrap_or(0);
                self.set_highlighted_entry(index);
            }
            UiEvent::KeyPressed { key: Key::Enter, .. } => {
                if let Some(index) = self.highlight {
                    self.select(index);
                }
            }
            _ => {}
        }
    }

    fn render(&self, batch: &mut dyn RenderBatch) {
        if !self.is_shown() {
            return;
        }
        self.base.render_borders(batch);
        self.background.render(batch);
        if !self.entries_visible {
            return;
        }

        let depth = layer_to_depth(self.layer() + 1);
        let pos = self.position();
        for (row, index) in (self.first..=self.last_visible_entry()).enumerate().take(self.lines_per_page()) {
            let Some(entry) = self.entries.get(index) else { break };
            let top = pos.y + row as f32 * self.entry_height;
            if self.highlight == Some(index) {
                batch.draw_quad(&Quad::new(None, Vec2f::new(pos.x, top), Vec2f::new(self.size().x, self.entry_height), self.highlight_color, self.base.depth()));
            }
            if let Some(font) = &self.font {
                batch.draw_text(font.as_ref(), entry, Vec2f::new(pos.x + TEXT_INSET, top), self.text_color, depth);
            }
        }
    }

    fn create(&mut self, textures: &mut TextureCache) { self.background.create(textures); }

    fn release(&mut self) { self.background.release(); }

    fn set_position(&mut self, position: Vec2f) {
        self.base.set_position(position);
        self.background.set_position(position);
    }

    fn set_size(&mut self, size: Vec2f) {
        self.base.set_size(size);
        self.background.set_size(size);
        self.first = self.first.min(self.max_first());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{mono_font, v, Harness};
    use crate::{CommandList, Notification, DEFAULT_LAYER};

    fn list(rows: usize) -> ListView {
        let mut list = ListView::new(v(0.0, 100.0), v(200.0, 60.0), DEFAULT_LAYER, 20.0).with_font(mono_font());
        list.refresh_data((0..rows).map(|i| format!("row {}", i)).collect());
        list
    }

    fn selections(list: &mut ListView) -> Vec<Signal> { list.base_mut().take_notifications().into_iter().map(|n: Notification| n.signal).collect() }

    #[test]
    fn paging_and_scroll_bounds() {
        let mut l = list(10);
        assert_eq!(l.lines_per_page(), 3);
        assert_eq!(l.last_visible_entry(), 2);

        l.scroll_down(4);
        assert_eq!((l.first_visible_entry(), l.last_visible_entry()), (4, 6));
        l.scroll_down(100);
        assert_eq!(l.first_visible_entry(), 7);
        l.scroll_up(2);
        assert_eq!(l.first_visible_entry(), 5);
        l.scroll_to_top();
        assert_eq!(l.first_visible_entry(), 0);
        l.scroll_to_bottom();
        assert_eq!(l.last_visible_entry(), 9);
    }

    #[test]
    fn click_selects_the_row_under_the_pointer() {
        let mut h = Harness::new();
        let mut l = list(10);
        l.scroll_down(2);
        l.on_ui_event(&UiEvent::press(10.0, 125.0), &mut h.ctx(0.0));
        assert_eq!(selections(&mut l), vec![Signal::EntrySelected(3)]);

        let mut short = list(1);
        short.on_ui_event(&UiEvent::press(10.0, 145.0), &mut h.ctx(0.0));
        assert!(selections(&mut short).is_empty());
    }

    #[test]
    fn wheel_scrolls_by_lines() {
        let mut h = Harness::new();
        let mut l = list(10);
        l.on_ui_event(&UiEvent::MouseWheelScrolled { pos: v(10.0, 110.0), lines: -3 }, &mut h.ctx(0.0));
        assert_eq!(l.first_visible_entry(), 3);
        l.on_ui_event(&UiEvent::MouseWheelScrolled { pos: v(10.0, 110.0), lines: 1 }, &mut h.ctx(0.0));
        assert_eq!(l.first_visible_entry(), 2);
    }

    #[test]
    fn arrows_move_highlight_and_enter_confirms() {
        let mut h = Harness::new();
        let mut l = list(5);
        for _ in 0..4 {
            l.on_ui_event(&UiEvent::key(Key::Down), &mut h.ctx(0.0));
        }
        assert_eq!(l.highlighted_entry(), Some(3));
        assert_eq!(l.first_visible_entry(), 1);

        l.on_ui_event(&UiEvent::key(Key::Up), &mut h.ctx(0.0));
        l.on_ui_event(&UiEvent::key(Key::Enter), &mut h.ctx(0.0));
        assert_eq!(selections(&mut l), vec![Signal::EntrySelected(2)]);
    }

    #[test]
    fn renders_only_visible_rows() {
        let mut l = list(10);
        l.scroll_down(1);
        let mut batch = CommandList::new();
        l.render(&mut batch);
        assert_eq!(batch.texts().collect::<Vec<_>>(), vec!["row 1", "row 2", "row 3"]);

        l.set_entries_visible(false);
        batch.clear();
        l.render(&mut batch);
        assert_eq!(batch.texts().count(), 0);
    }
}
