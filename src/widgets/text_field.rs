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
use super::text_edit::{clamp_to_boundary, compose_display, delete_next, delete_prev, insert_text, line_bounds, move_left, move_right, place_cursor, strip_trailing_newlines};
use crate::widget::implement_widget_base;
use crate::{Alignment, Color, FontHandle, Key, Layer, RenderBatch, Signal, Style, TextLabel, TextureCache, UiCtx, UiEvent, Vec2f, Widget, WidgetBase};
use log::trace;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Which characters a [`TextField`] accepts from the keyboard.
pub enum InputType {
    /// Read-only; every event is ignored.
    None,
    /// Free text, including spaces.
    Normal,
    /// Characters valid in an e-mail address.
    Email,
    /// Free text without spaces, shown masked.
    Password,
}

impl InputType {
    fn punctuation(self) -> &'static str {
        match self {
            InputType::None => "",
            InputType::Normal | InputType::Password => "!\"#$%&'()*+-./:;<=>?@[\\]^_{|}~,",
            InputType::Email => "@!#$%&'*+-/=?^_{|.",
        }
    }

    /// Returns `true` if a typed `c` may be inserted.
    pub fn accepts(self, c: char) -> bool {
        if self == InputType::None {
            return false;
        }
        if c == ' ' {
            return self == InputType::Normal;
        }
        c.is_alphanumeric() || self.punctuation().contains(c)
    }
}

/// Single-line editable text with a blinking caret.
///
/// The buffer may hold newlines (pasted text); only the line under the cursor is displayed,
/// truncated with an ellipsis when it does not fit. Enter raises [`Signal::EnterPressed`].
pub struct TextField {
    base: WidgetBase,
    label: TextLabel,
    input_type: InputType,
    initial_text: String,
    text: String,
    visible_text: String,
    visible_start: usize,
    cursor: usize,
    caret_timer: f32,
    caret_visible: bool,
}

impl TextField {
    /// Creates a field showing `initial_text` as its placeholder.
    pub fn new(position: Vec2f, size: Vec2f, layer: Layer, initial_text: &str, input_type: InputType) -> Self {
        Self {
            base: WidgetBase::new(position, size, layer),
            label: TextLabel::new(position, size, layer, initial_text).with_alignment(Alignment::Left),
            input_type,
            initial_text: initial_text.to_string(),
            text: initial_text.to_string(),
            visible_text: initial_text.to_string(),
            visible_start: 0,
            cursor: 0,
            caret_timer: 0.0,
            caret_visible: true,
        }
    }

    /// Sets the font used to measure, filter and draw text.
    pub fn with_font(mut self, font: FontHandle) -> Self {
        self.label.set_font(font);
        self
    }

    /// Shows `asset` behind the text.
    pub fn with_background(mut self, asset: &str) -> Self {
        self.label = self.label.with_background(asset);
        self
    }

    /// Sets the background and text tints.
    pub fn with_colors(mut self, background: Color, text: Color) -> Self {
        self.label = self.label.with_colors(background, text);
        self
    }

    /// Sets the text alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.label = self.label.with_alignment(alignment);
        self
    }

    /// Full logical text.
    pub fn text(&self) -> &str { &self.text }

    /// Replaces the text, keeping the cursor inside it.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = clamp_to_boundary(&self.text, self.cursor);
    }

    /// Placeholder restored whenever the field loses focus empty.
    pub fn initial_text(&self) -> &str { &self.initial_text }

    /// Accepted character class.
    pub fn input_type(&self) -> InputType { self.input_type }

    /// Cursor as a byte offset into [`TextField::text`].
    pub fn cursor_position(&self) -> usize { self.cursor }

    /// Moves the cursor, clamped to the text.
    pub fn set_cursor_position(&mut self, cursor: usize) { self.cursor = clamp_to_boundary(&self.text, cursor); }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.cursor = 0;
        self.label.clear_text();
        self.text.clear();
    }

    /// Line of text currently displayed, before caret and ellipsis are applied.
    pub fn visible_text(&self) -> &str { &self.visible_text }

    /// Returns `true` during the visible half of the caret blink.
    pub fn is_caret_visible(&self) -> bool { self.caret_visible }

    /// Label that draws the field.
    pub fn label(&self) -> &TextLabel { &self.label }

    /// Changes the font.
    pub fn set_font(&mut self, font: FontHandle) { self.label.set_font(font); }

    /// Changes the left gap of the text.
    pub fn set_horizontal_offset(&mut self, offset: f32) { self.label.set_horizontal_offset(offset); }

    /// Changes the text tint.
    pub fn set_text_color(&mut self, color: Color) { self.label.set_text_color(color); }

    /// Changes the background tint.
    pub fn set_background_color(&mut self, color: Color) { self.label.set_background_color(color); }

    /// Inserts `text` at the cursor without filtering.
    pub fn insert_text_at_cursor(&mut self, text: &str) { insert_text(&mut self.text, &mut self.cursor, text); }

    fn accepts(&self, c: char) -> bool {
        self.input_type.accepts(c) && self.label.font().map(|font| font.contains_character(c)).unwrap_or(true)
    }

    fn insert_typed(&mut self, typed: &str) {
        let accepted: String = typed.chars().filter(|c| self.accepts(*c)).collect();
        self.insert_text_at_cursor(&accepted);
    }

    fn on_key(&mut self, key: Key) {
        match key {
            Key::Enter => self.base.emit(Signal::EnterPressed(self.text.clone())),
            Key::Back => {
                delete_prev(&mut self.text, &mut self.cursor);
            }
            Key::Delete => {
                delete_next(&mut self.text, self.cursor);
            }
            Key::Left => self.cursor = move_left(&self.text, self.cursor),
            Key::Right => self.cursor = move_right(&self.text, self.cursor),
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = self.text.len(),
            other => {
                if let Some(c) = other.typed_char() {
                    if self.accepts(c) {
                        let mut buf = [0u8; 4];
                        self.insert_text_at_cursor(c.encode_utf8(&mut buf));
                    }
                }
            }
        }
    }

    fn on_click(&mut self, pos: Vec2f) {
        self.set_focused(true);

        let font = match self.label.font() {
            Some(font) => font.clone(),
            None => return,
        };
        if self.visible_text.is_empty() || self.text.is_empty() {
            return;
        }
        let offset = pos.x - self.label.text_position().x;
        let in_line = place_cursor(font.as_ref(), &self.visible_text, offset);
        self.cursor = clamp_to_boundary(&self.text, self.visible_start + in_line);
    }

    fn update_caret(&mut self, elapsed: f32, style: &Style) {
        self.caret_timer += elapsed;
        if self.caret_timer >= style.caret_blink_time {
            self.caret_timer = 0.0;
            self.caret_visible = !self.caret_visible;
        }
    }

    fn refresh_display(&mut self, style: &Style) {
        let font = match self.label.font() {
            Some(font) => font.clone(),
            None => return,
        };
        let caret = if self.is_focused() && self.caret_visible { style.caret } else { style.caret_blank };

        if self.text.is_empty() {
            self.visible_text.clear();
            self.visible_start = 0;
            self.label.set_text(caret.encode_utf8(&mut [0u8; 4]));
            return;
        }
        if self.cursor > self.text.len() || !self.text.is_char_boundary(self.cursor) {
            trace!("text field {:?}: cursor {} outside text, display not refreshed", self.id(), self.cursor);
            return;
        }

        let (start, end) = line_bounds(&self.text, self.cursor);
        self.visible_text = self.text[start..end].to_string();
        self.visible_start = start;
        if self.cursor < start || self.cursor - start > self.visible_text.len() {
            trace!("text field {:?}: cursor {} outside visible line, display not refreshed", self.id(), self.cursor);
            return;
        }

        let mask = (self.input_type == InputType::Password && self.text != self.initial_text).then_some(style.password_mask);
        let shown = compose_display(&self.visible_text, self.cursor - start, caret, mask, font.as_ref(), self.size().x, style);
        self.label.set_text(&shown);
    }
}

impl Widget for TextField {
    implement_widget_base!();

    fn on_ui_event(&mut self, event: &UiEvent, ctx: &mut UiCtx<'_>) {
        if !self.is_enabled() || self.input_type == InputType::None {
            return;
        }

        match event {
            UiEvent::TextInput(text) if self.is_focused() => self.insert_typed(text),
            UiEvent::PasteText if self.is_focused() => {
                let clipboard = ctx.clipboard_text();
                self.insert_text_at_cursor(strip_trailing_newlines(&clipboard));
            }
            UiEvent::CopyText if self.is_focused() && self.input_type != InputType::Password => ctx.set_clipboard_text(&self.text),
            UiEvent::KeyPressed { key, .. } if self.is_focused() => self.on_key(*key),
            UiEvent::MousePressed { pos } => self.on_click(*pos),
            _ => {}
        }
    }

    fn update(&mut self, ctx: &mut UiCtx<'_>) {
        self.label.update(ctx);
        if self.label.font().is_none() {
            return;
        }
        self.update_caret(ctx.elapsed_seconds(), ctx.style());
        self.refresh_display(ctx.style());
    }

    fn render(&self, batch: &mut dyn RenderBatch) {
        if !self.is_shown() {
            return;
        }
        self.base.render_borders(batch);
        self.label.render(batch);
    }

    fn create(&mut self, textures: &mut TextureCache) { self.label.create(textures); }

    fn release(&mut self) { self.label.release(); }

    fn set_position(&mut self, position: Vec2f) {
        self.base.set_position(position);
        self.label.set_position(position);
    }

    fn set_size(&mut self, size: Vec2f) {
        self.base.set_size(size);
        self.label.set_size(size);
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.set_focused(focused);
        if focused && self.text == self.initial_text {
            self.clear();
        }
        if !focused && self.text.is_empty() {
            self.text = self.initial_text.clone();
            self.cursor = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{mono_font, v, Harness};
    use crate::{InputSource, MonoFont, DEFAULT_LAYER};

    fn field(initial: &str, input_type: InputType) -> TextField {
        TextField::new(v(0.0, 0.0), v(200.0, 30.0), DEFAULT_LAYER, initial, input_type).with_font(mono_font())
    }

    fn send(field: &mut TextField, h: &mut Harness, event: UiEvent) { field.on_ui_event(&event, &mut h.ctx(0.0)); }

    fn type_str(field: &mut TextField, h: &mut Harness, text: &str) {
        for c in text.chars() {
            send(field, h, UiEvent::key(Key::Char(c)));
        }
    }

    #[test]
    fn search_placeholder_scenario() {
        let mut h = Harness::new();
        let mut f = field("Search...", InputType::Normal);

        f.set_focused(true);
        assert_eq!(f.text(), "");

        type_str(&mut f, &mut h, "abc");
        assert_eq!((f.text(), f.cursor_position()), ("abc", 3));

        send(&mut f, &mut h, UiEvent::key(Key::Left));
        send(&mut f, &mut h, UiEvent::key(Key::Left));
        assert_eq!(f.cursor_position(), 1);

        send(&mut f, &mut h, UiEvent::key(Key::Delete));
        assert_eq!((f.text(), f.cursor_position()), ("ac", 1));

        send(&mut f, &mut h, UiEvent::key(Key::Back));
        send(&mut f, &mut h, UiEvent::key(Key::Delete));
        assert_eq!(f.text(), "");
        f.set_focused(false);
        assert_eq!(f.text(), "Search...");
    }

    #[test]
    fn cursor_stays_within_text() {
        let mut h = Harness::new();
        let mut f = field("", InputType::Normal);
        f.set_focused(true);
        let keys = [Key::Back, Key::Left, Key::Char('x'), Key::Right, Key::Right, Key::Delete, Key::Char('\u{e9}'), Key::Left, Key::Back, Key::Char('y')];
        for step in 0..60 {
            send(&mut f, &mut h, UiEvent::key(keys[(step * 7) % keys.len()]));
            assert!(f.cursor_position() <= f.text().len());
            assert!(f.text().is_char_boundary(f.cursor_position()));
        }
    }

    #[test]
    fn insert_then_delete_restores_text() {
        let mut h = Harness::new();
        let mut f = field("", InputType::Normal);
        f.set_focused(true);
        f.set_text("hello world");
        f.set_cursor_position(5);

        type_str(&mut f, &mut h, ",x");
        assert_eq!(f.text(), "hello,x world");
        for _ in 0..2 {
            send(&mut f, &mut h, UiEvent::key(Key::Left));
        }
        for _ in 0..2 {
            send(&mut f, &mut h, UiEvent::key(Key::Delete));
        }
        assert_eq!((f.text(), f.cursor_position()), ("hello world", 5));
    }

    #[test]
    fn input_types_filter_typed_characters() {
        let mut h = Harness::new();
        let mut email = field("", InputType::Email);
        email.set_focused(true);
        type_str(&mut email, &mut h, "a b(c@d.e");
        assert_eq!(email.text(), "abc@d.e");

        let mut password = field("", InputType::Password);
        password.set_focused(true);
        send(&mut password, &mut h, UiEvent::TextInput("p w[d]".into()));
        assert_eq!(password.text(), "pw[d]");

        let mut readonly = field("fixed", InputType::None);
        readonly.set_focused(true);
        type_str(&mut readonly, &mut h, "zz");
        assert_eq!(readonly.text(), "");
    }

    #[test]
    fn glyphs_missing_from_the_font_are_rejected() {
        let mut h = Harness::new();
        let font = MonoFont::new("mono", 8.0, 16.0).without_chars("~").into_handle();
        let mut f = TextField::new(v(0.0, 0.0), v(200.0, 30.0), DEFAULT_LAYER, "", InputType::Normal).with_font(font);
        f.set_focused(true);
        type_str(&mut f, &mut h, "a~b");
        assert_eq!(f.text(), "ab");
    }

    #[test]
    fn paste_strips_trailing_newlines_and_copy_respects_password() {
        let mut h = Harness::new();
        h.input.set_clipboard_text("pasted text\n\n");
        let mut f = field("", InputType::Normal);
        f.set_focused(true);
        send(&mut f, &mut h, UiEvent::PasteText);
        assert_eq!((f.text(), f.cursor_position()), ("pasted text", 11));

        f.set_text("copy me");
        send(&mut f, &mut h, UiEvent::CopyText);
        assert_eq!(h.input.clipboard_text(), "copy me");

        let mut secret = field("", InputType::Password);
        secret.set_focused(true);
        secret.set_text("hunter2");
        send(&mut secret, &mut h, UiEvent::CopyText);
        assert_eq!(h.input.clipboard_text(), "copy me");
    }

    #[test]
    fn unfocused_field_ignores_text_input() {
        let mut h = Harness::new();
        let mut f = field("", InputType::Normal);
        send(&mut f, &mut h, UiEvent::TextInput("abc".into()));
        assert_eq!(f.text(), "");

        f.set_text("abc");
        f.set_cursor_position(3);
        for key in [Key::Back, Key::Char('z'), Key::Left, Key::Enter] {
            send(&mut f, &mut h, UiEvent::key(key));
        }
        assert_eq!((f.text(), f.cursor_position()), ("abc", 3));
        assert!(f.base_mut().take_notifications().is_empty());
    }

    #[test]
    fn enter_emits_the_text() {
        let mut h = Harness::new();
        let mut f = field("", InputType::Normal);
        f.set_focused(true);
        type_str(&mut f, &mut h, "go");
        send(&mut f, &mut h, UiEvent::key(Key::Enter));
        let notes = f.base_mut().take_notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].signal, Signal::EnterPressed("go".into()));
    }

    #[test]
    fn disabled_field_ignores_events() {
        let mut h = Harness::new();
        let mut f = field("", InputType::Normal);
        f.set_focused(true);
        f.disable();
        type_str(&mut f, &mut h, "abc");
        assert_eq!(f.text(), "");
    }

    #[test]
    fn label_shows_caret_and_blinks() {
        let mut h = Harness::new();
        let mut f = field("", InputType::Normal);
        f.set_focused(true);
        type_str(&mut f, &mut h, "ab");
        send(&mut f, &mut h, UiEvent::key(Key::Left));

        f.update(&mut h.ctx(0.1));
        assert_eq!(f.label().text(), "a|b");
        assert_eq!(f.visible_text(), "ab");

        f.update(&mut h.ctx(0.5));
        assert!(!f.is_caret_visible());
        assert_eq!(f.label().text(), "a b");

        f.set_focused(false);
        f.update(&mut h.ctx(0.1));
        assert_eq!(f.label().text(), "a b");
    }

    #[test]
    fn empty_field_shows_only_the_caret_slot() {
        let mut h = Harness::new();
        let mut f = field("", InputType::Normal);
        f.set_focused(true);
        f.update(&mut h.ctx(0.0));
        assert_eq!(f.label().text(), "|");
    }

    #[test]
    fn password_is_masked_but_placeholder_is_not() {
        let mut h = Harness::new();
        let mut f = field("Password", InputType::Password);
        f.update(&mut h.ctx(0.0));
        assert_eq!(f.label().text(), " Password");

        f.set_focused(true);
        type_str(&mut f, &mut h, "abc");
        f.update(&mut h.ctx(0.0));
        assert_eq!(f.label().text(), "***|");
        assert_eq!(f.text(), "abc");
    }

    #[test]
    fn long_text_is_truncated_around_the_cursor() {
        let mut h = Harness::new();
        let mut f = TextField::new(v(0.0, 0.0), v(100.0, 30.0), DEFAULT_LAYER, "", InputType::Normal).with_font(mono_font());
        f.set_focused(true);
        type_str(&mut f, &mut h, "abcdefghijklmnopqrstuvwxyz");
        f.update(&mut h.ctx(0.0));
        assert!(f.label().text().starts_with("..."));
        assert!(f.label().text().ends_with("xyz|"));
    }

    #[test]
    fn multiline_text_shows_the_cursor_line() {
        let mut h = Harness::new();
        let mut f = field("", InputType::Normal);
        f.set_focused(true);
        f.set_text("first\nsecond");
        f.set_cursor_position(8);
        f.update(&mut h.ctx(0.0));
        assert_eq!(f.visible_text(), "second");
        assert_eq!(f.label().text(), "se|cond");
    }

    #[test]
    fn click_places_the_cursor() {
        let mut h = Harness::new();
        let mut f = field("", InputType::Normal);
        f.set_text("abcdef");
        f.update(&mut h.ctx(0.0));
        let origin = f.label().text_position().x;

        send(&mut f, &mut h, UiEvent::press(origin + 17.0, 10.0));
        assert!(f.is_focused());
        assert_eq!(f.cursor_position(), 2);

        send(&mut f, &mut h, UiEvent::press(origin - 50.0, 10.0));
        assert_eq!(f.cursor_position(), 0);
    }

    #[test]
    fn click_on_placeholder_clears_it() {
        let mut h = Harness::new();
        let mut f = field("Search...", InputType::Normal);
        f.update(&mut h.ctx(0.0));
        send(&mut f, &mut h, UiEvent::press(40.0, 10.0));
        assert_eq!((f.text(), f.cursor_position()), ("", 0));
    }
}
