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
use crate::{Key, KeyMods, MouseButton, UiEvent, Vec2f};

/// Live state the widgets may query while handling an event or updating.
pub trait InputSource {
    /// Current pointer position in screen pixels.
    fn mouse_position(&self) -> Vec2f;
    /// Current clipboard contents.
    fn clipboard_text(&self) -> String;
    /// Replaces the clipboard contents.
    fn set_clipboard_text(&mut self, text: &str);
}

#[derive(Clone, Debug)]
/// Collects raw platform input and decodes it into [`UiEvent`]s.
///
/// The platform layer feeds mouse, wheel, key and text input as it arrives; the frame driver
/// drains the decoded queue once per tick. Platforms deliver typed characters either as
/// `Key::Char` presses or as committed text, not both.
pub struct Input {
    mouse_pos: Vec2f,
    mouse_down: MouseButton,
    key_mods: KeyMods,
    wheel_accum: i32,
    wheel_delta: i32,
    clipboard: String,
    events: Vec<UiEvent>,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            mouse_pos: Vec2f::new(0.0, 0.0),
            mouse_down: MouseButton::NONE,
            key_mods: KeyMods::NONE,
            wheel_accum: 0,
            wheel_delta: 120,
            clipboard: String::new(),
            events: Vec::new(),
        }
    }
}

impl Input {
    /// Overrides how many raw wheel units make up one scrolled line.
    pub fn set_wheel_delta(&mut self, delta: i32) { self.wheel_delta = delta.max(1); }

    /// Returns the currently held mouse buttons.
    pub fn mouse_buttons(&self) -> MouseButton { self.mouse_down }

    /// Returns the modifiers currently held.
    pub fn key_mods(&self) -> KeyMods { self.key_mods }

    /// Updates the current mouse pointer position.
    pub fn mousemove(&mut self, x: f32, y: f32) { self.mouse_pos = Vec2f::new(x, y); }

    /// Records that the specified mouse button was pressed.
    pub fn mousedown(&mut self, x: f32, y: f32, btn: MouseButton) {
        self.mousemove(x, y);
        self.mouse_down |= btn;
        self.events.push(UiEvent::MousePressed { pos: self.mouse_pos });
    }

    /// Records that the specified mouse button was released.
    pub fn mouseup(&mut self, x: f32, y: f32, btn: MouseButton) {
        self.mousemove(x, y);
        self.mouse_down &= !btn;
        self.events.push(UiEvent::MouseReleased { pos: self.mouse_pos });
    }

    /// Accumulates raw wheel movement and emits one event per whole batch of lines.
    pub fn scroll(&mut self, delta: i32) {
        self.wheel_accum += delta;
        let lines = self.wheel_accum / self.wheel_delta;
        if lines != 0 {
            self.wheel_accum -= lines * self.wheel_delta;
            self.events.push(UiEvent::MouseWheelScrolled { pos: self.mouse_pos, lines });
        }
    }

    /// Records a key press together with the modifiers held at that time.
    pub fn keydown(&mut self, key: Key, mods: KeyMods) {
        self.key_mods = mods;
        self.events.push(Self::decode_key(key, mods));
    }

    /// Records an auto-repeated key press.
    pub fn keyrepeat(&mut self, key: Key, mods: KeyMods) {
        self.key_mods = mods;
        match Self::decode_key(key, mods) {
            UiEvent::KeyPressed { key, .. } => self.events.push(UiEvent::KeyPressed { key, repeat: true }),
            shortcut => self.events.push(shortcut),
        }
    }

    /// Records a key release.
    pub fn keyup(&mut self, key: Key, mods: KeyMods) {
        self.key_mods = mods;
        self.events.push(UiEvent::KeyReleased { key });
    }

    /// Appends committed UTF-8 text.
    pub fn text(&mut self, text: &str) {
        if !text.is_empty() {
            self.events.push(UiEvent::TextInput(text.to_string()));
        }
    }

    /// Queues an already decoded event.
    pub fn push_event(&mut self, event: UiEvent) { self.events.push(event); }

    /// Returns the number of events waiting to be drained.
    pub fn pending_events(&self) -> usize { self.events.len() }

    /// Hands out every event decoded since the previous call.
    pub fn drain_events(&mut self) -> Vec<UiEvent> { std::mem::take(&mut self.events) }

    fn decode_key(key: Key, mods: KeyMods) -> UiEvent {
        if mods.is_ctrl() {
            if let Key::Char(c) = key {
                match c.to_ascii_lowercase() {
                    'v' => return UiEvent::PasteText,
                    'a' => return UiEvent::SelectAll,
                    'c' => return UiEvent::CopyText,
                    'f' => return UiEvent::SearchText,
                    _ => {}
                }
            }
        }
        UiEvent::KeyPressed { key, repeat: false }
    }
}

impl InputSource for Input {
    fn mouse_position(&self) -> Vec2f { self.mouse_pos }

    fn clipboard_text(&self) -> String { self.clipboard.clone() }

    fn set_clipboard_text(&mut self, text: &str) { self.clipboard = text.to_string(); }
}
