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

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Logical key decoded by the platform layer.
pub enum Key {
    /// Backspace.
    Back,
    /// Tab.
    Tab,
    /// Return/Enter.
    Enter,
    /// Escape.
    Escape,
    /// Space bar.
    Space,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home.
    Home,
    /// End.
    End,
    /// Forward delete.
    Delete,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// A key producing a printable character.
    Char(char),
    /// Any other platform key code.
    Other(u32),
}

impl Key {
    /// Returns the character this key types, if any.
    pub fn typed_char(self) -> Option<char> {
        match self {
            Key::Space => Some(' '),
            Key::Char(c) => Some(c),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Payload-free discriminant of a [`UiEvent`].
pub enum UiEventKind {
    /// See [`UiEvent::MousePressed`].
    MousePressed,
    /// See [`UiEvent::MouseReleased`].
    MouseReleased,
    /// See [`UiEvent::MouseWheelScrolled`].
    MouseWheelScrolled,
    /// See [`UiEvent::KeyPressed`].
    KeyPressed,
    /// See [`UiEvent::KeyReleased`].
    KeyReleased,
    /// See [`UiEvent::TextInput`].
    TextInput,
    /// See [`UiEvent::PasteText`].
    PasteText,
    /// See [`UiEvent::CopyText`].
    CopyText,
    /// See [`UiEvent::SelectAll`].
    SelectAll,
    /// See [`UiEvent::SearchText`].
    SearchText,
    /// See [`UiEvent::FocusGained`].
    FocusGained,
    /// See [`UiEvent::FocusLost`].
    FocusLost,
}

#[derive(Clone, Debug)]
/// Discrete input event routed through dialogs to widgets.
pub enum UiEvent {
    /// A mouse button went down at `pos`.
    MousePressed {
        /// Pointer position in screen pixels.
        pos: Vec2f,
    },
    /// A mouse button went up at `pos`.
    MouseReleased {
        /// Pointer position in screen pixels.
        pos: Vec2f,
    },
    /// The wheel moved by whole lines. Positive values scroll up.
    MouseWheelScrolled {
        /// Pointer position in screen pixels.
        pos: Vec2f,
        /// Number of lines scrolled.
        lines: i32,
    },
    /// A key went down.
    KeyPressed {
        /// Decoded key.
        key: Key,
        /// `true` when generated by key auto-repeat.
        repeat: bool,
    },
    /// A key went up.
    KeyReleased {
        /// Decoded key.
        key: Key,
    },
    /// Committed UTF-8 text from the platform's text input.
    TextInput(String),
    /// Clipboard paste shortcut.
    PasteText,
    /// Clipboard copy shortcut.
    CopyText,
    /// Select-all shortcut.
    SelectAll,
    /// Search shortcut.
    SearchText,
    /// The application window gained focus.
    FocusGained,
    /// The application window lost focus.
    FocusLost,
}

impl UiEvent {
    /// Shorthand for a non-repeating key press.
    pub fn key(key: Key) -> Self { UiEvent::KeyPressed { key, repeat: false } }

    /// Shorthand for a mouse press at `(x, y)`.
    pub fn press(x: f32, y: f32) -> Self { UiEvent::MousePressed { pos: Vec2f::new(x, y) } }

    /// Shorthand for a mouse release at `(x, y)`.
    pub fn release(x: f32, y: f32) -> Self { UiEvent::MouseReleased { pos: Vec2f::new(x, y) } }

    /// Returns the payload-free discriminant.
    pub fn kind(&self) -> UiEventKind {
        match self {
            UiEvent::MousePressed { .. } => UiEventKind::MousePressed,
            UiEvent::MouseReleased { .. } => UiEventKind::MouseReleased,
            UiEvent::MouseWheelScrolled { .. } => UiEventKind::MouseWheelScrolled,
            UiEvent::KeyPressed { .. } => UiEventKind::KeyPressed,
            UiEvent::KeyReleased { .. } => UiEventKind::KeyReleased,
            UiEvent::TextInput(_) => UiEventKind::TextInput,
            UiEvent::PasteText => UiEventKind::PasteText,
            UiEvent::CopyText => UiEventKind::CopyText,
            UiEvent::SelectAll => UiEventKind::SelectAll,
            UiEvent::SearchText => UiEventKind::SearchText,
            UiEvent::FocusGained => UiEventKind::FocusGained,
            UiEvent::FocusLost => UiEventKind::FocusLost,
        }
    }

    /// Returns the pointer position carried by mouse events.
    pub fn position(&self) -> Option<Vec2f> {
        match self {
            UiEvent::MousePressed { pos } | UiEvent::MouseReleased { pos } | UiEvent::MouseWheelScrolled { pos, .. } => Some(*pos),
            _ => None,
        }
    }

    /// Returns the key of a key press, if this is one.
    pub fn pressed_key(&self) -> Option<Key> {
        match self {
            UiEvent::KeyPressed { key, .. } => Some(*key),
            _ => None,
        }
    }

    /// Returns `true` when this is a press of `key`.
    pub fn is_key_pressed(&self, key: Key) -> bool { self.pressed_key() == Some(key) }
}
